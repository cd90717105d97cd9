//! Remote endpoints and their path templates.

/// One remote operation of the product search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Search,
    ProductDetails(&'a str),
    ProductOffers(&'a str),
    ProductReviews(&'a str),
    Deals,
    StoreReviews(&'a str),
}

impl Endpoint<'_> {
    /// Returns the request path with the identifier substituted.
    ///
    /// Identifiers are percent-encoded so they always fill exactly one
    /// path segment.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Search => "/search".to_string(),
            Endpoint::ProductDetails(id) => format!("/product/{}", urlencoding::encode(id)),
            Endpoint::ProductOffers(id) => format!("/offers/{}", urlencoding::encode(id)),
            Endpoint::ProductReviews(id) => format!("/reviews/{}", urlencoding::encode(id)),
            Endpoint::Deals => "/deals".to_string(),
            Endpoint::StoreReviews(id) => format!("/store-reviews/{}", urlencoding::encode(id)),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Search => "search",
            Endpoint::ProductDetails(_) => "product details",
            Endpoint::ProductOffers(_) => "product offers",
            Endpoint::ProductReviews(_) => "product reviews",
            Endpoint::Deals => "deals",
            Endpoint::StoreReviews(_) => "store reviews",
        }
    }
}
