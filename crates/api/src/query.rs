//! Query parameter types for API handlers.

use serde::Deserialize;

/// `GET /products` filters (`?category=&limit=&offset=`).
///
/// `category` stays a string so an unknown code becomes a field-level 400
/// rather than a generic extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `GET /products/{id}/warehouse` ordering (`?order=L|Q|V`).
#[derive(Debug, Deserialize)]
pub struct LotOrderParams {
    pub order: Option<String>,
}
