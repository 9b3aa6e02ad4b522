use serde::{Deserialize, Serialize};

/// A currency amount as whole units plus a nanos fraction (0..=999_999_999),
/// kept as integers so no value is ever routed through floating point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Money {
    pub currency_code: String,
    pub units: i64,
    pub nanos: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
}

/// Outbound payload for the compare endpoint. Duplicates and an empty list
/// are allowed; validation is the server's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub product_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub products: Vec<Product>,
    pub summary: String,
}

/// Best-effort shape of a non-success body.
#[derive(Debug, Deserialize)]
pub(crate) struct CompareErrorBody {
    #[serde(default)]
    pub error: String,
}
