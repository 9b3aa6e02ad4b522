use crate::domain::model::CompareResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Seam between the frontend and the compare backend, so callers can swap in
/// a stub when the real service is out of reach.
#[async_trait]
pub trait ProductComparer: Send + Sync {
    async fn compare_products(&self, product_ids: &[String]) -> Result<CompareResponse>;
}
