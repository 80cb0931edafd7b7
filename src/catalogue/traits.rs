use crate::error::CatalogueError;
use crate::models::Property;
use async_trait::async_trait;

/// Common trait for everything that can supply the startup catalogue
/// This keeps the seed list, local files and remote feeds interchangeable
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Load the full list of properties
    async fn load(&self) -> Result<Vec<Property>, CatalogueError>;

    /// Get a short name for logging
    fn source_name(&self) -> &'static str;
}
