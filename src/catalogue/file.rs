use crate::catalogue::traits::CatalogueSource;
use crate::error::CatalogueError;
use crate::models::Property;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Catalogue stored as a JSON array of properties on disk
pub struct JsonFileCatalogue {
    path: PathBuf,
}

impl JsonFileCatalogue {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogueSource for JsonFileCatalogue {
    async fn load(&self) -> Result<Vec<Property>, CatalogueError> {
        let origin = self.path.display().to_string();
        debug!("Reading catalogue file: {}", origin);

        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogueError::Io {
                path: origin.clone(),
                source,
            })?;

        let properties: Vec<Property> = serde_json::from_str(&text)
            .map_err(|source| CatalogueError::Deserialize { origin: origin.clone(), source })?;

        info!("Loaded {} plots from {}", properties.len(), origin);
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
