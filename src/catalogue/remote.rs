use crate::catalogue::traits::CatalogueSource;
use crate::error::CatalogueError;
use crate::models::Property;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Catalogue published as a JSON array at an HTTP endpoint
pub struct RemoteCatalogue {
    client: Client,
    url: String,
}

impl RemoteCatalogue {
    pub fn new(url: impl Into<String>) -> Result<Self, CatalogueError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("plot-showcase/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogueSource for RemoteCatalogue {
    async fn load(&self) -> Result<Vec<Property>, CatalogueError> {
        debug!("Fetching catalogue: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            warn!("Catalogue endpoint returned status: {}", response.status());
            return Err(CatalogueError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of catalogue JSON", body.len());

        let properties: Vec<Property> =
            serde_json::from_str(&body).map_err(|source| CatalogueError::Deserialize {
                origin: self.url.clone(),
                source,
            })?;

        info!("Loaded {} plots from {}", properties.len(), self.url);
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "remote"
    }
}
