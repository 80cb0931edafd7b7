pub mod file;
pub mod remote;
pub mod seed;
pub mod traits;

pub use file::JsonFileCatalogue;
pub use remote::RemoteCatalogue;
pub use seed::{seed_properties, SeedCatalogue};
pub use traits::CatalogueSource;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::CatalogueError;
use crate::filter::{filter_properties, ListingQuery};
use crate::models::Property;
use crate::reservation;

/// Where the startup catalogue comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueLocation {
    Seed,
    File(String),
    Url(String),
}

impl CatalogueLocation {
    /// `seed`, an `http(s)://` URL, or anything else as a file path
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("seed") {
            CatalogueLocation::Seed
        } else if raw.starts_with("http://") || raw.starts_with("https://") {
            CatalogueLocation::Url(raw.to_string())
        } else {
            CatalogueLocation::File(raw.to_string())
        }
    }

    pub fn source(&self) -> Result<Box<dyn CatalogueSource>, CatalogueError> {
        let source: Box<dyn CatalogueSource> = match self {
            CatalogueLocation::Seed => Box::new(SeedCatalogue),
            CatalogueLocation::File(path) => Box::new(JsonFileCatalogue::new(path)),
            CatalogueLocation::Url(url) => Box::new(RemoteCatalogue::new(url.clone())?),
        };
        Ok(source)
    }
}

/// The session's property collection.
///
/// Entries are fixed after construction; only booking state changes, and
/// only through this type.
#[derive(Debug, Clone)]
pub struct Catalogue {
    properties: Vec<Property>,
}

impl Catalogue {
    /// Take ownership of a loaded list, rejecting duplicate ids
    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                return Err(CatalogueError::DuplicateId(property.id.clone()));
            }
        }
        Ok(Self { properties })
    }

    pub fn seed() -> Self {
        Self {
            properties: seed_properties(),
        }
    }

    pub async fn load(source: &dyn CatalogueSource) -> Result<Self, CatalogueError> {
        Self::new(source.load().await?)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn filter(&self, query: &ListingQuery) -> Vec<&Property> {
        filter_properties(&self.properties, query)
    }

    pub fn toggle_reservation(&mut self, id: &str, now: DateTime<Utc>) -> Option<&Property> {
        reservation::toggle_reservation(&mut self.properties, id, now)
    }

    pub fn release_expired(&mut self, now: DateTime<Utc>) -> Vec<String> {
        reservation::release_expired(&mut self.properties, now)
    }

    /// Read-only copy for background consumers such as the carousel
    pub fn snapshot(&self) -> Arc<[Property]> {
        Arc::from(self.properties.as_slice())
    }
}
