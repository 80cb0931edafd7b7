use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Property;

/// Booking status a listing must have to be shown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Available,
    Booked,
}

impl StatusFilter {
    pub fn accepts(&self, property: &Property) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => !property.is_booked(),
            StatusFilter::Booked => property.is_booked(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFilter::All => "all",
            StatusFilter::Available => "available",
            StatusFilter::Booked => "booked",
        };
        f.write_str(name)
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "available" => Ok(StatusFilter::Available),
            "booked" => Ok(StatusFilter::Booked),
            other => Err(format!("unknown status filter '{}'", other)),
        }
    }
}

/// Search parameters for the listing grid
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Free text matched against title, location, facing and size
    pub search: String,
    pub status: StatusFilter,
    /// Free text matched against size only
    pub size: String,
}

impl ListingQuery {
    pub fn matches(&self, property: &Property) -> bool {
        let search = self.search.to_lowercase();
        let size = self.size.to_lowercase();
        matches_search(property, &search)
            && matches_size(property, &size)
            && self.status.accepts(property)
    }
}

fn matches_search(property: &Property, needle: &str) -> bool {
    [
        &property.title,
        &property.location,
        &property.facing,
        &property.size,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn matches_size(property: &Property, needle: &str) -> bool {
    needle.is_empty() || property.size.to_lowercase().contains(needle)
}

/// Listings that satisfy `query`, in catalogue order.
///
/// An empty result is the "no matches" state.
pub fn filter_properties<'a>(properties: &'a [Property], query: &ListingQuery) -> Vec<&'a Property> {
    properties.iter().filter(|p| query.matches(p)).collect()
}
