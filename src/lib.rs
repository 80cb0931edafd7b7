//! Plot catalogue, search and reservation logic for the RK Adarsh Nagar
//! property showcase.

pub mod catalogue;
pub mod comparison;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod mortgage;
pub mod render;
pub mod reservation;
pub mod showcase;

pub use catalogue::{Catalogue, CatalogueLocation, CatalogueSource};
pub use error::{CatalogueError, ConfigError, MortgageError};
pub use filter::{filter_properties, ListingQuery, StatusFilter};
pub use models::{Coordinates, Property};
pub use mortgage::{MortgageInputs, MortgageQuote};
pub use reservation::TimeRemaining;
