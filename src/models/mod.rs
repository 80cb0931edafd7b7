use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::reservation::{self, TimeRemaining};

/// Square footage assumed when a size string carries no number
pub const DEFAULT_PLOT_SQFT: u32 = 2400;

/// How many amenities a listing card shows before summarising the rest
pub const AMENITY_PREVIEW_LEN: usize = 3;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid number regex"));

/// Map position of a plot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Core property data model
///
/// Booking state lives in `booked_at` alone: a plot is booked exactly when
/// it carries a booking instant. The serialized form still exposes
/// `isBooked` and `bookingTimestamp` side by side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "PropertyRecord", into = "PropertyRecord")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: u64,
    pub size: String,
    pub facing: String,
    pub amenities: Vec<String>,
    pub description: String,
    pub image: String,
    pub coordinates: Coordinates,
    pub booked_at: Option<DateTime<Utc>>,
}

impl Property {
    pub fn is_booked(&self) -> bool {
        self.booked_at.is_some()
    }

    /// Numeric square footage: the first run of digits in `size`, or
    /// [`DEFAULT_PLOT_SQFT`] when there is none.
    pub fn size_sqft(&self) -> u32 {
        parse_sqft(&self.size)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_booked() {
            "Booked"
        } else {
            "Available"
        }
    }

    /// First few amenities plus how many were left out
    pub fn amenity_preview(&self) -> (&[String], usize) {
        let shown = self.amenities.len().min(AMENITY_PREVIEW_LEN);
        (&self.amenities[..shown], self.amenities.len() - shown)
    }

    /// Price after five years at the advertised growth band
    pub fn five_year_projection(&self) -> u64 {
        (self.price as f64 * 1.5).round() as u64
    }

    /// Remaining reservation time, `None` when the plot is not booked
    pub fn reservation_status(&self, now: DateTime<Utc>) -> Option<TimeRemaining> {
        self.booked_at
            .map(|booked_at| reservation::time_remaining(booked_at, now))
    }
}

/// Lossy size parse shared by every consumer that needs a number
pub fn parse_sqft(size: &str) -> u32 {
    FIRST_NUMBER
        .find(size)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_PLOT_SQFT)
}

/// Format whole rupees with Indian digit grouping, e.g. `₹45,00,000`
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}

/// On-disk / over-the-wire shape of a property
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyRecord {
    id: String,
    title: String,
    location: String,
    price: u64,
    size: String,
    facing: String,
    #[serde(default)]
    amenities: Vec<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    is_booked: bool,
    coordinates: Coordinates,
    /// Epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    booking_timestamp: Option<i64>,
}

impl From<PropertyRecord> for Property {
    fn from(record: PropertyRecord) -> Self {
        // A booked record without a usable timestamp is stamped at load time;
        // a stray timestamp on an unbooked record is dropped.
        let booked_at = if record.is_booked {
            Some(
                record
                    .booking_timestamp
                    .and_then(DateTime::from_timestamp_millis)
                    .unwrap_or_else(Utc::now),
            )
        } else {
            None
        };

        Self {
            id: record.id,
            title: record.title,
            location: record.location,
            price: record.price,
            size: record.size,
            facing: record.facing,
            amenities: record.amenities,
            description: record.description,
            image: record.image,
            coordinates: record.coordinates,
            booked_at,
        }
    }
}

impl From<Property> for PropertyRecord {
    fn from(property: Property) -> Self {
        Self {
            is_booked: property.is_booked(),
            booking_timestamp: property.booked_at.map(|t| t.timestamp_millis()),
            id: property.id,
            title: property.title,
            location: property.location,
            price: property.price,
            size: property.size,
            facing: property.facing,
            amenities: property.amenities,
            description: property.description,
            image: property.image,
            coordinates: property.coordinates,
        }
    }
}
