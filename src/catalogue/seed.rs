use crate::catalogue::traits::CatalogueSource;
use crate::error::CatalogueError;
use crate::models::{Coordinates, Property};
use async_trait::async_trait;
use tracing::info;

/// The built-in plot list for RK Adarsh Nagar
pub struct SeedCatalogue;

#[async_trait]
impl CatalogueSource for SeedCatalogue {
    async fn load(&self) -> Result<Vec<Property>, CatalogueError> {
        let properties = seed_properties();
        info!("📋 Loaded {} plots from the built-in catalogue", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "seed"
    }
}

/// Six plots, all unbooked
pub fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "prop-001".to_string(),
            title: "Premium Corner Plot".to_string(),
            location: "RK Adarsh Nagar, Bhimavaram".to_string(),
            price: 4_500_000,
            size: "2400 sq.ft".to_string(),
            facing: "East".to_string(),
            amenities: vec![
                "Corner Plot".to_string(),
                "Park View".to_string(),
                "Wide Road".to_string(),
                "Gated Community".to_string(),
            ],
            description: "A premium east-facing corner plot with excellent ventilation and park view. Located in the prestigious RK Adarsh Nagar, this plot offers the perfect setting for your dream home.".to_string(),
            image: "https://images.unsplash.com/photo-1582407947304-fd86f028f716?auto=format&fit=crop&w=1296&q=80".to_string(),
            coordinates: Coordinates { lat: 16.5449, lng: 81.5212 },
            booked_at: None,
        },
        Property {
            id: "prop-002".to_string(),
            title: "Luxury Villa Plot".to_string(),
            location: "RK Adarsh Nagar, Bhimavaram".to_string(),
            price: 5_200_000,
            size: "3200 sq.ft".to_string(),
            facing: "North".to_string(),
            amenities: vec![
                "Premium Location".to_string(),
                "Temple Nearby".to_string(),
                "Double Road".to_string(),
                "Underground Drainage".to_string(),
            ],
            description: "Spacious north-facing plot ideal for building a luxury villa. Situated in a prime location with excellent connectivity and all modern amenities nearby.".to_string(),
            image: "https://images.unsplash.com/photo-1628624747186-a941c476b7ef?auto=format&fit=crop&w=1470&q=80".to_string(),
            coordinates: Coordinates { lat: 16.5452, lng: 81.5215 },
            booked_at: None,
        },
        Property {
            id: "prop-003".to_string(),
            title: "Commercial Plot".to_string(),
            location: "RK Adarsh Nagar, Bhimavaram".to_string(),
            price: 7_800_000,
            size: "4800 sq.ft".to_string(),
            facing: "West".to_string(),
            amenities: vec![
                "Main Road".to_string(),
                "High Visibility".to_string(),
                "Commercial Zone".to_string(),
                "Corner Property".to_string(),
            ],
            description: "Prime commercial plot on the main road with high visibility. Perfect for retail, office space, or mixed-use development with excellent ROI potential.".to_string(),
            image: "https://images.unsplash.com/photo-1542889601-399c4f3a8402?auto=format&fit=crop&w=1470&q=80".to_string(),
            coordinates: Coordinates { lat: 16.5445, lng: 81.5218 },
            booked_at: None,
        },
        Property {
            id: "prop-004".to_string(),
            title: "Riverside Premium Plot".to_string(),
            location: "RK Adarsh Nagar, Bhimavaram".to_string(),
            price: 6_300_000,
            size: "3600 sq.ft".to_string(),
            facing: "South".to_string(),
            amenities: vec![
                "Riverside View".to_string(),
                "Lush Greenery".to_string(),
                "Quiet Neighborhood".to_string(),
                "Premium Location".to_string(),
            ],
            description: "Beautiful south-facing plot with a serene riverside view. Located in a peaceful neighborhood with lush greenery all around, perfect for a tranquil living experience.".to_string(),
            image: "https://images.unsplash.com/photo-1500382017468-9049fed747ef?auto=format&fit=crop&w=1332&q=80".to_string(),
            coordinates: Coordinates { lat: 16.5441, lng: 81.5210 },
            booked_at: None,
        },
        Property {
            id: "prop-005".to_string(),
            title: "Elite Residential Plot".to_string(),
            location: "RK Adarsh Nagar, Bhimavaram".to_string(),
            price: 5_800_000,
            size: "2800 sq.ft".to_string(),
            facing: "North-East".to_string(),
            amenities: vec![
                "School Nearby".to_string(),
                "Hospital Proximity".to_string(),
                "Shopping Complex".to_string(),
                "24/7 Security".to_string(),
            ],
            description: "Premium residential plot in an elite neighborhood with all essential amenities nearby. Perfect vastu-compliant north-east facing plot for your family home.".to_string(),
            image: "https://images.unsplash.com/photo-1602941525421-8f8b81d3edbb?auto=format&fit=crop&w=1470&q=80".to_string(),
            coordinates: Coordinates { lat: 16.5447, lng: 81.5220 },
            booked_at: None,
        },
        Property {
            id: "prop-006".to_string(),
            title: "Premium Garden View Plot".to_string(),
            location: "RK Adarsh Nagar, Bhimavaram".to_string(),
            price: 4_900_000,
            size: "2600 sq.ft".to_string(),
            facing: "South-East".to_string(),
            amenities: vec![
                "Garden View".to_string(),
                "Children's Park".to_string(),
                "Walking Track".to_string(),
                "Community Center".to_string(),
            ],
            description: "Beautiful south-east facing plot overlooking a lush garden. Located in a family-friendly area with excellent amenities for a comfortable lifestyle.".to_string(),
            image: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?auto=format&fit=crop&w=1453&q=80".to_string(),
            coordinates: Coordinates { lat: 16.5443, lng: 81.5216 },
            booked_at: None,
        },
    ]
}
