//! Search request, query and related data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Mean Earth radius used for distance calculations
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Search domain selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Places,
    Users,
    Hazards,
}

impl Category {
    /// Every known category
    pub const ALL: [Category; 3] = [Category::Places, Category::Users, Category::Hazards];

    /// Canonical wire token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Places => "places",
            Self::Users => "users",
            Self::Hazards => "hazards",
        }
    }

    /// Whether results of this category carry a location and can be
    /// ranked by proximity
    pub fn is_location_aware(&self) -> bool {
        matches!(self, Self::Places | Self::Hazards)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token that is not one of the canonical category names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}', expected one of: places, users, hazards")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Exact match only: "Places" or " places" are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "places" => Ok(Self::Places),
            "users" => Ok(Self::Users),
            "hazards" => Ok(Self::Hazards),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude_in_range(&self) -> bool {
        self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude)
    }

    pub fn longitude_in_range(&self) -> bool {
        self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance in kilometres (haversine)
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

/// Unvalidated search request as handed over by the transport layer
///
/// `category` carries the raw `type` token so that an unknown value reaches
/// validation unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub text: String,
    pub category: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl SearchRequest {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            latitude: None,
            longitude: None,
        }
    }

    /// Set both coordinates
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    pub fn with_longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }
}

/// A validated query, ready to be handed to a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-form query text, may be empty
    pub text: String,
    pub category: Category,
    /// Only set for location-aware categories
    pub origin: Option<Coordinates>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: Coordinates) -> Self {
        self.origin = Some(origin);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing_is_exact() {
        assert_eq!("places".parse::<Category>(), Ok(Category::Places));
        assert_eq!("users".parse::<Category>(), Ok(Category::Users));
        assert_eq!("hazards".parse::<Category>(), Ok(Category::Hazards));

        for token in ["Places", "USERS", " hazards", "vehicles", ""] {
            assert!(token.parse::<Category>().is_err(), "accepted {:?}", token);
        }
    }

    #[test]
    fn test_category_round_trips_through_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_location_awareness() {
        assert!(Category::Places.is_location_aware());
        assert!(Category::Hazards.is_location_aware());
        assert!(!Category::Users.is_location_aware());
    }

    #[test]
    fn test_coordinate_ranges() {
        assert!(Coordinates::new(90.0, -180.0).latitude_in_range());
        assert!(Coordinates::new(90.0, -180.0).longitude_in_range());
        assert!(!Coordinates::new(90.5, 0.0).latitude_in_range());
        assert!(!Coordinates::new(0.0, 180.1).longitude_in_range());
        assert!(!Coordinates::new(f64::NAN, 0.0).latitude_in_range());
    }

    #[test]
    fn test_distance() {
        let central_park = Coordinates::new(40.7829, -73.9654);
        let times_square = Coordinates::new(40.7580, -73.9855);

        assert_eq!(central_park.distance_km(&central_park), 0.0);
        let d = central_park.distance_km(&times_square);
        assert!(d > 3.0 && d < 3.5, "distance was {}", d);
    }

    #[test]
    fn test_request_builder() {
        let request = SearchRequest::new("park", "places").with_location(40.7, -73.9);
        assert_eq!(request.text, "park");
        assert_eq!(request.category, "places");
        assert_eq!(request.latitude, Some(40.7));
        assert_eq!(request.longitude, Some(-73.9));
    }
}
