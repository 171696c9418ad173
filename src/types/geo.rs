//! Geographic value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 coordinate pair.
///
/// Latitude is constrained to [-90, 90] and longitude to [-180, 180] when
/// constructed through [`Coordinate::new`] or [`Coordinate::parse_literal`].
/// Values decoded from provider responses are taken as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    /// Recognize a raw `"lat,lng"` literal.
    ///
    /// The accepted pattern is: optional minus sign, digits, optional
    /// fractional part, comma, then the same for longitude, with whitespace
    /// allowed around either number and nothing else. Text matching this
    /// pattern short-circuits every lookup path, so the match is strict: a
    /// trailing dot, an extra comma, or an out-of-range value all make the
    /// text an address query instead.
    pub fn parse_literal(text: &str) -> Option<Self> {
        let (lat_text, lng_text) = text.split_once(',')?;
        let lat = parse_component(lat_text)?;
        let lng = parse_component(lng_text)?;
        Self::new(lat, lng)
    }
}

fn parse_component(text: &str) -> Option<f64> {
    let text = text.trim();
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    text.parse().ok()
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
