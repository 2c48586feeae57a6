use chrono::{DateTime, Utc};

/// Address columns filled into the spreadsheet export. Fields are empty
/// strings when the geocoder could not resolve them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressFields {
    pub road: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
}

/// One persisted reverse-geocode result, keyed by coordinates rounded to
/// 3 decimal places and formatted as fixed-precision strings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeEntry {
    pub lat_key: String,
    pub lon_key: String,
    pub road: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
    pub stored_at: DateTime<Utc>,
}

impl From<GeocodeEntry> for AddressFields {
    fn from(entry: GeocodeEntry) -> Self {
        Self {
            road: entry.road,
            city: entry.city,
            postcode: entry.postcode,
            country: entry.country,
        }
    }
}
