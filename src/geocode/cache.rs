use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::types::address::{AddressFields, GeocodeEntry};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS geocode_cache (
    lat TEXT NOT NULL,
    lon TEXT NOT NULL,
    road TEXT NOT NULL,
    city TEXT NOT NULL,
    postcode TEXT NOT NULL,
    country TEXT NOT NULL,
    stored_at TEXT NOT NULL,
    PRIMARY KEY (lat, lon)
)";

/// Persistent reverse-geocode cache keyed by coordinates rounded to
/// 3 decimal places (roughly 111 m at the equator). Survives across runs.
pub struct GeocodeCache {
    conn: Connection,
}

impl GeocodeCache {
    pub fn open(path: &Path) -> Result<Self, rusqlite::Error> {
        tracing::debug!("opening geocode cache at {}", path.display());
        let conn = Connection::open(path)?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    pub fn coordinate_key(value: f64) -> String {
        format!("{value:.3}")
    }

    pub fn lookup(&self, lat: f64, lon: f64) -> Result<Option<GeocodeEntry>, rusqlite::Error> {
        let lat_key = Self::coordinate_key(lat);
        let lon_key = Self::coordinate_key(lon);

        self.conn
            .query_row(
                "SELECT road, city, postcode, country, stored_at
                 FROM geocode_cache WHERE lat = ?1 AND lon = ?2",
                params![lat_key, lon_key],
                |row| {
                    Ok(GeocodeEntry {
                        lat_key: lat_key.clone(),
                        lon_key: lon_key.clone(),
                        road: row.get(0)?,
                        city: row.get(1)?,
                        postcode: row.get(2)?,
                        country: row.get(3)?,
                        stored_at: row.get(4)?,
                    })
                },
            )
            .optional()
    }

    /// Inserts an entry for the rounded key unless one already exists; the
    /// first stored payload wins. Check-then-insert, single writer assumed.
    pub fn store(&self, lat: f64, lon: f64, address: &AddressFields) -> Result<(), rusqlite::Error> {
        if self.lookup(lat, lon)?.is_some() {
            return Ok(());
        }

        self.conn.execute(
            "INSERT INTO geocode_cache (lat, lon, road, city, postcode, country, stored_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                Self::coordinate_key(lat),
                Self::coordinate_key(lon),
                address.road,
                address.city,
                address.postcode,
                address.country,
                Utc::now(),
            ],
        )?;
        Ok(())
    }
}
