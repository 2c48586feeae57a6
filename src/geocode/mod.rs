pub mod cache;

use serde_json::Value;

use crate::config::Config;
use crate::error::GeocodeError;
use crate::types::address::AddressFields;
use cache::GeocodeCache;

/// Resolves coordinates to address fields through the cache, falling back
/// to one reverse-geocoder round trip per cache miss.
pub struct Geocoder {
    client: reqwest::Client,
    cache: GeocodeCache,
    url: String,
}

impl Geocoder {
    pub fn new(config: &Config, cache: GeocodeCache) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.geocoder_user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            cache,
            url: config.geocoder_url.clone(),
        })
    }

    /// Cached fields on a key hit, otherwise one network lookup. Results
    /// without both a road and a city name are returned with empty fields
    /// and left uncached, so a future run retries them.
    pub async fn resolve(&self, lat: f64, lon: f64) -> Result<AddressFields, GeocodeError> {
        if let Some(entry) = self.cache.lookup(lat, lon)? {
            return Ok(entry.into());
        }

        let lat_query = lat.to_string();
        let lon_query = lon.to_string();
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("format", "jsonv2"),
                ("lat", lat_query.as_str()),
                ("lon", lon_query.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::UnexpectedStatus { status, body });
        }

        let payload: Value = response.json().await?;
        let address = payload.get("address").cloned().unwrap_or(Value::Null);
        let field = |name: &str| {
            address
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let road = field("road").or_else(|| field("suburb"));
        let city = field("city").or_else(|| field("town"));

        match (road, city) {
            (Some(road), Some(city)) => {
                let fields = AddressFields {
                    road,
                    city,
                    postcode: field("postcode").unwrap_or_default(),
                    country: field("country").unwrap_or_default(),
                };
                self.cache.store(lat, lon, &fields)?;
                Ok(fields)
            }
            _ => {
                tracing::warn!("no address found for {:.3}, {:.3}", lat, lon);
                Ok(AddressFields::default())
            }
        }
    }
}
