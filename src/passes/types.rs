use serde::{Deserialize, Deserializer, Serialize};

/// Magnitude reported by the API when it could not compute one
pub const UNKNOWN_MAGNITUDE: f64 = 100000.0;

/// Decode an explicit `null` as the type's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Satellite header of a visual passes response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SatelliteInfo {
    #[serde(rename = "satid")]
    pub id: u32,
    #[serde(rename = "satname", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "transactionscount")]
    pub transactions_count: u32,
    #[serde(rename = "passescount")]
    pub passes_count: u32,
}

/// A single predicted visual pass, as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pass {
    pub start_az: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub start_az_compass: String,
    pub start_el: f64,
    #[serde(rename = "startUTC")]
    pub start_utc: i64,
    pub max_az: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_az_compass: String,
    pub max_el: f64,
    #[serde(rename = "maxUTC")]
    pub max_utc: i64,
    pub end_az: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub end_az_compass: String,
    pub end_el: f64,
    #[serde(rename = "endUTC")]
    pub end_utc: i64,
    pub mag: f64,
    pub duration: i64,
    pub start_visibility: i64,
}

impl Pass {
    pub fn has_magnitude(&self) -> bool {
        self.mag != UNKNOWN_MAGNITUDE
    }
}

/// Visual passes for one satellite, in API (chronological) order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualPassReport {
    #[serde(deserialize_with = "null_as_default")]
    pub info: SatelliteInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub passes: Vec<Pass>,
}
