// File: crates/chart-core/src/record.rs
// Summary: Race-time record model and dataset loading (remote JSON or local file).

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::{ChartError, Result};

/// Published cyclist dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

/// One race-time observation. Only `Year`, `Time` and `Doping` drive the chart;
/// the remaining fields are decoded when present.
///
/// Fields are decoded leniently: a row with an unusable value still loads,
/// and ends up at a NaN position instead of rejecting the dataset.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Record {
    /// NaN when missing or not a number.
    #[serde(rename = "Year", default = "nan", deserialize_with = "lenient_number")]
    pub year: f64,
    #[serde(rename = "Time", default, deserialize_with = "lenient_string")]
    pub time: String,
    #[serde(rename = "Doping", default, deserialize_with = "lenient_string")]
    pub doping: String,
    #[serde(rename = "Name", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "Nationality", default, deserialize_with = "lenient_string")]
    pub nationality: String,
    #[serde(rename = "Place", default, deserialize_with = "lenient_count")]
    pub place: Option<u32>,
    #[serde(rename = "Seconds", default, deserialize_with = "lenient_count")]
    pub seconds: Option<u32>,
    #[serde(rename = "URL", default, deserialize_with = "lenient_string")]
    pub url: String,
}

fn nan() -> f64 {
    f64::NAN
}

/// Numbers as-is, numeric strings parsed, anything else NaN.
fn lenient_number<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<f64, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

/// Strings as-is, `null` empty, scalars in their JSON spelling.
fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_count<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<Option<u32>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

impl Record {
    pub fn new(year: i32, time: impl Into<String>, doping: impl Into<String>) -> Self {
        Self { year: f64::from(year), time: time.into(), doping: doping.into(), ..Self::default() }
    }

    /// An empty `Doping` note means no allegation.
    pub fn has_allegation(&self) -> bool {
        !self.doping.is_empty()
    }
}

/// Where the records come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    File(PathBuf),
}

impl Default for DatasetSource {
    fn default() -> Self {
        Self::Url(DATASET_URL.to_string())
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DatasetSource {
    /// Load the records. The only suspension point is the network request;
    /// there is no retry and no timeout.
    pub async fn load(&self) -> Result<Vec<Record>> {
        match self {
            #[cfg(feature = "fetch")]
            Self::Url(url) => fetch_records(url).await,
            #[cfg(not(feature = "fetch"))]
            Self::Url(url) => Err(ChartError::FetchDisabled(url.clone())),
            Self::File(path) => load_records(path),
        }
    }
}

/// Decode a JSON array of records. Only a body that is not an array of
/// objects is rejected; bad field values do not fail the dataset.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    let bad_years = records.iter().filter(|r| r.year.is_nan()).count();
    if bad_years > 0 {
        tracing::warn!(bad_years, "records without a numeric year are placed at NaN");
    }
    Ok(records)
}

pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
    let records = parse_records(&text)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded dataset file");
    Ok(records)
}

#[cfg(feature = "fetch")]
pub async fn fetch_records(url: &str) -> Result<Vec<Record>> {
    let fetch_err = |source| ChartError::Fetch { url: url.to_string(), source };
    let response = reqwest::get(url).await.map_err(fetch_err)?.error_for_status().map_err(fetch_err)?;
    let body = response.text().await.map_err(fetch_err)?;
    let records = parse_records(&body)?;
    tracing::debug!(url, count = records.len(), "fetched dataset");
    Ok(records)
}
