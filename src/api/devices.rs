//! Devices API
//!
//! `/devices` endpoint and the Remo device model.

use crate::api::null_as_default;
use crate::client::HttpClient;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A Remo device registered to the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Calibration applied to the temperature sensor
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_offset: i32,

    /// Calibration applied to the humidity sensor
    #[serde(deserialize_with = "null_as_default")]
    pub humidity_offset: i32,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub firmware_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mac_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub serial_number: String,

    /// Latest reading of each sensor
    #[serde(deserialize_with = "null_as_default")]
    pub newest_events: NewestEvents,
}

/// Latest sensor readings, keyed by the API's two-letter sensor codes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewestEvents {
    #[serde(rename = "te", deserialize_with = "null_as_default")]
    pub temperature: SensorValue,

    #[serde(rename = "hu", deserialize_with = "null_as_default")]
    pub humidity: SensorValue,

    #[serde(rename = "il", deserialize_with = "null_as_default")]
    pub illuminance: SensorValue,

    #[serde(rename = "mo", deserialize_with = "null_as_default")]
    pub motion: SensorValue,
}

/// A single sensor reading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorValue {
    #[serde(rename = "val", deserialize_with = "null_as_default")]
    pub value: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
}

/// Accessor for the `/devices` endpoints
#[derive(Debug, Clone)]
pub struct Devices {
    http: Arc<HttpClient>,
}

impl Devices {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// GET /devices
    pub async fn get_devices(&self) -> Result<Vec<Device>> {
        self.http.get("devices", &[]).await
    }
}
