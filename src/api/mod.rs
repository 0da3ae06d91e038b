//! API Module
//!
//! Resource models and accessors for the Nature Remo cloud API.

use serde::{Deserialize, Deserializer};

pub mod devices;
pub mod users;

pub use devices::{Device, Devices, NewestEvents, SensorValue};
pub use users::{User, Users};

/// Decode a JSON `null` as the field's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
