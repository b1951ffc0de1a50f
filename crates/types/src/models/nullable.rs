//! Serde helpers for upstream fields that may be `null` instead of absent

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional number, integral or fractional, rounded to the nearest `i32`
pub fn rounded_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<f64>::deserialize(deserializer)?
		.filter(|value| value.is_finite())
		.map(|value| value.round() as i32))
}
