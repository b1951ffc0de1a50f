//! Geographic bounding boxes for zone queries

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Rectangular latitude/longitude box, in degrees
///
/// Fields are public because the client forwards whatever it is handed; callers that
/// accept user input go through [`GeoBounds::new`] or [`GeoBounds::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
	pub north: f64,
	pub south: f64,
	pub west: f64,
	pub east: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoBoundsError {
	#[error("{field} must be a finite number")]
	NotFinite { field: &'static str },

	#[error("{field} latitude {value} is outside [-90, 90]")]
	LatitudeOutOfRange { field: &'static str, value: f64 },

	#[error("{field} longitude {value} is outside [-180, 180]")]
	LongitudeOutOfRange { field: &'static str, value: f64 },

	#[error("north ({north}) must be greater than or equal to south ({south})")]
	InvertedLatitude { north: f64, south: f64 },

	#[error("east ({east}) must be greater than or equal to west ({west})")]
	InvertedLongitude { west: f64, east: f64 },
}

impl GeoBounds {
	/// Build validated bounds
	pub fn new(north: f64, south: f64, west: f64, east: f64) -> Result<Self, GeoBoundsError> {
		let bounds = Self {
			north,
			south,
			west,
			east,
		};
		bounds.validate()?;
		Ok(bounds)
	}

	pub fn validate(&self) -> Result<(), GeoBoundsError> {
		for (field, value) in [
			("north", self.north),
			("south", self.south),
			("west", self.west),
			("east", self.east),
		] {
			if !value.is_finite() {
				return Err(GeoBoundsError::NotFinite { field });
			}
		}

		for (field, value) in [("north", self.north), ("south", self.south)] {
			if !(-90.0..=90.0).contains(&value) {
				return Err(GeoBoundsError::LatitudeOutOfRange { field, value });
			}
		}

		for (field, value) in [("west", self.west), ("east", self.east)] {
			if !(-180.0..=180.0).contains(&value) {
				return Err(GeoBoundsError::LongitudeOutOfRange { field, value });
			}
		}

		if self.north < self.south {
			return Err(GeoBoundsError::InvertedLatitude {
				north: self.north,
				south: self.south,
			});
		}

		if self.east < self.west {
			return Err(GeoBoundsError::InvertedLongitude {
				west: self.west,
				east: self.east,
			});
		}

		Ok(())
	}

	/// Value of the upstream `bounds` query parameter: `N,S,W,E`
	pub fn to_query_value(&self) -> String {
		format!("{},{},{},{}", self.north, self.south, self.west, self.east)
	}
}

impl fmt::Display for GeoBounds {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"N{} S{} W{} E{}",
			self.north, self.south, self.west, self.east
		)
	}
}
