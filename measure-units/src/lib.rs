//! Measure Units - Concrete measurement categories
//!
//! Each category is a closed enum implementing `Measurable`, with its own
//! base unit and conversion laws:
//! - Length (FEET, INCHES, YARDS, CENTIMETERS), base FEET
//! - Weight (KILOGRAM, GRAM, POUND), base KILOGRAM
//! - Volume (LITER, MILLILITER, GALLON), base LITER
//! - Temperature (CELSIUS, FAHRENHEIT), base CELSIUS, no arithmetic

mod length;
mod weight;
mod volume;
mod temperature;
mod parse;

pub use length::{Length, LengthUnit};
pub use weight::{Weight, WeightUnit};
pub use volume::{Volume, VolumeUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use parse::{parse_quantity, parse_value, split_quantity_string};

/// Names of every category this crate provides
pub const CATEGORIES: [&str; 4] = ["length", "weight", "volume", "temperature"];
