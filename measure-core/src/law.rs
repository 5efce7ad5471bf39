//! Conversion laws between a unit and its category base unit

use std::fmt;

/// How a unit maps magnitudes to and from its category base unit
#[derive(Clone, Copy)]
pub enum ConversionLaw {
    /// Proportional conversion: `base = value * factor`
    Linear {
        /// Size of one of this unit expressed in base units
        factor: f64,
    },
    /// Non-proportional conversion (temperature scales).
    /// The two functions must be inverses of each other.
    Affine {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

impl ConversionLaw {
    /// The base unit's own law
    pub const IDENTITY: ConversionLaw = ConversionLaw::Linear { factor: 1.0 };

    /// Create a proportional law
    pub const fn linear(factor: f64) -> Self {
        ConversionLaw::Linear { factor }
    }

    /// Create a law from an explicit pair of functions
    pub const fn affine(to_base: fn(f64) -> f64, from_base: fn(f64) -> f64) -> Self {
        ConversionLaw::Affine { to_base, from_base }
    }

    /// Convert a magnitude in this unit to the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            ConversionLaw::Linear { factor } => value * factor,
            ConversionLaw::Affine { to_base, .. } => to_base(value),
        }
    }

    /// Convert a base-unit magnitude into this unit
    pub fn from_base(&self, base_value: f64) -> f64 {
        match self {
            ConversionLaw::Linear { factor } => base_value / factor,
            ConversionLaw::Affine { from_base, .. } => from_base(base_value),
        }
    }

    /// Multiplicative factor, if the law is proportional
    pub fn factor(&self) -> Option<f64> {
        match self {
            ConversionLaw::Linear { factor } => Some(*factor),
            ConversionLaw::Affine { .. } => None,
        }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, ConversionLaw::Linear { .. })
    }
}

impl fmt::Debug for ConversionLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionLaw::Linear { factor } => f.debug_struct("Linear").field("factor", factor).finish(),
            ConversionLaw::Affine { .. } => f.write_str("Affine"),
        }
    }
}
