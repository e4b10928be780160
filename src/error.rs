//! Error types for color construction and parsing.

use core::fmt;

use thiserror::Error;

/// A named component of a color, used to report which input was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Lightness,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Component::*;
        let name = match self {
            Red => "red",
            Green => "green",
            Blue => "blue",
            Hue => "hue",
            Saturation => "saturation",
            Lightness => "lightness",
        };
        f.write_str(name)
    }
}

/// A numeric component fell outside its declared bounds.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{component} value {value} must be {min}-{max}")]
pub struct RangeError {
    /// The offending component
    pub component: Component,
    /// The rejected input
    pub value: f64,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
}

impl RangeError {
    /// Build the error for a rejected `value`, logging the rejection.
    pub(crate) fn new(component: Component, value: f64, min: f64, max: f64) -> Self {
        log::debug!("rejected {component} value {value}, expected {min}-{max}");
        Self {
            component,
            value,
            min,
            max,
        }
    }

    /// Check `value` against `min..=max`. NaN is always rejected.
    pub(crate) fn check(
        component: Component,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<f64, Self> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(Self::new(component, value, min, max))
        }
    }
}

/// Malformed textual color input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty or only whitespace
    #[error("empty color string")]
    Empty,

    /// Hex code did not have 3 or 6 digits after stripping
    #[error("invalid hex length {0}, expected 3 or 6 digits")]
    InvalidLength(usize),

    /// An rgb()/hsl() function had the wrong number of arguments or a non-numeric one
    #[error("invalid arguments in color function: {0:?}")]
    InvalidArguments(String),

    /// The text matched no known color syntax
    #[error("unrecognized color expression: {0:?}")]
    Unrecognized(String),
}

/// Any failure produced while building a color.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A sampling range for random generation contains no values
    #[error("empty {component} range for random color")]
    EmptyRange {
        /// The component whose range was empty
        component: Component,
    },
}
