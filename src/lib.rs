//! An 8-bit RGB color value with HSL and hex views.
//!
//! ```
//! use colorkit::Color;
//!
//! let color = Color::parse("hsl(90, 90%, 50%)")?;
//! assert_eq!(color.into_hex(), "#80f20d");
//! assert_eq!(color.h(), 90);
//! # Ok::<(), colorkit::ColorError>(())
//! ```

pub mod color;
pub mod error;

pub use color::model::{Color, Hsl};
pub use color::parse::parse_color;
#[cfg(feature = "random")]
pub use color::random::HslRanges;
pub use error::{ColorError, Component, ParseError, RangeError};
