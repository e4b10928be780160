pub mod convert;
pub mod model;
pub mod parse;
#[cfg(feature = "random")]
pub mod random;
