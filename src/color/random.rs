//! Random color generation.
//!
//! Samples are drawn in HSL space: an integer hue and floating point saturation
//! and lightness, each uniform over its own inclusive range.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::color::model::Color;
use crate::error::{ColorError, Component, RangeError};

/// Bounds to sample each HSL component from.
///
/// Override a subset with struct update syntax:
///
/// ```
/// use colorkit::HslRanges;
///
/// let warm = HslRanges { hue: 0..=60, ..Default::default() };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HslRanges {
    /// Hue in whole degrees.
    pub hue: RangeInclusive<u16>,
    pub saturation: RangeInclusive<f64>,
    pub lightness: RangeInclusive<f64>,
}

impl Default for HslRanges {
    fn default() -> Self {
        Self {
            hue: 0..=360,
            saturation: 0.0..=1.0,
            lightness: 0.0..=1.0,
        }
    }
}

impl HslRanges {
    fn check(&self) -> Result<(), ColorError> {
        let empty = if self.hue.is_empty() {
            Some(Component::Hue)
        } else if self.saturation.is_empty() {
            Some(Component::Saturation)
        } else if self.lightness.is_empty() {
            Some(Component::Lightness)
        } else {
            None
        };

        if let Some(component) = empty {
            log::debug!("empty {component} range in {:?}", self);
            return Err(ColorError::EmptyRange { component });
        }

        // both ends must be in 0..=1, which also rules out infinite bounds
        for (component, range) in [
            (Component::Saturation, &self.saturation),
            (Component::Lightness, &self.lightness),
        ] {
            RangeError::check(component, *range.start(), 0.0, 1.0)?;
            RangeError::check(component, *range.end(), 0.0, 1.0)?;
        }

        Ok(())
    }
}

impl Color {
    /// A random color over the full hue, saturation and lightness ranges,
    /// using the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        let h = rng.random_range(0..=360u16);
        let s = rng.random_range(0.0..=1.0);
        let l = rng.random_range(0.0..=1.0);

        // samples from the full ranges are always accepted
        Color::hsl(f64::from(h), s, l).unwrap_or_default()
    }

    /// A random color within `ranges`, using the thread-local generator.
    pub fn random_in(ranges: &HslRanges) -> Result<Self, ColorError> {
        Self::random_with(&mut rand::rng(), ranges)
    }

    /// A random color within `ranges`, drawing from `rng`.
    ///
    /// Fails if a range is empty, or if the saturation or lightness bounds fall
    /// outside `0.0..=1.0`.
    pub fn random_with<R: Rng + ?Sized>(
        rng: &mut R,
        ranges: &HslRanges,
    ) -> Result<Self, ColorError> {
        ranges.check()?;

        let h = rng.random_range(ranges.hue.clone());
        let s = rng.random_range(ranges.saturation.clone());
        let l = rng.random_range(ranges.lightness.clone());

        Ok(Color::hsl(f64::from(h), s, l)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_ranges_are_full() {
        let ranges = HslRanges::default();
        assert_eq!(ranges.hue, 0..=360);
        assert_eq!(ranges.saturation, 0.0..=1.0);
        assert_eq!(ranges.lightness, 0.0..=1.0);
    }

    #[test]
    fn empty_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);

        #[allow(clippy::reversed_empty_ranges)]
        let ranges = HslRanges {
            hue: 200..=100,
            ..Default::default()
        };
        assert_eq!(
            Color::random_with(&mut rng, &ranges),
            Err(ColorError::EmptyRange {
                component: Component::Hue
            })
        );

        let ranges = HslRanges {
            lightness: f64::NAN..=1.0,
            ..Default::default()
        };
        assert_eq!(
            Color::random_with(&mut rng, &ranges),
            Err(ColorError::EmptyRange {
                component: Component::Lightness
            })
        );
    }

    #[test]
    fn out_of_range_bounds_are_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let ranges = HslRanges {
            saturation: 2.0..=3.0,
            ..Default::default()
        };
        assert!(matches!(
            Color::random_with(&mut rng, &ranges),
            Err(ColorError::Range(err)) if err.component == Component::Saturation
        ));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);

        let ranges = HslRanges {
            saturation: 0.0..=f64::INFINITY,
            ..Default::default()
        };
        match Color::random_with(&mut rng, &ranges) {
            Err(ColorError::Range(err)) => {
                assert_eq!(err.component, Component::Saturation);
                assert_eq!(err.value, f64::INFINITY);
            }
            other => panic!("expected range error, got {other:?}"),
        }

        let ranges = HslRanges {
            lightness: f64::MIN..=f64::MAX,
            ..Default::default()
        };
        match Color::random_with(&mut rng, &ranges) {
            Err(ColorError::Range(err)) => {
                assert_eq!(err.component, Component::Lightness);
                assert_eq!(err.value, f64::MIN);
            }
            other => panic!("expected range error, got {other:?}"),
        }

        let ranges = HslRanges {
            lightness: 0.5..=1.5,
            ..Default::default()
        };
        assert!(matches!(
            Color::random_with(&mut rng, &ranges),
            Err(ColorError::Range(err))
                if err.component == Component::Lightness && err.value == 1.5
        ));
    }

    #[test]
    fn random_spreads_over_hues() {
        let hues: Vec<u16> = (0..200).map(|_| Color::random().h()).collect();
        assert!(hues.iter().all(|&h| h <= 360));
        assert!(hues.iter().any(|&h| h < 180));
        assert!(hues.iter().any(|&h| h >= 180));
    }

    #[test]
    fn same_seed_same_color() {
        let ranges = HslRanges::default();
        let a = Color::random_with(&mut StdRng::seed_from_u64(42), &ranges).unwrap();
        let b = Color::random_with(&mut StdRng::seed_from_u64(42), &ranges).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_ranges_pin_the_color() {
        let mut rng = StdRng::seed_from_u64(1);
        let ranges = HslRanges {
            hue: 120..=120,
            saturation: 1.0..=1.0,
            lightness: 0.5..=0.5,
        };
        for _ in 0..10 {
            assert_eq!(Color::random_with(&mut rng, &ranges), Ok(Color::rgb(0, 255, 0)));
        }
    }
}
