//! Bounded random number helpers
//!
//! Integer draws are uniform over an inclusive range. Float draws are uniform
//! over the fixed-precision grid `k / 10^precision` inside the range.

use crate::error::{NumkitError, Result};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt::Display;
use tracing::warn;

/// Highest decimal precision supported by `random_float`
///
/// Beyond this the scaled bounds lose integer precision in `f64`.
pub const MAX_FLOAT_PRECISION: u32 = 15;

mod sealed {
    pub trait Sealed {}
}

/// Integer types accepted by `random_in_range`
pub trait RandomInteger: SampleUniform + PartialOrd + Display + Copy + sealed::Sealed {}

macro_rules! impl_random_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl RandomInteger for $t {}
        )*
    };
}

impl_random_integer!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);

/// Draw a uniform integer from `low..=high` using the thread RNG
pub fn random_in_range<T: RandomInteger>(low: T, high: T) -> Result<T> {
    random_in_range_with(&mut rand::thread_rng(), low, high)
}

/// Draw a uniform integer from `low..=high` using the given RNG
pub fn random_in_range_with<T, R>(rng: &mut R, low: T, high: T) -> Result<T>
where
    T: RandomInteger,
    R: Rng + ?Sized,
{
    if low > high {
        return Err(NumkitError::invalid_range(low, high));
    }
    Ok(rng.gen_range(low..=high))
}

/// Draw a float from `low..=high` with `precision` decimal places
pub fn random_float(low: f64, high: f64, precision: u32) -> Result<f64> {
    random_float_with(&mut rand::thread_rng(), low, high, precision)
}

/// Draw a float from `low..=high` with `precision` decimal places using the given RNG
///
/// Bounds are scaled by `10^precision` and rounded inward to the nearest grid
/// points, an integer is drawn from that inclusive range and scaled back.
/// Fails with `InvalidRange` when no grid point lies inside `low..=high` or
/// the scaled bounds do not fit in an `i64`.
pub fn random_float_with<R>(rng: &mut R, low: f64, high: f64, precision: u32) -> Result<f64>
where
    R: Rng + ?Sized,
{
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(NumkitError::invalid_range(low, high));
    }

    let precision = if precision > MAX_FLOAT_PRECISION {
        warn!(
            "Float precision {} clamped to {}",
            precision, MAX_FLOAT_PRECISION
        );
        MAX_FLOAT_PRECISION
    } else {
        precision
    };

    let multi = 10f64.powi(precision as i32);
    let scaled_low = (low * multi).ceil();
    let scaled_high = (high * multi).floor();
    if !fits_i64(scaled_low) || !fits_i64(scaled_high) || scaled_low > scaled_high {
        return Err(NumkitError::invalid_range(low, high));
    }

    let drawn = rng.gen_range(scaled_low as i64..=scaled_high as i64);
    // Scaling back can round a hair past a bound
    Ok((drawn as f64 / multi).clamp(low, high))
}

/// `i64::MAX as f64` rounds up to 2^63, so the upper check is exclusive
fn fits_i64(scaled: f64) -> bool {
    scaled >= i64::MIN as f64 && scaled < i64::MAX as f64
}
