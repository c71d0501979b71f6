//! Fixed-point number types and helpers
//!
//! The device has no FPU, so every simulated quantity is a fixed-point value:
//! - `Narrow` (I8F8): screen-space y coordinates and velocities, 1/256 precision
//! - `Wide` (I16F16): horizontal position and velocity, which run offscreen, 1/65536 precision
//!
//! Constants are built from raw bits so they stay `const` and match the
//! truncating decimal conversion the device library performs.

use fixed::types::{I8F8, I16F16};
use rand::Rng;

/// Screen-space fixed-point value (sign + 7 integer bits, 8 fractional bits)
pub type Narrow = I8F8;

/// Extended-range fixed-point value (sign + 15 integer bits, 16 fractional bits)
pub type Wide = I16F16;

/// Narrow value from raw bits (`bits / 256`)
#[inline]
pub const fn narrow(bits: i16) -> Narrow {
    Narrow::from_bits(bits)
}

/// Wide value from raw bits (`bits / 65536`)
#[inline]
pub const fn wide(bits: i32) -> Wide {
    Wide::from_bits(bits)
}

/// Narrow value from a whole number in [-128, 127]
#[inline]
pub const fn narrow_int(n: i16) -> Narrow {
    Narrow::from_bits(n << Narrow::FRAC_NBITS)
}

/// Wide value from a whole number in [-32768, 32767]
#[inline]
pub const fn wide_int(n: i32) -> Wide {
    Wide::from_bits(n << Wide::FRAC_NBITS)
}

/// Bound `value` to `[lo, hi]`. Caller guarantees `lo <= hi`.
#[inline]
pub fn clamp<T: PartialOrd + Copy>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Uniformly pick a value in `[lo, hi]`, consuming one draw from `rng`
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, lo: Narrow, hi: Narrow) -> Narrow {
    Narrow::from_bits(rng.random_range(lo.to_bits()..=hi.to_bits()))
}

/// Integer pixel coordinate of a narrow value (fraction discarded toward -inf)
#[inline]
pub fn narrow_to_pixel(v: Narrow) -> i16 {
    v.to_num::<i16>()
}

/// Integer pixel coordinate of a wide value (fraction discarded toward -inf)
#[inline]
pub fn wide_to_pixel(v: Wide) -> i16 {
    v.to_num::<i16>()
}
