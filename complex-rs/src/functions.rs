//! Elementary transcendental functions over the complex plane.
//!
//! Every function accepts anything that converts into a [`Complex`] (so plain
//! `f64` values work too) and returns the principal value. Branch cuts are
//! whatever `atan2` and `ln` produce; nothing here special-cases them.

use crate::complex::Complex;
use crate::consts::{E, I, NEGATIVE_I, ONE};
use crate::error::ComplexError;

/// `(magnitude, phase)` of `z`.
pub fn polar(z: impl Into<Complex>) -> (f64, f64) {
    let z: Complex = z.into();
    z.polar()
}

/// Inverse of [`polar`].
pub fn rect(magnitude: f64, phase: f64) -> Complex {
    Complex::from_polar(magnitude, phase)
}

/// [`rect`] taking the pair returned by [`polar`].
pub fn rect_pair((magnitude, phase): (f64, f64)) -> Complex {
    rect(magnitude, phase)
}

/// [`rect`] for a `[magnitude, phase]` slice whose length is only known at runtime.
pub fn rect_slice(pair: &[f64]) -> Result<Complex, ComplexError> {
    match *pair {
        [magnitude, phase] => Ok(rect(magnitude, phase)),
        _ => Err(ComplexError::PolarArity(pair.len())),
    }
}

pub fn exp(z: impl Into<Complex>) -> Complex {
    E.pow(z)
}

/// Natural logarithm, `ln|z| + i·arg(z)`. `log(0)` has a `-inf` real part.
pub fn log(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    let abs = z.abs();
    if abs == 0.0 {
        log::trace!("logarithm of {}, real part is -inf", z);
    }
    Complex::new(abs.ln(), z.phase())
}

pub fn log10(z: impl Into<Complex>) -> Complex {
    log(z) / log(10.0)
}

pub fn sin(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    Complex::new(
        z.real().sin() * z.imag().cosh(),
        z.real().cos() * z.imag().sinh(),
    )
}

pub fn cos(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    Complex::new(
        z.real().cos() * z.imag().cosh(),
        -z.real().sin() * z.imag().sinh(),
    )
}

pub fn tan(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    sin(z) / cos(z)
}

/// `-i·log(i·z + sqrt(1 - z²))`
pub fn asin(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    log(I * z + (ONE - z.pow2()).sqrt()) * NEGATIVE_I
}

/// `-i·log(z + sqrt(z² - 1))`
pub fn acos(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    log(z + (z.pow2() - ONE).sqrt()) * NEGATIVE_I
}

/// `i/2·(log(1 - i·z) - log(1 + i·z))`
pub fn atan(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    let iz = I * z;
    I * (log(ONE - iz) - log(ONE + iz)) / 2.0
}

pub fn sinh(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    Complex::new(
        z.real().sinh() * z.imag().cos(),
        z.real().cosh() * z.imag().sin(),
    )
}

pub fn cosh(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    Complex::new(
        z.real().cosh() * z.imag().cos(),
        z.real().sinh() * z.imag().sin(),
    )
}

pub fn tanh(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    sinh(z) / cosh(z)
}

/// `log(z + sqrt(z² + 1))`
pub fn asinh(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    log(z + (z.pow2() + ONE).sqrt())
}

/// `log(z + sqrt(z + 1)·sqrt(z - 1))`
pub fn acosh(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    log(z + (z + ONE).sqrt() * (z - ONE).sqrt())
}

/// `(log(1 + z) - log(1 - z)) / 2`
pub fn atanh(z: impl Into<Complex>) -> Complex {
    let z: Complex = z.into();
    (log(ONE + z) - log(ONE - z)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts;

    const TOL: f64 = 1e-12;

    fn assert_near(a: Complex, b: Complex) {
        assert!(
            (a.real() - b.real()).abs() < TOL && (a.imag() - b.imag()).abs() < TOL,
            "{} vs {}",
            a,
            b
        );
    }

    #[test]
    fn test_rect_slice() {
        let z = rect_slice(&[2.0, 0.0]).unwrap();
        assert_eq!(z, Complex::new(2.0, 0.0));

        assert_eq!(rect_slice(&[1.0]), Err(ComplexError::PolarArity(1)));
        assert_eq!(
            rect_slice(&[1.0, 2.0, 3.0]).unwrap_err().to_string(),
            "polar form takes exactly 2 components (magnitude, phase), got 3"
        );
    }

    #[test]
    fn test_log_branches() {
        assert_near(log(-1.0), Complex::new(0.0, consts::PI));
        assert_near(log(I), Complex::new(0.0, consts::FRAC_PI_2));
        assert_near(log(NEGATIVE_I), Complex::new(0.0, -consts::FRAC_PI_2));
    }

    #[test]
    fn test_log_of_zero() {
        let _ = env_logger::builder().is_test(true).try_init();

        let z = log(0.0);
        assert_eq!(z.real(), f64::NEG_INFINITY);
        assert_eq!(z.imag(), 0.0);
    }

    #[test]
    fn test_inverse_trig_at_one() {
        // sqrt(0) has to stay 0 for these to be finite
        assert_near(asin(1.0), Complex::new(consts::FRAC_PI_2, 0.0));
        assert_near(acos(1.0), Complex::new(0.0, 0.0));
        assert_near(acosh(1.0), Complex::new(0.0, 0.0));
    }
}
