use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A complex number with `f64` components.
///
/// The fields are private and no method takes `&mut self`, so a value never
/// changes once built. Every operation hands back a fresh `Complex`.
/// `Complex::default()` is `0 + 0i`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    real: f64,
    imag: f64,
}

impl Complex {
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// `real + 0i`
    pub const fn from_real(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    /// `0 + imag·i`
    pub const fn from_imag(imag: f64) -> Self {
        Self::new(0.0, imag)
    }

    /// Builds a value from its polar form, `magnitude·cos(phase) + magnitude·sin(phase)·i`.
    pub fn from_polar(magnitude: f64, phase: f64) -> Self {
        Self::new(magnitude * phase.cos(), magnitude * phase.sin())
    }

    pub fn real(self) -> f64 {
        self.real
    }

    pub fn imag(self) -> f64 {
        self.imag
    }

    /// Squared magnitude, `real² + imag²`.
    pub fn norm_sqr(self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Magnitude, `sqrt(real² + imag²)`, always `>= 0` for non-NaN input.
    ///
    /// Computed with `hypot` so the squares cannot underflow to zero or
    /// overflow to infinity on their own.
    pub fn abs(self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Argument in `(-π, π]`, following `f64::atan2`.
    pub fn phase(self) -> f64 {
        self.imag.atan2(self.real)
    }

    /// `(magnitude, phase)`
    pub fn polar(self) -> (f64, f64) {
        (self.abs(), self.phase())
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.real, -self.imag)
    }

    /// `self²`, computed directly rather than through a full multiply.
    pub fn pow2(self) -> Self {
        Self::new(
            self.real * self.real - self.imag * self.imag,
            2.0 * self.real * self.imag,
        )
    }

    /// Principal value of `self^exponent`.
    ///
    /// With `r = |self|` and `θ = arg(self)`, the result has magnitude
    /// `r^re · e^(-im·θ)` and argument `re·θ + im·ln r`. Other branches can be
    /// reached by adding multiples of 2π to the phase of `self` beforehand.
    pub fn pow(self, exponent: impl Into<Self>) -> Self {
        let exponent: Self = exponent.into();
        let (abs, theta) = self.polar();

        let magnitude = abs.powf(exponent.real) * (-exponent.imag * theta).exp();
        let mut arg = exponent.real * theta;
        // ln(0) is -inf, and 0 * -inf would poison real powers of zero with NaN
        if exponent.imag != 0.0 {
            arg += exponent.imag * abs.ln();
        }

        Self::from_polar(magnitude, arg)
    }

    /// Principal square root, `self^0.5`.
    pub fn sqrt(self) -> Self {
        self.pow(0.5)
    }

    pub fn is_nan(self) -> bool {
        self.real.is_nan() || self.imag.is_nan()
    }

    pub fn is_infinite(self) -> bool {
        self.real.is_infinite() || self.imag.is_infinite()
    }

    pub fn is_finite(self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::from_real(real)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imag): (f64, f64)) -> Self {
        Self::new(real, imag)
    }
}

impl From<&Complex> for Complex {
    fn from(z: &Complex) -> Self {
        *z
    }
}

impl<T: Into<Complex>> Add<T> for Complex {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        let rhs: Complex = rhs.into();
        Self::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl<T: Into<Complex>> Sub<T> for Complex {
    type Output = Self;

    fn sub(self, rhs: T) -> Self::Output {
        let rhs: Complex = rhs.into();
        Self::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl<T: Into<Complex>> Mul<T> for Complex {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        let rhs: Complex = rhs.into();
        Self::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

impl<T: Into<Complex>> Div<T> for Complex {
    type Output = Self;

    /// A zero-magnitude divisor yields infinite or NaN components, never a panic.
    fn div(self, rhs: T) -> Self::Output {
        let rhs: Complex = rhs.into();
        let den = rhs.norm_sqr();
        if den == 0.0 {
            trace!("dividing {} by a zero-magnitude value", self);
        }

        Self::new(
            (self.real * rhs.real + self.imag * rhs.imag) / den,
            (self.imag * rhs.real - self.real * rhs.imag) / den,
        )
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imag)
    }
}

// Real left-hand operands, so `2.0 * z` reads the same as `z * 2.0`.
macro_rules! impl_real_lhs {
    ($($imp:ident::$method:ident),* $(,)?) => {$(
        impl $imp<Complex> for f64 {
            type Output = Complex;

            fn $method(self, rhs: Complex) -> Complex {
                $imp::$method(Complex::from_real(self), rhs)
            }
        }
    )*};
}

impl_real_lhs!(Add::add, Sub::sub, Mul::mul, Div::div);

/// Renders as `(<real><sign><imag>j)`, e.g. `(3+4j)` or `(3-4j)`.
///
/// The sign is `+` unless the imaginary part is negative. A precision given to
/// the formatter applies to both components.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.imag < 0.0 { "" } else { "+" };

        write!(f, "(")?;
        write_component(f, self.real)?;
        write!(f, "{sign}")?;
        write_component(f, self.imag)?;
        write!(f, "j)")
    }
}

// Outside this band plain decimal notation runs to dozens of digits.
const EXP_NOTATION_ABOVE: f64 = 1e21;
const EXP_NOTATION_BELOW: f64 = 1e-6;

fn write_component(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    // -0 prints as 0
    let value = if value == 0.0 { 0.0 } else { value };
    let magnitude = value.abs();
    let exponential = value != 0.0
        && value.is_finite()
        && (magnitude >= EXP_NOTATION_ABOVE || magnitude < EXP_NOTATION_BELOW);

    match (f.precision(), exponential) {
        (Some(precision), true) => write!(f, "{value:.precision$e}"),
        (Some(precision), false) => write!(f, "{value:.precision$}"),
        (None, true) => write!(f, "{value:e}"),
        (None, false) => write!(f, "{value}"),
    }
}
