//! Complex numbers over `f64`, with the elementary transcendental functions
//! extended to the complex plane.
//!
//! ```
//! use complex_rs::{consts, exp, Complex};
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.abs(), 5.0);
//! assert_eq!((z + 1.0).to_string(), "(4+4j)");
//!
//! let minus_one = exp(consts::I * std::f64::consts::PI);
//! assert!((minus_one.real() + 1.0).abs() < 1e-12);
//! ```

pub mod complex;
pub mod consts;
pub mod error;
pub mod functions;

pub use complex::Complex;
pub use error::ComplexError;
pub use functions::{
    acos, acosh, asin, asinh, atan, atanh, cos, cosh, exp, log, log10, polar, rect, rect_pair,
    rect_slice, sin, sinh, tan, tanh,
};
