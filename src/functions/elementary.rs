use crate::core::complex_number::Complex64;

use super::common::ComplexFunction;

/// f(z) = e^z
#[derive(Clone, Copy, Debug, Default)]
pub struct ComplexExponential;

impl ComplexFunction for ComplexExponential {
    #[inline]
    fn value(&self, z: Complex64) -> Complex64 {
        z.exp()
    }
}

/// f(z) = z
///
/// Useful for checking the coordinate mapping: the color of each pixel is the
/// color of the input value itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl ComplexFunction for Identity {
    #[inline]
    fn value(&self, z: Complex64) -> Complex64 {
        z
    }
}

/// f(z) = z^2
#[derive(Clone, Copy, Debug, Default)]
pub struct Square;

impl ComplexFunction for Square {
    #[inline]
    fn value(&self, z: Complex64) -> Complex64 {
        z * z
    }
}
