use serde::{Deserialize, Serialize};

use crate::core::complex_number::Complex64;

use super::elementary::{ComplexExponential, Identity, Square};

/// A pure complex-valued function of one complex variable. This is the capability that the
/// sampler and the cursor readout are generic over. Implementations must be stateless (or at
/// least immutable) because the full-grid pass evaluates them from several threads at once.
pub trait ComplexFunction: Sync + Send {
    /// f(z)
    fn value(&self, z: Complex64) -> Complex64;
}

impl<T: ComplexFunction + ?Sized> ComplexFunction for Box<T> {
    #[inline]
    fn value(&self, z: Complex64) -> Complex64 {
        (**self).value(z)
    }
}

/// Registry of the functions that can be selected from a parameter file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionParams {
    #[default]
    Exponential,
    Identity,
    Square,
}

impl FunctionParams {
    pub fn build(&self) -> Box<dyn ComplexFunction> {
        match self {
            FunctionParams::Exponential => Box::new(ComplexExponential),
            FunctionParams::Identity => Box::new(Identity),
            FunctionParams::Square => Box::new(Square),
        }
    }
}
