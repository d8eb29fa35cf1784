//! Complex arithmetic used by the sampling pipeline, plus the human-readable formatting
//! used by the cursor readout.
//!
//! The value type itself is `num::complex::Complex64`: construction is `Complex64::new`,
//! addition and multiplication are the `+` and `*` operators, the magnitude is `norm()`,
//! and the complex exponential is `exp()`. All of these follow IEEE 754 semantics, so
//! NaN and infinity simply propagate.

use std::fmt;

pub use num::complex::Complex64;

/// Display adapter that renders a complex value as a short expression, for example
/// `3.00 - 2.50i`. Exact comparisons against 0, 1 and -1 pick the compact forms.
#[derive(Clone, Copy, Debug)]
pub struct ComplexDisplay(pub Complex64);

impl fmt::Display for ComplexDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (self.0.re, self.0.im);
        if im == 0.0 {
            write!(f, "{:.2}", re)
        } else if re == 0.0 {
            if im == 1.0 {
                write!(f, "i")
            } else {
                write!(f, "{:.2}i", im)
            }
        } else if im == -1.0 {
            write!(f, "{:.2} - i", re)
        } else if im < 0.0 {
            write!(f, "{:.2} - {:.2}i", re, -im)
        } else if im == 1.0 {
            write!(f, "{:.2} + i", re)
        } else {
            write!(f, "{:.2} + {:.2}i", re, im)
        }
    }
}

pub fn format_complex(z: Complex64) -> String {
    ComplexDisplay(z).to_string()
}
