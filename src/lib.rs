//! Domain coloring of a complex function.
//!
//! Each pixel of a square graph is mapped to a point of the complex plane, the selected
//! function is evaluated there, and the result is encoded as a color: green for the real
//! part, blue for the imaginary part. The interactive viewer also reports the value of the
//! function under the mouse cursor.

pub mod cli;
pub mod core;
pub mod functions;
