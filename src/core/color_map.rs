use image::Rgba;

use crate::core::complex_number::Complex64;

pub const OPAQUE: u8 = 255;

pub trait ColorMapper: Sync {
    fn compute_pixel(&self, value: Complex64) -> Rgba<u8>;
}

/**
 * Squashes a real number onto a color channel with the Gauss error function:
 * `(erf(x) + 1) * 128`, truncated toward zero and clamped to [0, 255].
 * The error function saturates smoothly, so large values still produce distinct
 * (if compressed) colors instead of clipping at a hard edge.
 */
pub fn erf_channel(x: f64) -> u8 {
    let scaled = ((libm::erf(x) + 1.0) * 128.0) as i32;
    scaled.clamp(0, 255) as u8
}

/**
 * Domain coloring map: red is always zero, green encodes the real part, and blue
 * encodes the imaginary part. The output is always fully opaque.
 */
#[derive(Clone, Copy, Debug, Default)]
pub struct ErfColorMap;

impl ColorMapper for ErfColorMap {
    fn compute_pixel(&self, value: Complex64) -> Rgba<u8> {
        Rgba([0, erf_channel(value.re), erf_channel(value.im), OPAQUE])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use more_asserts::{assert_ge, assert_le};

    #[test]
    fn test_origin_maps_to_mid_gray_green_blue() {
        assert_eq!(
            ErfColorMap.compute_pixel(Complex64::new(0.0, 0.0)),
            Rgba([0, 128, 128, 255])
        );
    }

    #[test]
    fn test_saturation_is_clamped() {
        for x in [6.0, 50.0, 1e300, f64::INFINITY] {
            assert_eq!(erf_channel(x), 255);
        }
        for x in [-6.0, -50.0, -1e300, f64::NEG_INFINITY] {
            assert_eq!(erf_channel(x), 0);
        }
        assert_eq!(
            ErfColorMap.compute_pixel(Complex64::new(1e10, -1e10)),
            Rgba([0, 255, 0, 255])
        );
    }

    #[test]
    fn test_channel_is_monotonic() {
        let mut previous = erf_channel(-4.0);
        let mut x = -4.0;
        while x <= 4.0 {
            let current = erf_channel(x);
            assert_ge!(current, previous);
            previous = current;
            x += 0.01;
        }
    }

    #[test]
    fn test_channel_truncates_toward_zero() {
        // erf(0.5) = 0.5204998778..., (1.5204998778) * 128 = 194.62...
        assert_eq!(erf_channel(0.5), 194);
        // erf(-0.5) = -0.5204998778..., (0.4795001222) * 128 = 61.37...
        assert_eq!(erf_channel(-0.5), 61);
        assert_le!(erf_channel(1.0), 255);
    }

    #[test]
    fn test_nan_maps_to_zero() {
        assert_eq!(erf_channel(f64::NAN), 0);
    }
}
