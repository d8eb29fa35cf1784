use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use crate::core::complex_number::Complex64;

/// Smallest graph axis (in pixels) for which the coordinate map has a non-zero scale.
pub const MIN_GRAPH_PIXELS: u32 = 8;

/// Largest window axis (and font size) accepted from a parameter file. This is the
/// default 2D texture limit of the `wgpu` device that backs the `pixels` surface.
pub const MAX_WINDOW_PIXELS: u32 = 8192;

/**
 * Resolution of the whole window plus the font size of the info line. Together these
 * fix the layout: a square graph in the top-left corner, with a single line of text
 * underneath it.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowSpecification {
    pub resolution: nalgebra::Vector2<u32>,
    pub font_size: u32,
}

impl Default for WindowSpecification {
    fn default() -> Self {
        WindowSpecification {
            resolution: nalgebra::Vector2::new(800, 600),
            font_size: 16,
        }
    }
}

impl WindowSpecification {
    /// Height of the strip below the graph: the font size plus a margin of one fifth of
    /// the font size on either side.
    /// Saturates instead of overflowing; `validate` rejects such font sizes.
    pub fn info_height(&self) -> u32 {
        self.font_size.saturating_add(2 * (self.font_size / 5))
    }

    /// The graph is square, and as tall as the window minus the info strip.
    pub fn graph_resolution(&self) -> nalgebra::Vector2<u32> {
        let height = self.resolution[1].saturating_sub(self.info_height());
        nalgebra::Vector2::new(height, height)
    }

    /// Top-left corner of the info line, in window pixels.
    pub fn text_origin(&self) -> nalgebra::Vector2<u32> {
        nalgebra::Vector2::new(self.font_size / 5, self.graph_resolution()[1])
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.resolution[0] > MAX_WINDOW_PIXELS || self.resolution[1] > MAX_WINDOW_PIXELS {
            return Err(format!(
                "window resolution {}x{} exceeds the maximum of {} pixels per axis",
                self.resolution[0], self.resolution[1], MAX_WINDOW_PIXELS
            ));
        }
        if self.font_size > MAX_WINDOW_PIXELS {
            return Err(format!(
                "font size {} exceeds the maximum of {}",
                self.font_size, MAX_WINDOW_PIXELS
            ));
        }
        let graph = self.graph_resolution();
        if self.info_height() >= self.resolution[1] {
            return Err(format!(
                "window height {} leaves no room for the graph below an info line of height {}",
                self.resolution[1],
                self.info_height()
            ));
        }
        if graph[1] < MIN_GRAPH_PIXELS {
            return Err(format!(
                "graph height {} is below the minimum of {} pixels",
                graph[1], MIN_GRAPH_PIXELS
            ));
        }
        if graph[0] > self.resolution[0] {
            return Err(format!(
                "square graph of width {} does not fit in a window of width {}",
                graph[0], self.resolution[0]
            ));
        }
        Ok(())
    }
}

pub fn create_buffer<T: Clone>(value: T, resolution: &nalgebra::Vector2<u32>) -> Vec<Vec<T>> {
    vec![vec![value; resolution[1] as usize]; resolution[0] as usize]
}

#[derive(Clone, Debug)]
/**
 * Maps one pixel axis onto one axis of the complex plane. The center and the number of
 * pixels per unit are both computed with truncating integer division, so that an axis
 * with `n` pixels spans roughly [-4, 4]. On odd axes the center sits half a pixel left
 * of the true midpoint.
 */
pub struct LinearPixelMap {
    center: i64,
    pixels_per_unit: i64,
}

impl LinearPixelMap {
    /**
     * @param n: number of pixels along this axis
     */
    pub fn new(n: u32) -> LinearPixelMap {
        let n = n as i64;
        LinearPixelMap {
            center: n / 2,
            pixels_per_unit: n / 8,
        }
    }

    // Map from pixel (integer) to point (float). Indices outside [0, n) are fine.
    pub fn map(&self, index: i64) -> f64 {
        (index - self.center) as f64 / self.pixels_per_unit as f64
    }
}

/// Pixel coordinate to complex-plane coordinate transform for the graph region. Both
/// the full-grid sampler and the cursor readout go through this type.
#[derive(Clone, Debug)]
pub struct PixelMapper {
    width: LinearPixelMap,
    height: LinearPixelMap,
}

impl PixelMapper {
    pub fn new(resolution: &nalgebra::Vector2<u32>) -> PixelMapper {
        PixelMapper {
            width: LinearPixelMap::new(resolution[0]),
            height: LinearPixelMap::new(resolution[1]),
        }
    }

    /// The imaginary part grows with the row index (downward on screen).
    pub fn map(&self, point: &(i64, i64)) -> Complex64 {
        let (i, j) = *point;
        Complex64::new(self.width.map(i), self.height.map(j))
    }
}

/**
 * Given an image resolution and a pixel-to-plane mapping, iterate over every pixel and use a
 * lambda to compute the value stored at that pixel. Columns are filled in parallel; each worker
 * owns a disjoint column, so there is no contention.
 *
 * @param pixel_renderer:  maps from a point in the complex plane to the value to store.
 */
pub fn generate_image_in_place<T, F>(
    resolution: &nalgebra::Vector2<u32>,
    pixel_renderer: F,
    raw_data: &mut [Vec<T>],
) where
    T: Send,
    F: Fn(Complex64) -> T + std::marker::Sync,
{
    assert_eq!(
        raw_data.len(),
        resolution[0] as usize,
        "Outer dimension mismatch"
    );
    let pixel_mapper = PixelMapper::new(resolution);
    raw_data.par_iter_mut().enumerate().for_each(|(x, column)| {
        assert_eq!(
            column.len(),
            resolution[1] as usize,
            "Inner dimension mismatch"
        );
        column.iter_mut().enumerate().for_each(|(y, elem)| {
            *elem = pixel_renderer(pixel_mapper.map(&(x as i64, y as i64)));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_layout() {
        let spec = WindowSpecification::default();
        assert_eq!(spec.info_height(), 22);
        assert_eq!(spec.graph_resolution(), nalgebra::Vector2::new(578, 578));
        assert_eq!(spec.text_origin(), nalgebra::Vector2::new(3, 578));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_layout_validation() {
        let too_short = WindowSpecification {
            resolution: nalgebra::Vector2::new(800, 22),
            font_size: 16,
        };
        assert!(too_short.validate().is_err());

        let tiny_graph = WindowSpecification {
            resolution: nalgebra::Vector2::new(800, 29),
            font_size: 16,
        };
        assert_eq!(tiny_graph.graph_resolution()[1], 7);
        assert!(tiny_graph.validate().is_err());

        let narrow = WindowSpecification {
            resolution: nalgebra::Vector2::new(300, 600),
            font_size: 16,
        };
        assert!(narrow.validate().is_err());
    }

    #[test]
    fn test_oversized_values_are_rejected_without_panicking() {
        let huge_font: WindowSpecification =
            serde_json::from_str(r#"{ "resolution": [800, 600], "font_size": 4000000000 }"#)
                .unwrap();
        assert_eq!(huge_font.info_height(), u32::MAX);
        assert_eq!(huge_font.graph_resolution()[1], 0);
        assert!(huge_font.validate().is_err());

        let huge_window = WindowSpecification {
            resolution: nalgebra::Vector2::new(u32::MAX, u32::MAX),
            font_size: 16,
        };
        assert!(huge_window.validate().is_err());

        let largest = WindowSpecification {
            resolution: nalgebra::Vector2::new(MAX_WINDOW_PIXELS, MAX_WINDOW_PIXELS - 100),
            font_size: 16,
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_linear_pixel_map_even() {
        let pixel_map = LinearPixelMap::new(80);
        assert_eq!(pixel_map.map(40), 0.0);
        assert_eq!(pixel_map.map(0), -4.0);
        assert_eq!(pixel_map.map(80), 4.0);
        assert_relative_eq!(pixel_map.map(45), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_pixel_map_truncates_odd_dimensions() {
        // 578 / 2 = 289, 578 / 8 = 72
        let pixel_map = LinearPixelMap::new(578);
        assert_eq!(pixel_map.map(289), 0.0);
        assert_relative_eq!(pixel_map.map(0), -289.0 / 72.0, epsilon = 1e-12);

        // 21 / 2 = 10, 21 / 8 = 2: the center is pixel 10, not 10.5.
        let pixel_map = LinearPixelMap::new(21);
        assert_eq!(pixel_map.map(10), 0.0);
        assert_eq!(pixel_map.map(0), -5.0);
        assert_eq!(pixel_map.map(20), 5.0);
    }

    #[test]
    fn test_pixel_mapper_out_of_range_coordinates() {
        let mapper = PixelMapper::new(&nalgebra::Vector2::new(16, 16));
        let z = mapper.map(&(-8, 40));
        assert_eq!(z, Complex64::new(-8.0, 16.0));
    }

    #[test]
    fn test_pixel_mapper_center_is_origin() {
        let mapper = PixelMapper::new(&nalgebra::Vector2::new(64, 32));
        assert_eq!(mapper.map(&(32, 16)), Complex64::new(0.0, 0.0));
        // Imaginary part grows downward.
        assert!(mapper.map(&(32, 20)).im > 0.0);
    }

    #[test]
    fn test_generate_image_in_place_visits_every_pixel() {
        let resolution = nalgebra::Vector2::new(9, 13);
        let mut data = create_buffer(Complex64::new(f64::NAN, f64::NAN), &resolution);
        generate_image_in_place(&resolution, |z| z, &mut data);

        let mapper = PixelMapper::new(&resolution);
        for (i, column) in data.iter().enumerate() {
            for (j, value) in column.iter().enumerate() {
                assert_eq!(*value, mapper.map(&(i as i64, j as i64)));
            }
        }
    }

    #[test]
    #[should_panic(expected = "Outer dimension mismatch")]
    fn test_generate_image_in_place_dimension_mismatch() {
        let resolution = nalgebra::Vector2::new(4, 4);
        let mut data = create_buffer(0.0, &nalgebra::Vector2::new(3, 4));
        generate_image_in_place(&resolution, |z| z.re, &mut data);
    }
}
