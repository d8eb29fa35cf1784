use image::Rgba;

use crate::core::{
    color_map::ColorMapper,
    complex_number::Complex64,
    image_utils::{create_buffer, generate_image_in_place, PixelMapper},
    stopwatch::Stopwatch,
};
use crate::functions::common::ComplexFunction;

/// Read access to the cached, fully rendered graph. This is the view that the display sink
/// presents; it never exposes a half-finished pass.
pub trait RenderWindow {
    fn resolution(&self) -> nalgebra::Vector2<u32>;

    /// Color stored for pixel (i, j) by the most recent complete pass.
    fn color_at(&self, i: u32, j: u32) -> Rgba<u8>;

    /// Copies the cached graph into the top-left corner of an RGBA screen buffer that is
    /// `screen_width` pixels wide. Screen pixels outside the graph are left untouched.
    fn draw(&self, screen: &mut [u8], screen_width: u32) {
        let resolution = self.resolution();
        let rows = (screen.len() / (4 * screen_width as usize)).min(resolution[1] as usize);
        let columns = screen_width.min(resolution[0]) as usize;
        for (j, row) in screen
            .chunks_exact_mut(4 * screen_width as usize)
            .take(rows)
            .enumerate()
        {
            for (i, pixel) in row.chunks_exact_mut(4).take(columns).enumerate() {
                pixel.copy_from_slice(&self.color_at(i as u32, j as u32).0);
            }
        }
    }
}

/**
 * Samples a complex function over the graph region and encodes each value as a color.
 * The colors are double buffered: `update()` fills the scratch buffer and then swaps it
 * into place, so readers only ever see complete passes.
 */
pub struct PixelGrid<F, C>
where
    F: ComplexFunction,
    C: ColorMapper,
{
    display_buffer: Vec<Vec<Rgba<u8>>>, // read by `draw()` and `color_at()`
    scratch_buffer: Vec<Vec<Rgba<u8>>>, // filled in-place by `update()`
    resolution: nalgebra::Vector2<u32>,
    pixel_mapper: PixelMapper,
    function: F,
    color_map: C,
}

impl<F, C> PixelGrid<F, C>
where
    F: ComplexFunction,
    C: ColorMapper,
{
    /// Builds the grid and runs the first full pass.
    pub fn new(resolution: nalgebra::Vector2<u32>, function: F, color_map: C) -> Self {
        let blank = Rgba([0, 0, 0, 0]);
        let mut grid = Self {
            display_buffer: create_buffer(blank, &resolution),
            scratch_buffer: create_buffer(blank, &resolution),
            pixel_mapper: PixelMapper::new(&resolution),
            resolution,
            function,
            color_map,
        };
        grid.update();
        grid
    }

    /**
     * Recomputes every pixel. Columns are filled in parallel; the result becomes visible
     * only once the whole pass has finished.
     */
    pub fn update(&mut self) {
        let mut stopwatch = Stopwatch::new("Domain coloring pass".to_owned());
        let function = &self.function;
        let color_map = &self.color_map;
        generate_image_in_place(
            &self.resolution,
            |w| color_map.compute_pixel(function.value(w)),
            &mut self.scratch_buffer,
        );
        stopwatch.record_split(format!(
            "sampled {}x{} pixels",
            self.resolution[0], self.resolution[1]
        ));
        std::mem::swap(&mut self.scratch_buffer, &mut self.display_buffer);
        stopwatch.log_summary();
    }

    /// Evaluates the function at a single pixel, through the same mapping as `update()`.
    /// Coordinates outside the graph are valid.
    pub fn sample_point(&self, i: i64, j: i64) -> (Complex64, Complex64) {
        let w = self.pixel_mapper.map(&(i, j));
        (w, self.function.value(w))
    }

    /// Color that `update()` would compute for a single pixel, without touching the buffers.
    pub fn sample_color(&self, i: i64, j: i64) -> Rgba<u8> {
        let (_, z) = self.sample_point(i, j);
        self.color_map.compute_pixel(z)
    }
}

impl<F, C> RenderWindow for PixelGrid<F, C>
where
    F: ComplexFunction,
    C: ColorMapper,
{
    fn resolution(&self) -> nalgebra::Vector2<u32> {
        self.resolution
    }

    fn color_at(&self, i: u32, j: u32) -> Rgba<u8> {
        self.display_buffer[i as usize][j as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color_map::ErfColorMap;
    use crate::functions::elementary::{ComplexExponential, Identity};

    #[test]
    fn test_every_pixel_matches_isolated_sample() {
        let grid = PixelGrid::new(
            nalgebra::Vector2::new(24, 17),
            ComplexExponential,
            ErfColorMap,
        );
        for i in 0..24 {
            for j in 0..17 {
                assert_eq!(
                    grid.color_at(i, j),
                    grid.sample_color(i as i64, j as i64),
                    "pixel ({}, {})",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_center_pixel_of_identity_is_origin_color() {
        let grid = PixelGrid::new(nalgebra::Vector2::new(32, 32), Identity, ErfColorMap);
        let (w, z) = grid.sample_point(16, 16);
        assert_eq!(w, Complex64::new(0.0, 0.0));
        assert_eq!(z, w);
        assert_eq!(grid.color_at(16, 16), Rgba([0, 128, 128, 255]));
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut grid = PixelGrid::new(
            nalgebra::Vector2::new(16, 16),
            ComplexExponential,
            ErfColorMap,
        );
        let before: Vec<_> = (0..16).map(|i| grid.color_at(i, 5)).collect();
        grid.update();
        let after: Vec<_> = (0..16).map(|i| grid.color_at(i, 5)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_draw_into_wider_screen() {
        let grid = PixelGrid::new(nalgebra::Vector2::new(8, 8), Identity, ErfColorMap);
        let screen_width = 10;
        let mut screen = vec![7u8; 4 * 10 * 9];
        grid.draw(&mut screen, screen_width);

        let pixel = |i: usize, j: usize| &screen[4 * (j * 10 + i)..4 * (j * 10 + i) + 4];
        assert_eq!(pixel(3, 2), &grid.color_at(3, 2).0);
        assert_eq!(pixel(7, 7), &grid.color_at(7, 7).0);
        // Outside the graph: untouched.
        assert_eq!(pixel(8, 0), &[7, 7, 7, 7]);
        assert_eq!(pixel(0, 8), &[7, 7, 7, 7]);
    }

    #[test]
    fn test_boxed_function_matches_concrete_function() {
        let resolution = nalgebra::Vector2::new(12, 12);
        let boxed: Box<dyn ComplexFunction> = Box::new(ComplexExponential);
        let a = PixelGrid::new(resolution, boxed, ErfColorMap);
        let b = PixelGrid::new(resolution, ComplexExponential, ErfColorMap);
        for i in 0..12 {
            for j in 0..12 {
                assert_eq!(a.color_at(i, j), b.color_at(i, j));
            }
        }
    }
}
