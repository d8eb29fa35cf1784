use image::Rgba;

use crate::core::{
    render_window::RenderWindow,
    text_overlay::{BitmapFont, TextBox},
    user_interface::{DisplaySink, SinkError, TextSink},
};

/**
 * RGBA image of the whole window: the graph in the top-left corner and the info line
 * below it. The byte layout (row-major, 4 bytes per pixel) matches the frame buffer of
 * the `pixels` crate, so the window glue can copy it over verbatim.
 */
pub struct Canvas {
    resolution: nalgebra::Vector2<u32>,
    rgba: Vec<u8>,
    background: Rgba<u8>,
    text_color: Rgba<u8>,
    font: BitmapFont,
    previous_text: Option<TextBox>,
}

impl Canvas {
    pub fn new(
        resolution: nalgebra::Vector2<u32>,
        font: BitmapFont,
        background: Rgba<u8>,
        text_color: Rgba<u8>,
    ) -> Canvas {
        let mut canvas = Canvas {
            resolution,
            rgba: vec![0; 4 * resolution[0] as usize * resolution[1] as usize],
            background,
            text_color,
            font,
            previous_text: None,
        };
        canvas.clear();
        canvas
    }

    pub fn resolution(&self) -> nalgebra::Vector2<u32> {
        self.resolution
    }

    pub fn frame(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        let offset = 4 * (y as usize * self.resolution[0] as usize + x as usize);
        Rgba([
            self.rgba[offset],
            self.rgba[offset + 1],
            self.rgba[offset + 2],
            self.rgba[offset + 3],
        ])
    }

    pub fn clear(&mut self) {
        for pixel in self.rgba.chunks_exact_mut(4) {
            pixel.copy_from_slice(&self.background.0);
        }
    }

    /// Fills a rectangle with the background color, clipped to the canvas.
    fn erase(&mut self, text_box: &TextBox) {
        let x_end = (text_box.x + text_box.width).min(self.resolution[0]);
        let y_end = (text_box.y + text_box.height).min(self.resolution[1]);
        for y in text_box.y..y_end {
            for x in text_box.x..x_end {
                let offset = 4 * (y as usize * self.resolution[0] as usize + x as usize);
                self.rgba[offset..offset + 4].copy_from_slice(&self.background.0);
            }
        }
    }
}

impl DisplaySink for Canvas {
    /// Clears the whole window, then copies the graph into the top-left corner.
    fn present_graph(&mut self, graph: &dyn RenderWindow) -> Result<(), SinkError> {
        self.clear();
        graph.draw(&mut self.rgba, self.resolution[0]);
        Ok(())
    }
}

impl TextSink for Canvas {
    fn show_text(&mut self, text: &str, origin: (u32, u32)) -> Result<(), SinkError> {
        if let Some(previous) = self.previous_text.take() {
            self.erase(&previous);
        }
        self.font.draw_text(
            &mut self.rgba,
            self.resolution[0],
            origin,
            text,
            self.text_color,
        );
        self.previous_text = Some(self.font.text_box(text, origin));
        Ok(())
    }
}
