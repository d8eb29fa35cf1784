use image::Rgba;

pub const GLYPH_WIDTH: u32 = 3;
pub const GLYPH_HEIGHT: u32 = 5;
const GLYPH_SPACING: u32 = 1;

/// Axis-aligned rectangle in window pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Rows of a 3x5 glyph, top to bottom. Bit 2 is the leftmost column. Covers every
/// character the cursor readout can produce; anything else renders as blank space.
fn glyph_rows(ch: char) -> [u8; 5] {
    match ch {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '(' => [0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => [0b100, 0b010, 0b010, 0b010, 0b100],
        'f' => [0b011, 0b010, 0b111, 0b010, 0b010],
        'i' => [0b010, 0b000, 0b010, 0b010, 0b010],
        'n' => [0b000, 0b110, 0b101, 0b101, 0b101],
        'a' => [0b000, 0b011, 0b101, 0b101, 0b011],
        'N' => [0b101, 0b111, 0b111, 0b101, 0b101],
        _ => [0b000; 5],
    }
}

/// Fixed-width bitmap font, scaled up by an integer factor to approximate a font size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    pub fn for_font_size(font_size: u32) -> BitmapFont {
        BitmapFont {
            scale: (font_size / GLYPH_HEIGHT).max(1),
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn advance(&self) -> u32 {
        (GLYPH_WIDTH + GLYPH_SPACING) * self.scale
    }

    /// Bounding box of `text` drawn with its top-left corner at `origin`.
    pub fn text_box(&self, text: &str, origin: (u32, u32)) -> TextBox {
        let count = text.chars().count() as u32;
        TextBox {
            x: origin.0,
            y: origin.1,
            width: count * self.advance(),
            height: GLYPH_HEIGHT * self.scale,
        }
    }

    /**
     * Draws `text` into an RGBA screen buffer that is `screen_width` pixels wide. Only the
     * glyph foreground is written; anything that falls off the screen is clipped.
     */
    pub fn draw_text(
        &self,
        screen: &mut [u8],
        screen_width: u32,
        origin: (u32, u32),
        text: &str,
        color: Rgba<u8>,
    ) {
        let screen_width = screen_width as usize;
        let screen_height = screen.len() / (4 * screen_width);
        let scale = self.scale as usize;

        for (index, ch) in text.chars().enumerate() {
            let glyph_x = origin.0 as usize + index * self.advance() as usize;
            if glyph_x >= screen_width {
                break;
            }
            for (row, bits) in glyph_rows(ch).iter().enumerate() {
                for column in 0..GLYPH_WIDTH as usize {
                    if bits & (1 << (GLYPH_WIDTH as usize - 1 - column)) == 0 {
                        continue;
                    }
                    for dy in 0..scale {
                        let y = origin.1 as usize + row * scale + dy;
                        if y >= screen_height {
                            continue;
                        }
                        for dx in 0..scale {
                            let x = glyph_x + column * scale + dx;
                            if x >= screen_width {
                                continue;
                            }
                            let offset = 4 * (y * screen_width + x);
                            screen[offset..offset + 4].copy_from_slice(&color.0);
                        }
                    }
                }
            }
        }
    }
}
