pub mod canvas;
pub mod color_map;
pub mod complex_number;
pub mod file_io;
pub mod image_utils;
pub mod render_window;
pub mod stopwatch;
pub mod text_overlay;
pub mod user_interface;
