use std::fmt::{self, Write};

use crate::core::{
    color_map::ColorMapper,
    complex_number::ComplexDisplay,
    render_window::{PixelGrid, RenderWindow},
};
use crate::functions::common::ComplexFunction;

pub type SinkError = Box<dyn std::error::Error>;

/// Presents a complete graph. Called once at startup and again whenever the window is
/// resized; it always receives the cached grid, never a partial pass.
pub trait DisplaySink {
    fn present_graph(&mut self, graph: &dyn RenderWindow) -> Result<(), SinkError>;
}

/// Draws a single line of text with its top-left corner at `origin`, replacing whatever
/// line was drawn before (the old bounding box is cleared first).
pub trait TextSink {
    fn show_text(&mut self, text: &str, origin: (u32, u32)) -> Result<(), SinkError>;
}

/// Input events, already translated from the windowing system into graph pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    Quit,
    /// Pointer position in graph pixels. May lie outside the graph, or be negative.
    PointerMove { x: i64, y: i64 },
    Resize { width: u32, height: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Terminated,
}

/**
 * Formats the value of the function at the cursor as `f(<w>) = <z>`. The same string
 * buffer is reused for every event, so a flood of pointer events does not allocate.
 */
#[derive(Debug, Default)]
pub struct CursorReadout {
    text: String,
}

impl CursorReadout {
    pub fn new() -> CursorReadout {
        CursorReadout {
            text: String::with_capacity(64),
        }
    }

    pub fn update<F, C>(
        &mut self,
        grid: &PixelGrid<F, C>,
        x: i64,
        y: i64,
    ) -> Result<&str, fmt::Error>
    where
        F: ComplexFunction,
        C: ColorMapper,
    {
        let (w, z) = grid.sample_point(x, y);
        self.text.clear();
        write!(self.text, "f({}) = {}", ComplexDisplay(w), ComplexDisplay(z))?;
        Ok(&self.text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/**
 * Owns everything the interactive session needs: the sampled graph, the readout buffer,
 * and the position of the info line. Events are handled one at a time and synchronously.
 *
 *   Idle --Quit--> Terminated
 *   Idle --PointerMove--> Idle   (readout redrawn)
 *   Idle --Resize--> Idle        (cached graph re-presented, nothing resampled)
 */
pub struct ExplorerSession<F, C>
where
    F: ComplexFunction,
    C: ColorMapper,
{
    grid: PixelGrid<F, C>,
    readout: CursorReadout,
    text_origin: (u32, u32),
    state: SessionState,
}

impl<F, C> ExplorerSession<F, C>
where
    F: ComplexFunction,
    C: ColorMapper,
{
    pub fn new(grid: PixelGrid<F, C>, text_origin: (u32, u32)) -> Self {
        ExplorerSession {
            grid,
            readout: CursorReadout::new(),
            text_origin,
            state: SessionState::Idle,
        }
    }

    pub fn grid(&self) -> &PixelGrid<F, C> {
        &self.grid
    }

    pub fn readout(&self) -> &CursorReadout {
        &self.readout
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Hands the initial graph to the display.
    pub fn start<S: DisplaySink>(&mut self, sink: &mut S) -> Result<(), SinkError> {
        sink.present_graph(&self.grid)
    }

    pub fn handle_event<S>(
        &mut self,
        event: InteractionEvent,
        sink: &mut S,
    ) -> Result<SessionState, SinkError>
    where
        S: DisplaySink + TextSink,
    {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }
        match event {
            InteractionEvent::Quit => {
                log::info!("Quit requested; closing the session.");
                self.state = SessionState::Terminated;
            }
            InteractionEvent::PointerMove { x, y } => {
                let text = self.readout.update(&self.grid, x, y)?;
                log::trace!("Cursor at ({}, {}): {}", x, y, text);
                sink.show_text(text, self.text_origin)?;
            }
            InteractionEvent::Resize { width, height } => {
                log::debug!(
                    "Window resized to {}x{}; re-presenting cached graph.",
                    width,
                    height
                );
                sink.present_graph(&self.grid)?;
            }
        }
        Ok(self.state)
    }
}
