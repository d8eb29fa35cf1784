use image::Rgba;
use pixels::{Pixels, SurfaceTexture};
use serde::{Deserialize, Serialize};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::cli::fatal_error;
use crate::core::{
    canvas::Canvas,
    color_map::{ErfColorMap, OPAQUE},
    image_utils::WindowSpecification,
    render_window::{PixelGrid, RenderWindow},
    text_overlay::BitmapFont,
    user_interface::{
        DisplaySink, ExplorerSession, InteractionEvent, SessionState, SinkError, TextSink,
    },
};
use crate::functions::common::FunctionParams;

/// Everything the viewer reads from its parameter file. Missing fields take the defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExploreParams {
    pub title: String,
    pub window: WindowSpecification,
    pub background_color_rgb: [u8; 3],
    pub text_color_rgb: [u8; 3],
    pub function: FunctionParams,
}

impl Default for ExploreParams {
    fn default() -> Self {
        ExploreParams {
            title: "Complex Function Visualizer".to_owned(),
            window: WindowSpecification::default(),
            background_color_rgb: [192, 192, 192],
            text_color_rgb: [0, 0, 0],
            function: FunctionParams::default(),
        }
    }
}

fn opaque(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], OPAQUE])
}

impl ExploreParams {
    /// Canvas for the whole window, with the configured colors and font size.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(
            self.window.resolution,
            BitmapFont::for_font_size(self.window.font_size),
            opaque(self.background_color_rgb),
            opaque(self.text_color_rgb),
        )
    }

    pub fn text_origin(&self) -> (u32, u32) {
        let origin = self.window.text_origin();
        (origin[0], origin[1])
    }
}

/**
 * The window-side collaborator: draws into an in-memory canvas and pushes every change
 * straight to the `pixels` frame, so each sink call ends with the result on screen.
 */
struct WindowSurface {
    pixels: Pixels,
    canvas: Canvas,
}

impl WindowSurface {
    fn flush(&mut self) -> Result<(), SinkError> {
        self.pixels.frame_mut().copy_from_slice(self.canvas.frame());
        self.pixels.render()?;
        Ok(())
    }

    /// Window position (physical pixels) to frame pixel. Positions off the frame are
    /// passed through unclamped; the readout handles them like any other point.
    fn pointer_to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        match self.pixels.window_pos_to_pixel((x as f32, y as f32)) {
            Ok((px, py)) => (px as i64, py as i64),
            Err((px, py)) => (px as i64, py as i64),
        }
    }
}

impl DisplaySink for WindowSurface {
    fn present_graph(&mut self, graph: &dyn RenderWindow) -> Result<(), SinkError> {
        self.canvas.present_graph(graph)?;
        self.flush()
    }
}

impl TextSink for WindowSurface {
    fn show_text(&mut self, text: &str, origin: (u32, u32)) -> Result<(), SinkError> {
        self.canvas.show_text(text, origin)?;
        self.flush()
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/**
 * Create the viewer window, sample the configured function over the graph, and run the
 * event loop until the user quits.
 * -- mouse motion updates the readout line under the graph
 * -- resizing the window re-presents the cached graph (nothing is resampled)
 * -- Escape or closing the window quits
 */
pub fn explore(params: ExploreParams) -> Result<(), Box<dyn std::error::Error>> {
    params.window.validate()?;
    let graph_resolution = params.window.graph_resolution();
    log::info!(
        "Window {}x{}, graph {}x{}, function {:?}",
        params.window.resolution[0],
        params.window.resolution[1],
        graph_resolution[0],
        graph_resolution[1],
        params.function
    );

    let grid = PixelGrid::new(graph_resolution, params.function.build(), ErfColorMap);
    let mut session = ExplorerSession::new(grid, params.text_origin());

    // winit panics when no windowing backend is available; turn that into an error.
    let event_loop = std::panic::catch_unwind(EventLoop::new).map_err(|payload| {
        format!(
            "failed to initialize windowing backend: {}",
            panic_message(payload)
        )
    })?;

    let window = {
        let logical_size = LogicalSize::new(
            params.window.resolution[0] as f64,
            params.window.resolution[1] as f64,
        );
        WindowBuilder::new()
            .with_title(&params.title)
            .with_inner_size(logical_size)
            .with_min_inner_size(logical_size)
            .build(&event_loop)?
    };

    let pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(
            params.window.resolution[0],
            params.window.resolution[1],
            surface_texture,
        )?
    };

    let mut surface = WindowSurface {
        pixels,
        canvas: params.canvas(),
    };
    session.start(&mut surface)?;

    // GUI application main loop:
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        let interaction = match &event {
            Event::WindowEvent { event, window_id } if *window_id == window.id() => match event {
                WindowEvent::CloseRequested => Some(InteractionEvent::Quit),
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            ..
                        },
                    ..
                } => Some(InteractionEvent::Quit),
                WindowEvent::CursorMoved { position, .. } => {
                    let (x, y) = surface.pointer_to_pixel(position.x, position.y);
                    Some(InteractionEvent::PointerMove { x, y })
                }
                // A minimized window reports a zero size; there is nothing to present.
                WindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
                    if let Err(err) = surface.pixels.resize_surface(size.width, size.height) {
                        fatal_error("Failed to resize the window surface", &err);
                    }
                    Some(InteractionEvent::Resize {
                        width: size.width,
                        height: size.height,
                    })
                }
                _ => None,
            },
            Event::RedrawRequested(_) => {
                if let Err(err) = surface.pixels.render() {
                    fatal_error("Failed to render the window", &err);
                }
                None
            }
            _ => None,
        };

        if let Some(interaction) = interaction {
            match session.handle_event(interaction, &mut surface) {
                Ok(SessionState::Terminated) => *control_flow = ControlFlow::Exit,
                Ok(SessionState::Idle) => {}
                Err(err) => fatal_error("Failed to update the window", &err),
            }
        }
    });
}
