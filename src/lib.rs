//! A small human-machine-interface toolkit: SDL windows, translated input
//! events and a GLES2 renderer for flat colored shapes in a movable view.
//!
//! ```no_run
//! use hmi::{color, Vec2f, Vec2i, Window, WindowEvent, WindowFlags, WindowRendererExt};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut window = Window::new("hmi", Vec2i::new(1024, 576), WindowFlags::default())?;
//! let renderer = window.renderer()?;
//!
//! while window.is_open() {
//!     while let Some(event) = window.poll_event() {
//!         if event == WindowEvent::Closed {
//!             window.close();
//!         }
//!     }
//!
//!     renderer.clear(color::BLACK);
//!     renderer.fill_circle(Vec2f::new(512., 288.), 100., color::AZURE);
//!     renderer.display();
//! }
//! # Ok(())
//! # }
//! ```

pub mod logging;

pub use hmi_geometry::*;
pub use hmi_graphics::{
    shapes, view, GraphicsError, GraphicsResult, PrimitiveMode, Renderer, RendererSettings,
    Vertex, View, WindowBackend,
};
pub use hmi_input::*;
pub use hmi_sdl::{
    sdl2, Platform, SdlSettings, Window, WindowError, WindowFlags, WindowResult, WindowSettings,
};
pub use hmi_sdl_graphics::{
    SdlGraphicsSettings, SdlRenderer, SdlWindowBackend, WindowRendererExt,
};
