use std::ffi::c_void;

pub use hmi_geometry::*;

mod constants;
pub mod error;
pub mod renderer;
pub mod shader;
pub mod shapes;
pub mod view;

pub use error::{GraphicsError, GraphicsResult};
pub use renderer::{Renderer, RendererSettings};
pub use shapes::{PrimitiveMode, Vertex};
pub use view::View;

/// What a renderer needs from the window it draws into.
pub trait WindowBackend
where
    Self: 'static,
{
    /// Called when a frame finishes rendering and should be displayed on
    /// screen.
    fn swap_buffers(&self);

    /// Binds the backend's GL context to the calling thread. Called before
    /// any GL work, since several windows may each own a context.
    fn make_current(&self);

    fn get_proc_address(&self, symbol: &str) -> *const c_void;

    /// Size of the default frame buffer in pixels. Queried on every draw so
    /// that resizes are picked up without notifying the renderer.
    fn drawable_size(&self) -> Vec2i;
}
