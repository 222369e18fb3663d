use std::ffi::c_void;

use hmi_graphics::{
    GraphicsError, GraphicsResult, Renderer, RendererSettings, Vec2i, WindowBackend,
};
use hmi_sdl::{
    sdl2::{self, video::SwapInterval},
    Window,
};
use smart_default::SmartDefault;

/// Presents through an SDL window and its GL context.
pub struct SdlWindowBackend {
    // Dropped before the window it was created for.
    context: sdl2::video::GLContext,
    window: sdl2::video::Window,
}

impl SdlWindowBackend {
    pub fn new(window: sdl2::video::Window, vsync: bool) -> GraphicsResult<Self> {
        let context = window.gl_create_context().map_err(|e| {
            log::error!("Unable to create GL context: {e}");
            GraphicsError::Context(e)
        })?;

        window.gl_make_current(&context).map_err(|e| {
            log::error!("Unable to make GL context current: {e}");
            GraphicsError::Context(e)
        })?;

        let interval = match vsync {
            true => SwapInterval::VSync,
            false => SwapInterval::Immediate,
        };
        if let Err(e) = window.subsystem().gl_set_swap_interval(interval) {
            log::warn!("Unable to set swap interval: {e}");
        }

        Ok(Self {
            context,
            window,
        })
    }
}

impl WindowBackend for SdlWindowBackend {
    fn swap_buffers(&self) {
        self.window.gl_swap_window();
    }

    fn make_current(&self) {
        if self.context.is_current() {
            return;
        }

        if let Err(e) = self.window.gl_make_current(&self.context) {
            log::error!("Unable to make GL context current: {e}");
        }
    }

    fn get_proc_address(&self, symbol: &str) -> *const c_void {
        self.window.subsystem().gl_get_proc_address(symbol) as *const c_void
    }

    fn drawable_size(&self) -> Vec2i {
        let (width, height) = self.window.drawable_size();
        Vec2i::new(width as i32, height as i32)
    }
}

#[derive(SmartDefault, Debug, Clone)]
pub struct SdlGraphicsSettings {
    #[default(true)]
    pub vsync: bool,
    pub renderer: RendererSettings,
}

pub type SdlRenderer = Renderer<SdlWindowBackend>;

/// Renderer construction for SDL windows.
pub trait WindowRendererExt {
    fn renderer(&self) -> GraphicsResult<SdlRenderer> {
        self.renderer_with_settings(SdlGraphicsSettings::default())
    }

    fn renderer_with_settings(&self, settings: SdlGraphicsSettings) -> GraphicsResult<SdlRenderer>;
}

impl WindowRendererExt for Window {
    fn renderer_with_settings(&self, settings: SdlGraphicsSettings) -> GraphicsResult<SdlRenderer> {
        let window = unsafe { sdl2::video::Window::from_ref(self.sdl_window().context()) };
        let backend = SdlWindowBackend::new(window, settings.vsync)?;
        Renderer::new(backend, settings.renderer)
    }
}
