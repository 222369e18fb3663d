use std::rc::Rc;

use bitflags::bitflags;
use hmi_geometry::Vec2i;
use hmi_input::WindowEvent;
use sdl2::{
    sys::{SDL_WindowFlags, SDL_bool},
    video::{FullscreenType, WindowPos},
};

use crate::{
    events::translate_event, Platform, PlatformContext, SdlSettings, WindowError,
    WindowRegistration, WindowResult, WindowSettings,
};

/// Passed to SDL as -1, which waits without a timeout. `wait_event` returning
/// nothing therefore always means the host failed.
const WAIT_TIMEOUT_MS: u32 = u32::MAX;

bitflags! {
    /// Window hints used at creation, and the state reported by
    /// [`Window::flags`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u8 {
        const RESIZABLE = 0b0001;
        const VISIBLE = 0b0010;
        const DECORATED = 0b0100;
        const FULLSCREEN = 0b1000;
    }
}

impl Default for WindowFlags {
    fn default() -> Self {
        Self::RESIZABLE | Self::VISIBLE | Self::DECORATED
    }
}

fn has_flag(flags: u32, flag: SDL_WindowFlags) -> bool {
    flags & flag as u32 != 0
}

impl WindowFlags {
    fn from_sdl(flags: u32) -> Self {
        let mut result = Self::empty();
        result.set(
            Self::RESIZABLE,
            has_flag(flags, SDL_WindowFlags::SDL_WINDOW_RESIZABLE),
        );
        result.set(
            Self::VISIBLE,
            has_flag(flags, SDL_WindowFlags::SDL_WINDOW_SHOWN),
        );
        result.set(
            Self::DECORATED,
            !has_flag(flags, SDL_WindowFlags::SDL_WINDOW_BORDERLESS),
        );
        result.set(
            Self::FULLSCREEN,
            has_flag(flags, SDL_WindowFlags::SDL_WINDOW_FULLSCREEN),
        );
        result
    }
}

fn sdl_bool(value: bool) -> SDL_bool {
    if value {
        SDL_bool::SDL_TRUE
    } else {
        SDL_bool::SDL_FALSE
    }
}

fn to_vec2i((x, y): (u32, u32)) -> Vec2i {
    Vec2i::new(x as i32, y as i32)
}

/// An SDL window with an OpenGL surface.
///
/// Closing is cooperative: [`Window::close`] only marks the window so that
/// [`Window::is_open`] turns false, the native window lives until drop.
pub struct Window {
    // Drop order: the native window, its registration, then the platform.
    window: sdl2::video::Window,
    _registration: WindowRegistration,
    platform: Rc<PlatformContext>,
    should_close: bool,
}

impl Window {
    /// Opens a window on the platform alive on this thread, initializing one
    /// with default settings if needed.
    pub fn new(title: &str, size: Vec2i, flags: WindowFlags) -> WindowResult<Self> {
        let platform = Platform::shared(SdlSettings::default())?;
        platform.create_window(&WindowSettings {
            title: title.into(),
            size,
            flags,
        })
    }

    pub(crate) fn with_platform(
        platform: Rc<PlatformContext>,
        settings: &WindowSettings,
    ) -> WindowResult<Self> {
        let (width, height) = (
            settings.size.width().max(0) as u32,
            settings.size.height().max(0) as u32,
        );

        let mut builder = platform.video.window(&settings.title, width, height);
        builder.position_centered().opengl().allow_highdpi();

        if settings.flags.contains(WindowFlags::RESIZABLE) {
            builder.resizable();
        }
        if !settings.flags.contains(WindowFlags::VISIBLE) {
            builder.hidden();
        }
        if !settings.flags.contains(WindowFlags::DECORATED) {
            builder.borderless();
        }
        if settings.flags.contains(WindowFlags::FULLSCREEN) {
            builder.fullscreen_desktop();
        }

        let window = builder.build().map_err(|e| {
            log::error!("Unable to create window: {e}");
            WindowError::from(e)
        })?;

        let registration = platform.windows.register();
        log::debug!(
            "Opened window {} \"{}\" ({}x{})",
            window.id(),
            settings.title,
            width,
            height
        );

        Ok(Self {
            window,
            _registration: registration,
            platform,
            should_close: false,
        })
    }

    // lifetime

    pub fn is_open(&self) -> bool {
        !self.should_close
    }

    pub fn close(&mut self) {
        self.should_close = true;
    }

    // properties

    pub fn id(&self) -> u32 {
        self.window.id()
    }

    pub fn title(&self) -> &str {
        self.window.title()
    }

    pub fn set_title(&mut self, title: &str) -> WindowResult<()> {
        Ok(self.window.set_title(title)?)
    }

    pub fn position(&self) -> Vec2i {
        let (x, y) = self.window.position();
        Vec2i::new(x, y)
    }

    pub fn set_position(&mut self, position: Vec2i) {
        self.window.set_position(
            WindowPos::Positioned(position.x()),
            WindowPos::Positioned(position.y()),
        );
    }

    /// Logical window size, which may differ from [`Window::drawable_size`]
    /// on scaled displays.
    pub fn size(&self) -> Vec2i {
        to_vec2i(self.window.size())
    }

    pub fn set_size(&mut self, size: Vec2i) -> WindowResult<()> {
        self.window
            .set_size(size.width().max(0) as u32, size.height().max(0) as u32)
            .map_err(|e| WindowError::Sdl(e.to_string()))
    }

    /// Size of the renderable surface in pixels.
    pub fn drawable_size(&self) -> Vec2i {
        to_vec2i(self.window.drawable_size())
    }

    pub fn flags(&self) -> WindowFlags {
        WindowFlags::from_sdl(self.window.window_flags())
    }

    pub fn set_resizable(&mut self, resizable: bool) {
        // SAFETY: the raw handle is valid for as long as `self.window` lives.
        unsafe { sdl2::sys::SDL_SetWindowResizable(self.window.raw(), sdl_bool(resizable)) };
    }

    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.window.show();
        } else {
            self.window.hide();
        }
    }

    pub fn set_decorated(&mut self, decorated: bool) {
        self.window.set_bordered(decorated);
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) -> WindowResult<()> {
        let mode = match fullscreen {
            true => FullscreenType::Desktop,
            false => FullscreenType::Off,
        };

        self.window.set_fullscreen(mode).map_err(WindowError::Sdl)
    }

    // state

    pub fn is_minimized(&self) -> bool {
        has_flag(
            self.window.window_flags(),
            SDL_WindowFlags::SDL_WINDOW_MINIMIZED,
        )
    }

    pub fn minimize(&mut self) {
        self.window.minimize();
    }

    pub fn is_maximized(&self) -> bool {
        has_flag(
            self.window.window_flags(),
            SDL_WindowFlags::SDL_WINDOW_MAXIMIZED,
        )
    }

    pub fn maximize(&mut self) {
        self.window.maximize();
    }

    pub fn restore(&mut self) {
        self.window.restore();
    }

    // events

    /// Returns the next pending event for this window without blocking.
    ///
    /// Native events that do not translate (other windows, touch-emulated
    /// mouse input, unsupported kinds) are consumed and skipped.
    pub fn poll_event(&mut self) -> Option<WindowEvent> {
        let window_id = self.window.id();
        let mut event_pump = self.platform.event_pump.borrow_mut();

        while let Some(event) = event_pump.poll_event() {
            if let Some(event) = translate_event(window_id, &event) {
                return Some(event);
            }
        }

        None
    }

    /// Blocks until an event for this window arrives. Returns `None` only if
    /// the host fails to wait.
    pub fn wait_event(&mut self) -> Option<WindowEvent> {
        let window_id = self.window.id();
        let mut event_pump = self.platform.event_pump.borrow_mut();

        loop {
            let Some(event) = event_pump.wait_event_timeout(WAIT_TIMEOUT_MS) else {
                log::warn!("Waiting for an event failed: {}", sdl2::get_error());
                return None;
            };

            if let Some(event) = translate_event(window_id, &event) {
                return Some(event);
            }
        }
    }

    /// Drains the pending events, see [`Window::poll_event`].
    pub fn events(&mut self) -> impl Iterator<Item = WindowEvent> + '_ {
        std::iter::from_fn(move || self.poll_event())
    }

    /// The platform this window was opened on.
    pub fn platform(&self) -> Platform {
        Platform(self.platform.clone())
    }

    /// The underlying SDL window, for graphics backends.
    pub fn sdl_window(&self) -> &sdl2::video::Window {
        &self.window
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        log::debug!(
            "Closed window {}, {} left open",
            self.window.id(),
            self.platform.windows.get().saturating_sub(1)
        );
    }
}
