use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use hmi_geometry::Vec2i;
use smart_default::SmartDefault;

pub use sdl2;

pub mod error;
pub mod events;
pub mod window;

pub use error::{WindowError, WindowResult};
pub use window::{Window, WindowFlags};

pub struct SdlSettings {
    pub gl_profile: sdl2::video::GLProfile,
    /// Requested (major, minor) context version.
    pub gl_version: (u8, u8),
}

impl Default for SdlSettings {
    fn default() -> Self {
        Self {
            gl_profile: sdl2::video::GLProfile::GLES,
            gl_version: (2, 0),
        }
    }
}

#[derive(SmartDefault, Debug, Clone)]
pub struct WindowSettings {
    #[default("hmi".into())]
    pub title: String,
    #[default(Vec2i::new(1024, 576))]
    pub size: Vec2i,
    pub flags: WindowFlags,
}

/// Number of live windows, shared with the registrations that keep it up to
/// date.
#[derive(Debug, Default, Clone)]
pub(crate) struct WindowCounter(Rc<Cell<usize>>);

impl WindowCounter {
    pub fn get(&self) -> usize {
        self.0.get()
    }

    pub fn register(&self) -> WindowRegistration {
        self.0.set(self.0.get() + 1);
        WindowRegistration(self.0.clone())
    }
}

/// Counts one window for as long as it is alive.
#[derive(Debug)]
pub(crate) struct WindowRegistration(Rc<Cell<usize>>);

impl Drop for WindowRegistration {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

pub(crate) struct PlatformContext {
    pub sdl: sdl2::Sdl,
    pub video: sdl2::VideoSubsystem,
    pub event_pump: RefCell<sdl2::EventPump>,
    pub windows: WindowCounter,
}

thread_local! {
    // SDL can only be initialized once per process, windows opened without
    // an explicit platform share whichever one is alive.
    static CURRENT_PLATFORM: RefCell<Weak<PlatformContext>> = RefCell::new(Weak::new());
}

/// Returns the value `slot` still points to, or stores and returns a fresh
/// one from `init`.
fn upgrade_or_init<T, E>(
    slot: &RefCell<Weak<T>>,
    init: impl FnOnce() -> Result<Rc<T>, E>,
) -> Result<Rc<T>, E> {
    let live = slot.borrow().upgrade();
    if let Some(live) = live {
        return Ok(live);
    }

    let fresh = init()?;
    *slot.borrow_mut() = Rc::downgrade(&fresh);
    Ok(fresh)
}

/// An initialized SDL video subsystem and its event queue.
///
/// Every [`Window`] created from a platform keeps it alive, so SDL is shut
/// down only after the platform handle and the last window are dropped.
/// SDL handles are not `Send`, which keeps all of this on one thread.
#[derive(Clone)]
pub struct Platform(Rc<PlatformContext>);

impl Platform {
    /// Initializes SDL. Fails if a platform is already alive on this thread,
    /// see [`Platform::shared`].
    pub fn init(settings: SdlSettings) -> WindowResult<Self> {
        let context = Self::init_context(settings)?;
        CURRENT_PLATFORM.with(|slot| *slot.borrow_mut() = Rc::downgrade(&context));
        Ok(Self(context))
    }

    /// The platform alive on this thread, initialized with `settings` if
    /// there is none. `settings` are ignored when a platform is reused.
    pub fn shared(settings: SdlSettings) -> WindowResult<Self> {
        CURRENT_PLATFORM
            .with(|slot| upgrade_or_init(slot, || Self::init_context(settings)))
            .map(Self)
    }

    fn init_context(settings: SdlSettings) -> WindowResult<Rc<PlatformContext>> {
        let sdl = sdl2::init().map_err(|e| {
            log::error!("Unable to initialize SDL: {e}");
            WindowError::Init(e)
        })?;

        let video = sdl.video().map_err(|e| {
            log::error!("Unable to initialize the video subsystem: {e}");
            WindowError::Video(e)
        })?;

        // Must be set before any window is created.
        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(settings.gl_profile);
        gl_attr.set_context_version(settings.gl_version.0, settings.gl_version.1);

        let event_pump = sdl.event_pump().map_err(|e| {
            log::error!("Unable to get the event pump: {e}");
            WindowError::EventPump(e)
        })?;

        log::debug!(
            "SDL initialized, video driver: {}",
            video.current_video_driver()
        );

        Ok(Rc::new(PlatformContext {
            sdl,
            video,
            event_pump: RefCell::new(event_pump),
            windows: WindowCounter::default(),
        }))
    }

    pub fn create_window(&self, settings: &WindowSettings) -> WindowResult<Window> {
        Window::with_platform(self.0.clone(), settings)
    }

    /// Number of windows currently alive on this platform.
    pub fn window_count(&self) -> usize {
        self.0.windows.get()
    }

    pub fn sdl(&self) -> &sdl2::Sdl {
        &self.0.sdl
    }

    pub fn video(&self) -> &sdl2::VideoSubsystem {
        &self.0.video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_registration_counts() {
        let counter = WindowCounter::default();
        let first = counter.register();
        let second = counter.register();
        assert_eq!(counter.get(), 2);

        drop(first);
        assert_eq!(counter.get(), 1);
        drop(second);
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_registration_outlives_counter_handle() {
        let counter = WindowCounter::default();
        let registration = counter.register();
        let observer = counter.clone();

        drop(counter);
        assert_eq!(observer.get(), 1);
        drop(registration);
        assert_eq!(observer.get(), 0);
    }

    #[test]
    fn test_shared_slot_reuses_live_value() {
        let slot = RefCell::new(Weak::new());

        let first = upgrade_or_init(&slot, || Ok::<_, ()>(Rc::new(1))).unwrap();
        let second = upgrade_or_init(&slot, || Err(())).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(Rc::strong_count(&first), 2);
    }

    #[test]
    fn test_shared_slot_reinitializes_after_drop() {
        let slot = RefCell::new(Weak::new());

        let first = upgrade_or_init(&slot, || Ok::<_, ()>(Rc::new(1))).unwrap();
        drop(first);

        assert_eq!(upgrade_or_init(&slot, || Err("init failed")), Err("init failed"));
        let second = upgrade_or_init(&slot, || Ok::<_, ()>(Rc::new(2))).unwrap();
        assert_eq!(*second, 2);
    }
}
