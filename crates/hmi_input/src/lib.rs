use hmi_geometry::Vec2i;

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, KeyboardEvent, KeyboardModifiers, ScanCode};
pub use mouse::{MouseButton, MouseButtonEvent};

/// Everything a window can report to the application.
///
/// Positions and sizes are in window pixels, origin top-left, Y down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    Resized { size: Vec2i },
    Closed,
    FocusGained,
    FocusLost,
    KeyPressed(KeyboardEvent),
    /// The key is held down and the platform generated a repeat.
    KeyRepeated(KeyboardEvent),
    KeyReleased(KeyboardEvent),
    MouseButtonPressed(MouseButtonEvent),
    MouseButtonReleased(MouseButtonEvent),
    MouseMoved { position: Vec2i },
    /// Wheel offset; positive Y scrolls away from the user.
    MouseWheelScrolled { offset: Vec2i },
    MouseEntered,
    MouseLeft,
}
