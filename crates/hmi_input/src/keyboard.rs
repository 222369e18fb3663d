use bitflags::bitflags;
use derive_more::{Deref, From};

/// A layout-dependent key code, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deref, From)]
pub struct KeyCode(pub i32);

impl KeyCode {
    pub const UNKNOWN: Self = Self(0);
}

/// A physical key position, independent of the keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deref, From)]
pub struct ScanCode(pub i32);

impl ScanCode {
    pub const UNKNOWN: Self = Self(0);
}

bitflags! {
    /// Modifier keys held during a keyboard event. Left and right variants
    /// of a modifier are not distinguished.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyboardModifiers: u8 {
        const ALT = 0b0001;
        const CONTROL = 0b0010;
        const SHIFT = 0b0100;
        const SUPER = 0b1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyboardEvent {
    pub keycode: KeyCode,
    pub scancode: ScanCode,
    pub modifiers: KeyboardModifiers,
}
