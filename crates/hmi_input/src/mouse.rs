use hmi_geometry::Vec2i;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    X1,
    X2,
    /// Any button the platform reports that is not one of the above.
    Other,
}

/// A mouse button press or release, with the cursor position in window
/// pixels (origin top-left, Y down) at the moment it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    pub position: Vec2i,
}
