use hmi_geometry::Vec2i;
use hmi_input::{
    KeyCode, KeyboardEvent, KeyboardModifiers, MouseButton, MouseButtonEvent, ScanCode,
    WindowEvent,
};
use sdl2::{
    event::{Event as SdlEvent, WindowEvent as SdlWindowEvent},
    keyboard::{Keycode, Mod, Scancode},
};

/// Mouse id SDL uses for mouse events synthesized from touch input.
pub const TOUCH_MOUSE_ID: u32 = u32::MAX;

fn mouse_button(button: &sdl2::mouse::MouseButton) -> MouseButton {
    match button {
        sdl2::mouse::MouseButton::Left => MouseButton::Left,
        sdl2::mouse::MouseButton::Middle => MouseButton::Middle,
        sdl2::mouse::MouseButton::Right => MouseButton::Right,
        sdl2::mouse::MouseButton::X1 => MouseButton::X1,
        sdl2::mouse::MouseButton::X2 => MouseButton::X2,
        sdl2::mouse::MouseButton::Unknown => MouseButton::Other,
    }
}

fn keyboard_modifiers(keymod: Mod) -> KeyboardModifiers {
    let mut modifiers = KeyboardModifiers::empty();
    modifiers.set(
        KeyboardModifiers::SHIFT,
        keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD),
    );
    modifiers.set(
        KeyboardModifiers::CONTROL,
        keymod.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD),
    );
    modifiers.set(
        KeyboardModifiers::ALT,
        keymod.intersects(Mod::LALTMOD | Mod::RALTMOD),
    );
    modifiers.set(
        KeyboardModifiers::SUPER,
        keymod.intersects(Mod::LGUIMOD | Mod::RGUIMOD),
    );
    modifiers
}

fn keyboard_event(
    keycode: &Option<Keycode>,
    scancode: &Option<Scancode>,
    keymod: &Mod,
) -> KeyboardEvent {
    KeyboardEvent {
        keycode: keycode.map_or(KeyCode::UNKNOWN, |k| KeyCode(k as i32)),
        scancode: scancode.map_or(ScanCode::UNKNOWN, |s| ScanCode(s as i32)),
        modifiers: keyboard_modifiers(*keymod),
    }
}

/// Translates one native SDL event into a [`WindowEvent`] for the window
/// `window_id`.
///
/// Returns `None` for window events addressed to another window, for mouse
/// events synthesized from touch input, and for anything this library does
/// not model. `Quit` is reported to every window as [`WindowEvent::Closed`].
pub fn translate_event(window_id: u32, event: &SdlEvent) -> Option<WindowEvent> {
    let event = match event {
        SdlEvent::Window {
            window_id: id,
            win_event,
            ..
        } => {
            if *id != window_id {
                return None;
            }

            match win_event {
                SdlWindowEvent::SizeChanged(w, h) => WindowEvent::Resized {
                    size: Vec2i::new(*w, *h),
                },
                SdlWindowEvent::Close => WindowEvent::Closed,
                SdlWindowEvent::FocusGained => WindowEvent::FocusGained,
                SdlWindowEvent::FocusLost => WindowEvent::FocusLost,
                SdlWindowEvent::Enter => WindowEvent::MouseEntered,
                SdlWindowEvent::Leave => WindowEvent::MouseLeft,
                _ => return None,
            }
        }

        SdlEvent::Quit { .. } => WindowEvent::Closed,

        SdlEvent::KeyDown {
            keycode,
            scancode,
            keymod,
            repeat,
            ..
        } => {
            let data = keyboard_event(keycode, scancode, keymod);
            match repeat {
                false => WindowEvent::KeyPressed(data),
                true => WindowEvent::KeyRepeated(data),
            }
        }

        SdlEvent::KeyUp {
            keycode,
            scancode,
            keymod,
            ..
        } => WindowEvent::KeyReleased(keyboard_event(keycode, scancode, keymod)),

        SdlEvent::MouseWheel { which, x, y, .. } => {
            if *which == TOUCH_MOUSE_ID {
                return None;
            }

            WindowEvent::MouseWheelScrolled {
                offset: Vec2i::new(*x, *y),
            }
        }

        SdlEvent::MouseButtonDown {
            which,
            mouse_btn,
            x,
            y,
            ..
        } => {
            if *which == TOUCH_MOUSE_ID {
                return None;
            }

            WindowEvent::MouseButtonPressed(MouseButtonEvent {
                button: mouse_button(mouse_btn),
                position: Vec2i::new(*x, *y),
            })
        }

        SdlEvent::MouseButtonUp {
            which,
            mouse_btn,
            x,
            y,
            ..
        } => {
            if *which == TOUCH_MOUSE_ID {
                return None;
            }

            WindowEvent::MouseButtonReleased(MouseButtonEvent {
                button: mouse_button(mouse_btn),
                position: Vec2i::new(*x, *y),
            })
        }

        SdlEvent::MouseMotion { which, x, y, .. } => {
            if *which == TOUCH_MOUSE_ID {
                return None;
            }

            WindowEvent::MouseMoved {
                position: Vec2i::new(*x, *y),
            }
        }

        _ => return None,
    };

    Some(event)
}

#[cfg(test)]
mod tests {
    use sdl2::mouse::{MouseState, MouseWheelDirection};

    use super::*;

    const WINDOW: u32 = 1;

    fn window_event(window_id: u32, win_event: SdlWindowEvent) -> SdlEvent {
        SdlEvent::Window {
            timestamp: 0,
            window_id,
            win_event,
        }
    }

    fn key_down(keymod: Mod, repeat: bool) -> SdlEvent {
        SdlEvent::KeyDown {
            timestamp: 0,
            window_id: WINDOW,
            keycode: Some(Keycode::A),
            scancode: Some(Scancode::A),
            keymod,
            repeat,
        }
    }

    fn button_down(which: u32) -> SdlEvent {
        SdlEvent::MouseButtonDown {
            timestamp: 0,
            window_id: WINDOW,
            which,
            mouse_btn: sdl2::mouse::MouseButton::Left,
            clicks: 1,
            x: 10,
            y: 20,
        }
    }

    fn button_up(which: u32) -> SdlEvent {
        SdlEvent::MouseButtonUp {
            timestamp: 0,
            window_id: WINDOW,
            which,
            mouse_btn: sdl2::mouse::MouseButton::Right,
            clicks: 1,
            x: 5,
            y: 6,
        }
    }

    fn wheel(which: u32) -> SdlEvent {
        SdlEvent::MouseWheel {
            timestamp: 0,
            window_id: WINDOW,
            which,
            x: 0,
            y: -2,
            direction: MouseWheelDirection::Normal,
        }
    }

    fn motion(which: u32) -> SdlEvent {
        SdlEvent::MouseMotion {
            timestamp: 0,
            window_id: WINDOW,
            which,
            mousestate: MouseState::from_sdl_state(0),
            x: 3,
            y: 4,
            xrel: 1,
            yrel: 1,
        }
    }

    #[test]
    fn test_close_and_quit_translate_to_closed() {
        let close = window_event(WINDOW, SdlWindowEvent::Close);
        assert_eq!(translate_event(WINDOW, &close), Some(WindowEvent::Closed));

        let quit = SdlEvent::Quit { timestamp: 0 };
        assert_eq!(translate_event(WINDOW, &quit), Some(WindowEvent::Closed));
    }

    #[test]
    fn test_other_window_is_filtered() {
        let close = window_event(WINDOW + 1, SdlWindowEvent::Close);
        assert_eq!(translate_event(WINDOW, &close), None);

        let resized = window_event(WINDOW + 1, SdlWindowEvent::SizeChanged(10, 10));
        assert_eq!(translate_event(WINDOW, &resized), None);
    }

    #[test]
    fn test_window_sub_events() {
        let resized = window_event(WINDOW, SdlWindowEvent::SizeChanged(800, 600));
        assert_eq!(
            translate_event(WINDOW, &resized),
            Some(WindowEvent::Resized {
                size: Vec2i::new(800, 600)
            })
        );

        let enter = window_event(WINDOW, SdlWindowEvent::Enter);
        assert_eq!(
            translate_event(WINDOW, &enter),
            Some(WindowEvent::MouseEntered)
        );

        let leave = window_event(WINDOW, SdlWindowEvent::Leave);
        assert_eq!(translate_event(WINDOW, &leave), Some(WindowEvent::MouseLeft));

        let gained = window_event(WINDOW, SdlWindowEvent::FocusGained);
        assert_eq!(
            translate_event(WINDOW, &gained),
            Some(WindowEvent::FocusGained)
        );

        let lost = window_event(WINDOW, SdlWindowEvent::FocusLost);
        assert_eq!(translate_event(WINDOW, &lost), Some(WindowEvent::FocusLost));

        let exposed = window_event(WINDOW, SdlWindowEvent::Exposed);
        assert_eq!(translate_event(WINDOW, &exposed), None);
    }

    #[test]
    fn test_key_repeat_and_modifiers() {
        let Some(WindowEvent::KeyPressed(pressed)) =
            translate_event(WINDOW, &key_down(Mod::LSHIFTMOD | Mod::RCTRLMOD, false))
        else {
            panic!("expected a key press");
        };
        assert_eq!(pressed.keycode, KeyCode(Keycode::A as i32));
        assert_eq!(pressed.scancode, ScanCode(Scancode::A as i32));
        assert_eq!(
            pressed.modifiers,
            KeyboardModifiers::SHIFT | KeyboardModifiers::CONTROL
        );

        assert!(matches!(
            translate_event(WINDOW, &key_down(Mod::NOMOD, true)),
            Some(WindowEvent::KeyRepeated(KeyboardEvent { modifiers, .. })) if modifiers.is_empty()
        ));
    }

    #[test]
    fn test_key_release() {
        let key_up = SdlEvent::KeyUp {
            timestamp: 0,
            window_id: WINDOW,
            keycode: Some(Keycode::Space),
            scancode: None,
            keymod: Mod::LALTMOD,
            repeat: false,
        };

        assert_eq!(
            translate_event(WINDOW, &key_up),
            Some(WindowEvent::KeyReleased(KeyboardEvent {
                keycode: KeyCode(Keycode::Space as i32),
                scancode: ScanCode::UNKNOWN,
                modifiers: KeyboardModifiers::ALT,
            }))
        );
    }

    #[test]
    fn test_touch_mouse_is_filtered() {
        assert_eq!(translate_event(WINDOW, &button_down(TOUCH_MOUSE_ID)), None);
        assert_eq!(translate_event(WINDOW, &button_up(TOUCH_MOUSE_ID)), None);
        assert_eq!(translate_event(WINDOW, &wheel(TOUCH_MOUSE_ID)), None);
        assert_eq!(translate_event(WINDOW, &motion(TOUCH_MOUSE_ID)), None);
        assert_eq!(
            translate_event(WINDOW, &button_down(0)),
            Some(WindowEvent::MouseButtonPressed(MouseButtonEvent {
                button: MouseButton::Left,
                position: Vec2i::new(10, 20),
            }))
        );
    }

    #[test]
    fn test_mouse_button_release() {
        assert_eq!(
            translate_event(WINDOW, &button_up(0)),
            Some(WindowEvent::MouseButtonReleased(MouseButtonEvent {
                button: MouseButton::Right,
                position: Vec2i::new(5, 6),
            }))
        );
    }

    #[test]
    fn test_mouse_wheel() {
        assert_eq!(
            translate_event(WINDOW, &wheel(0)),
            Some(WindowEvent::MouseWheelScrolled {
                offset: Vec2i::new(0, -2)
            })
        );
    }

    #[test]
    fn test_mouse_motion() {
        assert_eq!(
            translate_event(WINDOW, &motion(0)),
            Some(WindowEvent::MouseMoved {
                position: Vec2i::new(3, 4)
            })
        );
    }
}
