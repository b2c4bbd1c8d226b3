// winit KeyCode -> key-table code mapping.
//
// Collapses left/right modifier variants onto the single table codes,
// matching what browser-style surfaces report.

use keywatch::codes;
use winit::keyboard::KeyCode;

/// Map a winit physical key to a key-table code.
///
/// Returns `None` for keys outside the table.
pub fn keycode(key: KeyCode) -> Option<u32> {
    Some(match key {
        // Letters A-Z
        KeyCode::KeyA => codes::A,
        KeyCode::KeyB => codes::B,
        KeyCode::KeyC => codes::C,
        KeyCode::KeyD => codes::D,
        KeyCode::KeyE => codes::E,
        KeyCode::KeyF => codes::F,
        KeyCode::KeyG => codes::G,
        KeyCode::KeyH => codes::H,
        KeyCode::KeyI => codes::I,
        KeyCode::KeyJ => codes::J,
        KeyCode::KeyK => codes::K,
        KeyCode::KeyL => codes::L,
        KeyCode::KeyM => codes::M,
        KeyCode::KeyN => codes::N,
        KeyCode::KeyO => codes::O,
        KeyCode::KeyP => codes::P,
        KeyCode::KeyQ => codes::Q,
        KeyCode::KeyR => codes::R,
        KeyCode::KeyS => codes::S,
        KeyCode::KeyT => codes::T,
        KeyCode::KeyU => codes::U,
        KeyCode::KeyV => codes::V,
        KeyCode::KeyW => codes::W,
        KeyCode::KeyX => codes::X,
        KeyCode::KeyY => codes::Y,
        KeyCode::KeyZ => codes::Z,

        // Digit row
        KeyCode::Digit0 => codes::DIGIT_0,
        KeyCode::Digit1 => codes::DIGIT_1,
        KeyCode::Digit2 => codes::DIGIT_2,
        KeyCode::Digit3 => codes::DIGIT_3,
        KeyCode::Digit4 => codes::DIGIT_4,
        KeyCode::Digit5 => codes::DIGIT_5,
        KeyCode::Digit6 => codes::DIGIT_6,
        KeyCode::Digit7 => codes::DIGIT_7,
        KeyCode::Digit8 => codes::DIGIT_8,
        KeyCode::Digit9 => codes::DIGIT_9,

        // Function keys
        KeyCode::F1 => codes::F1,
        KeyCode::F2 => codes::F2,
        KeyCode::F3 => codes::F3,
        KeyCode::F4 => codes::F4,
        KeyCode::F5 => codes::F5,
        KeyCode::F6 => codes::F6,
        KeyCode::F7 => codes::F7,
        KeyCode::F8 => codes::F8,
        KeyCode::F9 => codes::F9,
        KeyCode::F10 => codes::F10,
        KeyCode::F11 => codes::F11,
        KeyCode::F12 => codes::F12,

        // Editing and modifiers. Left/right variants share one code.
        KeyCode::Backspace => codes::BACKSPACE,
        KeyCode::Tab => codes::TAB,
        KeyCode::Enter => codes::ENTER,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => codes::SHIFT,
        KeyCode::ControlLeft | KeyCode::ControlRight => codes::CONTROL,
        KeyCode::AltLeft | KeyCode::AltRight => codes::ALT,
        KeyCode::Pause => codes::PAUSE,
        KeyCode::CapsLock => codes::CAPS_LOCK,
        KeyCode::Escape => codes::ESCAPE,
        KeyCode::Space => codes::SPACE,

        // Navigation
        KeyCode::PageUp => codes::PAGE_UP,
        KeyCode::PageDown => codes::PAGE_DOWN,
        KeyCode::End => codes::END,
        KeyCode::Home => codes::HOME,
        KeyCode::ArrowLeft => codes::LEFT,
        KeyCode::ArrowUp => codes::UP,
        KeyCode::ArrowRight => codes::RIGHT,
        KeyCode::ArrowDown => codes::DOWN,
        KeyCode::Insert => codes::INSERT,
        KeyCode::Delete => codes::DELETE,

        // Numpad
        KeyCode::Numpad0 => codes::NUMPAD_0,
        KeyCode::Numpad1 => codes::NUMPAD_1,
        KeyCode::Numpad2 => codes::NUMPAD_2,
        KeyCode::Numpad3 => codes::NUMPAD_3,
        KeyCode::Numpad4 => codes::NUMPAD_4,
        KeyCode::Numpad5 => codes::NUMPAD_5,
        KeyCode::Numpad6 => codes::NUMPAD_6,
        KeyCode::Numpad7 => codes::NUMPAD_7,
        KeyCode::Numpad8 => codes::NUMPAD_8,
        KeyCode::Numpad9 => codes::NUMPAD_9,
        KeyCode::NumpadMultiply => codes::NUMPAD_MULTIPLY,
        KeyCode::NumpadAdd => codes::NUMPAD_ADD,
        KeyCode::NumpadSubtract => codes::NUMPAD_SUBTRACT,
        KeyCode::NumpadDecimal => codes::NUMPAD_DECIMAL,
        KeyCode::NumpadDivide => codes::NUMPAD_DIVIDE,

        // Locks
        KeyCode::NumLock => codes::NUM_LOCK,
        KeyCode::ScrollLock => codes::SCROLL_LOCK,

        // Punctuation and symbols
        KeyCode::Semicolon => codes::SEMICOLON,
        KeyCode::Equal => codes::EQUAL,
        KeyCode::Comma => codes::COMMA,
        KeyCode::Minus => codes::MINUS,
        KeyCode::Period => codes::PERIOD,
        KeyCode::Slash => codes::SLASH,
        KeyCode::Backquote => codes::BACKQUOTE,
        KeyCode::BracketLeft => codes::BRACKET_LEFT,
        KeyCode::Backslash => codes::BACKSLASH,
        KeyCode::BracketRight => codes::BRACKET_RIGHT,
        KeyCode::Quote => codes::QUOTE,

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_mapping_letters() {
        assert_eq!(keycode(KeyCode::KeyA), Some(65));
        assert_eq!(keycode(KeyCode::KeyZ), Some(90));
    }

    #[test]
    fn key_mapping_digits() {
        assert_eq!(keycode(KeyCode::Digit0), Some(48));
        assert_eq!(keycode(KeyCode::Digit9), Some(57));
    }

    #[test]
    fn key_mapping_f_keys() {
        assert_eq!(keycode(KeyCode::F1), Some(112));
        assert_eq!(keycode(KeyCode::F12), Some(123));
    }

    #[test]
    fn key_mapping_special() {
        assert_eq!(keycode(KeyCode::Space), Some(32));
        assert_eq!(keycode(KeyCode::Enter), Some(13));
        assert_eq!(keycode(KeyCode::Escape), Some(27));
    }

    #[test]
    fn modifier_sides_collapse() {
        assert_eq!(keycode(KeyCode::ShiftLeft), keycode(KeyCode::ShiftRight));
        assert_eq!(
            keycode(KeyCode::ControlLeft),
            keycode(KeyCode::ControlRight)
        );
        assert_eq!(keycode(KeyCode::AltLeft), keycode(KeyCode::AltRight));
    }

    #[test]
    fn unmapped_keys_are_none() {
        assert_eq!(keycode(KeyCode::F24), None);
        assert_eq!(keycode(KeyCode::ContextMenu), None);
    }

    #[test]
    fn mapped_codes_resolve_in_the_table() {
        for key in [
            KeyCode::KeyA,
            KeyCode::Digit5,
            KeyCode::F7,
            KeyCode::Numpad3,
            KeyCode::Quote,
            KeyCode::ArrowLeft,
        ] {
            let code = keycode(key).unwrap();
            assert!(codes::name_for(code).is_some(), "no name for {key:?}");
        }
    }
}
