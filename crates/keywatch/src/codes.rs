// Key code constants and the name <-> code table.
//
// Codes are the legacy integer keyCode values delivered by browser-style
// input surfaces. Any other u32 is still accepted wherever a code is
// expected; these are just the named ones.

// Editing and modifier keys.
pub const BACKSPACE: u32 = 8;
pub const TAB: u32 = 9;
pub const ENTER: u32 = 13;
pub const SHIFT: u32 = 16;
pub const CONTROL: u32 = 17;
pub const ALT: u32 = 18;
pub const PAUSE: u32 = 19;
pub const CAPS_LOCK: u32 = 20;
pub const ESCAPE: u32 = 27;
pub const SPACE: u32 = 32;

// Navigation keys.
pub const PAGE_UP: u32 = 33;
pub const PAGE_DOWN: u32 = 34;
pub const END: u32 = 35;
pub const HOME: u32 = 36;
pub const LEFT: u32 = 37;
pub const UP: u32 = 38;
pub const RIGHT: u32 = 39;
pub const DOWN: u32 = 40;
pub const INSERT: u32 = 45;
pub const DELETE: u32 = 46;

// Digit row 0-9.
pub const DIGIT_0: u32 = 48;
pub const DIGIT_1: u32 = 49;
pub const DIGIT_2: u32 = 50;
pub const DIGIT_3: u32 = 51;
pub const DIGIT_4: u32 = 52;
pub const DIGIT_5: u32 = 53;
pub const DIGIT_6: u32 = 54;
pub const DIGIT_7: u32 = 55;
pub const DIGIT_8: u32 = 56;
pub const DIGIT_9: u32 = 57;

// Letters A-Z.
pub const A: u32 = 65;
pub const B: u32 = 66;
pub const C: u32 = 67;
pub const D: u32 = 68;
pub const E: u32 = 69;
pub const F: u32 = 70;
pub const G: u32 = 71;
pub const H: u32 = 72;
pub const I: u32 = 73;
pub const J: u32 = 74;
pub const K: u32 = 75;
pub const L: u32 = 76;
pub const M: u32 = 77;
pub const N: u32 = 78;
pub const O: u32 = 79;
pub const P: u32 = 80;
pub const Q: u32 = 81;
pub const R: u32 = 82;
pub const S: u32 = 83;
pub const T: u32 = 84;
pub const U: u32 = 85;
pub const V: u32 = 86;
pub const W: u32 = 87;
pub const X: u32 = 88;
pub const Y: u32 = 89;
pub const Z: u32 = 90;

// Numpad.
pub const NUMPAD_0: u32 = 96;
pub const NUMPAD_1: u32 = 97;
pub const NUMPAD_2: u32 = 98;
pub const NUMPAD_3: u32 = 99;
pub const NUMPAD_4: u32 = 100;
pub const NUMPAD_5: u32 = 101;
pub const NUMPAD_6: u32 = 102;
pub const NUMPAD_7: u32 = 103;
pub const NUMPAD_8: u32 = 104;
pub const NUMPAD_9: u32 = 105;
pub const NUMPAD_MULTIPLY: u32 = 106;
pub const NUMPAD_ADD: u32 = 107;
pub const NUMPAD_SUBTRACT: u32 = 109;
pub const NUMPAD_DECIMAL: u32 = 110;
pub const NUMPAD_DIVIDE: u32 = 111;

// Function keys F1-F12.
pub const F1: u32 = 112;
pub const F2: u32 = 113;
pub const F3: u32 = 114;
pub const F4: u32 = 115;
pub const F5: u32 = 116;
pub const F6: u32 = 117;
pub const F7: u32 = 118;
pub const F8: u32 = 119;
pub const F9: u32 = 120;
pub const F10: u32 = 121;
pub const F11: u32 = 122;
pub const F12: u32 = 123;

// Lock keys.
pub const NUM_LOCK: u32 = 144;
pub const SCROLL_LOCK: u32 = 145;

// Punctuation and symbols.
pub const SEMICOLON: u32 = 186;
pub const EQUAL: u32 = 187;
pub const COMMA: u32 = 188;
pub const MINUS: u32 = 189;
pub const PERIOD: u32 = 190;
pub const SLASH: u32 = 191;
pub const BACKQUOTE: u32 = 192;
pub const BRACKET_LEFT: u32 = 219;
pub const BACKSLASH: u32 = 220;
pub const BRACKET_RIGHT: u32 = 221;
pub const QUOTE: u32 = 222;

/// Read-only table of (semantic key name, key code) pairs.
pub const KEY_TABLE: &[(&str, u32)] = &[
    ("Backspace", BACKSPACE),
    ("Tab", TAB),
    ("Enter", ENTER),
    ("Shift", SHIFT),
    ("Control", CONTROL),
    ("Alt", ALT),
    ("Pause", PAUSE),
    ("CapsLock", CAPS_LOCK),
    ("Escape", ESCAPE),
    ("Space", SPACE),
    ("PageUp", PAGE_UP),
    ("PageDown", PAGE_DOWN),
    ("End", END),
    ("Home", HOME),
    ("Left", LEFT),
    ("Up", UP),
    ("Right", RIGHT),
    ("Down", DOWN),
    ("Insert", INSERT),
    ("Delete", DELETE),
    ("0", DIGIT_0),
    ("1", DIGIT_1),
    ("2", DIGIT_2),
    ("3", DIGIT_3),
    ("4", DIGIT_4),
    ("5", DIGIT_5),
    ("6", DIGIT_6),
    ("7", DIGIT_7),
    ("8", DIGIT_8),
    ("9", DIGIT_9),
    ("A", A),
    ("B", B),
    ("C", C),
    ("D", D),
    ("E", E),
    ("F", F),
    ("G", G),
    ("H", H),
    ("I", I),
    ("J", J),
    ("K", K),
    ("L", L),
    ("M", M),
    ("N", N),
    ("O", O),
    ("P", P),
    ("Q", Q),
    ("R", R),
    ("S", S),
    ("T", T),
    ("U", U),
    ("V", V),
    ("W", W),
    ("X", X),
    ("Y", Y),
    ("Z", Z),
    ("Numpad0", NUMPAD_0),
    ("Numpad1", NUMPAD_1),
    ("Numpad2", NUMPAD_2),
    ("Numpad3", NUMPAD_3),
    ("Numpad4", NUMPAD_4),
    ("Numpad5", NUMPAD_5),
    ("Numpad6", NUMPAD_6),
    ("Numpad7", NUMPAD_7),
    ("Numpad8", NUMPAD_8),
    ("Numpad9", NUMPAD_9),
    ("NumpadMultiply", NUMPAD_MULTIPLY),
    ("NumpadAdd", NUMPAD_ADD),
    ("NumpadSubtract", NUMPAD_SUBTRACT),
    ("NumpadDecimal", NUMPAD_DECIMAL),
    ("NumpadDivide", NUMPAD_DIVIDE),
    ("F1", F1),
    ("F2", F2),
    ("F3", F3),
    ("F4", F4),
    ("F5", F5),
    ("F6", F6),
    ("F7", F7),
    ("F8", F8),
    ("F9", F9),
    ("F10", F10),
    ("F11", F11),
    ("F12", F12),
    ("NumLock", NUM_LOCK),
    ("ScrollLock", SCROLL_LOCK),
    ("Semicolon", SEMICOLON),
    ("Equal", EQUAL),
    ("Comma", COMMA),
    ("Minus", MINUS),
    ("Period", PERIOD),
    ("Slash", SLASH),
    ("Backquote", BACKQUOTE),
    ("BracketLeft", BRACKET_LEFT),
    ("Backslash", BACKSLASH),
    ("BracketRight", BRACKET_RIGHT),
    ("Quote", QUOTE),
];

/// Key code for a semantic key name. Case-sensitive.
pub fn code_for(name: &str) -> Option<u32> {
    KEY_TABLE
        .iter()
        .find(|(entry_name, _)| *entry_name == name)
        .map(|&(_, code)| code)
}

/// Semantic name for a key code.
pub fn name_for(code: u32) -> Option<&'static str> {
    KEY_TABLE
        .iter()
        .find(|&&(_, entry_code)| entry_code == code)
        .map(|&(name, _)| name)
}
