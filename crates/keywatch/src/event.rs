// Key transition event types delivered by input surfaces.

use serde::{Deserialize, Serialize};

/// Kind of key transition a surface delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyEventKind {
    /// A key went from up to down.
    Press,
    /// A key went from down to up.
    Release,
}

/// Minimal payload for a key transition: the integer key code alone.
///
/// Codes are layout-independent; the named ones live in [`crate::codes`],
/// but any `u32` is a valid code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub code: u32,
}

impl KeyEvent {
    pub fn new(code: u32) -> Self {
        Self { code }
    }
}
