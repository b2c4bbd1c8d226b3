// winit backend for keywatch.
//
// Translates winit keyboard events into key-table codes and feeds them to
// handlers attached through the InputSurface contract.

pub mod map;

use anyhow::Result;
use keywatch::{HandlerId, HandlerTable, InputSurface, KeyEvent, KeyEventKind, SurfaceHandler};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input surface fed from a winit event loop.
///
/// The owner forwards `WindowEvent::KeyboardInput` payloads to
/// [`WinitSurface::dispatch`]; attached handlers receive the translated
/// press/release events. OS key-repeat presses are forwarded unchanged;
/// the registry's state model suppresses them.
pub struct WinitSurface {
    handlers: HandlerTable,
}

impl WinitSurface {
    pub fn new() -> Self {
        Self {
            handlers: HandlerTable::new(),
        }
    }

    /// Feed one winit keyboard event.
    ///
    /// Returns `true` when the key mapped to a table code and was
    /// delivered. Unidentified physical keys and unmapped codes are
    /// dropped.
    pub fn dispatch(&self, event: &winit::event::KeyEvent) -> bool {
        let PhysicalKey::Code(key) = event.physical_key else {
            return false;
        };
        self.deliver(key, event.state)
    }

    /// Deliver a bare key/state pair (what [`WinitSurface::dispatch`]
    /// extracts from a full winit event).
    pub fn deliver(&self, key: KeyCode, state: ElementState) -> bool {
        let Some(code) = map::keycode(key) else {
            return false;
        };
        let kind = match state {
            ElementState::Pressed => KeyEventKind::Press,
            ElementState::Released => KeyEventKind::Release,
        };
        self.handlers.emit(kind, KeyEvent::new(code));
        true
    }

    /// Number of handlers attached for `kind`.
    pub fn attached(&self, kind: KeyEventKind) -> usize {
        self.handlers.attached(kind)
    }
}

impl Default for WinitSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSurface for WinitSurface {
    fn attach(&self, kind: KeyEventKind, handler: SurfaceHandler) -> Result<HandlerId> {
        Ok(self.handlers.attach(kind, handler))
    }

    fn detach(&self, kind: KeyEventKind, id: HandlerId) -> Result<()> {
        self.handlers.detach(kind, id)
    }
}
