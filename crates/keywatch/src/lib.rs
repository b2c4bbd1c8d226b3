// Keyboard listener registry: per-key pressed state, press/release callback
// dispatch, and the key-name/key-code constant table.

pub mod codes;
pub mod event;
pub mod registry;
pub mod surface;

pub use event::{KeyEvent, KeyEventKind};
pub use registry::{KeyCallback, KeyInputRegistry};
pub use surface::{HandlerId, HandlerTable, InputSurface, SurfaceHandler, VirtualSurface};
