// Input surface contract and the in-memory surface.
//
// A surface is anything that can deliver key press/release events: a
// window, a widget, or a virtual surface driven by tests or scripted
// input.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, bail};

use crate::event::{KeyEvent, KeyEventKind};

/// Callback a surface invokes for each delivered key event.
pub type SurfaceHandler = Rc<dyn Fn(KeyEvent)>;

/// Identifies an attached handler for later detachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub u64);

/// Contract for an input-emitting surface.
///
/// Implementations keep one handler list per event kind and deliver each
/// press/release event to every handler attached for that kind, in
/// attachment order.
pub trait InputSurface {
    /// Attach a handler for `kind`. The returned id detaches it later.
    fn attach(&self, kind: KeyEventKind, handler: SurfaceHandler) -> Result<HandlerId>;

    /// Detach a previously attached handler.
    fn detach(&self, kind: KeyEventKind, id: HandlerId) -> Result<()>;
}

struct HandlerLists {
    next_id: u64,
    press: Vec<(HandlerId, SurfaceHandler)>,
    release: Vec<(HandlerId, SurfaceHandler)>,
}

impl HandlerLists {
    fn list(&self, kind: KeyEventKind) -> &Vec<(HandlerId, SurfaceHandler)> {
        match kind {
            KeyEventKind::Press => &self.press,
            KeyEventKind::Release => &self.release,
        }
    }

    fn list_mut(&mut self, kind: KeyEventKind) -> &mut Vec<(HandlerId, SurfaceHandler)> {
        match kind {
            KeyEventKind::Press => &mut self.press,
            KeyEventKind::Release => &mut self.release,
        }
    }
}

/// Handler bookkeeping shared by surface implementations.
///
/// `emit` snapshots the handler list before invoking anything, so a
/// handler that attaches or detaches on the same surface mid-event cannot
/// invalidate the iteration; such changes apply from the next event on.
pub struct HandlerTable {
    inner: RefCell<HandlerLists>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(HandlerLists {
                next_id: 1,
                press: Vec::new(),
                release: Vec::new(),
            }),
        }
    }

    /// Append a handler for `kind` and mint its id.
    pub fn attach(&self, kind: KeyEventKind, handler: SurfaceHandler) -> HandlerId {
        let mut lists = self.inner.borrow_mut();
        let id = HandlerId(lists.next_id);
        lists.next_id += 1;
        lists.list_mut(kind).push((id, handler));
        id
    }

    /// Remove the handler registered under `id`.
    pub fn detach(&self, kind: KeyEventKind, id: HandlerId) -> Result<()> {
        let mut lists = self.inner.borrow_mut();
        let list = lists.list_mut(kind);
        let before = list.len();
        list.retain(|(entry_id, _)| *entry_id != id);
        if list.len() == before {
            bail!("no {kind:?} handler attached under id {}", id.0);
        }
        Ok(())
    }

    /// Deliver `event` to every handler attached for `kind`.
    pub fn emit(&self, kind: KeyEventKind, event: KeyEvent) {
        let handlers: Vec<SurfaceHandler> = self
            .inner
            .borrow()
            .list(kind)
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(event);
        }
    }

    /// Number of handlers attached for `kind`.
    pub fn attached(&self, kind: KeyEventKind) -> usize {
        self.inner.borrow().list(kind).len()
    }
}

impl Default for HandlerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory input surface for tests and scripted input.
///
/// Events emitted through `emit_press` / `emit_release` reach attached
/// handlers synchronously, mirroring a host that serializes input
/// delivery.
pub struct VirtualSurface {
    handlers: HandlerTable,
}

impl VirtualSurface {
    pub fn new() -> Self {
        Self {
            handlers: HandlerTable::new(),
        }
    }

    /// Deliver a raw press event for `code`.
    pub fn emit_press(&self, code: u32) {
        self.handlers.emit(KeyEventKind::Press, KeyEvent::new(code));
    }

    /// Deliver a raw release event for `code`.
    pub fn emit_release(&self, code: u32) {
        self.handlers.emit(KeyEventKind::Release, KeyEvent::new(code));
    }

    /// Number of handlers attached for `kind`.
    pub fn attached(&self, kind: KeyEventKind) -> usize {
        self.handlers.attached(kind)
    }
}

impl Default for VirtualSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSurface for VirtualSurface {
    fn attach(&self, kind: KeyEventKind, handler: SurfaceHandler) -> Result<HandlerId> {
        Ok(self.handlers.attach(kind, handler))
    }

    fn detach(&self, kind: KeyEventKind, id: HandlerId) -> Result<()> {
        self.handlers.detach(kind, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recording_handler() -> (SurfaceHandler, Rc<RefCell<Vec<u32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handler_seen = seen.clone();
        let handler: SurfaceHandler = Rc::new(move |event: KeyEvent| {
            handler_seen.borrow_mut().push(event.code);
        });
        (handler, seen)
    }

    #[test]
    fn emit_reaches_attached_handlers() {
        let surface = VirtualSurface::new();
        let (handler, seen) = recording_handler();
        surface.attach(KeyEventKind::Press, handler).unwrap();

        surface.emit_press(65);
        surface.emit_press(66);
        assert_eq!(*seen.borrow(), vec![65, 66]);
    }

    #[test]
    fn kinds_are_routed_separately() {
        let surface = VirtualSurface::new();
        let (press_handler, presses) = recording_handler();
        let (release_handler, releases) = recording_handler();
        surface.attach(KeyEventKind::Press, press_handler).unwrap();
        surface
            .attach(KeyEventKind::Release, release_handler)
            .unwrap();

        surface.emit_press(10);
        surface.emit_release(20);

        assert_eq!(*presses.borrow(), vec![10]);
        assert_eq!(*releases.borrow(), vec![20]);
    }

    #[test]
    fn detached_handler_no_longer_called() {
        let surface = VirtualSurface::new();
        let (handler, seen) = recording_handler();
        let id = surface.attach(KeyEventKind::Press, handler).unwrap();

        surface.emit_press(1);
        surface.detach(KeyEventKind::Press, id).unwrap();
        surface.emit_press(2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(surface.attached(KeyEventKind::Press), 0);
    }

    #[test]
    fn detach_unknown_id_errors() {
        let surface = VirtualSurface::new();
        assert!(surface.detach(KeyEventKind::Press, HandlerId(42)).is_err());
    }

    #[test]
    fn detach_wrong_kind_errors() {
        let surface = VirtualSurface::new();
        let (handler, _) = recording_handler();
        let id = surface.attach(KeyEventKind::Press, handler).unwrap();
        assert!(surface.detach(KeyEventKind::Release, id).is_err());
        assert_eq!(surface.attached(KeyEventKind::Press), 1);
    }

    #[test]
    fn handler_attached_during_emit_runs_next_event() {
        let surface = Rc::new(VirtualSurface::new());
        let late_calls = Rc::new(Cell::new(0));

        let attach_surface = surface.clone();
        let attach_calls = late_calls.clone();
        let attacher: SurfaceHandler = Rc::new(move |_| {
            let calls = attach_calls.clone();
            attach_surface
                .attach(
                    KeyEventKind::Press,
                    Rc::new(move |_| calls.set(calls.get() + 1)),
                )
                .unwrap();
        });
        surface.attach(KeyEventKind::Press, attacher).unwrap();

        surface.emit_press(5);
        assert_eq!(late_calls.get(), 0);

        surface.emit_press(5);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let surface = VirtualSurface::new();
        let (first, _) = recording_handler();
        let (second, _) = recording_handler();
        let first_id = surface.attach(KeyEventKind::Press, first).unwrap();
        surface.detach(KeyEventKind::Press, first_id).unwrap();
        let second_id = surface.attach(KeyEventKind::Press, second).unwrap();
        assert_ne!(first_id, second_id);
    }
}
