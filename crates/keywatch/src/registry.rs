// Key listener registry.
//
// Tracks per-key pressed state for one bound input surface and invokes
// registered callbacks exactly once per genuine key transition. Repeated
// press events for a held key (OS key repeat) never re-dispatch.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;
use log::{error, warn};

use crate::codes;
use crate::event::{KeyEvent, KeyEventKind};
use crate::surface::{HandlerId, InputSurface, SurfaceHandler};

/// Zero-argument callback invoked on a matching key transition.
///
/// Callbacks are compared by pointer identity: keep a clone of the `Rc` to
/// remove the registration later.
pub type KeyCallback = Rc<dyn Fn()>;

/// A registered (key code, callback) pair awaiting a matching transition.
struct ListenerEntry {
    code: u32,
    callback: KeyCallback,
}

/// Handler ids held while subscribed to a surface.
struct Attachment {
    press: HandlerId,
    release: HandlerId,
}

struct RegistryState {
    /// Key code -> pressed flag. Missing entries read as released.
    keys: HashMap<u32, bool>,
    /// Listeners dispatched on press, in registration order.
    press_listeners: Vec<ListenerEntry>,
    /// Listeners dispatched on release, in registration order.
    release_listeners: Vec<ListenerEntry>,
    /// The currently bound input surface.
    surface: Rc<dyn InputSurface>,
    attachment: Option<Attachment>,
}

/// Tracks live key state for one input surface and dispatches registered
/// callbacks on key transitions.
///
/// The registry is a cheap handle: clones share the same state, so a
/// callback may hold a clone and register or remove listeners while a
/// dispatch is in flight. Dispatch snapshots the matching callbacks before
/// running any of them, so such changes take effect from the next event
/// onward.
///
/// Callback panics are not caught; they unwind through the surface that
/// delivered the event, and later listeners for that event do not run.
#[derive(Clone)]
pub struct KeyInputRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl KeyInputRegistry {
    /// Create a registry bound to `surface`.
    ///
    /// No handlers are attached until [`KeyInputRegistry::subscribe`] or
    /// [`KeyInputRegistry::bind_to`] is called.
    pub fn new(surface: Rc<dyn InputSurface>) -> Self {
        Self {
            state: Rc::new(RefCell::new(RegistryState {
                keys: HashMap::new(),
                press_listeners: Vec::new(),
                release_listeners: Vec::new(),
                surface,
                attachment: None,
            })),
        }
    }

    /// Attach the internal press/release handlers to the bound surface.
    ///
    /// A no-op when already subscribed. Surface attach errors propagate.
    pub fn subscribe(&self) -> Result<()> {
        if self.state.borrow().attachment.is_some() {
            return Ok(());
        }
        let surface = self.state.borrow().surface.clone();
        let attachment = attach_handlers(&surface, &self.state)?;
        self.state.borrow_mut().attachment = Some(attachment);
        Ok(())
    }

    /// Detach the internal handlers from the bound surface.
    ///
    /// Safe to call when not subscribed.
    pub fn unsubscribe(&self) -> Result<()> {
        let (surface, attachment) = {
            let mut state = self.state.borrow_mut();
            (state.surface.clone(), state.attachment.take())
        };
        let Some(attachment) = attachment else {
            return Ok(());
        };
        // Attempt both detachments even if the first fails.
        let press = surface.detach(KeyEventKind::Press, attachment.press);
        let release = surface.detach(KeyEventKind::Release, attachment.release);
        press.and(release)
    }

    /// Rebind the registry to a new surface.
    ///
    /// Handlers are attached to the new surface before the current binding
    /// is torn down, and the registry is left subscribed whether or not it
    /// was before. On failure the current binding (target and live
    /// subscription both) is kept and the error is logged.
    pub fn bind_to(&self, surface: Rc<dyn InputSurface>) {
        if let Err(err) = self.rebind(surface) {
            error!("key registry rebind failed, keeping current binding: {err:#}");
        }
    }

    fn rebind(&self, surface: Rc<dyn InputSurface>) -> Result<()> {
        let attachment = attach_handlers(&surface, &self.state)?;
        let (old_surface, old_attachment) = {
            let mut state = self.state.borrow_mut();
            let old_surface = std::mem::replace(&mut state.surface, surface);
            let old_attachment = state.attachment.replace(attachment);
            (old_surface, old_attachment)
        };
        // The new binding is committed; a failure to tidy up the old
        // surface is non-fatal.
        if let Some(old) = old_attachment {
            if let Err(err) = old_surface.detach(KeyEventKind::Press, old.press) {
                warn!("press handler left on previous surface: {err:#}");
            }
            if let Err(err) = old_surface.detach(KeyEventKind::Release, old.release) {
                warn!("release handler left on previous surface: {err:#}");
            }
        }
        Ok(())
    }

    /// Register `callback` for key `code`.
    ///
    /// The callback is appended to the press list when `notify_on_press`
    /// and to the release list when `notify_on_release`. Codes are not
    /// validated against the key table, so custom codes work. Registering
    /// the same (code, callback) pair twice yields two independent
    /// entries.
    pub fn add_listener(
        &self,
        callback: KeyCallback,
        code: u32,
        notify_on_press: bool,
        notify_on_release: bool,
    ) {
        let mut state = self.state.borrow_mut();
        if notify_on_press {
            state.press_listeners.push(ListenerEntry {
                code,
                callback: callback.clone(),
            });
        }
        if notify_on_release {
            state.release_listeners.push(ListenerEntry { code, callback });
        }
    }

    /// Remove every entry matching `code` and `callback` (by pointer
    /// identity) from the selected lists.
    ///
    /// Returns the number of entries removed. A scanned list with no match
    /// logs a warning; that is a diagnostic, not an error.
    pub fn remove_listener(
        &self,
        callback: &KeyCallback,
        code: u32,
        notify_on_press: bool,
        notify_on_release: bool,
    ) -> usize {
        let mut state = self.state.borrow_mut();
        let mut removed = 0;
        if notify_on_press {
            removed += remove_entries(&mut state.press_listeners, code, callback, "press");
        }
        if notify_on_release {
            removed += remove_entries(&mut state.release_listeners, code, callback, "release");
        }
        removed
    }

    /// Current pressed state for `code`. Codes never seen read as released.
    pub fn is_key_down(&self, code: u32) -> bool {
        self.state.borrow().keys.get(&code).copied().unwrap_or(false)
    }

    /// Human-readable name for `code`, from the static key table.
    ///
    /// Resolves independently of observed events, so codes that were never
    /// pressed still have names.
    pub fn key_name(&self, code: u32) -> Option<&'static str> {
        codes::name_for(code)
    }

    /// Drop every registered listener. Key state is untouched.
    pub fn remove_all_listeners(&self) {
        let mut state = self.state.borrow_mut();
        state.press_listeners.clear();
        state.release_listeners.clear();
    }

    /// Reset key state so every code reads as released. Listener
    /// registrations are untouched.
    pub fn clear_keys(&self) {
        self.state.borrow_mut().keys.clear();
    }

    /// Whether the internal handlers are currently attached.
    pub fn is_subscribed(&self) -> bool {
        self.state.borrow().attachment.is_some()
    }
}

/// Attach press and release handlers to `surface`, rolling back the press
/// handler if the release attachment fails.
fn attach_handlers(
    surface: &Rc<dyn InputSurface>,
    state: &Rc<RefCell<RegistryState>>,
) -> Result<Attachment> {
    let press = surface.attach(
        KeyEventKind::Press,
        transition_handler(state, KeyEventKind::Press),
    )?;
    let release = match surface.attach(
        KeyEventKind::Release,
        transition_handler(state, KeyEventKind::Release),
    ) {
        Ok(id) => id,
        Err(err) => {
            if let Err(detach_err) = surface.detach(KeyEventKind::Press, press) {
                warn!("could not roll back press handler: {detach_err:#}");
            }
            return Err(err);
        }
    };
    Ok(Attachment { press, release })
}

/// Build the surface handler for one transition kind.
///
/// Holds only a weak reference to the registry state, so a dropped
/// registry does not keep dispatching through surfaces that outlive it.
fn transition_handler(state: &Rc<RefCell<RegistryState>>, kind: KeyEventKind) -> SurfaceHandler {
    let state = Rc::downgrade(state);
    Rc::new(move |event: KeyEvent| {
        if let Some(state) = state.upgrade() {
            dispatch(&state, kind, event.code);
        }
    })
}

/// Apply one raw transition event: update key state, then run matching
/// listeners in registration order.
///
/// A press for an already-pressed code and a release for an
/// already-released code are ignored without dispatch. The matching
/// callbacks are snapshotted before the first one runs.
fn dispatch(state: &Rc<RefCell<RegistryState>>, kind: KeyEventKind, code: u32) {
    let callbacks: Vec<KeyCallback> = {
        let mut state = state.borrow_mut();
        let down = state.keys.get(&code).copied().unwrap_or(false);
        let listeners = match kind {
            KeyEventKind::Press => {
                if down {
                    return;
                }
                state.keys.insert(code, true);
                &state.press_listeners
            }
            KeyEventKind::Release => {
                if !down {
                    return;
                }
                state.keys.insert(code, false);
                &state.release_listeners
            }
        };
        listeners
            .iter()
            .filter(|entry| entry.code == code)
            .map(|entry| entry.callback.clone())
            .collect()
    };
    for callback in callbacks {
        callback();
    }
}

/// Remove all (code, callback) matches from one listener list.
fn remove_entries(
    list: &mut Vec<ListenerEntry>,
    code: u32,
    callback: &KeyCallback,
    label: &str,
) -> usize {
    let before = list.len();
    list.retain(|entry| !(entry.code == code && Rc::ptr_eq(&entry.callback, callback)));
    let removed = before - list.len();
    if removed == 0 {
        warn!("no {label} listener registered for key code {code}; nothing removed");
    }
    removed
}
