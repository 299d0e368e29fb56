// Chunk: docs/chunks/change_notification - Ordered modify and pre-delete observer lists

//! Observer registration and dispatch for buffer changes.
//!
//! Observers are shared `Rc` trait objects. A closure captures its own
//! context, so the `Rc` identity is what removal matches on. Observers get
//! a shared reference to the buffer: they can read the post-edit state but
//! cannot edit the buffer from inside a callback.

use std::rc::Rc;

use crate::text_buffer::TextBuffer;
use crate::types::ModifyEvent;

/// Receives an event after every buffer change.
pub trait ModifyObserver {
    fn buffer_modified(&self, buffer: &TextBuffer, event: &ModifyEvent<'_>);
}

impl<F> ModifyObserver for F
where
    F: Fn(&TextBuffer, &ModifyEvent<'_>),
{
    fn buffer_modified(&self, buffer: &TextBuffer, event: &ModifyEvent<'_>) {
        self(buffer, event)
    }
}

/// Receives `(pos, n_deleted)` before bytes are removed, while the old
/// content is still readable.
pub trait PredeleteObserver {
    fn before_delete(&self, buffer: &TextBuffer, pos: usize, n_deleted: usize);
}

impl<F> PredeleteObserver for F
where
    F: Fn(&TextBuffer, usize, usize),
{
    fn before_delete(&self, buffer: &TextBuffer, pos: usize, n_deleted: usize) {
        self(buffer, pos, n_deleted)
    }
}

/// Compares the data pointers of two observers, ignoring vtables.
fn same_observer<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// The two ordered observer lists owned by a buffer.
#[derive(Default)]
pub(crate) struct ChangeNotifier {
    modify: Vec<Rc<dyn ModifyObserver>>,
    predelete: Vec<Rc<dyn PredeleteObserver>>,
}

impl ChangeNotifier {
    pub fn add_modify(&mut self, observer: Rc<dyn ModifyObserver>) {
        self.modify.push(observer);
    }

    /// Removes the first registration of `observer`. Returns false if it
    /// was never registered.
    pub fn remove_modify(&mut self, observer: &Rc<dyn ModifyObserver>) -> bool {
        match self.modify.iter().position(|o| same_observer(o, observer)) {
            Some(index) => {
                self.modify.remove(index);
                true
            }
            None => {
                tracing::warn!("remove_modify_callback: observer is not registered");
                false
            }
        }
    }

    pub fn add_predelete(&mut self, observer: Rc<dyn PredeleteObserver>) {
        self.predelete.push(observer);
    }

    pub fn remove_predelete(&mut self, observer: &Rc<dyn PredeleteObserver>) -> bool {
        match self.predelete.iter().position(|o| same_observer(o, observer)) {
            Some(index) => {
                self.predelete.remove(index);
                true
            }
            None => {
                tracing::warn!("remove_predelete_callback: observer is not registered");
                false
            }
        }
    }

    #[cfg(test)]
    pub fn modify_count(&self) -> usize {
        self.modify.len()
    }

    #[cfg(test)]
    pub fn predelete_count(&self) -> usize {
        self.predelete.len()
    }

    /// Invokes modify observers in registration order.
    pub fn call_modify(&self, buffer: &TextBuffer, event: &ModifyEvent<'_>) {
        for observer in &self.modify {
            observer.buffer_modified(buffer, event);
        }
    }

    /// Invokes pre-delete observers in registration order.
    pub fn call_predelete(&self, buffer: &TextBuffer, pos: usize, n_deleted: usize) {
        for observer in &self.predelete {
            observer.before_delete(buffer, pos, n_deleted);
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("modify", &self.modify.len())
            .field("predelete", &self.predelete.len())
            .finish()
    }
}
