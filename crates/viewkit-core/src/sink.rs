//! Output sinks: where a widget writes the value it produces.
//!
//! A sink is bound once when the widget is built. There are two flavours:
//! [`InstanceSink`] writes into a field of a shared object, [`GlobalSink`]
//! writes into a process-wide slot.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::RwLock;

/// Something a widget can push values into.
pub trait OutputSink<V> {
    /// Assign `value` to the bound destination.
    fn set(&mut self, value: V);
}

/// Sink that writes into an object owned elsewhere.
pub struct InstanceSink<T, V> {
    owner: Rc<RefCell<T>>,
    setter: fn(&mut T, V),
}

impl<T, V> InstanceSink<T, V> {
    pub fn new(owner: Rc<RefCell<T>>, setter: fn(&mut T, V)) -> Self {
        Self { owner, setter }
    }
}

impl<T, V> OutputSink<V> for InstanceSink<T, V> {
    fn set(&mut self, value: V) {
        match self.owner.try_borrow_mut() {
            Ok(mut owner) => (self.setter)(&mut *owner, value),
            Err(_) => log::warn!("Output target is borrowed elsewhere, value dropped"),
        }
    }
}

/// Sink that writes into a static slot.
pub struct GlobalSink<V: 'static> {
    slot: &'static RwLock<V>,
}

impl<V: 'static> GlobalSink<V> {
    pub fn new(slot: &'static RwLock<V>) -> Self {
        Self { slot }
    }
}

impl<V: 'static> OutputSink<V> for GlobalSink<V> {
    fn set(&mut self, value: V) {
        match self.slot.write() {
            Ok(mut slot) => *slot = value,
            Err(_) => log::warn!("Global output slot is poisoned, value dropped"),
        }
    }
}

/// Sink that forwards every value to a closure.
pub struct CallbackSink<F> {
    callback: F,
}

impl<F> CallbackSink<F> {
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<V, F: FnMut(V)> OutputSink<V> for CallbackSink<F> {
    fn set(&mut self, value: V) {
        (self.callback)(value);
    }
}

/// Bind to `owner` when one is supplied, otherwise to the global `slot`.
pub fn bind_sink<T: 'static, V: 'static>(
    owner: Option<Rc<RefCell<T>>>,
    setter: fn(&mut T, V),
    slot: &'static RwLock<V>,
) -> Box<dyn OutputSink<V>> {
    match owner {
        Some(owner) => Box::new(InstanceSink::new(owner, setter)),
        None => Box::new(GlobalSink::new(slot)),
    }
}
