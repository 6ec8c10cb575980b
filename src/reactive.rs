// SPDX-License-Identifier: MPL-2.0
//! Minimal signal primitives used by the stores.
//!
//! A [`Signal`] owns a value, a version counter and a list of subscribers.
//! A [`Derived`] is a read-only projection of exactly one signal: the
//! dependency is declared when the derived view is built and the value is
//! recomputed whenever that signal changes. There is no global dependency
//! graph; everything is wired explicitly by the owner.
//!
//! Both types are single-threaded (`Rc` + `RefCell`). They live inside the
//! Iced update loop and never cross into async tasks.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;
type WeakCallback<T> = Weak<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    version: u64,
    subscribers: Vec<WeakCallback<T>>,
}

/// Guard returned by [`Signal::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping the subscription immediately unsubscribes the callback"]
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// A value with change notification.
///
/// Cloning a `Signal` hands out another handle to the same value.
pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Signal")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrows the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replaces the value. Setting an equal value is a no-op.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Mutates the value in place, notifying only if it actually changed.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.value.clone();
            f(&mut inner.value);
            if inner.value == before {
                false
            } else {
                inner.version += 1;
                true
            }
        };
        if changed {
            self.notify();
        }
    }

    /// Registers `callback` to run after every change, in registration order.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: Callback<T> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Incremented once per value-changing mutation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    fn notify(&self) {
        // Collect first so callbacks may read the signal without a borrow conflict.
        let (callbacks, value): (Vec<Callback<T>>, T) = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            let callbacks = inner
                .subscribers
                .iter()
                .filter_map(Weak::upgrade)
                .collect();
            (callbacks, inner.value.clone())
        };
        for callback in callbacks {
            callback(&value);
        }
    }
}

/// Read-only view recomputed from one source signal.
pub struct Derived<T> {
    value: Rc<RefCell<T>>,
    version: Rc<Cell<u64>>,
    _subscription: Subscription,
}

impl<T: fmt::Debug> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("value", &self.value.borrow())
            .field("version", &self.version.get())
            .finish()
    }
}

impl<T: Clone + 'static> Derived<T> {
    /// Builds a view over `source`, computing the initial value immediately.
    pub fn new<S>(source: &Signal<S>, compute: impl Fn(&S) -> T + 'static) -> Self
    where
        S: Clone + PartialEq + 'static,
    {
        let value = Rc::new(RefCell::new(source.with(&compute)));
        let version = Rc::new(Cell::new(0));
        let target = Rc::clone(&value);
        let bump = Rc::clone(&version);
        let subscription = source.subscribe(move |next| {
            *target.borrow_mut() = compute(next);
            bump.set(bump.get() + 1);
        });
        Self {
            value,
            version,
            _subscription: subscription,
        }
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Number of recomputations since construction.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }
}
