use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Single-threaded shared handle.
///
/// The host and the UI dispatcher both hold the scene tree (and the
/// active camera) through this; cloning is cheap and never copies `T`.
pub struct Shared<T: ?Sized> {
    inner: Rc<RefCell<T>>,
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Replace the stored value entirely.
    pub fn replace(&self, new_value: T) -> T {
        self.inner.replace(new_value)
    }
}

impl<T: ?Sized> Shared<T> {
    /// Wraps an existing `Rc<RefCell<_>>`, e.g. an unsized trait object.
    pub fn from_rc(inner: Rc<RefCell<T>>) -> Self {
        Self { inner }
    }

    /// Run `f` with an immutable reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let borrow = self.inner.borrow();
        f(&*borrow)
    }

    /// Run `f` with a mutable reference to the stored value.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut borrow = self.inner.borrow_mut();
        f(&mut *borrow)
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}
