//! Shared State Cells
//!
//! Controllers keep their state behind a `StateCell` so the same code runs
//! against plain `Rc<RefCell<_>>` in tests and Leptos signals in the browser.
//! Everything runs on the single UI thread; a borrow is never held across an
//! `.await`.

use std::cell::RefCell;
use std::rc::Rc;

/// Cloneable handle to one piece of single-threaded mutable state
pub trait StateCell<T>: Clone {
    /// Read without subscribing
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Mutate in place and notify readers
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    fn replace(&self, value: T) {
        self.mutate(|slot| *slot = value);
    }

    fn snapshot(&self) -> T
    where
        T: Clone,
    {
        self.read_with(T::clone)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Wrap `value` in a fresh `Rc<RefCell<_>>` cell
pub fn shared<T>(value: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(value))
}

#[cfg(feature = "leptos")]
mod signal {
    use leptos::prelude::{RwSignal, WithUntracked, Write};
    use leptos::reactive::owner::Storage;
    use leptos::reactive::signal::ArcRwSignal;

    use super::StateCell;

    impl<T, S> StateCell<T> for RwSignal<T, S>
    where
        T: 'static,
        S: Storage<ArcRwSignal<T>>,
    {
        fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
            self.with_untracked(f)
        }

        fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
            let mut guard = self.write();
            f(&mut *guard)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_cell_roundtrip() {
        let cell = shared(vec![1, 2]);
        let other = cell.clone();
        other.mutate(|v| v.push(3));
        assert_eq!(cell.snapshot(), vec![1, 2, 3]);

        cell.replace(Vec::new());
        assert!(other.read_with(Vec::is_empty));
    }
}
