// pmx-pmt - Shared mutable vector storage
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Storage for the two mutable `Pmt` aggregates: generic vectors and
//! uniform numeric vectors.
//!
//! Cloning a [`SharedVec`] shares the storage, so an update made through one
//! handle is visible through every other one. All reads go through a
//! `RwLock`; a writer that panics poisons the lock and every later access
//! reports [`Error::Poisoned`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use crate::error::{Error, Result};

/// A shared, in-place mutable vector.
pub struct SharedVec<T> {
    kind: &'static str,
    cells: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for SharedVec<T> {
    fn clone(&self) -> Self {
        SharedVec {
            kind: self.kind,
            cells: Arc::clone(&self.cells),
        }
    }
}

impl<T> SharedVec<T> {
    /// Wrap `elements`; `kind` names the owning value kind in errors.
    pub fn new(kind: &'static str, elements: Vec<T>) -> Self {
        SharedVec {
            kind,
            cells: Arc::new(RwLock::new(elements)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>> {
        self.cells
            .read()
            .map_err(|_| Error::Poisoned { kind: self.kind })
    }

    /// Number of elements.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// True if there are no elements.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    /// True if a writer panicked while holding the storage.
    pub fn is_poisoned(&self) -> bool {
        self.cells.is_poisoned()
    }

    /// True if both handles share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cells, &other.cells)
    }

    /// Run `f` over the elements under the write lock.
    pub fn with_elements_mut<R>(&self, f: impl FnOnce(&mut [T]) -> R) -> Result<R> {
        let mut guard = self
            .cells
            .write()
            .map_err(|_| Error::Poisoned { kind: self.kind })?;
        Ok(f(guard.as_mut_slice()))
    }

    /// Read access that ignores poisoning. Used by equality, ordering and
    /// display, which cannot report errors.
    pub(crate) fn read_lossy(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.cells.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace element `index`.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        let mut guard = self
            .cells
            .write()
            .map_err(|_| Error::Poisoned { kind: self.kind })?;
        let length = guard.len();
        match guard.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::out_of_bounds(index, length)),
        }
    }
}

impl<T: Clone> SharedVec<T> {
    /// Copy of element `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        let guard = self.read()?;
        guard
            .get(index)
            .cloned()
            .ok_or_else(|| Error::out_of_bounds(index, guard.len()))
    }

    /// Copy of all elements at this moment.
    pub fn snapshot(&self) -> Result<Vec<T>> {
        Ok(self.read()?.clone())
    }

    /// Set every element to `value`.
    pub fn fill(&self, value: T) -> Result<()> {
        self.with_elements_mut(|cells| cells.fill(value))
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;

    #[test]
    fn test_clone_shares_storage() {
        let a = SharedVec::new("u8vector", vec![1u8, 2, 3]);
        let b = a.clone();
        b.set(0, 9).unwrap();
        assert_eq!(a.snapshot().unwrap(), vec![9, 2, 3]);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let v = SharedVec::new("vector", vec![0i32; 2]);
        assert_eq!(v.set(2, 1), Err(Error::out_of_bounds(2, 2)));
        assert_eq!(v.get(5), Err(Error::out_of_bounds(5, 2)));
    }

    #[test]
    fn test_fill() {
        let v = SharedVec::new("f32vector", vec![0.0f32; 4]);
        v.fill(1.5).unwrap();
        assert_eq!(v.snapshot().unwrap(), vec![1.5; 4]);
        assert_eq!(v.len().unwrap(), 4);
        assert!(!v.is_empty().unwrap());
    }

    #[test]
    fn test_poisoned_storage_is_reported() {
        let v = SharedVec::new("s16vector", vec![1i16, 2]);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _ = v.with_elements_mut::<()>(|_| panic!("writer died"));
        }));
        assert!(result.is_err());
        assert!(v.is_poisoned());
        assert_eq!(
            v.snapshot(),
            Err(Error::Poisoned {
                kind: "s16vector"
            })
        );
        // Lossy reads still see the data
        assert_eq!(*v.read_lossy(), vec![1, 2]);
    }
}
