// pmx-convert - Recursion depth limit
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Per-thread nesting limit for conversions.
//!
//! Both converters recurse once per nesting level. A value that contains
//! itself (a vector stored into one of its own slots) would otherwise
//! recurse until the stack overflows; instead the conversion fails with
//! [`Error::DepthExceeded`] once the limit is reached.
//!
//! Each level runs through [`with_stack`], which grows the stack on demand,
//! so any limit is safe on a default-sized thread.

use std::cell::Cell;

use crate::error::{Error, Result};

/// Default maximum nesting depth. Can be configured via `set_max_convert_depth`.
pub const DEFAULT_MAX_CONVERT_DEPTH: usize = 1000;

thread_local! {
    static CONVERT_DEPTH: Cell<usize> = const { Cell::new(0) };
    static MAX_CONVERT_DEPTH: Cell<usize> = const { Cell::new(DEFAULT_MAX_CONVERT_DEPTH) };
}

/// Set the maximum conversion nesting depth for this thread. Returns the
/// previous value.
#[inline]
#[must_use]
pub fn set_max_convert_depth(depth: usize) -> usize {
    MAX_CONVERT_DEPTH.with(|d| d.replace(depth))
}

/// Get the maximum conversion nesting depth for this thread.
#[inline]
#[must_use]
pub fn get_max_convert_depth() -> usize {
    MAX_CONVERT_DEPTH.with(|d| d.get())
}

/// Get the current conversion nesting depth on this thread.
#[inline]
#[must_use]
pub fn get_convert_depth() -> usize {
    CONVERT_DEPTH.with(|d| d.get())
}

const STACK_RED_ZONE: usize = 64 * 1024; // 64KB remaining triggers growth
const STACK_GROW_SIZE: usize = 1024 * 1024; // Grow by 1MB each time

/// Run one conversion level, growing the stack first if it is running low.
#[inline]
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, f)
}

/// RAII guard to manage the depth counter.
pub(crate) struct ConvertDepthGuard;

impl ConvertDepthGuard {
    pub(crate) fn new() -> Result<Self> {
        let (current, max) = CONVERT_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            (current + 1, MAX_CONVERT_DEPTH.with(|m| m.get()))
        });
        if current > max {
            CONVERT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
            Err(Error::DepthExceeded { max })
        } else {
            Ok(ConvertDepthGuard)
        }
    }
}

impl Drop for ConvertDepthGuard {
    fn drop(&mut self) {
        CONVERT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_counts_and_releases() {
        assert_eq!(get_convert_depth(), 0);
        {
            let _outer = ConvertDepthGuard::new().unwrap();
            let _inner = ConvertDepthGuard::new().unwrap();
            assert_eq!(get_convert_depth(), 2);
        }
        assert_eq!(get_convert_depth(), 0);
    }

    #[test]
    fn test_limit() {
        let previous = set_max_convert_depth(2);
        assert_eq!(previous, DEFAULT_MAX_CONVERT_DEPTH);
        let _a = ConvertDepthGuard::new().unwrap();
        let _b = ConvertDepthGuard::new().unwrap();
        assert!(matches!(
            ConvertDepthGuard::new(),
            Err(Error::DepthExceeded { max: 2 })
        ));
        // A failed guard does not leak a level
        assert_eq!(get_convert_depth(), 2);
        let _ = set_max_convert_depth(previous);
    }

    #[test]
    fn test_with_stack_survives_deep_recursion() {
        fn descend(n: usize) -> usize {
            let frame = std::hint::black_box([0u8; 512]);
            if n == 0 {
                usize::from(frame[0])
            } else {
                with_stack(|| descend(n - 1)) + 1
            }
        }
        // Far more than a 2MB thread holds without growth
        assert_eq!(descend(20_000), 20_000);
    }
}
