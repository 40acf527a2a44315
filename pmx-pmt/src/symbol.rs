// pmx-pmt - Interned symbols
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols are interned names.
//!
//! # Interning
//!
//! Every symbol goes through a global interner, so two symbols with the same
//! name share one allocation:
//!
//! - **O(1) equality**: comparing symbols is a pointer comparison
//! - **O(1) hashing**: the hash is taken from the pointer address
//! - **Cheap string hand-off**: [`Symbol::as_arc_str`] exposes the interned
//!   storage, so callers can keep the name without copying it
//!
//! # Memory Behaviour
//!
//! Interned symbols are never deallocated. The interner holds a strong
//! reference to every name it has seen, so memory grows with the number of
//! distinct symbols. Message keys and port names come from a small, mostly
//! static set, which keeps this bounded in practice.
//!
//! # Thread Safety
//!
//! The interner sits behind a `Mutex`. Creating a symbol takes the lock;
//! comparing, hashing and reading a symbol do not.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock};

/// An interned name.
#[derive(Clone)]
pub struct Symbol {
    name: Arc<str>,
}

static SYMBOL_INTERNER: OnceLock<Mutex<SymbolInterner>> = OnceLock::new();

struct SymbolInterner {
    symbols: HashSet<Arc<str>>,
}

impl SymbolInterner {
    fn new() -> Self {
        SymbolInterner {
            symbols: HashSet::new(),
        }
    }

    fn intern(&mut self, name: &str) -> Arc<str> {
        if let Some(existing) = self.symbols.get(name) {
            Arc::clone(existing)
        } else {
            let interned: Arc<str> = Arc::from(name);
            self.symbols.insert(Arc::clone(&interned));
            interned
        }
    }
}

fn get_interner() -> &'static Mutex<SymbolInterner> {
    SYMBOL_INTERNER.get_or_init(|| Mutex::new(SymbolInterner::new()))
}

impl Symbol {
    /// Return the symbol whose name is `name`, creating it on first use.
    pub fn new(name: &str) -> Self {
        let name = get_interner()
            .lock()
            .expect(
                "Symbol interner mutex poisoned: another thread panicked while holding the lock",
            )
            .intern(name);
        Symbol { name }
    }

    /// Get the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the interned storage behind the name.
    #[must_use]
    pub fn as_arc_str(&self) -> &Arc<str> {
        &self.name
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        // Due to interning, pointer comparison is sufficient
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if Arc::ptr_eq(&self.name, &other.name) {
            return std::cmp::Ordering::Equal;
        }
        self.name.cmp(&other.name)
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.name).cast::<u8>().hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================
