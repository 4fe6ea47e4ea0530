//! Global symbol registry.
//!
//! Names map to slotmap keys through an `FxHashMap`; the slotmap owns the
//! shared name strings. A thread-local cache keeps the hot path lock-free for
//! names a thread has already seen.

use std::cell::RefCell;
use std::sync::{Arc, LazyLock, RwLock};

use rustc_hash::FxHashMap;
use slotmap::{DefaultKey, SlotMap};

use super::Symbol;

struct SymbolRegistry {
    name_to_key: FxHashMap<Arc<str>, DefaultKey>,
    key_to_name: SlotMap<DefaultKey, Arc<str>>,
}

impl SymbolRegistry {
    fn new() -> Self {
        Self {
            name_to_key: FxHashMap::default(),
            key_to_name: SlotMap::with_key(),
        }
    }
}

static REGISTRY: LazyLock<RwLock<SymbolRegistry>> =
    LazyLock::new(|| RwLock::new(SymbolRegistry::new()));

thread_local! {
    static NAME_CACHE: RefCell<FxHashMap<String, Symbol>> = RefCell::new(FxHashMap::default());
}

/// Create or get the symbol with this name
///
/// # Panics
///
/// Panics if the global registry lock is poisoned.
#[must_use]
pub fn symbol(name: &str) -> Symbol {
    if let Some(sym) = NAME_CACHE.with(|cache| cache.borrow().get(name).cloned()) {
        return sym;
    }

    let existing = {
        let registry = REGISTRY.read().expect("Global symbol registry poisoned");
        registry
            .name_to_key
            .get(name)
            .map(|&key| Symbol::from_parts(key, Arc::clone(&registry.key_to_name[key])))
    };

    let sym = existing.unwrap_or_else(|| {
        let mut registry = REGISTRY.write().expect("Global symbol registry poisoned");
        // Another thread may have interned it between the two locks
        if let Some(&key) = registry.name_to_key.get(name) {
            return Symbol::from_parts(key, Arc::clone(&registry.key_to_name[key]));
        }
        let shared: Arc<str> = Arc::from(name);
        let key = registry.key_to_name.insert(Arc::clone(&shared));
        registry.name_to_key.insert(Arc::clone(&shared), key);
        Symbol::from_parts(key, shared)
    });

    NAME_CACHE.with(|cache| {
        cache.borrow_mut().insert(name.to_owned(), sym.clone());
    });
    sym
}
