//! # Session State
//!
//! Holds the shared cart engine for one shopping session.
//!
//! ## Thread Safety
//! The engine is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the engine
//! 2. Only one command should modify it at a time
//! 3. UI bridges may dispatch commands from more than one thread
//!
//! `add_to_cart` and `complete_purchase` are read-modify-write sequences on
//! shared state; interleaving them is unsafe, so every mutation holds the
//! lock for its full duration.
//!
//! ## Why Not RwLock?
//! Engine operations are quick, and most operations modify state.
//! A RwLock would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use bazaar_core::CartEngine;

/// Shared, thread-safe handle to the session's cart engine.
///
/// ## Usage
/// ```rust
/// use bazaar_session::SessionState;
///
/// let state = SessionState::new();
/// let total = state.with_engine(|e| e.total_price());
/// assert!(total.is_zero());
/// ```
#[derive(Debug)]
pub struct SessionState {
    engine: Arc<Mutex<CartEngine>>,
}

impl SessionState {
    /// Creates a new session with an empty cart, no staged item, and no
    /// history.
    pub fn new() -> Self {
        SessionState {
            engine: Arc::new(Mutex::new(CartEngine::new())),
        }
    }

    /// Executes a function with read access to the engine.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_engine(|e| e.cart().line_count());
    /// ```
    pub fn with_engine<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartEngine) -> R,
    {
        let engine = self.engine.lock().expect("Engine mutex poisoned");
        f(&engine)
    }

    /// Executes a function with write access to the engine.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_engine_mut(|e| e.add_to_cart(&product));
    /// ```
    pub fn with_engine_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartEngine) -> R,
    {
        let mut engine = self.engine.lock().expect("Engine mutex poisoned");
        f(&mut engine)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::Product;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {}", id),
            price_cents,
            image: format!("https://example.com/{}.png", id),
            category: "electronics".to_string(),
            description: format!("Description for product {}", id),
        }
    }

    #[test]
    fn test_mutations_are_visible_to_later_reads() {
        let state = SessionState::new();
        let product = test_product("1", 999);

        state.with_engine_mut(|e| e.add_to_cart(&product));
        state.with_engine_mut(|e| e.add_to_cart(&product));

        let (count, total) = state.with_engine(|e| (e.cart().total_quantity(), e.total_price()));
        assert_eq!(count, 2);
        assert_eq!(total.cents(), 1998);
    }

    #[test]
    fn test_concurrent_adds_are_serialized() {
        let state = Arc::new(SessionState::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let state = Arc::clone(&state);
            handles.push(std::thread::spawn(move || {
                for _ in 0..25 {
                    state.with_engine_mut(|e| e.add_to_cart(&test_product("1", 100)));
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        // 8 threads × 25 adds, one line, no lost increments.
        let quantity = state.with_engine(|e| e.cart().line("1").unwrap().quantity);
        assert_eq!(quantity, 200);
    }
}
