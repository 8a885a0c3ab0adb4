// 🗄️ Receipt Store - In-memory mapping from identifier to receipt + points
// Entries are created once at submission time and never mutated. A coarse
// mutex around the map keeps concurrent create/lookup callers from ever
// seeing a partially-written entry.

use crate::receipt::Receipt;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

// ============================================================================
// IDENTIFIER GENERATION
// ============================================================================

/// IdGenerator - Produces fresh opaque identifiers
///
/// Injected into the store so its correctness does not depend on one
/// generation scheme. Implementations must be collision-free under
/// concurrent use.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// UuidGenerator - Default generator, random v4 UUIDs
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

// ============================================================================
// STORED RECEIPT
// ============================================================================

/// StoredReceipt - A receipt and its points, frozen at submission time
///
/// `points` always equals the score computed when the entry was created;
/// nothing ever recomputes or updates it.
#[derive(Debug, Clone, Serialize)]
pub struct StoredReceipt {
    pub id: String,
    pub receipt: Receipt,
    pub points: u64,
}

// ============================================================================
// RECEIPT STORE
// ============================================================================

/// ReceiptStore - Process-lifetime storage; no update or delete exists
pub struct ReceiptStore {
    ids: Box<dyn IdGenerator>,
    receipts: Mutex<HashMap<String, StoredReceipt>>,
}

impl ReceiptStore {
    /// Create a store backed by random UUID identifiers
    pub fn new() -> Self {
        Self::with_generator(Box::new(UuidGenerator))
    }

    /// Create a store with an injected identifier generator
    pub fn with_generator(ids: Box<dyn IdGenerator>) -> Self {
        ReceiptStore {
            ids,
            receipts: Mutex::new(HashMap::new()),
        }
    }

    /// Record a receipt with its points and return the fresh identifier.
    ///
    /// The entry becomes visible to `lookup` atomically.
    pub fn create(&self, receipt: Receipt, points: u64) -> Result<String> {
        let id = self.ids.generate();
        let entry = StoredReceipt {
            id: id.clone(),
            receipt,
            points,
        };

        let mut receipts = self
            .receipts
            .lock()
            .map_err(|_| anyhow!("receipt store mutex poisoned"))?;
        receipts.insert(id.clone(), entry);

        Ok(id)
    }

    /// Points for a stored receipt, or None for an unknown identifier
    pub fn lookup(&self, id: &str) -> Result<Option<u64>> {
        let receipts = self
            .receipts
            .lock()
            .map_err(|_| anyhow!("receipt store mutex poisoned"))?;

        Ok(receipts.get(id).map(|entry| entry.points))
    }

    /// Number of stored receipts
    pub fn len(&self) -> usize {
        self.receipts.lock().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::Item;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    fn test_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item {
                short_description: "Mountain Dew 12PK".to_string(),
                price: "6.49".to_string(),
            }],
            total: "35.35".to_string(),
        }
    }

    /// Deterministic generator for tests: seq-0, seq-1, ...
    struct SequentialGenerator {
        next: AtomicU64,
    }

    impl IdGenerator for SequentialGenerator {
        fn generate(&self) -> String {
            format!("seq-{}", self.next.fetch_add(1, Ordering::SeqCst))
        }
    }

    #[test]
    fn test_create_then_lookup_round_trip() {
        let store = ReceiptStore::new();

        let id = store.create(test_receipt(), 14).expect("create succeeds");
        assert_eq!(store.lookup(&id).expect("lookup succeeds"), Some(14));
    }

    #[test]
    fn test_lookup_unknown_id() {
        let store = ReceiptStore::new();

        assert_eq!(store.lookup("nonexistent").expect("lookup succeeds"), None);
    }

    #[test]
    fn test_identifiers_are_unique() {
        let store = ReceiptStore::new();

        let first = store.create(test_receipt(), 1).expect("create succeeds");
        let second = store.create(test_receipt(), 2).expect("create succeeds");

        assert_ne!(first, second);
        assert_eq!(store.lookup(&first).expect("lookup succeeds"), Some(1));
        assert_eq!(store.lookup(&second).expect("lookup succeeds"), Some(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_injected_generator_controls_ids() {
        let store = ReceiptStore::with_generator(Box::new(SequentialGenerator {
            next: AtomicU64::new(0),
        }));

        let id = store.create(test_receipt(), 14).expect("create succeeds");
        assert_eq!(id, "seq-0");
        assert_eq!(store.lookup("seq-0").expect("lookup succeeds"), Some(14));
    }

    #[test]
    fn test_concurrent_creates_lose_nothing() {
        let store = Arc::new(ReceiptStore::new());

        let handles: Vec<_> = (0..8)
            .map(|points| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store
                        .create(test_receipt(), points)
                        .expect("create succeeds")
                })
            })
            .collect();

        let ids: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().expect("thread completes"))
            .collect();

        assert_eq!(store.len(), 8);
        for id in ids {
            assert!(store.lookup(&id).expect("lookup succeeds").is_some());
        }
    }
}
