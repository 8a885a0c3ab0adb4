// 🔁 Submission Pipeline - validate → score → store
// Wires the pure validator and scorer to the shared store, and maps every
// failure into the error taxonomy the transport layer reports.

use crate::receipt::RawReceipt;
use crate::scorer::score;
use crate::store::ReceiptStore;
use crate::validator::{validate, ValidationError};

// ============================================================================
// SERVICE ERROR
// ============================================================================

/// ServiceError - Everything a submission or lookup can fail with
#[derive(Debug, PartialEq, Eq)]
pub enum ServiceError {
    /// Client input failed a format check; carries the first failure
    Validation(ValidationError),
    /// Lookup against an unknown identifier
    NotFound,
    /// Unexpected fault; details are logged, never sent to the caller
    Internal,
}

impl ServiceError {
    pub fn message(&self) -> &'static str {
        match self {
            ServiceError::Validation(err) => err.message(),
            ServiceError::NotFound => "Receipt not found",
            ServiceError::Internal => "Internal server error",
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ServiceError {}

// ============================================================================
// RECEIPT SERVICE
// ============================================================================

/// ReceiptService - The full submit/lookup pipeline over one store
pub struct ReceiptService {
    store: ReceiptStore,
}

impl ReceiptService {
    pub fn new() -> Self {
        ReceiptService {
            store: ReceiptStore::new(),
        }
    }

    /// Build the service around a preconfigured store (custom id generator)
    pub fn with_store(store: ReceiptStore) -> Self {
        ReceiptService { store }
    }

    /// The store this service writes to
    pub fn store(&self) -> &ReceiptStore {
        &self.store
    }

    /// Accept a submitted receipt: validate, score, store.
    ///
    /// Returns the identifier for later lookups. A validation failure leaves
    /// the store untouched.
    pub fn submit(&self, raw: RawReceipt) -> Result<String, ServiceError> {
        let receipt = validate(raw).map_err(ServiceError::Validation)?;
        let points = score(&receipt);

        self.store.create(receipt, points).map_err(|err| {
            eprintln!("Error storing receipt: {}", err);
            ServiceError::Internal
        })
    }

    /// Points for a previously submitted receipt
    pub fn lookup(&self, id: &str) -> Result<u64, ServiceError> {
        match self.store.lookup(id) {
            Ok(Some(points)) => Ok(points),
            Ok(None) => Err(ServiceError::NotFound),
            Err(err) => {
                eprintln!("Error reading receipt store: {}", err);
                Err(ServiceError::Internal)
            }
        }
    }
}

impl Default for ReceiptService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
