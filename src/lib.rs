// Receipt Points Service - Core Library
// Exposes the validation, scoring, and storage pipeline for the CLI, API
// server, and tests

pub mod money;
pub mod receipt;
pub mod scorer;
pub mod service;
pub mod store;
pub mod validator;

// Re-export commonly used types
pub use money::{is_quarter_multiple, is_whole_dollars, parse_cents, Cents};
pub use receipt::{Item, RawItem, RawReceipt, Receipt};
pub use scorer::{breakdown, score, RuleAward};
pub use service::{ReceiptService, ServiceError};
pub use store::{IdGenerator, ReceiptStore, StoredReceipt, UuidGenerator};
pub use validator::{validate, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
