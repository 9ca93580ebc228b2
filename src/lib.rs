//! despesas — expense ledger core: a list of named expenses with paid
//! tracking, derived totals, and a snapshot auto-saved on every change.

pub mod defaults;
pub mod error;
pub mod ledger;
pub mod models;
pub mod storage;

pub mod domain {
  pub mod format;
  pub mod validation;
}

pub use error::AppError;
pub use ledger::LedgerStore;
pub use models::{EditDraft, Expense, Snapshot};
pub use storage::{resolve_app_dir, SnapshotStore, SqliteStore};
