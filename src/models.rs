use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Expense {
  pub id: i64,
  pub name: String,
  pub amount: f64,
  pub paid: bool,
}

/// Persisted form of the ledger. Field names follow the stored JSON
/// contract; `totalReceived` and `expenses` fall back to the built-in
/// defaults independently when missing from a parsed value.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
  #[serde(default = "defaults::total_received")]
  pub total_received: f64,
  #[serde(default = "defaults::expenses")]
  pub expenses: Vec<Expense>,
  #[serde(default)]
  pub last_updated: String,
}

/// Staged edit handed back to the view: name as stored, amount already
/// converted to the display-unit string the input field shows.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EditDraft {
  pub id: i64,
  pub name: String,
  pub amount: String,
}
