use chrono::Utc;

use crate::defaults;
use crate::domain::validation;
use crate::models::{EditDraft, Expense, Snapshot};
use crate::storage::SnapshotStore;

/// Authoritative in-memory ledger: the expense list plus the total
/// received. Every successful mutation writes through to the snapshot
/// store; a failed write is logged and the in-memory state stands.
pub struct LedgerStore {
  total_received: f64,
  expenses: Vec<Expense>,
  editing: Option<i64>,
  last_id: i64,
  store: Box<dyn SnapshotStore>,
}

impl LedgerStore {
  /// Consults the snapshot store first; only when it yields nothing
  /// valid does the ledger seed itself from the built-in defaults.
  pub fn open(store: Box<dyn SnapshotStore>) -> Self {
    let (total_received, expenses) = match store.load() {
      Ok(Some(snapshot)) => (snapshot.total_received, snapshot.expenses),
      Ok(None) => (defaults::DEFAULT_TOTAL_RECEIVED, defaults::expenses()),
      Err(err) => {
        tracing::warn!(%err, "falha ao ler o snapshot guardado, a usar os valores padrão");
        (defaults::DEFAULT_TOTAL_RECEIVED, defaults::expenses())
      }
    };
    let last_id = expenses.iter().map(|e| e.id).max().unwrap_or(0);

    Self {
      total_received,
      expenses,
      editing: None,
      last_id,
      store,
    }
  }

  pub fn total_received(&self) -> f64 {
    self.total_received
  }

  pub fn expenses(&self) -> &[Expense] {
    &self.expenses
  }

  /// Id of the record currently staged for editing, if any.
  pub fn editing(&self) -> Option<i64> {
    self.editing
  }

  /// Non-finite or negative input coerces to 0. Always succeeds.
  pub fn set_total_received(&mut self, value: f64) {
    self.total_received = if value.is_finite() { value.max(0.0) } else { 0.0 };
    self.persist();
  }

  /// Appends a new unpaid expense from raw display-unit input. Returns
  /// the fresh id, or `None` without touching state when the name is
  /// blank or the amount fails to parse.
  pub fn add_expense(&mut self, name: &str, amount: &str) -> Option<i64> {
    let name = validation::clean_name(name)?;
    let amount = validation::parse_display_amount(amount)?;
    let id = self.next_id();
    self.expenses.push(Expense {
      id,
      name,
      amount,
      paid: false,
    });
    self.persist();
    Some(id)
  }

  /// Removes the matching record; absent ids are a no-op, not an error.
  pub fn delete_expense(&mut self, id: i64) -> bool {
    let before = self.expenses.len();
    self.expenses.retain(|e| e.id != id);
    let removed = self.expenses.len() != before;
    if removed {
      if self.editing == Some(id) {
        self.editing = None;
      }
      self.persist();
    }
    removed
  }

  pub fn toggle_paid(&mut self, id: i64) -> bool {
    match self.expenses.iter_mut().find(|e| e.id == id) {
      Some(expense) => {
        expense.paid = !expense.paid;
        self.persist();
        true
      }
      None => false,
    }
  }

  /// Stages an edit and returns the draft the view prefills its inputs
  /// with: the stored name, and the amount back in display units.
  pub fn begin_edit(&mut self, id: i64) -> Option<EditDraft> {
    let expense = self.expenses.iter().find(|e| e.id == id)?;
    self.editing = Some(id);
    Some(EditDraft {
      id,
      name: expense.name.clone(),
      amount: format!("{}", expense.amount / 1000.0),
    })
  }

  /// Overwrites name and amount in place, preserving id, paid flag and
  /// position. Blank or unparseable input leaves the record untouched.
  pub fn commit_edit(&mut self, id: i64, name: &str, amount: &str) -> bool {
    let Some(name) = validation::clean_name(name) else {
      return false;
    };
    let Some(amount) = validation::parse_display_amount(amount) else {
      return false;
    };
    let Some(expense) = self.expenses.iter_mut().find(|e| e.id == id) else {
      return false;
    };

    expense.name = name;
    expense.amount = amount;
    if self.editing == Some(id) {
      self.editing = None;
    }
    self.persist();
    true
  }

  pub fn cancel_edit(&mut self) {
    self.editing = None;
  }

  /// Restores the default list and total, and clears the stored
  /// snapshot. Confirmation is collected by the view and passed in
  /// explicitly; an unconfirmed reset changes nothing.
  pub fn reset_to_defaults(&mut self, confirmed: bool) -> bool {
    if !confirmed {
      return false;
    }
    self.total_received = defaults::DEFAULT_TOTAL_RECEIVED;
    self.expenses = defaults::expenses();
    self.editing = None;
    if let Err(err) = self.store.clear() {
      tracing::warn!(%err, "falha ao limpar o snapshot guardado");
    }
    true
  }

  /// Replaces only the expense list with a fresh copy of the defaults,
  /// leaving the total received untouched. Also confirmation-gated.
  pub fn refresh_to_latest_defaults(&mut self, confirmed: bool) -> bool {
    if !confirmed {
      return false;
    }
    self.expenses = defaults::expenses();
    self.editing = None;
    self.persist();
    true
  }

  pub fn total_expenses(&self) -> f64 {
    self.expenses.iter().map(|e| e.amount).sum()
  }

  pub fn paid_expenses(&self) -> f64 {
    self.expenses.iter().filter(|e| e.paid).map(|e| e.amount).sum()
  }

  pub fn remaining_expenses(&self) -> f64 {
    self.total_expenses() - self.paid_expenses()
  }

  /// May go negative; that is a display signal, not an error state.
  pub fn remaining_balance(&self) -> f64 {
    self.total_received - self.paid_expenses()
  }

  pub fn progress_percentage(&self) -> f64 {
    let total = self.total_expenses();
    if total > 0.0 {
      self.paid_expenses() / total * 100.0
    } else {
      0.0
    }
  }

  pub fn expense_count(&self) -> usize {
    self.expenses.len()
  }

  pub fn paid_count(&self) -> usize {
    self.expenses.iter().filter(|e| e.paid).count()
  }

  pub fn snapshot(&self) -> Snapshot {
    Snapshot {
      total_received: self.total_received,
      expenses: self.expenses.clone(),
      last_updated: String::new(),
    }
  }

  // Epoch milliseconds, bumped past the last issued id so two additions
  // in the same millisecond (or a seeded list) never collide.
  fn next_id(&mut self) -> i64 {
    let mut id = Utc::now().timestamp_millis();
    if id <= self.last_id {
      id = self.last_id + 1;
    }
    self.last_id = id;
    id
  }

  fn persist(&self) {
    if let Err(err) = self.store.save(&self.snapshot()) {
      tracing::warn!(%err, "auto-save falhou, estado mantido apenas em memória");
    }
  }
}
