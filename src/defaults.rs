use crate::models::Expense;

pub const DEFAULT_TOTAL_RECEIVED: f64 = 215_000.0;

pub fn total_received() -> f64 {
  DEFAULT_TOTAL_RECEIVED
}

/// The built-in expense list used to seed a fresh ledger and to restore
/// on reset. All entries start unpaid.
pub fn expenses() -> Vec<Expense> {
  let entries = vec![
    (1, "Anacleto", 5000.0),
    (2, "Alex", 45000.0),
    (3, "Credo", 3000.0),
    (4, "Isa", 3000.0),
    (5, "Rosalina", 6000.0),
    (6, "Dedi", 20000.0),
    (7, "Feli", 10000.0),
    (8, "Dízimo", 11000.0),
    (9, "Anéis de namoro", 3000.0),
    (10, "Kit de skin care", 10000.0),
    (11, "Dívida da calça", 3500.0),
    (12, "Pomada do cabelo", 3500.0),
    (13, "Ginásio", 7000.0),
    (14, "Kinha", 10000.0),
    (15, "Herculano", 2000.0),
    (16, "Crédito BAI", 2400.0),
    (17, "Saldo de Dados", 2000.0),
    (18, "Saldo de Voz", 1000.0),
    (19, "Orquidea", 5000.0),
  ];

  entries
    .into_iter()
    .map(|(id, name, amount)| Expense {
      id,
      name: name.to_string(),
      amount,
      paid: false,
    })
    .collect()
}
