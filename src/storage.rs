use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::AppError;
use crate::models::Snapshot;

/// Fixed slot the whole snapshot lives under. Same key the original
/// browser build used, so the stored shape stays recognizable.
pub const SNAPSHOT_KEY: &str = "expense-manager-data";

const SCHEMA: &str =
  "CREATE TABLE IF NOT EXISTS snapshots (key TEXT PRIMARY KEY, value TEXT NOT NULL)";

/// Durable home of the ledger snapshot. Implementations are best-effort:
/// `load` reports a corrupt value as absent instead of failing startup.
pub trait SnapshotStore {
  fn load(&self) -> Result<Option<Snapshot>, AppError>;
  fn save(&self, snapshot: &Snapshot) -> Result<(), AppError>;
  fn clear(&self) -> Result<(), AppError>;
}

pub struct SqliteStore {
  conn: Mutex<Connection>,
  pub db_path: PathBuf,
}

pub fn resolve_app_dir() -> Result<PathBuf, AppError> {
  if let Some(portable) = resolve_portable_dir()? {
    return Ok(portable);
  }

  let base = dirs_next::data_local_dir()
    .ok_or_else(|| AppError::new("PATH", "Pasta de dados local não encontrada"))?;
  Ok(base.join("Despesas"))
}

impl SqliteStore {
  pub fn open(app_dir: &Path) -> Result<Self, AppError> {
    fs::create_dir_all(app_dir)?;
    let db_path = app_dir.join("despesas.sqlite");
    let conn = Connection::open(&db_path)?;
    conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch(SCHEMA)?;

    Ok(Self {
      conn: Mutex::new(conn),
      db_path,
    })
  }

  pub fn open_in_memory() -> Result<Self, AppError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(SCHEMA)?;
    Ok(Self {
      conn: Mutex::new(conn),
      db_path: PathBuf::from(":memory:"),
    })
  }
}

impl SnapshotStore for SqliteStore {
  fn load(&self) -> Result<Option<Snapshot>, AppError> {
    let guard = self.conn.lock()?;
    let raw: Option<String> = guard
      .query_row(
        "SELECT value FROM snapshots WHERE key = ?1",
        params![SNAPSHOT_KEY],
        |row| row.get(0),
      )
      .optional()?;

    let Some(raw) = raw else {
      return Ok(None);
    };

    match serde_json::from_str::<Snapshot>(&raw) {
      Ok(snapshot) => Ok(Some(snapshot)),
      Err(err) => {
        tracing::warn!(%err, "snapshot guardado ilegível, a arrancar com os valores padrão");
        Ok(None)
      }
    }
  }

  fn save(&self, snapshot: &Snapshot) -> Result<(), AppError> {
    let stamped = Snapshot {
      total_received: snapshot.total_received,
      expenses: snapshot.expenses.clone(),
      last_updated: Utc::now().to_rfc3339(),
    };
    let value = serde_json::to_string(&stamped)?;

    let guard = self.conn.lock()?;
    guard.execute(
      "INSERT OR REPLACE INTO snapshots (key, value) VALUES (?1, ?2)",
      params![SNAPSHOT_KEY, value],
    )?;
    Ok(())
  }

  fn clear(&self) -> Result<(), AppError> {
    let guard = self.conn.lock()?;
    guard.execute("DELETE FROM snapshots WHERE key = ?1", params![SNAPSHOT_KEY])?;
    Ok(())
  }
}

fn resolve_portable_dir() -> Result<Option<PathBuf>, AppError> {
  let env_enabled = std::env::var("DESPESAS_PORTABLE")
    .ok()
    .map(|value| {
      let value = value.to_ascii_lowercase();
      value == "1" || value == "true" || value == "yes"
    })
    .unwrap_or(false);

  let exe_dir = std::env::current_exe()
    .ok()
    .and_then(|path| path.parent().map(|parent| parent.to_path_buf()));

  if let Some(exe_dir) = exe_dir {
    let flag = exe_dir.join("portable.flag");
    let data_dir = exe_dir.join("data");
    if env_enabled || flag.exists() || data_dir.exists() {
      fs::create_dir_all(&data_dir)?;
      return Ok(Some(data_dir));
    }
  }

  Ok(None)
}
