// edlp-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::{Config, Connection, ToSql};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument};

// Hexagonal imports
use crate::domain::policy::{NewPolicyRecord, PolicyRecord};
use crate::error::EdlpError;
use crate::infrastructure::adapters::stamp_now;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::store::PolicyStore;

const SCHEMA_SQL: &str = "
CREATE SEQUENCE IF NOT EXISTS edlp_responses_id_seq START 1;
CREATE TABLE IF NOT EXISTS edlp_responses (
    id             BIGINT PRIMARY KEY,
    submitter_name VARCHAR,
    submitter_role VARCHAR,
    office         VARCHAR,
    blacklist      VARCHAR,
    whitelist      VARCHAR,
    sender         VARCHAR,
    keywords       VARCHAR,
    attachment     VARCHAR,
    sourcecode     VARCHAR,
    dedup          VARCHAR,
    approval       VARCHAR,
    cc             VARCHAR,
    bcc            VARCHAR,
    created_at     VARCHAR NOT NULL
);
";

const INSERT_SQL: &str = "INSERT INTO edlp_responses
    (id, submitter_name, submitter_role, office, blacklist, whitelist, sender, keywords,
     attachment, sourcecode, dedup, approval, cc, bcc, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

const SELECT_SQL: &str = "SELECT id, submitter_name, submitter_role, office, blacklist, whitelist,
    sender, keywords, attachment, sourcecode, dedup, approval, cc, bcc, created_at
    FROM edlp_responses ORDER BY id DESC";

pub struct DuckDbPolicyStore {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDbPolicyStore {
    /// Opens (or creates) the store. `:memory:` gives a throwaway database.
    pub fn new(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)?
        } else {
            Connection::open_with_flags(db_path, config)?
        };
        conn.execute_batch(SCHEMA_SQL)?;
        info!(path = db_path, "🦆 Policy store ready");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, EdlpError> {
        self.conn
            .lock()
            .map_err(|_| InfrastructureError::Database(DatabaseError::Poisoned).into())
    }
}

fn read_text(row: &duckdb::Row<'_>, idx: usize) -> duckdb::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

#[async_trait]
impl PolicyStore for DuckDbPolicyStore {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<PolicyRecord>, EdlpError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(SELECT_SQL)?;

        let rows = stmt.query_map([], |row| {
            Ok(PolicyRecord {
                id: row.get(0)?,
                fields: NewPolicyRecord {
                    submitter_name: read_text(row, 1)?,
                    submitter_role: read_text(row, 2)?,
                    office: read_text(row, 3)?,
                    blacklist: read_text(row, 4)?,
                    whitelist: read_text(row, 5)?,
                    sender: read_text(row, 6)?,
                    keywords: read_text(row, 7)?,
                    attachment: read_text(row, 8)?,
                    sourcecode: read_text(row, 9)?,
                    dedup: read_text(row, 10)?,
                    approval: read_text(row, 11)?,
                    cc: read_text(row, 12)?,
                    bcc: read_text(row, 13)?,
                },
                timestamp: read_text(row, 14)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        debug!(count = records.len(), "Records loaded");
        Ok(records)
    }

    #[instrument(skip(self, record), fields(submitter = %record.submitter_name))]
    async fn append(&self, record: NewPolicyRecord) -> Result<PolicyRecord, EdlpError> {
        let conn = self.lock()?;

        let id: i64 = conn.query_row("SELECT nextval('edlp_responses_id_seq')", [], |row| {
            row.get(0)
        })?;
        let timestamp = stamp_now();

        let values = record.values();
        let mut params: Vec<&dyn ToSql> = Vec::with_capacity(values.len() + 2);
        params.push(&id);
        params.extend(values.iter().map(|v| v as &dyn ToSql));
        params.push(&timestamp);
        conn.execute(INSERT_SQL, params.as_slice())?;

        info!(id, "📝 Policy record stored");
        Ok(PolicyRecord::new(id, record, timestamp))
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<(), EdlpError> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM edlp_responses", [])?;
        info!(removed, "🗑️  Policy store cleared");
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "duckdb"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn sample(name: &str) -> NewPolicyRecord {
        NewPolicyRecord {
            submitter_name: name.to_string(),
            submitter_role: "部門二級主管".into(),
            office: "瑞三office".into(),
            blacklist: "域名/IP: @bad.com".into(),
            approval: "時間: 30分, 超時: 自動通過".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_append_then_list_newest_first() -> Result<()> {
        let store = DuckDbPolicyStore::new(":memory:")?;

        let first = store.append(sample("Amy")).await?;
        let second = store.append(sample("Bob")).await?;
        assert!(second.id > first.id);
        assert!(!first.timestamp.is_empty());

        let records = store.list().await?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], second);
        assert_eq!(records[1].fields, sample("Amy"));
        Ok(())
    }

    #[tokio::test]
    async fn test_clear_empties_the_store() -> Result<()> {
        let store = DuckDbPolicyStore::new(":memory:")?;
        store.append(sample("Amy")).await?;
        store.clear().await?;
        assert!(store.list().await?.is_empty());

        // Clearing an empty store is fine too.
        store.clear().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_ids_keep_growing_after_clear() -> Result<()> {
        let store = DuckDbPolicyStore::new(":memory:")?;
        let before = store.append(sample("Amy")).await?;
        store.clear().await?;
        let after = store.append(sample("Bob")).await?;
        assert!(after.id > before.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_records_survive_reopen() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("edlp.duckdb");
        let path = path.to_str().expect("utf-8 temp path");

        {
            let store = DuckDbPolicyStore::new(path)?;
            store.append(sample("Amy")).await?;
        }

        let reopened = DuckDbPolicyStore::new(path)?;
        let records = reopened.list().await?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields.submitter_name, "Amy");
        assert_eq!(reopened.backend_name(), "duckdb");
        Ok(())
    }
}
