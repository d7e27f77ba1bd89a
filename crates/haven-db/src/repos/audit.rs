//! Audit log repository.
//!
//! Append-only rows recording every field-level change. Supports dynamic
//! filtering, newest-first listing, and fetch by id.

use haven_core::ActorId;
use haven_core::entities::{AuditEntry, NewAuditEntry};
use haven_core::entity_kinds;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_text, parse_datetime};
use crate::service::AuditLog;

const SELECT_COLS: &str =
    "id, actor_id, entity_kind, field_name, before_value, after_value, event_time";

/// Default page size when a filter has no limit.
pub const DEFAULT_LIMIT: u32 = 100;

/// Filter criteria for audit queries.
#[derive(Debug, Default, Clone)]
pub struct AuditFilter {
    pub entity_kind: Option<String>,
    pub actor_id: Option<ActorId>,
    pub field_name: Option<String>,
    pub limit: Option<u32>,
}

impl AuditFilter {
    /// Build the `WHERE` clause and its positional parameters.
    fn where_clause(&self) -> (String, Vec<libsql::Value>) {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref kind) = self.entity_kind {
            params.push(libsql::Value::Text(kind.clone()));
            conditions.push(format!("entity_kind = ?{}", params.len()));
        }
        if let Some(ref actor) = self.actor_id {
            params.push(libsql::Value::Text(actor.as_str().to_string()));
            conditions.push(format!("actor_id = ?{}", params.len()));
        }
        if let Some(ref field) = self.field_name {
            params.push(libsql::Value::Text(field.clone()));
            conditions.push(format!("field_name = ?{}", params.len()));
        }

        let clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        (clause, params)
    }
}

fn row_to_entry(row: &libsql::Row) -> Result<AuditEntry, DatabaseError> {
    Ok(AuditEntry {
        id: row.get::<i64>(0)?,
        actor_id: get_opt_text(row, 1)?.map(ActorId::new),
        entity_kind: row.get::<String>(2)?,
        field_name: get_opt_text(row, 3)?,
        before_value: get_opt_text(row, 4)?,
        after_value: get_opt_text(row, 5)?,
        event_time: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl AuditLog {
    /// Append one row and return it as stored, with `id` and `event_time`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidInput` for a blank `entity_kind`, or
    /// `DatabaseError` if the INSERT fails.
    pub async fn append(&self, entry: &NewAuditEntry) -> Result<AuditEntry, DatabaseError> {
        entity_kinds::validate(&entry.entity_kind)
            .map_err(|e| DatabaseError::InvalidInput(e.to_string()))?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO audit_logs (actor_id, entity_kind, field_name, before_value, after_value)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     RETURNING {SELECT_COLS}"
                ),
                libsql::params![
                    entry.actor_id.as_ref().map(ActorId::as_str),
                    entry.entity_kind.as_str(),
                    entry.field_name.as_deref(),
                    entry.before_value.as_deref(),
                    entry.after_value.as_deref()
                ],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::Query("INSERT returned no row".into()))?;
        row_to_entry(&row)
    }

    /// Fetch a single row by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has this id.
    pub async fn get(&self, id: i64) -> Result<AuditEntry, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM audit_logs WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound { id })?;
        row_to_entry(&row)
    }

    /// Query rows matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query(&self, filter: &AuditFilter) -> Result<Vec<AuditEntry>, DatabaseError> {
        let (where_clause, params) = filter.where_clause();
        let limit = filter.limit.unwrap_or(DEFAULT_LIMIT);
        let sql = format!(
            "SELECT {SELECT_COLS}
             FROM audit_logs {where_clause}
             ORDER BY event_time DESC, id DESC LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }

    /// Count rows matching `filter`. The filter's limit is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count(&self, filter: &AuditFilter) -> Result<u64, DatabaseError> {
        let (where_clause, params) = filter.where_clause();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT COUNT(*) FROM audit_logs {where_clause}"),
                libsql::params_from_iter(params),
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::Query("COUNT returned no row".into()))?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::Query(format!("negative count: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{new_entry, test_log};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn append_roundtrip() {
        let log = test_log().await;

        let stored = log
            .append(&new_entry("horses", "pasture", Some("East Field"), Some("Barn Area")))
            .await
            .unwrap();

        assert!(stored.id > 0);
        assert_eq!(stored.entity_kind, "horses");
        assert_eq!(stored.before_value.as_deref(), Some("East Field"));

        let fetched = log.get(stored.id).await.unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn empty_string_values_survive() {
        let log = test_log().await;
        let stored = log
            .append(&new_entry("horses", "notes", Some(""), None))
            .await
            .unwrap();
        assert_eq!(stored.before_value.as_deref(), Some(""));
        assert_eq!(stored.after_value, None);
    }

    #[tokio::test]
    async fn append_rejects_blank_kind() {
        let log = test_log().await;
        let result = log.append(&new_entry("", "name", None, Some("x"))).await;
        assert!(matches!(result, Err(DatabaseError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let log = test_log().await;
        let result = log.get(404).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { id: 404 })));
    }

    #[tokio::test]
    async fn query_newest_first() {
        let log = test_log().await;
        for field in ["a", "b", "c"] {
            log.append(&new_entry("tasks", field, None, Some("1")))
                .await
                .unwrap();
        }

        let entries = log.query(&AuditFilter::default()).await.unwrap();
        let fields: Vec<_> = entries.iter().filter_map(|e| e.field_name.as_deref()).collect();
        assert_eq!(fields, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn query_filters_and_limit() {
        let log = test_log().await;
        log.append(&new_entry("horses", "name", None, Some("Comet")))
            .await
            .unwrap();
        log.append(&new_entry("horses", "pasture", None, Some("North")))
            .await
            .unwrap();
        log.append(&new_entry("tasks", "name", None, Some("Feed")))
            .await
            .unwrap();

        let horses = log
            .query(&AuditFilter {
                entity_kind: Some("horses".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(horses.len(), 2);

        let names = log
            .query(&AuditFilter {
                field_name: Some("name".into()),
                limit: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].entity_kind, "tasks");

        let total = log
            .count(&AuditFilter {
                field_name: Some("name".into()),
                limit: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(total, 2);
    }

    #[tokio::test]
    async fn query_by_actor() {
        let log = test_log().await;
        let mut entry = new_entry("horses", "name", None, Some("Comet"));
        entry.actor_id = Some(ActorId::from(99));
        log.append(&entry).await.unwrap();
        log.append(&new_entry("horses", "name", None, Some("Dusty")))
            .await
            .unwrap();

        let mine = log
            .query(&AuditFilter {
                actor_id: Some(ActorId::from(99)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].after_value.as_deref(), Some("Comet"));
    }
}
