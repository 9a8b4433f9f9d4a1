//! Audit logging of mutations.
//!
//! Every mutating service operation records a human-readable message once the
//! mutation has succeeded. The message is emitted as a tracing event and persisted
//! to the `audit_log` table.

use sea_orm::DatabaseConnection;

use crate::server::data::audit_log::AuditLogRepository;

pub struct AuditLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a mutation.
    ///
    /// A failure to persist the entry is logged and swallowed; the mutation it
    /// describes has already been committed.
    ///
    /// # Arguments
    /// - `message` - Human-readable description naming the entity and its id
    pub async fn add_log(&self, message: impl Into<String>) {
        let message = message.into();

        tracing::info!(target: "audit", "{}", message);

        if let Err(e) = AuditLogRepository::new(self.db).create(message).await {
            tracing::warn!("Failed to persist audit log entry: {}", e);
        }
    }
}
