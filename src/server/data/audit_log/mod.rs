//! Audit log data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::audit_log::AuditLogEntry;

pub struct AuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a message to the audit log, stamped with the current time.
    pub async fn create(&self, message: String) -> Result<AuditLogEntry, DbErr> {
        let entity = entity::audit_log::ActiveModel {
            message: ActiveValue::Set(message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AuditLogEntry::from_entity(entity))
    }
}

#[cfg(test)]
mod test;
