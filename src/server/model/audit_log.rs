use chrono::{DateTime, Utc};

/// A persisted record of one mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLogEntry {
    pub id: i32,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    pub fn from_entity(entity: entity::audit_log::Model) -> Self {
        Self {
            id: entity.id,
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}
