//! Admin log entity <-> model mapper

use asso_core::entities::AdminLogEntry;

use crate::models::AdminLogModel;

/// Convert AdminLogModel to AdminLogEntry entity
impl From<AdminLogModel> for AdminLogEntry {
    fn from(model: AdminLogModel) -> Self {
        AdminLogEntry {
            id: model.id,
            action: model.action,
            details: model.details,
            created_at: model.created_at,
        }
    }
}
