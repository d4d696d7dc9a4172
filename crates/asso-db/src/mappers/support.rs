//! Support info entity <-> model mapper

use asso_core::entities::SupportInfo;

use crate::models::SupportInfoModel;

/// Convert SupportInfoModel to SupportInfo entity
impl From<SupportInfoModel> for SupportInfo {
    fn from(model: SupportInfoModel) -> Self {
        SupportInfo {
            id: model.id,
            kind: model.type_info,
            name: model.nom,
            details: model.details,
            active: model.actif,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
