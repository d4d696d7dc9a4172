//! Lookup entity <-> model mappers

use asso_core::entities::{Category, EventType, Team};

use crate::models::{CategoryModel, EventTypeModel, TeamModel};

macro_rules! lookup_mapper {
    ($model:ty => $entity:ty) => {
        impl From<$model> for $entity {
            fn from(model: $model) -> Self {
                Self {
                    id: model.id,
                    name: model.nom,
                    description: model.description,
                    created_at: model.created_at,
                    updated_at: model.updated_at,
                }
            }
        }
    };
}

lookup_mapper!(CategoryModel => Category);
lookup_mapper!(TeamModel => Team);
lookup_mapper!(EventTypeModel => EventType);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_category_mapping() {
        let now = Utc::now();
        let model = CategoryModel {
            id: Uuid::new_v4(),
            nom: "Actualités".to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        };

        let category = Category::from(model);
        assert_eq!(category.name, "Actualités");
        assert!(category.description.is_none());
    }
}
