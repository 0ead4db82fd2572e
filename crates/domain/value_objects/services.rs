use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::services::{InsertServiceEntity, ServiceEntity},
    value_objects::{
        enums::service_categories::ServiceCategory,
        validation::{ValidationErrors, required_text},
    },
};

/// Unvalidated service input. Timestamps and the id are not accepted here, the
/// system assigns them on insert.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceCandidate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedService {
    pub title: String,
    pub description: String,
    pub category: ServiceCategory,
    pub price: f64,
    pub active: bool,
}

impl ServiceCandidate {
    pub fn validate(&self) -> Result<ValidatedService, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = required_text(&mut errors, "title", "Title", self.title.as_deref());
        let description = required_text(
            &mut errors,
            "description",
            "Description",
            self.description.as_deref(),
        );

        let category = match self.category.as_deref() {
            None => {
                errors.push("category", "Category is required");
                None
            }
            Some(raw) => {
                let category = ServiceCategory::from_str(raw);
                if category.is_none() {
                    errors.push("category", format!("`{raw}` is not a valid category"));
                }
                category
            }
        };

        let price = match self.price {
            None => {
                errors.push("price", "Price is required");
                None
            }
            Some(price) if !price.is_finite() => {
                errors.push("price", "Price must be a finite number");
                None
            }
            Some(price) if price < 0.0 => {
                errors.push("price", format!("Price ({price}) must be at least 0"));
                None
            }
            Some(price) => Some(price),
        };

        match (title, description, category, price) {
            (Some(title), Some(description), Some(category), Some(price)) if errors.is_empty() => {
                Ok(ValidatedService {
                    title,
                    description,
                    category,
                    price,
                    active: self.active.unwrap_or(true),
                })
            }
            _ => Err(errors),
        }
    }
}

impl ValidatedService {
    pub fn into_insert_entity(self, now: DateTime<Utc>) -> InsertServiceEntity {
        InsertServiceEntity {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            category: self.category.to_string(),
            price: self.price,
            active: self.active,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A service as handed to callers: detached plain data, serialized with the
/// public camelCase field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceEntity> for ServiceModel {
    fn from(value: ServiceEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            category: value.category,
            price: value.price,
            active: value.active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> ServiceCandidate {
        ServiceCandidate {
            title: Some("Web Development".to_string()),
            description: Some("Professional web development services".to_string()),
            category: Some("development".to_string()),
            price: Some(2000.0),
            active: Some(true),
        }
    }

    #[test]
    fn valid_candidate_passes() {
        let service = candidate().validate().unwrap();
        assert_eq!(service.title, "Web Development");
        assert_eq!(service.category, ServiceCategory::Development);
        assert_eq!(service.price, 2000.0);
        assert!(service.active);
    }

    #[test]
    fn every_category_is_accepted() {
        for category in ["consulting", "development", "marketing"] {
            let candidate = ServiceCandidate {
                category: Some(category.to_string()),
                ..candidate()
            };
            assert!(candidate.validate().is_ok(), "{category} should be valid");
        }
    }

    #[test]
    fn missing_required_fields_are_reported_per_field() {
        let errors = ServiceCandidate::default().validate().unwrap_err();
        for field in ["title", "description", "category", "price"] {
            assert!(errors.has_field(field), "missing error for {field}");
        }
        assert!(!errors.has_field("active"));
    }

    #[test]
    fn invalid_category_is_rejected() {
        let errors = ServiceCandidate {
            category: Some("invalid-category".to_string()),
            ..candidate()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.errors.len(), 1);
        assert!(errors.has_field("category"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let errors = ServiceCandidate {
            price: Some(-100.0),
            ..candidate()
        }
        .validate()
        .unwrap_err();

        assert_eq!(errors.errors.len(), 1);
        assert!(errors.has_field("price"));
    }

    #[test]
    fn zero_price_is_allowed_but_nan_is_not() {
        let free = ServiceCandidate {
            price: Some(0.0),
            ..candidate()
        };
        assert!(free.validate().is_ok());

        let nan = ServiceCandidate {
            price: Some(f64::NAN),
            ..candidate()
        };
        assert!(nan.validate().unwrap_err().has_field("price"));
    }

    #[test]
    fn active_defaults_to_true() {
        let service = ServiceCandidate {
            active: None,
            ..candidate()
        }
        .validate()
        .unwrap();
        assert!(service.active);
    }

    #[test]
    fn title_and_description_are_trimmed() {
        let service = ServiceCandidate {
            title: Some("  Web Development  ".to_string()),
            description: Some("  Test description  ".to_string()),
            ..candidate()
        }
        .validate()
        .unwrap();

        assert_eq!(service.title, "Web Development");
        assert_eq!(service.description, "Test description");
    }

    #[test]
    fn blank_title_counts_as_missing() {
        let errors = ServiceCandidate {
            title: Some("   ".to_string()),
            ..candidate()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.field("title").unwrap().message, "Title is required");
    }

    #[test]
    fn string_price_is_not_coerced() {
        let raw = r#"{"title":"A","description":"B","category":"marketing","price":"100"}"#;
        assert!(serde_json::from_str::<ServiceCandidate>(raw).is_err());
    }

    #[test]
    fn client_supplied_timestamps_are_refused() {
        let raw = r#"{"title":"A","description":"B","category":"marketing","price":1,"createdAt":"2024-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<ServiceCandidate>(raw).is_err());
    }

    #[test]
    fn insert_entity_gets_system_timestamps() {
        let now = Utc::now();
        let entity = candidate().validate().unwrap().into_insert_entity(now);
        assert_eq!(entity.category, "development");
        assert_eq!(entity.created_at, now);
        assert_eq!(entity.updated_at, now);
    }

    #[test]
    fn model_serializes_with_camel_case_keys() {
        let now = Utc::now();
        let model = ServiceModel {
            id: Uuid::new_v4(),
            title: "SEO & Analytics".to_string(),
            description: "Search engine optimisation".to_string(),
            category: "marketing".to_string(),
            price: 1800.0,
            active: true,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&model).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["category"], "marketing");
        assert!(json.get("created_at").is_none());
    }
}
