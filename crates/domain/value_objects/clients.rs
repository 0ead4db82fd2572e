use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{
    entities::clients::InsertClientEntity,
    value_objects::{
        enums::client_plans::ClientPlan,
        validation::{ValidationErrors, required_text},
    },
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientCandidate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub plan: Option<String>,
    pub active: Option<bool>,
    pub services_used: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedClient {
    pub name: String,
    pub email: String,
    pub plan: ClientPlan,
    pub active: bool,
    pub services_used: Vec<String>,
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl ClientCandidate {
    pub fn validate(&self) -> Result<ValidatedClient, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(&mut errors, "name", "Name", self.name.as_deref());
        let email = required_text(&mut errors, "email", "Email", self.email.as_deref())
            .map(|email| normalize_email(&email));

        let plan = match self.plan.as_deref() {
            None => Some(ClientPlan::default()),
            Some(raw) => {
                let plan = ClientPlan::from_str(raw);
                if plan.is_none() {
                    errors.push("plan", format!("`{raw}` is not a valid plan"));
                }
                plan
            }
        };

        let services_used = self.services_used.clone().unwrap_or_default();
        let active = self.active.unwrap_or(true);

        match (name, email, plan) {
            (Some(name), Some(email), Some(plan)) if errors.is_empty() => Ok(ValidatedClient {
                name,
                email,
                plan,
                active,
                services_used,
            }),
            _ => Err(errors),
        }
    }
}

impl ValidatedClient {
    pub fn into_insert_entity(self, now: DateTime<Utc>) -> InsertClientEntity {
        InsertClientEntity {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            plan: self.plan.to_string(),
            active: self.active,
            services_used: self.services_used,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> ClientCandidate {
        ClientCandidate {
            name: Some("TechStart Italia".to_string()),
            email: Some("contact@techstart.it".to_string()),
            plan: Some("premium".to_string()),
            active: Some(true),
            services_used: Some(vec!["development".to_string(), "consulting".to_string()]),
        }
    }

    #[test]
    fn valid_candidate_passes() {
        let client = candidate().validate().unwrap();
        assert_eq!(client.plan, ClientPlan::Premium);
        assert_eq!(client.services_used, vec!["development", "consulting"]);
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let client = ClientCandidate {
            email: Some("  Contact@TechStart.IT ".to_string()),
            ..candidate()
        }
        .validate()
        .unwrap();
        assert_eq!(client.email, "contact@techstart.it");
    }

    #[test]
    fn defaults_are_filled_in() {
        let client = ClientCandidate {
            plan: None,
            active: None,
            services_used: None,
            ..candidate()
        }
        .validate()
        .unwrap();

        assert_eq!(client.plan, ClientPlan::Basic);
        assert!(client.active);
        assert!(client.services_used.is_empty());
    }

    #[test]
    fn name_and_email_are_required() {
        let errors = ClientCandidate {
            name: Some("  ".to_string()),
            email: None,
            ..candidate()
        }
        .validate()
        .unwrap_err();

        assert!(errors.has_field("name"));
        assert!(errors.has_field("email"));
        assert!(!errors.has_field("plan"));
    }

    #[test]
    fn unknown_plan_is_rejected() {
        let errors = ClientCandidate {
            plan: Some("gold".to_string()),
            ..candidate()
        }
        .validate()
        .unwrap_err();
        assert!(errors.has_field("plan"));
    }

    #[test]
    fn services_used_keeps_order_without_checking_categories() {
        let client = ClientCandidate {
            services_used: Some(vec!["marketing".to_string(), "hosting".to_string()]),
            ..candidate()
        }
        .validate()
        .unwrap();
        assert_eq!(client.services_used, vec!["marketing", "hosting"]);
    }
}
