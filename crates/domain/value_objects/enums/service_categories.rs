use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Consulting,
    Development,
    Marketing,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 3] = [
        ServiceCategory::Consulting,
        ServiceCategory::Development,
        ServiceCategory::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Consulting => "consulting",
            ServiceCategory::Development => "development",
            ServiceCategory::Marketing => "marketing",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "consulting" => Some(ServiceCategory::Consulting),
            "development" => Some(ServiceCategory::Development),
            "marketing" => Some(ServiceCategory::Marketing),
            _ => None,
        }
    }
}

impl Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
