use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientPlan {
    #[default]
    Basic,
    Premium,
    Enterprise,
}

impl ClientPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientPlan::Basic => "basic",
            ClientPlan::Premium => "premium",
            ClientPlan::Enterprise => "enterprise",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "basic" => Some(ClientPlan::Basic),
            "premium" => Some(ClientPlan::Premium),
            "enterprise" => Some(ClientPlan::Enterprise),
            _ => None,
        }
    }
}

impl Display for ClientPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
