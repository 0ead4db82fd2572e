use std::env;

#[derive(Debug, Clone)]
pub(crate) struct ServiceContext {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ObservabilityConfig {
    pub(crate) service_context: ServiceContext,
    /// Filter used when `RUST_LOG` is unset or unparsable.
    pub(crate) default_filter: String,
}

impl ObservabilityConfig {
    pub(crate) fn from_env(component: &str) -> Self {
        Self::from_lookup(component, |key| env::var(key).ok())
    }

    fn from_lookup(component: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let component = component.trim().to_string();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let service_name = non_empty("SERVICE_NAME").unwrap_or_else(|| component.clone());
        let environment = non_empty("STAGE").unwrap_or_else(|| "unknown".to_string());
        let default_filter = non_empty("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Self {
            service_context: ServiceContext {
                service_name,
                environment,
                component,
            },
            default_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn falls_back_to_component_and_info() {
        let config = ObservabilityConfig::from_lookup(" backend ", lookup(&[]));
        assert_eq!(config.service_context.service_name, "backend");
        assert_eq!(config.service_context.component, "backend");
        assert_eq!(config.service_context.environment, "unknown");
        assert_eq!(config.default_filter, "info");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = ObservabilityConfig::from_lookup(
            "seed",
            lookup(&[("SERVICE_NAME", "  "), ("STAGE", "production"), ("LOG_LEVEL", "debug")]),
        );
        assert_eq!(config.service_context.service_name, "seed");
        assert_eq!(config.service_context.environment, "production");
        assert_eq!(config.default_filter, "debug");
    }
}
