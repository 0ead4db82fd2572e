use anyhow::{Result, anyhow};
use std::{str::FromStr, time::Duration};

use super::config_model::{Database, DotEnvyConfig, Server};

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_BODY_LIMIT_MB: u64 = 1;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    load_from(|key| std::env::var(key).ok())
}

/// Builds the config from any key lookup. `DATABASE_URL` is the only
/// required value; everything else has a default.
pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<DotEnvyConfig> {
    let server = Server {
        port: optional(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
        body_limit: optional(&lookup, "SERVER_BODY_LIMIT", DEFAULT_BODY_LIMIT_MB)?,
        timeout: optional(&lookup, "SERVER_TIMEOUT", DEFAULT_TIMEOUT_SECS)?,
    };

    let database = Database {
        url: required(&lookup, "DATABASE_URL")?,
        max_connections: optional(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        connect_timeout: Duration::from_secs(optional(
            &lookup,
            "DATABASE_CONNECT_TIMEOUT",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?),
    };

    Ok(DotEnvyConfig { server, database })
}

pub fn load_database_url() -> Result<String> {
    dotenvy::dotenv().ok();

    required(&|key: &str| std::env::var(key).ok(), "DATABASE_URL")
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| anyhow!("{key} is missing"))
}

fn optional<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).map(|value| value.trim().to_string()) {
        Some(raw) if !raw.is_empty() => raw
            .parse()
            .map_err(|err| anyhow!("{key} is invalid ({raw}): {err}")),
        _ => Ok(default),
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
    fn only_database_url_is_required() {
        let config = load_from(lookup(&[("DATABASE_URL", "postgres://localhost:5432/brightflow")]))
            .unwrap();

        assert_eq!(config.database.url, "postgres://localhost:5432/brightflow");
        assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.database.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.server.body_limit, DEFAULT_BODY_LIMIT_MB);
        assert_eq!(config.server.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn missing_database_url_fails() {
        let err = load_from(lookup(&[("SERVER_PORT", "8080")])).unwrap_err();
        assert_eq!(err.to_string(), "DATABASE_URL is missing");
    }

    #[test]
    fn blank_database_url_fails() {
        assert!(load_from(lookup(&[("DATABASE_URL", "   ")])).is_err());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load_from(lookup(&[
            ("DATABASE_URL", "postgres://db/brightflow"),
            ("SERVER_PORT", "8080"),
            ("SERVER_TIMEOUT", "5"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("DATABASE_CONNECT_TIMEOUT", "2"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.timeout, 5);
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.database.connect_timeout, Duration::from_secs(2));
    }

    #[test]
    fn unparsable_number_is_an_error() {
        let err = load_from(lookup(&[
            ("DATABASE_URL", "postgres://db/brightflow"),
            ("SERVER_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().starts_with("SERVER_PORT is invalid"), "got: {err}");
    }
}
