//! Environment-backed configuration loading.

use std::env;

use crate::config::schema::{ServiceConfig, DEFAULT_PORT};

/// Load configuration from the process environment.
///
/// Never fails: missing or malformed values fall back to defaults so the
/// service always comes up on a usable port.
pub fn load_from_env() -> ServiceConfig {
    ServiceConfig {
        port: parse_port(env::var("PORT").ok()),
        ..ServiceConfig::default()
    }
}

/// Parse a `PORT` value, falling back to the default when unset or
/// malformed.
fn parse_port(raw: Option<String>) -> u16 {
    let Some(raw) = raw else {
        return DEFAULT_PORT;
    };
    match raw.trim().parse() {
        Ok(port) => port,
        Err(_) => {
            tracing::warn!(value = %raw, fallback = DEFAULT_PORT, "PORT is not a valid port number");
            DEFAULT_PORT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_uses_default() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
    }

    #[test]
    fn numeric_port_is_used() {
        assert_eq!(parse_port(Some("8080".to_string())), 8080);
        assert_eq!(parse_port(Some(" 4000 ".to_string())), 4000);
    }

    #[test]
    fn malformed_port_falls_back() {
        assert_eq!(parse_port(Some("eighty".to_string())), DEFAULT_PORT);
        assert_eq!(parse_port(Some("70000".to_string())), DEFAULT_PORT);
    }
}
