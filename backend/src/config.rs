use std::{net::SocketAddr, path::PathBuf};

use axum_extra::extract::cookie::Key;
use common::{Error, Result, ResultExt};
use rand::Rng;
use tracing::warn;

const BIND_VAR: &str = "GAMECHARS_BIND";
const DB_VAR: &str = "GAMECHARS_DB";
const COOKIE_SECRET_VAR: &str = "GAMECHARS_COOKIE_SECRET";
const ALLOWED_ORIGIN_VAR: &str = "GAMECHARS_ALLOWED_ORIGIN";

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_DB: &str = "gamechars.db";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Minimum length of the cookie signing secret.
pub const COOKIE_SECRET_LEN: usize = 64;

#[derive(Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub db_path: PathBuf,
    pub cookie_secret: Vec<u8>,
    pub allowed_origin: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind", &self.bind)
            .field("db_path", &self.db_path)
            .field("allowed_origin", &self.allowed_origin)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Config> {
        let bind = lookup(BIND_VAR)
            .unwrap_or_else(|| DEFAULT_BIND.to_owned())
            .parse::<SocketAddr>()
            .context(format!("Invalid {BIND_VAR}"))?;

        let db_path = lookup(DB_VAR)
            .unwrap_or_else(|| DEFAULT_DB.to_owned())
            .into();

        let cookie_secret = match lookup(COOKIE_SECRET_VAR) {
            Some(secret) => {
                let secret = hex::decode(secret.trim())
                    .context(format!("Invalid {COOKIE_SECRET_VAR}"))?;
                if secret.len() < COOKIE_SECRET_LEN {
                    return Err(Error::InvalidKeyLength.context(format!(
                        "{COOKIE_SECRET_VAR} must be at least {COOKIE_SECRET_LEN} bytes"
                    )));
                }
                secret
            }
            None => {
                warn!("{COOKIE_SECRET_VAR} not set, sessions will not survive a restart");
                generate_secret()
            }
        };

        let allowed_origin =
            lookup(ALLOWED_ORIGIN_VAR).unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_owned());
        if allowed_origin.trim() == "*" {
            return Err(Error::InvalidOrigin.context(format!(
                "{ALLOWED_ORIGIN_VAR} cannot be * with credentials"
            )));
        }

        Ok(Config {
            bind,
            db_path,
            cookie_secret,
            allowed_origin,
        })
    }

    pub fn cookie_key(&self) -> Key {
        Key::from(self.cookie_secret.as_slice())
    }
}

pub fn generate_secret() -> Vec<u8> {
    let mut secret = vec![0; COOKIE_SECRET_LEN];
    rand::rng().fill(&mut secret[..]);
    secret
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.db_path, PathBuf::from("gamechars.db"));
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert_eq!(config.cookie_secret.len(), COOKIE_SECRET_LEN);
    }

    #[test]
    fn reads_overrides() {
        let secret = hex::encode([7u8; 64]);
        let config = config(&[
            (BIND_VAR, "127.0.0.1:9000"),
            (DB_VAR, "/tmp/chars.db"),
            (COOKIE_SECRET_VAR, &secret),
            (ALLOWED_ORIGIN_VAR, "https://chars.example"),
        ])
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.db_path, PathBuf::from("/tmp/chars.db"));
        assert_eq!(config.cookie_secret, vec![7u8; 64]);
        assert_eq!(config.allowed_origin, "https://chars.example");
    }

    #[test]
    fn rejects_short_secret() {
        let err = config(&[(COOKIE_SECRET_VAR, &hex::encode([1u8; 32]))]).unwrap_err();

        assert!(matches!(err.root(), Error::InvalidKeyLength));
    }

    #[test]
    fn rejects_wildcard_origin() {
        let err = config(&[(ALLOWED_ORIGIN_VAR, "*")]).unwrap_err();

        assert!(matches!(err.root(), Error::InvalidOrigin));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config(&[(COOKIE_SECRET_VAR, "zz")]).unwrap_err().root(),
            Error::FromHex(_)
        ));
        assert!(matches!(
            config(&[(BIND_VAR, "not an address")]).unwrap_err().root(),
            Error::AddrParse(_)
        ));
    }
}
