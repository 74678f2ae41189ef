//! Credential acquisition and persistence.
//!
//! Produces an explicit [`Credentials`] value that the rest of the
//! pipeline receives as an argument; nothing here is process-global.
//! The token is looked up in the environment first, then in the
//! persisted settings file, and is otherwise acquired interactively
//! through the oauth implicit flow.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

pub const TOKEN_ENV_VAR: &str = "VKLOOT_TOKEN";

const OAUTH_AUTHORIZE_URL: &str = "https://oauth.vk.com/authorize";
const OAUTH_REDIRECT_URI: &str = "https://oauth.vk.com/blank.html";

/// An opaque bearer token plus the application id it was issued for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub app_id: Option<String>,
    pub access_token: String,
}

impl Credentials {
    /// Resolve credentials: env var, then settings file, then an
    /// interactive prompt whose result is persisted for next time.
    pub fn acquire(settings_path: &Path) -> Result<Self> {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                return Ok(Self {
                    app_id: None,
                    access_token: token,
                });
            }
        }

        if settings_path.exists() {
            return Self::load(settings_path);
        }

        let credentials = Self::prompt()?;
        credentials.save(settings_path)?;
        Ok(credentials)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read settings file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Malformed settings file: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        info!("Saving application id and token in {}", path.display());
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Cannot write settings file: {}", path.display()))
    }

    fn prompt() -> Result<Self> {
        let app_id = read_line("Enter your vk application id: ")?;
        println!("Open this URL in a browser and authorize the application:");
        println!("{}", authorize_url(&app_id));
        let access_token = read_line("Paste your access token there: ")?;
        Ok(Self {
            app_id: Some(app_id),
            access_token,
        })
    }
}

/// Build the oauth implicit-flow authorize URL for `app_id`.
pub fn authorize_url(app_id: &str) -> String {
    let params = [
        ("client_id", app_id),
        ("display", "page"),
        ("redirect_uri", OAUTH_REDIRECT_URI),
        ("scope", "docs,offline"),
        ("response_type", "token"),
        ("v", crate::vk::API_VERSION),
    ];
    reqwest::Url::parse_with_params(OAUTH_AUTHORIZE_URL, &params)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| OAUTH_AUTHORIZE_URL.to_string())
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_url_contains_app_id_and_scope() {
        let url = authorize_url("12345");
        assert!(url.starts_with(OAUTH_AUTHORIZE_URL));
        assert!(url.contains("client_id=12345"));
        assert!(url.contains("scope=docs%2Coffline"));
        assert!(url.contains("response_type=token"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let credentials = Credentials {
            app_id: Some("12345".to_string()),
            access_token: "tok-abc".to_string(),
        };
        credentials.save(&path).unwrap();

        let loaded = Credentials::load(&path).unwrap();
        assert_eq!(loaded.app_id.as_deref(), Some("12345"));
        assert_eq!(loaded.access_token, "tok-abc");
    }
}
