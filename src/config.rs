use crate::error::{Result, XSearchError};

pub const API_KEY_ENV: &str = "XAI_API_KEY";
const API_KEY_HINT_URL: &str = "https://console.x.ai/";
const DEFAULT_API_URL: &str = "https://api.x.ai/v1";
const DEFAULT_MODEL: &str = "grok-4-fast";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// Absent when `XAI_API_KEY` is unset; every call then fails with `MissingCredential`.
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let api_url = env_opt("XAI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        validate_url(&api_url)?;

        Ok(Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key_from_env().ok(),
            model: env_opt("XAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            timeout_secs: env_u64_range("XAI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS, 1, 300)?,
        })
    }

    /// The credential for one call, or the same `MissingCredential` error a
    /// fresh environment read would produce.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(missing_credential)
    }

    pub fn mask_api_key(&self) -> String {
        self.api_key.as_deref().map(mask_key).unwrap_or_else(|| "<unset>".into())
    }
}

/// Reads `XAI_API_KEY`; absent and empty are both errors.
pub fn api_key_from_env() -> Result<String> {
    resolve_api_key(std::env::var(API_KEY_ENV).ok())
}

fn resolve_api_key(raw: Option<String>) -> Result<String> {
    raw.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(missing_credential)
}

fn missing_credential() -> XSearchError {
    XSearchError::MissingCredential(format!(
        "{API_KEY_ENV} environment variable is not set. Get your key from {API_KEY_HINT_URL}"
    ))
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn env_u64_range(name: &str, default: u64, min: u64, max: u64) -> Result<u64> {
    parse_u64_range(name, env_opt(name), default, min, max)
}

fn parse_u64_range(name: &str, raw: Option<String>, default: u64, min: u64, max: u64) -> Result<u64> {
    let Some(raw) = raw else { return Ok(default) };
    let err = || XSearchError::ConfigInvalid(format!("{name} must be an integer between {min} and {max}"));
    let val: u64 = raw.parse().map_err(|_| err())?;
    if !(min..=max).contains(&val) {
        return Err(err());
    }
    Ok(val)
}

fn validate_url(url: &str) -> Result<()> {
    let url = url.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(XSearchError::ConfigInvalid("XAI_API_URL must be a valid http or https URL".into()));
    }
    Ok(())
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.trim().chars().collect();
    if chars.len() <= 8 {
        return "********".into();
    }
    let first: String = chars[..4].iter().collect();
    let last: String = chars[chars.len() - 4..].iter().collect();
    format!("{first}********{last}")
}
