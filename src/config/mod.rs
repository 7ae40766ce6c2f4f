// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::DEFAULT_SIGNATURE_SIZE;
use crate::error::{ImgproxyError, Result};

/// Connection and signing settings for one imgproxy deployment
///
/// Built once and shared by every builder created from the same
/// [`Proxy`](crate::Proxy). Nothing in the crate mutates it after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Service prefix, e.g. `https://img.example.com`
    pub base_url: String,

    /// Hex-encoded HMAC key (empty disables signing)
    #[serde(default)]
    pub key: String,

    /// Hex-encoded HMAC salt (empty disables signing)
    #[serde(default)]
    pub salt: String,

    /// Digest bytes kept in the signature, must match IMGPROXY_SIGNATURE_SIZE.
    /// Values <= 0 or > 32 mean the full 32 bytes.
    #[serde(default)]
    pub signature_size: i64,

    /// Base64-encode the source URL instead of embedding it verbatim
    #[serde(default, alias = "encode")]
    pub encode_source: bool,
}

impl ProxyConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_signing(mut self, key: impl Into<String>, salt: impl Into<String>) -> Self {
        self.key = key.into();
        self.salt = salt.into();
        self
    }

    pub fn with_signature_size(mut self, size: i64) -> Self {
        self.signature_size = size;
        self
    }

    pub fn with_encoded_source(mut self, encode: bool) -> Self {
        self.encode_source = encode;
        self
    }

    /// Number of digest bytes that end up in the signature
    pub fn effective_signature_size(&self) -> usize {
        match usize::try_from(self.signature_size) {
            Ok(size) if (1..=DEFAULT_SIGNATURE_SIZE).contains(&size) => size,
            _ => DEFAULT_SIGNATURE_SIZE,
        }
    }

    /// Signing needs both a key and a salt; otherwise URLs use `unsafe`
    pub fn signing_enabled(&self) -> bool {
        !self.key.is_empty() && !self.salt.is_empty()
    }

    /// Check the configuration up front instead of at the first `generate`
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim_end_matches('/').is_empty() {
            return Err(ImgproxyError::config("base_url must not be empty"));
        }

        if self.signing_enabled() {
            hex::decode(&self.key).map_err(ImgproxyError::InvalidKey)?;
            hex::decode(&self.salt).map_err(ImgproxyError::InvalidSalt)?;
        }

        Ok(())
    }

    pub fn from_yaml_with_env(yaml: &str) -> Result<Self> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| ImgproxyError::config(e.to_string()))?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                ImgproxyError::config(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        let config: ProxyConfig = serde_yaml::from_str(&substituted)
            .map_err(|e| ImgproxyError::config(e.to_string()))?;

        tracing::debug!(
            base_url = %config.base_url,
            signing = config.signing_enabled(),
            encode_source = config.encode_source,
            "Configuration parsed"
        );

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_with_env(&yaml)
    }
}
