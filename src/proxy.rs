//! Entry point holding the normalized configuration

use crate::builder::Builder;
use crate::config::ProxyConfig;
use crate::error::{ImgproxyError, Result};
use crate::signer::verify_signature;

/// Handle for one imgproxy deployment
///
/// Cheap to share: builders only borrow it, and nothing mutates the
/// configuration after [`Proxy::new`].
#[derive(Debug, Clone)]
pub struct Proxy {
    config: ProxyConfig,
}

impl Proxy {
    /// Trailing `/` characters are stripped from `base_url`
    pub fn new(mut config: ProxyConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self { config }
    }

    pub fn builder(&self) -> Builder<'_> {
        Builder::new(self)
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Check the signature of a full URL generated for this deployment
    ///
    /// # Errors
    /// * `ImgproxyError::InvalidSignature` if the URL does not start with the
    ///   base URL or its signature does not match the path
    pub fn verify(&self, url: &str) -> Result<()> {
        let rest = url
            .strip_prefix(self.config.base_url.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or(ImgproxyError::InvalidSignature)?;
        let slash = rest.find('/').ok_or(ImgproxyError::InvalidSignature)?;
        let (signature, path) = rest.split_at(slash);

        verify_signature(&self.config, signature, path)
    }
}
