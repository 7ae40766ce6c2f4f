//! URL assembly and signing
//!
//! Provides:
//! - Source URL encoding (base64url, chunked into path segments)
//! - Canonical path assembly
//! - HMAC-SHA256 path signatures and their verification
//!
//! The signature is computed as:
//! ```text
//! signature = base64url(HMAC-SHA256(hex(key), hex(salt) + path)[..signature_size])
//! ```

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::ProxyConfig;
use crate::constants::{SOURCE_CHUNK_SIZE, UNSAFE_SIGNATURE};
use crate::error::{ImgproxyError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Split `s` into pieces of at most `size` characters
///
/// An empty string yields a single empty chunk.
pub fn chunk_string(s: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() || size == 0 {
        return vec![s.to_string()];
    }
    chars
        .chunks(size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Base64url-encode the source URL and join its 16-character chunks with `/`
pub fn encode_source_url(source_url: &str) -> String {
    let encoded = base64_url_encode(source_url.as_bytes());
    chunk_string(&encoded, SOURCE_CHUNK_SIZE).join("/")
}

/// Canonical path: `/<seg1>/.../<segN>/<source>.<ext>`
///
/// With no segments the source follows the leading `/` directly.
pub fn build_path(segments: &[String], source_part: &str, extension: &str) -> String {
    let mut path = String::with_capacity(
        segments.iter().map(|s| s.len() + 1).sum::<usize>()
            + source_part.len()
            + extension.len()
            + 2,
    );
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path.push('/');
    path.push_str(source_part);
    path.push('.');
    path.push_str(extension);
    path
}

/// Sign a canonical path, or return `unsafe` when signing is disabled
///
/// # Errors
/// * `ImgproxyError::InvalidKey` / `InvalidSalt` if either is not hex
pub fn sign_path(config: &ProxyConfig, path: &str) -> Result<String> {
    if !config.signing_enabled() {
        return Ok(UNSAFE_SIGNATURE.to_string());
    }

    let key = hex::decode(&config.key).map_err(|e| {
        tracing::warn!(error = %e, "Signing key is not hex-encoded");
        ImgproxyError::InvalidKey(e)
    })?;
    let salt = hex::decode(&config.salt).map_err(|e| {
        tracing::warn!(error = %e, "Signing salt is not hex-encoded");
        ImgproxyError::InvalidSalt(e)
    })?;

    let digest = compute_hmac_signature(&key, &salt, path);
    let size = config.effective_signature_size().min(digest.len());

    Ok(base64_url_encode(&digest[..size]))
}

/// Validate a signature against the path it was attached to
///
/// # Returns
/// * `Ok(())` if the signature matches (or is `unsafe` with signing disabled)
/// * `Err(ImgproxyError::InvalidSignature)` otherwise
pub fn verify_signature(config: &ProxyConfig, signature: &str, path: &str) -> Result<()> {
    let expected = sign_path(config, path)?;

    // Use constant-time comparison to prevent timing attacks
    if constant_time_compare(signature, &expected) {
        Ok(())
    } else {
        Err(ImgproxyError::InvalidSignature)
    }
}

/// Compute HMAC-SHA256 over salt followed by path
fn compute_hmac_signature(key: &[u8], salt: &[u8], path: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");

    mac.update(salt);
    mac.update(path.as_bytes());

    mac.finalize().into_bytes().to_vec()
}

/// Base64url encode (URL-safe, no padding)
fn base64_url_encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
