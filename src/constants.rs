// Constants module - centralized default values
//
// Values here are part of the wire contract with the imgproxy server.
// Changing any of them changes the generated URLs.

// =============================================================================
// Signing defaults
// =============================================================================

/// Full HMAC-SHA256 digest length in bytes; also the upper bound for
/// `signature_size`
pub const DEFAULT_SIGNATURE_SIZE: usize = 32;

/// Literal placed where the signature would go when signing is disabled
pub const UNSAFE_SIGNATURE: &str = "unsafe";

// =============================================================================
// Path defaults
// =============================================================================

/// Maximum number of base64 characters per encoded source chunk
pub const SOURCE_CHUNK_SIZE: usize = 16;

/// Output extension used until `format` is called
pub const DEFAULT_EXTENSION: &str = "jpg";
