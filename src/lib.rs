// imgproxy URL builder and signer library
//
// Assembles processing-option path segments, optionally base64-chunks the
// source URL, and signs the resulting path with HMAC-SHA256.

pub mod builder;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod options;
pub mod proxy;
pub mod signer;

pub use builder::Builder;
pub use config::ProxyConfig;
pub use error::{ImgproxyError, Result};
pub use options::{
    gravity, Background, Format, Gravity, GravityArgs, GravityKind, ResizeType, TrimArgs,
};
pub use proxy::Proxy;
