//! Fluent builder for processing URLs
//!
//! Each option method appends at most one segment, in call order. Options
//! with no-op or out-of-range arguments are dropped without an error, so a
//! chain always produces a URL the server can parse.
//!
//! ```
//! use imgproxy_url::{Format, Proxy, ProxyConfig};
//!
//! let proxy = Proxy::new(ProxyConfig::new("http://localhost:8080"));
//! let url = proxy
//!     .builder()
//!     .width(300)
//!     .height(200)
//!     .format(Format::WebP)
//!     .generate("http://src/a.png")
//!     .unwrap();
//! assert_eq!(url, "http://localhost:8080/unsafe/w:300/h:200/http://src/a.png.webp");
//! ```

use crate::error::Result;
use crate::options::serialize;
use crate::options::{Background, Format, Gravity, ResizeType, TrimArgs};
use crate::proxy::Proxy;
use crate::signer::{build_path, encode_source_url, sign_path};

/// Accumulates option segments for one generated URL
///
/// Segments are not deduplicated: calling `width` twice yields two `w:`
/// segments and the server decides which one wins.
#[derive(Debug, Clone)]
pub struct Builder<'a> {
    proxy: &'a Proxy,
    segments: Vec<String>,
    extension: Format,
}

impl<'a> Builder<'a> {
    pub fn new(proxy: &'a Proxy) -> Self {
        Self {
            proxy,
            segments: Vec::new(),
            extension: Format::default(),
        }
    }

    fn push(mut self, token: &'static str, segment: Option<String>) -> Self {
        match segment {
            Some(segment) if !segment.contains('/') => self.segments.push(segment),
            Some(_) => tracing::trace!(option = token, "Dropping option containing '/'"),
            None => tracing::trace!(option = token, "Dropping no-op option"),
        }
        self
    }

    // ===============================
    // Sizes
    // ===============================

    pub fn width(self, w: u32) -> Self {
        self.push("w", serialize::positive_uint("w", w))
    }

    pub fn height(self, h: u32) -> Self {
        self.push("h", serialize::positive_uint("h", h))
    }

    pub fn min_width(self, mw: u32) -> Self {
        self.push("mw", serialize::positive_uint("mw", mw))
    }

    pub fn min_height(self, mh: u32) -> Self {
        self.push("mh", serialize::positive_uint("mh", mh))
    }

    /// Upper bound on the result size in bytes; imgproxy lowers quality to fit
    pub fn max_bytes(self, mb: u32) -> Self {
        self.push("mb", serialize::positive_uint("mb", mb))
    }

    /// Multiplies the result dimensions for HiDPI screens
    pub fn dpr(self, dpr: f32) -> Self {
        self.push("dpr", serialize::positive_float("dpr", dpr))
    }

    pub fn zoom(self, factors: &[f32]) -> Self {
        self.push("z", serialize::zoom(factors))
    }

    pub fn resizing_type(self, rt: ResizeType) -> Self {
        self.push("rt", Some(serialize::resizing_type(rt)))
    }

    pub fn enlarge(self, el: bool) -> Self {
        self.push("el", serialize::flag("el", el))
    }

    // ===============================
    // Geometry
    // ===============================

    pub fn gravity(self, g: Gravity) -> Self {
        self.push("g", Some(serialize::gravity(&g)))
    }

    /// Crop before resizing; sizes below 1 are read as fractions of the source
    pub fn crop(self, width: f32, height: f32, gravity: Option<Gravity>) -> Self {
        self.push("c", serialize::crop(width, height, gravity.as_ref()))
    }

    pub fn extend(self, ex: bool, gravity: Option<Gravity>) -> Self {
        self.push("ex", serialize::extend(ex, gravity.as_ref()))
    }

    /// 1 to 4 values in CSS order; any other count is dropped
    pub fn padding(self, sides: &[i32]) -> Self {
        self.push("pd", serialize::padding(sides))
    }

    pub fn trim(self, threshold: f32, args: TrimArgs<'_>) -> Self {
        self.push("t", serialize::trim(threshold, args))
    }

    /// Only multiples of 90 are kept, after reducing modulo 360
    pub fn rotate(self, rot: u32) -> Self {
        self.push("rot", serialize::rotate(rot))
    }

    pub fn auto_rotate(self, ar: bool) -> Self {
        self.push("ar", serialize::flag("ar", ar))
    }

    // ===============================
    // Effects
    // ===============================

    pub fn background(self, bg: impl Into<Background>) -> Self {
        self.push("bg", serialize::background(&bg.into()))
    }

    pub fn background_hex(self, hex: &str) -> Self {
        self.background(Background::Hex(hex.to_string()))
    }

    pub fn background_rgb(self, r: i64, g: i64, b: i64) -> Self {
        self.background(Background::Rgb(r, g, b))
    }

    pub fn blur(self, sigma: f32) -> Self {
        self.push("bl", serialize::positive_float("bl", sigma))
    }

    pub fn sharpen(self, sigma: f32) -> Self {
        self.push("sh", serialize::positive_float("sh", sigma))
    }

    pub fn pixelate(self, pix: u32) -> Self {
        self.push("pix", serialize::positive_uint("pix", pix))
    }

    // ===============================
    // Output
    // ===============================

    /// Accepted when `0 < q <= 100`
    pub fn quality(self, q: f32) -> Self {
        self.push("q", serialize::quality(q))
    }

    /// Sets the URL extension; adds no segment
    pub fn format(mut self, ext: Format) -> Self {
        self.extension = ext;
        self
    }

    pub fn strip_metadata(self, sm: bool) -> Self {
        self.push("sm", serialize::flag("sm", sm))
    }

    pub fn keep_copyright(self, kcr: bool) -> Self {
        self.push("kcr", serialize::flag("kcr", kcr))
    }

    pub fn enforce_thumbnail(self, eth: bool) -> Self {
        self.push("eth", serialize::flag("eth", eth))
    }

    pub fn return_attachment(self, att: bool) -> Self {
        self.push("att", serialize::flag("att", att))
    }

    /// Content-Disposition filename
    pub fn filename(self, name: &str) -> Self {
        self.push("fn", serialize::non_empty("fn", name))
    }

    // ===============================
    // Delivery
    // ===============================

    /// Unix timestamp after which the server answers 404; past values are dropped
    pub fn expires(self, exp: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        self.push("exp", serialize::expires(exp, now))
    }

    pub fn cachebuster(self, cb: &str) -> Self {
        self.push("cb", serialize::non_empty("cb", cb))
    }

    pub fn preset(self, pr: &str) -> Self {
        self.push("pr", serialize::non_empty("pr", pr))
    }

    // ===============================
    // Output URL
    // ===============================

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn extension(&self) -> Format {
        self.extension
    }

    /// Canonical unsigned path for `source_url`
    pub fn path(&self, source_url: &str) -> String {
        let config = self.proxy.config();
        let source_part = if config.encode_source {
            encode_source_url(source_url)
        } else {
            source_url.to_string()
        };
        build_path(&self.segments, &source_part, self.extension.as_str())
    }

    /// Assemble, sign and return the full URL
    ///
    /// # Errors
    /// * `ImgproxyError::InvalidKey` / `InvalidSalt` if signing is enabled
    ///   and the key or salt is not hex
    pub fn generate(&self, source_url: &str) -> Result<String> {
        let config = self.proxy.config();
        let path = self.path(source_url);
        let signature = sign_path(config, &path)?;

        tracing::debug!(
            segments = self.segments.len(),
            signed = config.signing_enabled(),
            encoded = config.encode_source,
            "Generated imgproxy URL"
        );

        Ok(format!("{}/{}{}", config.base_url, signature, path))
    }
}
