use clap::Parser;
use std::path::PathBuf;

use imgproxy_url::{Format, GravityKind, Proxy, ProxyConfig, ResizeType};

/// imgproxy-url - Build and sign imgproxy processing URLs
#[derive(Parser, Debug)]
#[command(name = "imgproxy-url")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source image URL
    source: String,

    /// Path to a YAML configuration file; inline flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Service base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Hex-encoded signing key
    #[arg(long)]
    key: Option<String>,

    /// Hex-encoded signing salt
    #[arg(long)]
    salt: Option<String>,

    /// Digest bytes kept in the signature
    #[arg(long)]
    signature_size: Option<i64>,

    /// Base64-encode the source URL
    #[arg(long)]
    encode: bool,

    #[arg(short = 'W', long)]
    width: Option<u32>,

    #[arg(short = 'H', long)]
    height: Option<u32>,

    #[arg(short, long)]
    quality: Option<f32>,

    /// Output format (png, jpg, webp, avif, gif, ico, bmp, tiff)
    #[arg(short, long)]
    format: Option<Format>,

    /// fit, fill, fill-down, force or auto
    #[arg(long)]
    resizing_type: Option<ResizeType>,

    /// Gravity token (no, so, ea, we, noea, nowe, soea, sowe, ce, sm)
    #[arg(short, long)]
    gravity: Option<GravityKind>,

    #[arg(long)]
    dpr: Option<f32>,

    #[arg(long)]
    blur: Option<f32>,

    #[arg(long)]
    sharpen: Option<f32>,

    #[arg(long)]
    rotate: Option<u32>,

    #[arg(long)]
    cachebuster: Option<String>,

    #[arg(long)]
    filename: Option<String>,

    #[arg(long)]
    preset: Option<String>,

    #[arg(long)]
    enlarge: bool,

    #[arg(long)]
    strip_metadata: bool,

    #[arg(long)]
    auto_rotate: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn load_config(&self) -> imgproxy_url::Result<ProxyConfig> {
        let mut config = match &self.config {
            Some(path) => ProxyConfig::from_file(path)?,
            None => ProxyConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(key) = &self.key {
            config.key = key.clone();
        }
        if let Some(salt) = &self.salt {
            config.salt = salt.clone();
        }
        if let Some(size) = self.signature_size {
            config.signature_size = size;
        }
        if self.encode {
            config.encode_source = true;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = imgproxy_url::logging::init_subscriber(args.json_logs) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = args.load_config().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    tracing::info!(
        base_url = %config.base_url,
        signing = config.signing_enabled(),
        encode_source = config.encode_source,
        "Configuration loaded"
    );

    let proxy = Proxy::new(config);
    let mut builder = proxy.builder();

    if let Some(rt) = args.resizing_type {
        builder = builder.resizing_type(rt);
    }
    if let Some(w) = args.width {
        builder = builder.width(w);
    }
    if let Some(h) = args.height {
        builder = builder.height(h);
    }
    if let Some(g) = args.gravity {
        builder = builder.gravity(g.into());
    }
    if let Some(q) = args.quality {
        builder = builder.quality(q);
    }
    if let Some(dpr) = args.dpr {
        builder = builder.dpr(dpr);
    }
    if let Some(sigma) = args.blur {
        builder = builder.blur(sigma);
    }
    if let Some(sigma) = args.sharpen {
        builder = builder.sharpen(sigma);
    }
    if let Some(rot) = args.rotate {
        builder = builder.rotate(rot);
    }
    if let Some(cb) = &args.cachebuster {
        builder = builder.cachebuster(cb);
    }
    if let Some(name) = &args.filename {
        builder = builder.filename(name);
    }
    if let Some(pr) = &args.preset {
        builder = builder.preset(pr);
    }
    if let Some(format) = args.format {
        builder = builder.format(format);
    }

    builder = builder
        .enlarge(args.enlarge)
        .strip_metadata(args.strip_metadata)
        .auto_rotate(args.auto_rotate);

    match builder.generate(&args.source) {
        Ok(url) => println!("{}", url),
        Err(e) => {
            eprintln!("Failed to generate URL: {}", e);
            std::process::exit(1);
        }
    }
}
