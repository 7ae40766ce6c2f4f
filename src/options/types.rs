//! Closed token sets understood by imgproxy
//!
//! Each enum renders to the exact token the server expects and parses back
//! from it, so values can come from config files or CLI flags.

use std::fmt;
use std::str::FromStr;

use crate::error::ImgproxyError;

/// Resizing behaviour (`rt`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeType {
    /// Resize keeping aspect ratio to fit the given size (default)
    #[default]
    Fit,
    /// Resize keeping aspect ratio to fill the given size, cropping the rest
    Fill,
    /// Like `Fill`, but never upscales
    FillDown,
    /// Resize without keeping aspect ratio
    Force,
    /// `Fill` when source and target orientation match, `Fit` otherwise
    Auto,
}

impl ResizeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
            Self::FillDown => "fill-down",
            Self::Force => "force",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for ResizeType {
    type Err = ImgproxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fit" => Ok(ResizeType::Fit),
            "fill" => Ok(ResizeType::Fill),
            "fill-down" => Ok(ResizeType::FillDown),
            "force" => Ok(ResizeType::Force),
            "auto" => Ok(ResizeType::Auto),
            _ => Err(ImgproxyError::config(format!(
                "unknown resizing type: {}",
                s
            ))),
        }
    }
}

/// Gravity/anchor point for crop, extend and the `g` option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityKind {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    #[default]
    Center,
    /// Content-aware smart gravity, never takes offsets
    Smart,
    /// Focus point given as fractions of width and height
    FocusPoint,
}

impl GravityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "no",
            Self::South => "so",
            Self::East => "ea",
            Self::West => "we",
            Self::NorthEast => "noea",
            Self::NorthWest => "nowe",
            Self::SouthEast => "soea",
            Self::SouthWest => "sowe",
            Self::Center => "ce",
            Self::Smart => "sm",
            Self::FocusPoint => "fp",
        }
    }
}

impl FromStr for GravityKind {
    type Err = ImgproxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no" | "north" => Ok(GravityKind::North),
            "so" | "south" => Ok(GravityKind::South),
            "ea" | "east" => Ok(GravityKind::East),
            "we" | "west" => Ok(GravityKind::West),
            "noea" | "northeast" => Ok(GravityKind::NorthEast),
            "nowe" | "northwest" => Ok(GravityKind::NorthWest),
            "soea" | "southeast" => Ok(GravityKind::SouthEast),
            "sowe" | "southwest" => Ok(GravityKind::SouthWest),
            "ce" | "center" => Ok(GravityKind::Center),
            "sm" | "smart" => Ok(GravityKind::Smart),
            "fp" | "focus" => Ok(GravityKind::FocusPoint),
            _ => Err(ImgproxyError::config(format!("unknown gravity: {}", s))),
        }
    }
}

/// Output image format, carried as the URL extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    Png,
    #[default]
    Jpg,
    WebP,
    Avif,
    Gif,
    Ico,
    Bmp,
    Tiff,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::WebP => "webp",
            Self::Avif => "avif",
            Self::Gif => "gif",
            Self::Ico => "ico",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
        }
    }
}

impl FromStr for Format {
    type Err = ImgproxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(Format::Png),
            "jpg" | "jpeg" => Ok(Format::Jpg),
            "webp" => Ok(Format::WebP),
            "avif" => Ok(Format::Avif),
            "gif" => Ok(Format::Gif),
            "ico" => Ok(Format::Ico),
            "bmp" => Ok(Format::Bmp),
            "tiff" => Ok(Format::Tiff),
            _ => Err(ImgproxyError::config(format!("unknown format: {}", s))),
        }
    }
}

macro_rules! display_as_token {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_token!(ResizeType, GravityKind, Format);
