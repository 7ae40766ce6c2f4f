//! Per-option segment serialization
//!
//! Every function here is pure: it validates its arguments and returns the
//! `<token>:<args>` segment, or `None` when the option would be a no-op or
//! is out of range. Callers drop `None` silently.

use super::gravity::Gravity;
use super::types::ResizeType;

/// Render a float with six fractional digits, then strip trailing zeros
/// and a trailing `.` (`1.500000` -> `1.5`, `2.000000` -> `2`)
pub fn clean_float(value: f64) -> String {
    let formatted = format!("{:.6}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Integer boolean form used by flag options
pub fn bool_to_int(value: bool) -> u8 {
    u8::from(value)
}

/// String boolean form used inside `t` arguments: `1` or empty
pub fn bool_to_str(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        ""
    }
}

/// Background color argument (`bg`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// Hex color string, passed through as given
    Hex(String),
    /// Red, green and blue channels; each must lie in `0..=255`
    Rgb(i64, i64, i64),
}

impl From<&str> for Background {
    fn from(hex: &str) -> Self {
        Background::Hex(hex.to_string())
    }
}

impl From<String> for Background {
    fn from(hex: String) -> Self {
        Background::Hex(hex)
    }
}

impl From<(u8, u8, u8)> for Background {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Background::Rgb(r.into(), g.into(), b.into())
    }
}

/// Optional trailing arguments of `t` (trim), in positional order
///
/// The two-argument form appends `equal_hor` in integer form and only when
/// true; the three-argument form appends both flags in string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimArgs<'a> {
    #[default]
    None,
    Color(&'a str),
    ColorHor(&'a str, bool),
    ColorHorVer(&'a str, bool, bool),
}

impl<'a> TrimArgs<'a> {
    fn color(&self) -> Option<&'a str> {
        match *self {
            TrimArgs::None => None,
            TrimArgs::Color(c) | TrimArgs::ColorHor(c, _) | TrimArgs::ColorHorVer(c, _, _) => {
                Some(c)
            }
        }
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 6 && hex::decode(color).is_ok()
}

/// `<token>:<uint>` for strictly positive integers (`w`, `h`, `mw`, `mh`, `mb`, `pix`)
pub fn positive_uint(token: &str, value: u32) -> Option<String> {
    (value > 0).then(|| format!("{}:{}", token, value))
}

/// `<token>:<float>` for strictly positive floats (`dpr`, `bl`, `sh`)
pub fn positive_float(token: &str, value: f32) -> Option<String> {
    (value > 0.0).then(|| format!("{}:{}", token, clean_float(value.into())))
}

/// `<token>:<string>` for non-empty strings (`fn`, `cb`, `pr`)
pub fn non_empty(token: &str, value: &str) -> Option<String> {
    (!value.is_empty()).then(|| format!("{}:{}", token, value))
}

/// `<token>:1` when the flag is set (`ar`, `eth`, `el`, `kcr`, `sm`, `att`)
pub fn flag(token: &str, enabled: bool) -> Option<String> {
    enabled.then(|| format!("{}:{}", token, bool_to_int(enabled)))
}

pub fn quality(q: f32) -> Option<String> {
    (q > 0.0 && q <= 100.0).then(|| format!("q:{}", clean_float(q.into())))
}

/// Only quarter turns survive; everything else is treated as no rotation
pub fn rotate(degrees: u32) -> Option<String> {
    let degrees = degrees % 360;
    (degrees % 90 == 0 && degrees > 0).then(|| format!("rot:{}", degrees))
}

/// Expiry timestamps already in the past (relative to `now`) are dropped
pub fn expires(timestamp: i64, now: i64) -> Option<String> {
    (timestamp > now).then(|| format!("exp:{}", timestamp))
}

pub fn resizing_type(rt: ResizeType) -> String {
    format!("rt:{}", rt)
}

pub fn gravity(g: &Gravity) -> String {
    format!("g:{}", g)
}

pub fn background(bg: &Background) -> Option<String> {
    match bg {
        Background::Hex(hex) => non_empty("bg", hex),
        Background::Rgb(r, g, b) => {
            let channel = 0..=255;
            (channel.contains(r) && channel.contains(g) && channel.contains(b))
                .then(|| format!("bg:{}:{}:{}", r, g, b))
        }
    }
}

pub fn crop(width: f32, height: f32, gravity: Option<&Gravity>) -> Option<String> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let mut segment = format!(
        "c:{}:{}",
        clean_float(width.into()),
        clean_float(height.into())
    );
    if let Some(g) = gravity {
        segment.push(':');
        segment.push_str(&g.to_string());
    }
    Some(segment)
}

pub fn extend(enabled: bool, gravity: Option<&Gravity>) -> Option<String> {
    let mut segment = flag("ex", enabled)?;
    if let Some(g) = gravity {
        segment.push(':');
        segment.push_str(&g.to_string());
    }
    Some(segment)
}

/// One to four sides, CSS order (top, right, bottom, left)
pub fn padding(sides: &[i32]) -> Option<String> {
    if sides.is_empty() || sides.len() > 4 {
        return None;
    }
    let args: Vec<String> = sides.iter().map(|s| s.to_string()).collect();
    Some(format!("pd:{}", args.join(":")))
}

/// Either one factor for both axes or separate x and y factors
pub fn zoom(factors: &[f32]) -> Option<String> {
    match factors {
        [both] => Some(format!("z:{}", clean_float((*both).into()))),
        [x, y] => Some(format!(
            "z:{}:{}",
            clean_float((*x).into()),
            clean_float((*y).into())
        )),
        _ => None,
    }
}

pub fn trim(threshold: f32, args: TrimArgs<'_>) -> Option<String> {
    if !(threshold > 0.0) {
        return None;
    }

    let mut segment = format!("t:{}", clean_float(threshold.into()));

    if let Some(color) = args.color().filter(|c| is_hex_color(c)) {
        segment.push(':');
        segment.push_str(color);
    }

    match args {
        TrimArgs::ColorHor(_, true) => {
            segment.push(':');
            segment.push_str(&bool_to_int(true).to_string());
        }
        TrimArgs::ColorHorVer(_, hor, ver) => {
            segment.push(':');
            segment.push_str(bool_to_str(hor));
            segment.push(':');
            segment.push_str(bool_to_str(ver));
        }
        _ => {}
    }

    Some(segment.trim_end_matches(':').to_string())
}
