//! Gravity values with optional offsets
//!
//! Offsets are validated when the value is built. Anything the server would
//! reject (a focus point outside `[0, 1]`, negative pixel offsets, offsets
//! of the wrong numeric kind) is dropped and the gravity renders as its bare
//! token.

use std::fmt;

use super::serialize::clean_float;
use super::types::GravityKind;

/// Raw coordinate arguments passed to [`gravity`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GravityArgs {
    #[default]
    None,
    /// Pixel offsets for every kind except `sm` and `fp`
    Offset(i64, i64),
    /// Fractional coordinates for `fp`
    Focus(f64, f64),
}

/// Coordinates that passed validation for their gravity kind
#[derive(Debug, Clone, Copy, PartialEq)]
enum Coords {
    Offset(u64, u64),
    Focus(f64, f64),
}

/// Anchor argument accepted by `gravity`, `crop` and `extend`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    kind: GravityKind,
    coords: Option<Coords>,
}

/// Build a gravity value, keeping the coordinates only if they are valid
/// for `kind`
pub fn gravity(kind: GravityKind, args: GravityArgs) -> Gravity {
    let coords = match (kind, args) {
        (GravityKind::FocusPoint, GravityArgs::Focus(x, y))
            if (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y) =>
        {
            Some(Coords::Focus(x, y))
        }
        (GravityKind::FocusPoint, _) => None,
        (_, GravityArgs::Offset(x, y)) => match (u64::try_from(x), u64::try_from(y)) {
            (Ok(x), Ok(y)) => Some(Coords::Offset(x, y)),
            _ => None,
        },
        _ => None,
    };

    Gravity { kind, coords }
}

impl Gravity {
    /// Bare gravity without offsets
    pub fn new(kind: GravityKind) -> Self {
        gravity(kind, GravityArgs::None)
    }

    /// Focus-point gravity (`fp:x:y`)
    pub fn focus(x: f64, y: f64) -> Self {
        gravity(GravityKind::FocusPoint, GravityArgs::Focus(x, y))
    }

    /// Gravity with pixel offsets (`kind:x:y`)
    pub fn offset(kind: GravityKind, x: i64, y: i64) -> Self {
        gravity(kind, GravityArgs::Offset(x, y))
    }

    pub fn kind(&self) -> GravityKind {
        self.kind
    }

    pub fn has_offsets(&self) -> bool {
        self.coords.is_some()
    }
}

impl From<GravityKind> for Gravity {
    fn from(kind: GravityKind) -> Self {
        Gravity::new(kind)
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.coords) {
            (GravityKind::Smart, _) | (_, None) => f.write_str(self.kind.as_str()),
            (_, Some(Coords::Focus(x, y))) => {
                write!(f, "{}:{}:{}", self.kind, clean_float(x), clean_float(y))
            }
            (_, Some(Coords::Offset(x, y))) => write!(f, "{}:{}:{}", self.kind, x, y),
        }
    }
}
