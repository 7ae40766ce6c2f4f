//! Processing options and their path-segment serialization
//!
//! Segments follow the imgproxy processing-option syntax:
//!
//! ```text
//! /w:300/h:200/rt:fill/g:fp:0.5:0.25/q:85/...
//! ```
//!
//! Each option has a short token and validates its own arguments. Invalid
//! arguments never raise an error; the option simply contributes no segment.

pub mod gravity;
pub mod serialize;
pub mod types;

pub use gravity::{gravity, Gravity, GravityArgs};
pub use serialize::{clean_float, Background, TrimArgs};
pub use types::{Format, GravityKind, ResizeType};
