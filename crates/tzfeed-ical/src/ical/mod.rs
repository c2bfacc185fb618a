//! Line-oriented iCalendar transform engine.
//!
//! This module rewrites an upstream ICS feed so that every date-time
//! property carries an explicit timezone:
//! - Parse: line unfolding and content line tokenization
//! - Transform: date-time rewriting, VTIMEZONE synthesis, event
//!   normalization
//! - Build: content line folding at 75 characters
//!
//! The engine deliberately stays line-oriented instead of building a
//! full component tree: the upstream feed is trusted to be reasonably
//! well-formed, and unrecognized lines must survive byte-identical.

pub mod build;
pub mod core;
pub mod parse;
pub mod transform;


pub use transform::{TransformOptions, transform};
