//! Core content line model.
//!
//! These types represent one logical (unfolded) line. They are designed
//! for round-trip fidelity: parameters keep their raw text so that a
//! line the transform does not touch is re-emitted byte-identical.

mod line;
mod parameter;

pub use line::PropertyLine;
pub use parameter::Parameter;
