//! Game rules: placement legality and scoring.
//!
//! `validate` checks a `Placement` against the board and letter table and
//! hands back a `ValidMove`; `ValidMove::apply` writes it and returns the
//! points earned. The turn controller never touches the board any other way.

pub mod placement;
pub mod scoring;

pub use placement::{validate, Span, ValidMove};
