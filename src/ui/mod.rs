//! User interface and presentation
//!
//! Text rendering of the slot panel, kept apart from the slot rules.

pub mod presenters;
