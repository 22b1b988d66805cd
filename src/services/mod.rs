//! Slot services
//!
//! The slot manager owns the slot collection and its change notifications.

pub mod listeners;
pub mod slot_manager;
