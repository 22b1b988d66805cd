//! Logistics Station Slot Editor
//!
//! Models the storage slots of the three logistics station kinds
//! (planetary, interstellar, distributor) and enforces their limits while a
//! user edits them.
//!
//! # Modules
//!
//! - [`models`] - Station kinds, slot records, validation errors
//! - [`services`] - Slot manager and listener registry
//! - [`inspector`] - Editing session driven by text commands
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Text rendering of the slot panel
//! - [`config`] / [`cli`] / [`logging`] - Binary plumbing
//!
//! # Example
//!
//! ```rust
//! use station_slots::{SlotManager, StationKind};
//!
//! let mut manager = SlotManager::new();
//! manager.initialize(StationKind::Interstellar, 12);
//! manager.set_item(0, 1101);
//! manager.set_mode(0, 1);
//! manager.toggle_local_remote(0);
//! assert_eq!(manager.slot(0).unwrap().describe_mode(), "Remote Supply");
//! ```

pub mod cli;
pub mod config;
pub mod inspector;
pub mod io;
pub mod logging;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use inspector::{CommandOutcome, SlotCommand, SlotInspector};
pub use models::errors::{EditorError, EditorResult, SlotValidationError};
pub use models::slot::SlotRecord;
pub use models::station::StationKind;
pub use services::listeners::ListenerId;
pub use services::slot_manager::{SlotManager, ValidationSummary};
