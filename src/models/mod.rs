//! Domain models
//!
//! Station kinds with their lookup tables, the slot record and its
//! validation rules. Models hold no listeners and no collection state.

pub mod constants;
pub mod errors;
pub mod slot;
pub mod station;
