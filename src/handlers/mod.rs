//! HTTP handlers for the inventory resource.

pub mod inventory;
pub use inventory::*;
