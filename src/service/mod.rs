//! InventoryService: envelope-producing CRUD over an injected item store.

mod inventory;
mod validation;
pub use inventory::{
    InventoryService, Lookup, CREATE_FAILED, DELETE_FAILED, GET_ALL_FAILED, GET_FAILED, UPDATE_FAILED,
};
pub use validation::RequestValidator;
