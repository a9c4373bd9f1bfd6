pub mod inventory;
pub mod output;
pub mod walker;
