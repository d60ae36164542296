//! User persistence adapters

pub mod user_store;

pub use user_store::JsonUserStore;
