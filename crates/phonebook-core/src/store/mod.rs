pub mod contact_store;

pub use contact_store::{ContactStore, LoadState};
