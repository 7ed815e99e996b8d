pub mod config;
pub mod constants;
pub mod loader;
pub mod models;
pub mod search;
pub mod state;
pub mod store;
pub mod validation;
pub mod view;

pub use loader::{ContactSource, LoadError, LoadPoll, LoadTask};
pub use models::{Contact, DraftContact, DraftField, NewContact};
pub use state::{Action, DirectoryState, Outcome};
pub use store::{ContactStore, LoadState};
pub use view::DirectoryView;
