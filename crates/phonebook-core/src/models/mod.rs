pub mod contact;
pub mod draft;
pub mod seed;

pub use contact::{Contact, NewContact};
pub use draft::{DraftContact, DraftField};
pub use seed::seed_contacts;
