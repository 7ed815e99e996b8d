/// Where the contact list is read from when nothing else is configured
pub const DEFAULT_CONTACTS_SOURCE: &str = "public/data/contacts.json";

/// Minimum number of characters in a trimmed contact name
pub const MIN_NAME_CHARS: usize = 2;

/// Shown whenever a submitted draft breaks at least one rule
pub const INVALID_CONTACT_MESSAGE: &str =
    "Name must be at least 2 characters, phone is required, and email must contain @.";

/// Env var naming a file that receives debug logs
pub const LOG_FILE_ENV: &str = "PHONEBOOK_LOG_FILE";
