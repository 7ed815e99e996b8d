use serde::{Deserialize, Serialize};

/// A single directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub phone: String,
    /// Optional, stored as an empty string when missing
    #[serde(default)]
    pub email: String,
}

impl Contact {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// A validated contact that has not been assigned an id yet.
///
/// Only produced by [`crate::validation::validate`], so every field is
/// already trimmed and satisfies the submission rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub(crate) name: String,
    pub(crate) phone: String,
    pub(crate) email: String,
}

impl NewContact {
    pub(crate) fn into_contact(self, id: u64) -> Contact {
        Contact {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
        }
    }
}
