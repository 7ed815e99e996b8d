//! Draft state for the add-contact form
//!
//! The draft is edited keystroke by keystroke and only becomes a contact once
//! it passes validation.

/// Which draft field an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Phone,
    Email,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::Phone, DraftField::Email];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Phone => "Phone",
            DraftField::Email => "Email",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::Name => "At least 2 characters",
            DraftField::Phone => "(555) 555-5555",
            DraftField::Email => "name@example.com",
        }
    }

    /// Next field, or None when this is the last one
    pub fn next(&self) -> Option<DraftField> {
        match self {
            DraftField::Name => Some(DraftField::Phone),
            DraftField::Phone => Some(DraftField::Email),
            DraftField::Email => None,
        }
    }

    /// Previous field, or None when this is the first one
    pub fn prev(&self) -> Option<DraftField> {
        match self {
            DraftField::Name => None,
            DraftField::Phone => Some(DraftField::Name),
            DraftField::Email => Some(DraftField::Phone),
        }
    }
}

/// Unsaved contact input, independent of the store until submission succeeds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl DraftContact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Phone => &self.phone,
            DraftField::Email => &self.email,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Phone => &mut self.phone,
            DraftField::Email => &mut self.email,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Reset every field to an empty string
    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.email.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_navigation() {
        assert_eq!(DraftField::Name.next(), Some(DraftField::Phone));
        assert_eq!(DraftField::Email.next(), None);
        assert_eq!(DraftField::Name.prev(), None);
        assert_eq!(DraftField::Email.prev(), Some(DraftField::Phone));
    }

    #[test]
    fn test_set_and_clear() {
        let mut draft = DraftContact::new();
        draft.set(DraftField::Name, "Al");
        draft.field_mut(DraftField::Phone).push('5');
        assert_eq!(draft.get(DraftField::Name), "Al");
        assert_eq!(draft.phone, "5");
        assert!(!draft.is_empty());

        draft.clear();
        assert_eq!(draft, DraftContact::default());
        assert!(draft.is_empty());
    }
}
