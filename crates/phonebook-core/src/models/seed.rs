use super::Contact;

/// Fallback contacts shown before the load completes and after it fails
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new(1, "Nabil Hasan", "(555) 010-0101", "nabil.hasan@example.com"),
        Contact::new(2, "Hasib Shaif", "(555) 010-0102", "hasib.shaif@example.com"),
        Contact::new(3, "Maya Rahman", "(555) 010-0103", "maya.rahman@example.com"),
    ]
}
