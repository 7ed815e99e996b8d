//! Contact search.
//!
//! A contact matches when its name contains the query ignoring case, or its
//! phone contains the query exactly. Phone numbers have no case, so they are
//! compared as typed.

use crate::models::Contact;

/// Check whether a single contact matches the query
pub fn matches_query(contact: &Contact, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name_contains(&contact.name, query) || contact.phone.contains(query)
}

/// Case-insensitive substring check on the name
fn name_contains(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Filter contacts by query, keeping input order.
///
/// An empty query returns every contact.
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|contact| matches_query(contact, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new(1, "Nabil Hasan", "(555) 010-0101", "nabil@example.com"),
            Contact::new(2, "hasib shaif", "(555) 010-0102", ""),
            Contact::new(3, "Maya Rahman", "777-1234", "maya@example.com"),
        ]
    }

    fn ids(contacts: &[&Contact]) -> Vec<u64> {
        contacts.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let contacts = sample();
        let filtered = filter_contacts(&contacts, "");
        assert_eq!(ids(&filtered), vec![1, 2, 3]);
        assert!(filtered
            .iter()
            .zip(contacts.iter())
            .all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_name_match_ignores_case() {
        let contacts = sample();
        assert_eq!(ids(&filter_contacts(&contacts, "NABIL")), vec![1]);
        assert_eq!(ids(&filter_contacts(&contacts, "SHAIF")), vec![2]);
        assert_eq!(ids(&filter_contacts(&contacts, "an")), vec![1, 3]);
    }

    #[test]
    fn test_phone_match_is_literal() {
        let contacts = sample();
        assert_eq!(ids(&filter_contacts(&contacts, "555) 010-0101")), vec![1]);
        assert_eq!(ids(&filter_contacts(&contacts, "(555)")), vec![1, 2]);
        assert!(filter_contacts(&contacts, "5550100101").is_empty());
    }

    #[test]
    fn test_email_is_not_searched() {
        let contacts = sample();
        assert!(filter_contacts(&contacts, "example.com").is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let contacts = sample();
        for query in ["a", "0", "1", "h", "zz", "Rah"] {
            let filtered = filter_contacts(&contacts, query);
            let positions: Vec<usize> = filtered
                .iter()
                .map(|c| contacts.iter().position(|x| x.id == c.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {query}");
            assert!(filtered.iter().all(|c| matches_query(c, query)));
        }
    }

    #[test]
    fn test_filter_is_repeatable() {
        let contacts = sample();
        assert_eq!(
            filter_contacts(&contacts, "has"),
            filter_contacts(&contacts, "has")
        );
    }
}
