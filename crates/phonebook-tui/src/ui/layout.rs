// Layout constants for the directory screen

/// Standard horizontal padding for content areas
pub const CONTENT_PADDING_H: u16 = 2;

/// Title line
pub const HEADER_HEIGHT: u16 = 2;

/// Bordered single-line input (top border + text + bottom border)
pub const INPUT_HEIGHT: u16 = 3;

/// "Showing N results" line
pub const RESULTS_LINE_HEIGHT: u16 = 1;

/// Lines per contact card (name, phone, email, spacer)
pub const CONTACT_CARD_HEIGHT: u16 = 4;

/// Contacts moved per PageUp/PageDown
pub const CONTACT_PAGE_SIZE: usize = 5;

/// Add-contact form: heading, three inputs, validation line
pub const FORM_HEIGHT: u16 = 1 + 3 * INPUT_HEIGHT + 1;

/// Key hints
pub const FOOTER_HEIGHT: u16 = 1;
