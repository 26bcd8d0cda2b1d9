//! Card-list projection of the directory.
//!
//! This module keeps a visual list of cards consistent with the directory's
//! current mapping. Each card holds the four displayed text fields of one
//! contact plus the email its actions are scoped to. The list owns its cards
//! directly: updates and removals address a card through the list rather
//! than re-deriving a lookup from display data.

use std::fmt;

use tracing::debug;

use crate::contact::Contact;
use crate::directory::Directory;

/// One rendered contact.
///
/// A card is created when its contact enters the view and destroyed when the
/// contact is deleted. Between those points its content changes only through
/// [`set_fields`](Self::set_fields), which patches the displayed text in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    name: String,
    second_name: String,
    phone: String,
    email: String,
}

impl Card {
    /// Build a card from a contact's current fields.
    #[must_use]
    pub fn new(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            second_name: contact.second_name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
        }
    }

    /// Replace the four displayed fields with the contact's current values.
    pub fn set_fields(&mut self, contact: &Contact) {
        self.name.clone_from(&contact.name);
        self.second_name.clone_from(&contact.second_name);
        self.phone.clone_from(&contact.phone);
        self.email.clone_from(&contact.email);
    }

    /// The email this card's actions are scoped to.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The displayed name fields, joined for single-line output.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.second_name)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.name, self.second_name)?;
        writeln!(f, "  phone: {}", self.phone)?;
        writeln!(f, "  email: {}", self.email)
    }
}

/// The visual list of cards, one per contact known at render time.
#[derive(Debug, Default)]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current cards and rebuild one per directory entry, in
    /// display order. An empty directory simply leaves the list empty.
    pub fn render_all(&mut self, directory: &Directory) {
        self.cards.clear();
        if directory.is_empty() {
            debug!("directory is empty; nothing to render");
            return;
        }
        self.cards.extend(directory.iter().map(Card::new));
    }

    /// Create a card for `contact` and attach it at the end of the list.
    pub fn append(&mut self, contact: &Contact) {
        self.cards.push(Card::new(contact));
    }

    /// Patch the displayed fields of the card identified by `email` in
    /// place, without destroying or re-creating the card.
    ///
    /// Returns `false` if no card carries that email.
    pub fn update(&mut self, email: &str, contact: &Contact) -> bool {
        match self.cards.iter_mut().find(|card| card.email == email) {
            Some(card) => {
                card.set_fields(contact);
                true
            }
            None => false,
        }
    }

    /// Detach the card identified by `email` from the list.
    ///
    /// Returns `false` if no card carries that email.
    pub fn detach(&mut self, email: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.email != email);
        self.cards.len() != before
    }

    /// Look up a card by email.
    #[must_use]
    pub fn get(&self, email: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.email == email)
    }

    /// Number of cards currently attached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the list holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Render the list as an aligned table with a header row.
    #[must_use]
    pub fn to_table(&self) -> String {
        const HEADERS: [&str; 4] = ["NAME", "SURNAME", "PHONE", "EMAIL"];

        let mut widths = HEADERS.map(str::len);
        for card in &self.cards {
            widths[0] = widths[0].max(card.name.len());
            widths[1] = widths[1].max(card.second_name.len());
            widths[2] = widths[2].max(card.phone.len());
            widths[3] = widths[3].max(card.email.len());
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{:<w0$}  {:<w1$}  {:<w2$}  {}\n",
            HEADERS[0],
            HEADERS[1],
            HEADERS[2],
            HEADERS[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        ));
        for card in &self.cards {
            out.push_str(&format!(
                "{:<w0$}  {:<w1$}  {:<w2$}  {}\n",
                card.name,
                card.second_name,
                card.phone,
                card.email,
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            ));
        }
        out
    }
}

impl fmt::Display for CardList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    fn ann() -> Contact {
        Contact::new("Ann", "Smith", "555-0100", "ann@example.com")
    }

    fn bob() -> Contact {
        Contact::new("Bob", "Jones", "555-0101", "bob@example.com")
    }

    fn directory_with(contacts: &[Contact]) -> Directory {
        let storage = Storage::open_in_memory().unwrap();
        let mut directory = Directory::load(storage).unwrap();
        for contact in contacts {
            directory.upsert(contact.clone()).unwrap();
        }
        directory
    }

    #[test]
    fn test_render_all_creates_one_card_per_entry() {
        let directory = directory_with(&[ann(), bob()]);
        let mut cards = CardList::new();

        cards.render_all(&directory);

        assert_eq!(cards.len(), 2);
        let emails: Vec<&str> = cards.iter().map(Card::email).collect();
        assert_eq!(emails, vec!["ann@example.com", "bob@example.com"]);
    }

    #[test]
    fn test_render_all_replaces_previous_cards() {
        let mut cards = CardList::new();
        cards.append(&ann());
        cards.append(&bob());

        let directory = directory_with(&[bob()]);
        cards.render_all(&directory);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards.iter().next().unwrap().email(), "bob@example.com");
    }

    #[test]
    fn test_render_all_empty_directory_leaves_list_empty() {
        let directory = directory_with(&[]);
        let mut cards = CardList::new();
        cards.append(&ann());

        cards.render_all(&directory);
        assert!(cards.is_empty());
    }

    #[test]
    fn test_append_and_get() {
        let mut cards = CardList::new();
        cards.append(&ann());

        let card = cards.get("ann@example.com").expect("card attached");
        assert_eq!(card.full_name(), "Ann Smith");
    }

    #[test]
    fn test_update_patches_fields_in_place() {
        let mut cards = CardList::new();
        cards.append(&ann());
        cards.append(&bob());

        let changed = Contact::new("Anna", "Smithson", "555-9999", "ann@example.com");
        assert!(cards.update("ann@example.com", &changed));

        // The card keeps its position in the list.
        let first = cards.iter().next().unwrap();
        assert_eq!(first.full_name(), "Anna Smithson");
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn test_update_unknown_email_returns_false() {
        let mut cards = CardList::new();
        cards.append(&ann());
        assert!(!cards.update("nobody@example.com", &bob()));
    }

    #[test]
    fn test_detach_removes_only_the_identified_card() {
        let mut cards = CardList::new();
        cards.append(&ann());
        cards.append(&bob());

        assert!(cards.detach("ann@example.com"));
        assert_eq!(cards.len(), 1);
        assert!(cards.get("ann@example.com").is_none());
        assert!(cards.get("bob@example.com").is_some());
    }

    #[test]
    fn test_detach_unknown_email_returns_false() {
        let mut cards = CardList::new();
        cards.append(&ann());
        assert!(!cards.detach("nobody@example.com"));
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_card_display_shows_all_fields() {
        let card = Card::new(&ann());
        let text = card.to_string();
        assert!(text.contains("Ann Smith"));
        assert!(text.contains("phone: 555-0100"));
        assert!(text.contains("email: ann@example.com"));
    }

    #[test]
    fn test_list_display_renders_cards_in_order() {
        let mut cards = CardList::new();
        cards.append(&ann());
        cards.append(&bob());

        let text = cards.to_string();
        let ann_pos = text.find("ann@example.com").unwrap();
        let bob_pos = text.find("bob@example.com").unwrap();
        assert!(ann_pos < bob_pos);
    }

    #[test]
    fn test_empty_list_displays_nothing() {
        let cards = CardList::new();
        assert_eq!(cards.to_string(), "");
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let mut cards = CardList::new();
        cards.append(&ann());

        let table = cards.to_table();
        let mut lines = table.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();

        assert!(header.starts_with("NAME"));
        assert!(header.contains("EMAIL"));
        assert!(row.contains("Ann"));
        assert!(row.contains("ann@example.com"));
    }

    #[test]
    fn test_table_columns_align() {
        let mut cards = CardList::new();
        cards.append(&ann());
        cards.append(&Contact::new("X", "Y", "1", "x@y.z"));

        let table = cards.to_table();
        let lines: Vec<&str> = table.lines().collect();
        // The email column starts at the same offset on every line.
        let header_offset = lines[0].find("EMAIL").unwrap();
        assert_eq!(lines[1].find("ann@example.com").unwrap(), header_offset);
        assert_eq!(lines[2].find("x@y.z").unwrap(), header_offset);
    }
}
