//! Favourites: an ordered collection keyed by birthday text.

use shared::domain::{Birthday, Favourite};

/// Outcome of [`Favourites::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    Added(Favourite),
    Removed(Favourite),
}

/// Ordered favourites. No two entries share the same `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favourites {
    entries: Vec<Favourite>,
}

impl Favourites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the entry with the same text, whatever date it was stored
    /// under, or appends `birthday` labelled with `active_date_label`.
    pub fn toggle(&mut self, birthday: &Birthday, active_date_label: &str) -> Toggle {
        debug_assert!(!birthday.text.is_empty(), "birthday text must not be empty");

        match self.position(&birthday.text) {
            Some(index) => Toggle::Removed(self.entries.remove(index)),
            None => {
                let favourite = Favourite::from_birthday(birthday, active_date_label);
                self.entries.push(favourite.clone());
                Toggle::Added(favourite)
            }
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.position(text).is_some()
    }

    pub fn as_slice(&self) -> &[Favourite] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Favourite> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, text: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.text == text)
    }
}

#[cfg(test)]
#[path = "tests/favourites_tests.rs"]
mod tests;
