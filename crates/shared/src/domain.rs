use serde::{Deserialize, Serialize};

/// One notable birth as returned by the on-this-day feed.
///
/// `text` is the identity key: two records with the same text are the same
/// birthday, both inside one result set and inside the favourites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Birthday {
    pub text: String,
    pub year: i32,
}

impl Birthday {
    pub fn new(text: impl Into<String>, year: i32) -> Self {
        Self {
            text: text.into(),
            year,
        }
    }
}

/// Ordered result of a single lookup. Order is display order.
pub type BirthdayList = Vec<Birthday>;

/// A birthday tagged with the label of the date that was active when it was
/// favourited, e.g. `"February 14"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Favourite {
    pub text: String,
    pub year: i32,
    pub date: String,
}

impl Favourite {
    pub fn from_birthday(birthday: &Birthday, date: impl Into<String>) -> Self {
        Self {
            text: birthday.text.clone(),
            year: birthday.year,
            date: date.into(),
        }
    }

    pub fn birthday(&self) -> Birthday {
        Birthday::new(self.text.clone(), self.year)
    }

    /// `"{text} - {year}"`, the line used by the favourites panel.
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.text, self.year)
    }
}
