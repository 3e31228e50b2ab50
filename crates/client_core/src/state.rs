//! Reducer-style state transitions. No I/O happens here: the runtime in
//! [`crate::store`] applies actions and performs whatever the returned
//! [`Outcome`] asks for.

use chrono::NaiveDate;
use shared::{
    domain::{Birthday, BirthdayList},
    error::{FetchError, FETCH_ERROR_MESSAGE},
};

use crate::{
    favourites::{Favourites, Toggle},
    grouping::{group_by_date, GroupedView},
    selection::{DateSelection, MonthDay},
};

/// Monotonic id of an issued lookup. Only the latest one may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Lifecycle of the lookup for the selected date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(BirthdayList),
    Error(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn birthdays(&self) -> Option<&[Birthday]> {
        match self {
            Self::Success(list) => Some(list.as_slice()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Action {
    SelectDate(Option<NaiveDate>),
    FetchResolved {
        request: RequestId,
        result: Result<BirthdayList, FetchError>,
    },
    ToggleFavourite(Birthday),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored,
    /// State is now `Loading`; the caller must look up `key` under `request`.
    Fetch { request: RequestId, key: MonthDay },
    /// The latest lookup committed its result.
    Resolved,
    /// A superseded lookup resolved and was dropped.
    Stale { request: RequestId },
    Toggled(Toggle),
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    selection: Option<DateSelection>,
    fetch: FetchState,
    favourites: Favourites,
    issued: u64,
    latest: Option<RequestId>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&mut self, action: Action) -> Outcome {
        match action {
            Action::SelectDate(None) => Outcome::Ignored,
            Action::SelectDate(Some(date)) => {
                let selection = DateSelection::new(date);
                let key = selection.key.clone();
                self.issued += 1;
                let request = RequestId(self.issued);
                self.selection = Some(selection);
                self.latest = Some(request);
                self.fetch = FetchState::Loading;
                Outcome::Fetch { request, key }
            }
            Action::FetchResolved { request, result } => {
                if self.latest != Some(request) || !self.fetch.is_loading() {
                    return Outcome::Stale { request };
                }
                self.fetch = match result {
                    Ok(list) => FetchState::Success(list),
                    Err(_) => FetchState::Error(FETCH_ERROR_MESSAGE.to_string()),
                };
                Outcome::Resolved
            }
            Action::ToggleFavourite(birthday) => match &self.selection {
                Some(selection) => {
                    Outcome::Toggled(self.favourites.toggle(&birthday, &selection.label))
                }
                None => Outcome::Ignored,
            },
        }
    }

    pub fn selection(&self) -> Option<&DateSelection> {
        self.selection.as_ref()
    }

    pub fn fetch(&self) -> &FetchState {
        &self.fetch
    }

    pub fn favourites(&self) -> &Favourites {
        &self.favourites
    }

    pub fn grouped_view(&self) -> GroupedView {
        group_by_date(self.favourites.as_slice())
    }

    /// The loaded list paired with whether each entry is a favourite. Empty
    /// unless the lookup succeeded.
    pub fn marked_birthdays(&self) -> Vec<(Birthday, bool)> {
        self.fetch
            .birthdays()
            .unwrap_or_default()
            .iter()
            .map(|birthday| (birthday.clone(), self.favourites.contains(&birthday.text)))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
