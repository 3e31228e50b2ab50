//! Plain-text rendering of store output.

use client_core::{DateSelection, FetchState, GroupedView};
use shared::domain::Birthday;

pub const LOADING_TEXT: &str = "Loading birthdays, please wait...";
pub const EMPTY_FAVOURITES_TEXT: &str = "You have no favourite birthdays yet.";

pub fn render_births(
    selection: Option<&DateSelection>,
    state: &FetchState,
    marked: &[(Birthday, bool)],
) -> String {
    let mut out = String::new();
    if let Some(selection) = selection {
        out.push_str(&format!("Birthdays on {}\n", selection.label));
    }
    match state {
        FetchState::Idle => out.push_str("Pick a date\n"),
        FetchState::Loading => out.push_str(&format!("{LOADING_TEXT}\n")),
        FetchState::Error(message) => out.push_str(&format!("{message}\n")),
        FetchState::Success(_) => {
            for (index, (birthday, favourite)) in marked.iter().enumerate() {
                let mark = if *favourite { 'x' } else { ' ' };
                out.push_str(&format!("{:>3}. [{mark}] {}\n", index + 1, birthday.text));
            }
        }
    }
    out
}

pub fn render_favourites(view: &GroupedView) -> String {
    if view.is_empty() {
        return format!("{EMPTY_FAVOURITES_TEXT}\n");
    }
    let mut out = String::from("Favourite Birthdays\n");
    for group in view {
        out.push_str(&format!("{}\n", group.date));
        for favourite in &group.birthdays {
            out.push_str(&format!("    {}\n", favourite.display_line()));
        }
    }
    out
}
