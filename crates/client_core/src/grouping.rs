//! Date-grouped projection of the favourites, for display.

use std::collections::HashMap;

use shared::domain::Favourite;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavouriteGroup {
    pub date: String,
    pub birthdays: Vec<Favourite>,
}

pub type GroupedView = Vec<FavouriteGroup>;

/// Groups favourites by date label.
///
/// Groups appear in the order their label first occurs; entries keep their
/// insertion order within a group.
pub fn group_by_date(favourites: &[Favourite]) -> GroupedView {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: GroupedView = Vec::new();

    for favourite in favourites {
        let slot = *index.entry(favourite.date.as_str()).or_insert_with(|| {
            groups.push(FavouriteGroup {
                date: favourite.date.clone(),
                birthdays: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].birthdays.push(favourite.clone());
    }

    groups
}

#[cfg(test)]
#[path = "tests/grouping_tests.rs"]
mod tests;
