//! State and data layer for the on-this-day birthdays client: date selection,
//! the births lookup lifecycle, favourites, and the grouped favourites view.

pub mod config;
pub mod favourites;
pub mod fetcher;
pub mod grouping;
pub mod selection;
pub mod state;
pub mod store;

pub use config::{load_settings, load_settings_from, Settings};
pub use favourites::{Favourites, Toggle};
pub use fetcher::{BirthdaySource, HttpBirthdaySource};
pub use grouping::{group_by_date, FavouriteGroup, GroupedView};
pub use selection::{DateSelection, MonthDay};
pub use state::{Action, AppState, FetchState, Outcome, RequestId};
pub use store::{BirthdayStore, StoreEvent};
