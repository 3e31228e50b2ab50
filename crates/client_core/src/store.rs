use std::sync::Arc;

use chrono::NaiveDate;
use shared::domain::{Birthday, BirthdayList, Favourite};
use shared::error::FetchError;
use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{
    favourites::Toggle,
    fetcher::BirthdaySource,
    grouping::GroupedView,
    selection::DateSelection,
    state::{Action, AppState, FetchState, Outcome, RequestId},
};

#[derive(Debug, Clone)]
pub enum StoreEvent {
    SelectionChanged(DateSelection),
    FetchStateChanged(FetchState),
    FavouritesChanged(Toggle),
}

/// Owns the selection, the fetch lifecycle and the favourites. Every
/// mutation goes through [`AppState::reduce`] under one lock; renderers read
/// snapshots or subscribe to [`StoreEvent`]s.
pub struct BirthdayStore {
    source: Arc<dyn BirthdaySource>,
    inner: Mutex<AppState>,
    events: broadcast::Sender<StoreEvent>,
}

impl BirthdayStore {
    pub fn new(source: Arc<dyn BirthdaySource>) -> Arc<Self> {
        let (events, _) = broadcast::channel(256);
        Arc::new(Self {
            source,
            inner: Mutex::new(AppState::new()),
            events,
        })
    }

    /// Selects `date` and starts its lookup.
    ///
    /// The state is `Loading` by the time this returns. `None` is a cleared
    /// selection and starts nothing. The returned handle completes once the
    /// lookup has resolved, whether or not its result was still current.
    pub async fn select_date(self: &Arc<Self>, date: Option<NaiveDate>) -> Option<JoinHandle<()>> {
        let (outcome, selection) = {
            let mut guard = self.inner.lock().await;
            let outcome = guard.reduce(Action::SelectDate(date));
            (outcome, guard.selection().cloned())
        };

        let Outcome::Fetch { request, key } = outcome else {
            debug!("cleared date selection; nothing to fetch");
            return None;
        };

        if let Some(selection) = selection {
            let _ = self.events.send(StoreEvent::SelectionChanged(selection));
        }
        let _ = self
            .events
            .send(StoreEvent::FetchStateChanged(FetchState::Loading));
        info!(month = %key.month, day = %key.day, request = request.0, "fetching births");

        let store = Arc::clone(self);
        Some(tokio::spawn(async move {
            let result = store.source.births_on(&key).await;
            if let Err(err) = &result {
                warn!(
                    month = %key.month,
                    day = %key.day,
                    request = request.0,
                    error = %err,
                    "births lookup failed"
                );
            }
            store.resolve(request, result).await;
        }))
    }

    async fn resolve(&self, request: RequestId, result: Result<BirthdayList, FetchError>) {
        let (outcome, fetch) = {
            let mut guard = self.inner.lock().await;
            let outcome = guard.reduce(Action::FetchResolved { request, result });
            (outcome, guard.fetch().clone())
        };

        match outcome {
            Outcome::Resolved => {
                if let Some(list) = fetch.birthdays() {
                    info!(request = request.0, count = list.len(), "births loaded");
                }
                let _ = self.events.send(StoreEvent::FetchStateChanged(fetch));
            }
            Outcome::Stale { request } => {
                debug!(request = request.0, "dropping superseded births lookup");
            }
            _ => {}
        }
    }

    /// Toggles `birthday` under the label of the selected date. Returns `None`
    /// when no date is selected.
    pub async fn toggle_favourite(&self, birthday: &Birthday) -> Option<Toggle> {
        let outcome = {
            let mut guard = self.inner.lock().await;
            guard.reduce(Action::ToggleFavourite(birthday.clone()))
        };

        match outcome {
            Outcome::Toggled(toggle) => {
                match &toggle {
                    Toggle::Added(f) => info!(text = %f.text, date = %f.date, "favourite added"),
                    Toggle::Removed(f) => info!(text = %f.text, date = %f.date, "favourite removed"),
                }
                let _ = self
                    .events
                    .send(StoreEvent::FavouritesChanged(toggle.clone()));
                Some(toggle)
            }
            _ => {
                warn!(text = %birthday.text, "toggle ignored: no date selected");
                None
            }
        }
    }

    pub async fn fetch_state(&self) -> FetchState {
        self.inner.lock().await.fetch().clone()
    }

    pub async fn selection(&self) -> Option<DateSelection> {
        self.inner.lock().await.selection().cloned()
    }

    pub async fn favourites(&self) -> Vec<Favourite> {
        self.inner.lock().await.favourites().as_slice().to_vec()
    }

    pub async fn is_favourite(&self, text: &str) -> bool {
        self.inner.lock().await.favourites().contains(text)
    }

    /// Recomputed from the favourites on every call.
    pub async fn grouped_view(&self) -> GroupedView {
        self.inner.lock().await.grouped_view()
    }

    pub async fn marked_birthdays(&self) -> Vec<(Birthday, bool)> {
        self.inner.lock().await.marked_birthdays()
    }

    pub async fn snapshot(&self) -> AppState {
        self.inner.lock().await.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
