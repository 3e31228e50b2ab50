use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn births() -> BirthdayList {
    vec![
        Birthday::new("birthday 1", 2000),
        Birthday::new("birthday 2", 2001),
    ]
}

fn select(state: &mut AppState, y: i32, m: u32, d: u32) -> RequestId {
    match state.reduce(Action::SelectDate(Some(date(y, m, d)))) {
        Outcome::Fetch { request, .. } => request,
        other => panic!("expected fetch, got {other:?}"),
    }
}

#[test]
fn starts_idle_and_empty() {
    let state = AppState::new();
    assert_eq!(*state.fetch(), FetchState::Idle);
    assert!(state.selection().is_none());
    assert!(state.favourites().is_empty());
    assert!(state.grouped_view().is_empty());
}

#[test]
fn selecting_a_date_enters_loading_with_padded_key() {
    let mut state = AppState::new();
    let outcome = state.reduce(Action::SelectDate(Some(date(2000, 1, 1))));

    assert_eq!(
        outcome,
        Outcome::Fetch {
            request: RequestId(1),
            key: MonthDay {
                month: "01".into(),
                day: "01".into(),
            },
        }
    );
    assert!(state.fetch().is_loading());
    assert_eq!(state.selection().map(|s| s.label.as_str()), Some("January 1"));
}

#[test]
fn cleared_selection_does_not_fetch() {
    let mut state = AppState::new();
    assert_eq!(state.reduce(Action::SelectDate(None)), Outcome::Ignored);
    assert_eq!(*state.fetch(), FetchState::Idle);

    let request = select(&mut state, 2000, 3, 3);
    state.reduce(Action::FetchResolved {
        request,
        result: Ok(births()),
    });
    assert_eq!(state.reduce(Action::SelectDate(None)), Outcome::Ignored);
    assert_eq!(state.fetch().birthdays().map(<[Birthday]>::len), Some(2));
    assert_eq!(state.selection().map(|s| s.label.as_str()), Some("March 3"));
}

#[test]
fn success_stores_list_verbatim() {
    let mut state = AppState::new();
    let request = select(&mut state, 2000, 1, 1);

    let outcome = state.reduce(Action::FetchResolved {
        request,
        result: Ok(births()),
    });

    assert_eq!(outcome, Outcome::Resolved);
    assert_eq!(*state.fetch(), FetchState::Success(births()));
    assert!(!state.fetch().is_loading());
}

#[test]
fn any_failure_becomes_fixed_message() {
    for cause in [
        FetchError::Transport("reset".into()),
        FetchError::Status(500),
        FetchError::Decode("eof".into()),
        FetchError::MissingBirths,
    ] {
        let mut state = AppState::new();
        let request = select(&mut state, 2000, 1, 1);
        state.reduce(Action::FetchResolved {
            request,
            result: Err(cause),
        });
        assert_eq!(state.fetch().error_message(), Some(FETCH_ERROR_MESSAGE));
        assert!(!state.fetch().is_loading());
        assert!(state.fetch().birthdays().is_none());
    }
}

#[test]
fn reselecting_clears_error_and_previous_result() {
    let mut state = AppState::new();
    let first = select(&mut state, 2000, 1, 1);
    state.reduce(Action::FetchResolved {
        request: first,
        result: Err(FetchError::Status(502)),
    });

    let second = select(&mut state, 2000, 1, 2);
    assert_eq!(*state.fetch(), FetchState::Loading);
    assert!(second > first);

    state.reduce(Action::FetchResolved {
        request: second,
        result: Ok(births()),
    });
    let third = select(&mut state, 2000, 1, 3);
    assert_eq!(*state.fetch(), FetchState::Loading);
    assert!(third > second);
}

#[test]
fn superseded_resolution_is_dropped() {
    let mut state = AppState::new();
    let slow = select(&mut state, 2000, 1, 1);
    let fast = select(&mut state, 2000, 2, 2);

    assert_eq!(
        state.reduce(Action::FetchResolved {
            request: fast,
            result: Ok(vec![Birthday::new("february", 1)]),
        }),
        Outcome::Resolved
    );
    assert_eq!(
        state.reduce(Action::FetchResolved {
            request: slow,
            result: Ok(births()),
        }),
        Outcome::Stale { request: slow }
    );
    assert_eq!(
        *state.fetch(),
        FetchState::Success(vec![Birthday::new("february", 1)])
    );
}

#[test]
fn duplicate_resolution_for_latest_is_dropped() {
    let mut state = AppState::new();
    let request = select(&mut state, 2000, 1, 1);
    state.reduce(Action::FetchResolved {
        request,
        result: Ok(births()),
    });
    let outcome = state.reduce(Action::FetchResolved {
        request,
        result: Err(FetchError::MissingBirths),
    });
    assert_eq!(outcome, Outcome::Stale { request });
    assert_eq!(*state.fetch(), FetchState::Success(births()));
}

#[test]
fn toggle_requires_a_selected_date() {
    let mut state = AppState::new();
    let outcome = state.reduce(Action::ToggleFavourite(Birthday::new("b", 1)));
    assert_eq!(outcome, Outcome::Ignored);
    assert!(state.favourites().is_empty());
}

#[test]
fn toggle_uses_the_active_label_and_relabels_on_readd() {
    let mut state = AppState::new();
    let birthday = Birthday::new("birthday 1", 2000);

    select(&mut state, 2000, 1, 1);
    state.reduce(Action::ToggleFavourite(birthday.clone()));
    assert_eq!(state.favourites().as_slice()[0].date, "January 1");

    select(&mut state, 2000, 2, 14);
    assert!(matches!(
        state.reduce(Action::ToggleFavourite(birthday.clone())),
        Outcome::Toggled(Toggle::Removed(_))
    ));
    state.reduce(Action::ToggleFavourite(birthday));
    assert_eq!(state.favourites().as_slice()[0].date, "February 14");
}

#[test]
fn favourites_survive_date_changes_and_feed_the_grouped_view() {
    let mut state = AppState::new();
    select(&mut state, 2000, 1, 1);
    state.reduce(Action::ToggleFavourite(Birthday::new("b1", 2000)));
    select(&mut state, 2000, 2, 2);
    state.reduce(Action::ToggleFavourite(Birthday::new("b2", 2001)));
    select(&mut state, 2000, 1, 1);
    state.reduce(Action::ToggleFavourite(Birthday::new("b3", 2020)));

    let view = state.grouped_view();
    let shape: Vec<(&str, Vec<&str>)> = view
        .iter()
        .map(|g| {
            (
                g.date.as_str(),
                g.birthdays.iter().map(|b| b.text.as_str()).collect(),
            )
        })
        .collect();
    assert_eq!(
        shape,
        vec![
            ("January 1", vec!["b1", "b3"]),
            ("February 2", vec!["b2"]),
        ]
    );
}

#[test]
fn marked_birthdays_flag_favourites() {
    let mut state = AppState::new();
    let request = select(&mut state, 2000, 1, 1);
    assert!(state.marked_birthdays().is_empty());

    state.reduce(Action::FetchResolved {
        request,
        result: Ok(births()),
    });
    state.reduce(Action::ToggleFavourite(Birthday::new("birthday 2", 2001)));

    assert_eq!(
        state.marked_birthdays(),
        vec![
            (Birthday::new("birthday 1", 2000), false),
            (Birthday::new("birthday 2", 2001), true),
        ]
    );
}
