use serde::{Deserialize, Serialize};

use crate::domain::BirthdayList;

/// Body of `GET /feed/v1/wikipedia/en/onthisday/births/{MM}/{DD}`.
///
/// Only `births` is read; every other field of the feed is ignored. The field
/// is required, so a payload without it fails to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnThisDayResponse {
    pub births: BirthdayList,
}

/// Path of the births feed for an already zero-padded month and day.
pub fn births_path(month: &str, day: &str) -> String {
    format!("feed/v1/wikipedia/en/onthisday/births/{month}/{day}")
}
