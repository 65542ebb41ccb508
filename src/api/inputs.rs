use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, DataSeries};

pub const LAST_WEEK_CHANNEL: &str = "last_week";
pub const THIS_WEEK_CHANNEL: &str = "this_week";
pub const IMPRESSIONS_CHANNEL: &str = "impressions";
pub const PERCENTAGE_CHANNEL: &str = "percentage";

/// Weekly activity of one club, drawn as two trend lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubActivity {
    pub club: String,
    pub last_week: f64,
    pub this_week: f64,
}

impl ClubActivity {
    #[must_use]
    pub fn new(club: impl Into<String>, last_week: f64, this_week: f64) -> Self {
        Self {
            club: club.into(),
            last_week,
            this_week,
        }
    }
}

/// Two-channel series (`last_week`, `this_week`), one point per club.
#[must_use]
pub fn club_activity_series(rows: &[ClubActivity]) -> DataSeries {
    DataSeries::from_trusted(
        [LAST_WEEK_CHANNEL, THIS_WEEK_CHANNEL],
        rows.iter()
            .map(|row| DataPoint::new(row.club.clone(), &[row.last_week, row.this_week])),
    )
}

/// Caller-owned selector for which week of impressions to chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    #[default]
    ThisWeek,
    PreviousWeek,
}

/// Impression counts of one post for the current and the previous week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostImpressions {
    pub post: String,
    pub this_week: f64,
    pub previous_week: f64,
}

impl PostImpressions {
    #[must_use]
    pub fn new(post: impl Into<String>, this_week: f64, previous_week: f64) -> Self {
        Self {
            post: post.into(),
            this_week,
            previous_week,
        }
    }

    #[must_use]
    pub fn impressions(&self, window: TimeWindow) -> f64 {
        match window {
            TimeWindow::ThisWeek => self.this_week,
            TimeWindow::PreviousWeek => self.previous_week,
        }
    }
}

/// One-channel `impressions` series for the selected week.
#[must_use]
pub fn post_impressions_series(rows: &[PostImpressions], window: TimeWindow) -> DataSeries {
    DataSeries::from_trusted(
        [IMPRESSIONS_CHANNEL],
        rows.iter()
            .map(|row| DataPoint::single(row.post.clone(), row.impressions(window))),
    )
}

/// Agree/disagree split of a poll, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollSplit {
    pub disagree: f64,
    pub agree: f64,
}

impl PollSplit {
    #[must_use]
    pub const fn new(disagree: f64, agree: f64) -> Self {
        Self { disagree, agree }
    }

    /// Percentages from raw vote counts. No votes yields `0 / 0`.
    #[must_use]
    pub fn from_votes(disagree_votes: u64, agree_votes: u64) -> Self {
        let total = disagree_votes.saturating_add(agree_votes);
        if total == 0 {
            return Self::new(0.0, 0.0);
        }
        let total = total as f64;
        Self::new(
            disagree_votes as f64 * 100.0 / total,
            agree_votes as f64 * 100.0 / total,
        )
    }
}

/// Two-point `percentage` series ordered `[disagree, agree]`.
#[must_use]
pub fn poll_series(split: PollSplit) -> DataSeries {
    DataSeries::from_trusted(
        [PERCENTAGE_CHANNEL],
        [
            DataPoint::single("Disagree", split.disagree),
            DataPoint::single("Agree", split.agree),
        ],
    )
}
