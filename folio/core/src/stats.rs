//! Coding Statistics
//!
//! LeetCode numbers from the public stats relay, normalised with the same
//! defaults the portfolio has always shown when a field is missing, plus the
//! submission heatmap layout.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Weeks of history in the heatmap
pub const HEATMAP_WEEKS: u32 = 20;

/// Raw payload from `GET {stats_api}/{user}`; every field is optional
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsResponse {
    pub status: Option<String>,
    pub ranking: Option<u64>,
    pub total_solved: Option<u32>,
    pub easy_solved: Option<u32>,
    pub medium_solved: Option<u32>,
    pub hard_solved: Option<u32>,
    pub total_easy: Option<u32>,
    pub total_medium: Option<u32>,
    pub total_hard: Option<u32>,
    pub total_questions: Option<u32>,
    pub acceptance_rate: Option<f64>,
    pub contribution_points: Option<u32>,
    pub submission_calendar: Option<HashMap<String, u32>>,
}

impl StatsResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// Problem difficulty
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Normalised statistics
#[derive(Clone, Debug, PartialEq)]
pub struct CodingStats {
    pub username: String,
    pub ranking: Option<u64>,
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    pub total_easy: u32,
    pub total_medium: u32,
    pub total_hard: u32,
    pub total_questions: u32,
    pub acceptance_rate: Option<f64>,
    pub contribution_points: u32,
    /// Submissions per day, keyed by the day's UTC midnight in epoch seconds
    pub submission_calendar: HashMap<i64, u32>,
}

impl CodingStats {
    /// Normalise a successful payload; `None` if the relay reported failure
    pub fn from_response(username: impl Into<String>, resp: StatsResponse) -> Option<Self> {
        if !resp.is_success() {
            return None;
        }

        // Zero means "unknown" for these two, as with a missing value
        let ranking = resp.ranking.filter(|r| *r > 0);
        let acceptance_rate = resp.acceptance_rate.filter(|r| *r > 0.0);

        let submission_calendar = resp
            .submission_calendar
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(k, v)| k.parse::<i64>().ok().map(|ts| (ts, v)))
            .collect();

        Some(Self {
            username: username.into(),
            ranking,
            total_solved: resp.total_solved.unwrap_or(0),
            easy_solved: resp.easy_solved.unwrap_or(0),
            medium_solved: resp.medium_solved.unwrap_or(0),
            hard_solved: resp.hard_solved.unwrap_or(0),
            total_easy: resp.total_easy.filter(|n| *n > 0).unwrap_or(830),
            total_medium: resp.total_medium.filter(|n| *n > 0).unwrap_or(1740),
            total_hard: resp.total_hard.filter(|n| *n > 0).unwrap_or(780),
            total_questions: resp.total_questions.filter(|n| *n > 0).unwrap_or(3846),
            acceptance_rate,
            contribution_points: resp.contribution_points.unwrap_or(0),
            submission_calendar,
        })
    }

    /// Whether there is anything worth showing
    pub fn has_activity(&self) -> bool {
        self.total_solved > 0
    }

    pub fn solved(&self, d: Difficulty) -> u32 {
        match d {
            Difficulty::Easy => self.easy_solved,
            Difficulty::Medium => self.medium_solved,
            Difficulty::Hard => self.hard_solved,
        }
    }

    pub fn total(&self, d: Difficulty) -> u32 {
        match d {
            Difficulty::Easy => self.total_easy,
            Difficulty::Medium => self.total_medium,
            Difficulty::Hard => self.total_hard,
        }
    }

    /// Fraction solved for a difficulty, clamped to `[0, 1]`
    pub fn progress(&self, d: Difficulty) -> f64 {
        let total = self.total(d);
        if total == 0 {
            return 0.0;
        }
        (f64::from(self.solved(d)) / f64::from(total)).clamp(0.0, 1.0)
    }

    pub fn ranking_label(&self) -> String {
        self.ranking
            .map(group_thousands)
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn acceptance_label(&self) -> String {
        self.acceptance_rate
            .map(|r| format!("{r:.1}%"))
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn profile_url(&self) -> String {
        format!("https://leetcode.com/u/{}", self.username)
    }

    pub fn has_calendar(&self) -> bool {
        !self.submission_calendar.is_empty()
    }

    /// Heatmap for the weeks ending at `today`
    pub fn heatmap(&self, today: NaiveDate) -> Vec<Vec<HeatDay>> {
        heatmap(&self.submission_calendar, today, HEATMAP_WEEKS)
    }
}

/// One heatmap cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeatDay {
    pub date: NaiveDate,
    pub count: u32,
}

impl HeatDay {
    pub fn level(&self) -> u8 {
        intensity(self.count)
    }
}

/// Lay out a submission calendar as week columns (Sunday first)
///
/// Starts `weeks * 7 - 1` days before `today`, moved back to the preceding
/// Sunday, and stops after `today`. The last column may be partial.
pub fn heatmap(calendar: &HashMap<i64, u32>, today: NaiveDate, weeks: u32) -> Vec<Vec<HeatDay>> {
    let total_days = i64::from(weeks) * 7;
    let start = today - Duration::days(total_days - 1);
    let start = start - Duration::days(i64::from(start.weekday().num_days_from_sunday()));

    let mut columns = Vec::new();
    let mut week = Vec::with_capacity(7);

    for offset in 0..total_days + 7 {
        let date = start + Duration::days(offset);
        if date > today {
            break;
        }
        let key = date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or_default();
        week.push(HeatDay {
            date,
            count: calendar.get(&key).copied().unwrap_or(0),
        });
        if week.len() == 7 {
            columns.push(std::mem::take(&mut week));
        }
    }
    if !week.is_empty() {
        columns.push(week);
    }

    columns
}

/// Colour bucket for a day's submission count (0 = none, 4 = busiest)
pub fn intensity(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=15 => 3,
        _ => 4,
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Loading state of the stats section
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StatsLoad {
    #[default]
    Loading,
    Loaded(CodingStats),
    /// Fetch failed or returned nothing usable
    Unavailable,
}

impl StatsLoad {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Stats worth rendering, if any
    pub fn stats(&self) -> Option<&CodingStats> {
        match self {
            Self::Loaded(s) if s.has_activity() => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn success() -> StatsResponse {
        StatsResponse {
            status: Some("success".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_rejects_non_success() {
        let resp = StatsResponse {
            status: Some("error".to_string()),
            total_solved: Some(10),
            ..Default::default()
        };
        assert!(CodingStats::from_response("me", resp).is_none());
        assert!(CodingStats::from_response("me", StatsResponse::default()).is_none());
    }

    #[test]
    fn test_defaults_applied() {
        let stats = CodingStats::from_response("me", success()).unwrap();
        assert_eq!(stats.total_solved, 0);
        assert_eq!(stats.total_easy, 830);
        assert_eq!(stats.total_medium, 1740);
        assert_eq!(stats.total_hard, 780);
        assert_eq!(stats.total_questions, 3846);
        assert_eq!(stats.ranking, None);
        assert_eq!(stats.acceptance_rate, None);
        assert!(!stats.has_activity());
        assert_eq!(stats.ranking_label(), "-");
        assert_eq!(stats.acceptance_label(), "-");
    }

    #[test]
    fn test_parse_payload() {
        let json = r#"{
            "status": "success",
            "message": "retrieved",
            "totalSolved": 412,
            "totalQuestions": 3500,
            "easySolved": 200,
            "totalEasy": 850,
            "mediumSolved": 180,
            "totalMedium": 1800,
            "hardSolved": 32,
            "totalHard": 850,
            "acceptanceRate": 61.234,
            "ranking": 123456,
            "contributionPoints": 77,
            "reputation": 0,
            "submissionCalendar": {"1735689600": 4, "garbage": 9}
        }"#;
        let resp: StatsResponse = serde_json::from_str(json).unwrap();
        let stats = CodingStats::from_response("KING-258", resp).unwrap();
        assert_eq!(stats.total_solved, 412);
        assert_eq!(stats.ranking_label(), "123,456");
        assert_eq!(stats.acceptance_label(), "61.2%");
        assert_eq!(stats.submission_calendar.len(), 1);
        assert_eq!(stats.submission_calendar.get(&1_735_689_600), Some(&4));
        assert_eq!(stats.profile_url(), "https://leetcode.com/u/KING-258");
        assert!((stats.progress(Difficulty::Hard) - 32.0 / 850.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_zero_total() {
        let mut stats = CodingStats::from_response("me", success()).unwrap();
        stats.total_easy = 0;
        stats.easy_solved = 5;
        assert_eq!(stats.progress(Difficulty::Easy), 0.0);
        stats.total_medium = 10;
        stats.medium_solved = 20;
        assert_eq!(stats.progress(Difficulty::Medium), 1.0);
    }

    #[test]
    fn test_intensity_buckets() {
        let levels: Vec<u8> = [0, 1, 2, 3, 5, 6, 15, 16, 100]
            .into_iter()
            .map(intensity)
            .collect();
        assert_eq!(levels, vec![0, 1, 1, 2, 2, 3, 3, 4, 4]);
    }

    #[test]
    fn test_heatmap_shape() {
        // 2025-01-15 is a Wednesday
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let map = heatmap(&HashMap::new(), today, 20);

        // Every column starts on a Sunday
        for col in &map {
            assert_eq!(col[0].date.weekday().num_days_from_sunday(), 0);
        }
        // Full columns except possibly the last, which ends today
        let last = map.last().unwrap();
        assert_eq!(last.last().unwrap().date, today);
        assert_eq!(last.len(), 4);
        assert!(map[..map.len() - 1].iter().all(|c| c.len() == 7));
        // 139 days back from today lands on a Thursday, pushed back to Sunday
        assert_eq!(map.len(), 21);
    }

    #[test]
    fn test_heatmap_counts_by_utc_midnight() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(); // Saturday
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let ts = day.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let calendar = HashMap::from([(ts, 7)]);

        let map = heatmap(&calendar, today, 1);
        let flat: Vec<HeatDay> = map.into_iter().flatten().collect();
        assert_eq!(flat.len(), 7);
        let hit = flat.iter().find(|d| d.date == day).unwrap();
        assert_eq!(hit.count, 7);
        assert_eq!(hit.level(), 3);
        assert_eq!(flat.iter().map(|d| d.count).sum::<u32>(), 7);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_stats_load_visibility() {
        assert!(StatsLoad::default().is_loading());
        assert!(StatsLoad::Unavailable.stats().is_none());
        let empty = CodingStats::from_response("me", success()).unwrap();
        assert!(StatsLoad::Loaded(empty).stats().is_none());
    }
}
