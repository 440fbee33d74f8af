use api::activity::Contribution;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

pub const COUNT_PLACEHOLDER: &str = "{{count}}";
pub const DAYS_PER_WEEK: usize = 7;
// a trailing year never spans more than 53 sunday-first columns
pub const MAX_WEEKS: usize = 53;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// contribution calendar
//
// the counts come from the public contributions feed for a single user; everything about
// how the grid looks is configured here
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub username: String,
    pub block_size: u32,
    pub block_margin: u32,
    pub font_size: u32,
    pub total_count_label: String,
    // five shades each, from no contributions to the busiest days
    pub light: Vec<String>,
    pub dark: Vec<String>,
    pub api_url: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            username: String::from("conseder"),
            block_size: 15,
            block_margin: 5,
            font_size: 16,
            total_count_label: format!("{COUNT_PLACEHOLDER} contributions in the last year"),
            light: ["#e0f2fe", "#bae6fd", "#7dd3fc", "#0ea5e9", "#0369a1"]
                .map(String::from)
                .to_vec(),
            dark: ["#0c4a6e", "#0369a1", "#0284c7", "#0ea5e9", "#38bdf8"]
                .map(String::from)
                .to_vec(),
            api_url: String::from("https://github-contributions-api.jogruber.de/v4"),
        }
    }
}

impl CalendarConfig {
    pub fn contributions_url(&self) -> String {
        format!(
            "{}/{}?y=last",
            self.api_url.trim_end_matches('/'),
            self.username
        )
    }

    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.username)
    }

    pub fn palette(&self, theme: Theme) -> &[String] {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    // levels past the end of the palette use its last shade
    pub fn level_color(&self, theme: Theme, level: u8) -> &str {
        let palette = self.palette(theme);

        match palette.len() {
            0 => "transparent",
            len => &palette[usize::from(level).min(len - 1)],
        }
    }

    pub fn total_count_label(&self, count: u32) -> String {
        self.total_count_label
            .replace(COUNT_PLACEHOLDER, &count.to_string())
    }

    fn step(&self) -> u32 {
        self.block_size + self.block_margin
    }

    // height of the month label row above the grid
    pub fn header_height(&self) -> u32 {
        self.font_size + self.block_margin
    }

    pub fn width(&self, weeks: usize) -> u32 {
        (weeks as u32 * self.step()).saturating_sub(self.block_margin)
    }

    pub fn height(&self) -> u32 {
        self.header_height()
            + (DAYS_PER_WEEK as u32 * self.step()).saturating_sub(self.block_margin)
    }

    // top-left corner of a day block
    pub fn block_origin(&self, week: usize, weekday: usize) -> (u32, u32) {
        (
            week as u32 * self.step(),
            self.header_height() + weekday as u32 * self.step(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

impl TryFrom<&Contribution> for Day {
    type Error = anyhow::Error;

    fn try_from(value: &Contribution) -> Result<Self, Self::Error> {
        Ok(Day {
            date: NaiveDate::parse_from_str(&value.date, "%Y-%m-%d")?,
            count: value.count,
            level: value.level,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthLabel {
    pub week: usize,
    pub name: &'static str,
}

// the grid
//
// one column per week with sunday on top, like the github profile calendar.  days that
// fall outside the feed (padding in the first and last week, or gaps) are None
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalendarLayout {
    pub weeks: Vec<[Option<Day>; DAYS_PER_WEEK]>,
    pub months: Vec<MonthLabel>,
    pub total: u32,
}

impl CalendarLayout {
    pub fn from_days(mut days: Vec<Day>, total: u32) -> Self {
        days.sort_by_key(|d| d.date);
        days.dedup_by_key(|d| d.date);

        let Some(last) = days.last().map(|d| d.date) else {
            return CalendarLayout {
                total,
                ..Default::default()
            };
        };

        // anything older than the trailing MAX_WEEKS columns is dropped
        let span = Days::new(((MAX_WEEKS - 1) * DAYS_PER_WEEK) as u64);
        let window = sunday_of(last).checked_sub_days(span).unwrap_or(NaiveDate::MIN);
        days.retain(|d| d.date >= window);

        // the latest day always survives the cut
        let start = sunday_of(days[0].date);

        let mut weeks: Vec<[Option<Day>; DAYS_PER_WEEK]> = Vec::new();
        for day in days {
            let offset = (day.date - start).num_days() as usize;
            let (week, weekday) = (offset / DAYS_PER_WEEK, offset % DAYS_PER_WEEK);

            if weeks.len() <= week {
                weeks.resize(week + 1, [None; DAYS_PER_WEEK]);
            }
            weeks[week][weekday] = Some(day);
        }

        let months = month_labels(&weeks);

        CalendarLayout {
            weeks,
            months,
            total,
        }
    }

    // days that failed to parse are dropped rather than failing the whole calendar
    pub fn from_contributions(contributions: &[Contribution], total: u32) -> Self {
        let days = contributions
            .iter()
            .filter_map(|c| Day::try_from(c).ok())
            .collect();

        CalendarLayout::from_days(days, total)
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

fn sunday_of(date: NaiveDate) -> NaiveDate {
    let back = Days::new(u64::from(date.weekday().num_days_from_sunday()));
    date.checked_sub_days(back).unwrap_or(date)
}

// a label goes over the first week of each month, unless the month only has a sliver of
// the grid before the next one starts and the two names would overlap
fn month_labels(weeks: &[[Option<Day>; DAYS_PER_WEEK]]) -> Vec<MonthLabel> {
    let mut labels: Vec<MonthLabel> = Vec::new();
    let mut current = None;

    for (week, days) in weeks.iter().enumerate() {
        let Some(day) = days.iter().flatten().next() else {
            continue;
        };

        let month = day.date.month0() as usize;
        if current == Some(month) {
            continue;
        }
        current = Some(month);

        if let Some(last) = labels.last() {
            if week - last.week < 2 {
                labels.pop();
            }
        }

        labels.push(MonthLabel {
            week,
            name: MONTHS[month],
        });
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, count: u32) -> Day {
        Day {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            count,
            level: count.min(4) as u8,
        }
    }

    fn range(from: &str, len: u64) -> Vec<Day> {
        let start = NaiveDate::parse_from_str(from, "%Y-%m-%d").unwrap();
        (0..len)
            .map(|n| Day {
                date: start + Days::new(n),
                count: 1,
                level: 1,
            })
            .collect()
    }

    #[test]
    fn defaults_match_the_widget_setup() {
        let cfg = CalendarConfig::default();
        assert_eq!(cfg.block_size, 15);
        assert_eq!(cfg.block_margin, 5);
        assert_eq!(cfg.font_size, 16);
        assert_eq!(cfg.palette(Theme::Light).len(), 5);
        assert_eq!(cfg.palette(Theme::Dark).len(), 5);
    }

    #[test]
    fn label_substitutes_count() {
        let cfg = CalendarConfig::default();
        assert_eq!(cfg.total_count_label(412), "412 contributions in the last year");
    }

    #[test]
    fn contributions_url_requests_trailing_year() {
        let cfg = CalendarConfig {
            api_url: String::from("https://feed.example.com/v4/"),
            ..Default::default()
        };
        assert_eq!(
            cfg.contributions_url(),
            "https://feed.example.com/v4/conseder?y=last"
        );
    }

    #[test]
    fn level_colors_follow_theme_and_clamp() {
        let cfg = CalendarConfig::default();
        assert_eq!(cfg.level_color(Theme::Light, 0), "#e0f2fe");
        assert_eq!(cfg.level_color(Theme::Dark, 4), "#38bdf8");
        assert_eq!(cfg.level_color(Theme::Dark, 9), "#38bdf8");

        let bare = CalendarConfig {
            light: Vec::new(),
            ..Default::default()
        };
        assert_eq!(bare.level_color(Theme::Light, 2), "transparent");
    }

    #[test]
    fn geometry() {
        let cfg = CalendarConfig::default();
        // 53 weeks of 15px blocks with 5px gaps
        assert_eq!(cfg.width(53), 53 * 20 - 5);
        assert_eq!(cfg.height(), 21 + 7 * 20 - 5);
        assert_eq!(cfg.block_origin(0, 0), (0, 21));
        assert_eq!(cfg.block_origin(2, 3), (40, 81));
        assert_eq!(cfg.width(0), 0);
    }

    #[test]
    fn first_week_is_padded_to_sunday() {
        // wednesday 2024-06-05 through friday 2024-06-14
        let layout = CalendarLayout::from_days(range("2024-06-05", 10), 10);

        assert_eq!(layout.weeks.len(), 2);
        assert_eq!(layout.weeks[0][..3], [None, None, None]);
        assert_eq!(layout.weeks[0][3].unwrap().date, day("2024-06-05", 0).date);
        assert_eq!(layout.weeks[1][5].unwrap().date, day("2024-06-14", 0).date);
        assert_eq!(layout.weeks[1][6], None);
        assert_eq!(layout.total, 10);
    }

    #[test]
    fn gaps_and_duplicates() {
        let days = vec![
            day("2024-06-20", 3),
            day("2024-06-02", 1),
            day("2024-06-02", 1),
        ];
        let layout = CalendarLayout::from_days(days, 4);

        // sunday 2024-06-02 through thursday 2024-06-20
        assert_eq!(layout.weeks.len(), 3);
        assert_eq!(layout.weeks[0][0].unwrap().count, 1);
        assert_eq!(layout.weeks[1].iter().flatten().count(), 0);
        assert_eq!(layout.weeks[2][4].unwrap().count, 3);
    }

    #[test]
    fn month_labels_skip_slivers() {
        // sunday 2024-05-26 through saturday 2024-08-03; may owns one column and the
        // last column starts on 2024-07-28, so august owns none
        let layout = CalendarLayout::from_days(range("2024-05-26", 70), 70);
        let names: Vec<&str> = layout.months.iter().map(|m| m.name).collect();

        assert_eq!(names, vec!["Jun", "Jul"]);
        assert_eq!(layout.months[0].week, 1);
        assert_eq!(layout.months[1].week, 6);
    }

    #[test]
    fn month_starting_mid_column_labels_the_next_column() {
        // wednesday 2024-06-26 through tuesday 2024-07-09; july 1st is a monday, so the
        // column holding it still starts in june
        let layout = CalendarLayout::from_days(range("2024-06-26", 14), 14);

        assert_eq!(
            layout.months,
            vec![
                MonthLabel {
                    week: 0,
                    name: "Jun"
                },
                MonthLabel {
                    week: 2,
                    name: "Jul"
                },
            ]
        );
    }

    #[test]
    fn outlier_dates_are_clamped_to_the_trailing_year() {
        let mut days = range("2024-01-07", 364);
        days.push(day("1970-01-01", 5));
        let layout = CalendarLayout::from_days(days, 369);

        assert!(layout.weeks.len() <= MAX_WEEKS);
        assert_eq!(layout.weeks.len(), 52);
        assert!(layout.weeks.iter().flatten().flatten().all(|d| d.date.year() >= 2024));

        // a feed longer than a year fills every column
        let layout = CalendarLayout::from_days(range("2023-01-01", 500), 500);
        assert_eq!(layout.weeks.len(), MAX_WEEKS);
    }

    #[test]
    fn bad_dates_are_dropped() {
        let feed = vec![
            Contribution {
                date: "2024-06-02".into(),
                count: 2,
                level: 1,
            },
            Contribution {
                date: "not-a-date".into(),
                count: 9,
                level: 4,
            },
        ];
        let layout = CalendarLayout::from_contributions(&feed, 11);

        assert_eq!(layout.weeks.len(), 1);
        assert_eq!(layout.weeks[0].iter().flatten().count(), 1);
    }

    #[test]
    fn empty_feed_gives_empty_layout() {
        let layout = CalendarLayout::from_days(Vec::new(), 0);
        assert!(layout.is_empty());
        assert!(layout.months.is_empty());
    }
}
