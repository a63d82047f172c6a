//! Month calendar rendered as an HTML table.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::date_math::{month_grid, next_month, next_year, previous_month, previous_year};
use crate::date_text::{month_name, truncate_chars, weekday_label};
use crate::html::{escape_attr, escape_text};

pub use crate::date_math::WeekStart;

/// Event text shown in the cell for `date`. The details are markup and
/// are inserted as given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    #[serde(alias = "text")]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub year: i32,
    pub month: u32,
    pub highlighted_day: Option<u32>,
    pub week_start: WeekStart,
    pub id: String,
    pub css_class: String,
    pub title: String,
    pub show_caption: bool,
    pub base_url: String,
    /// Characters of the month name shown in the header; 0 shows all.
    pub month_name_chars: usize,
    /// Characters of each weekday name shown in the header; 0 shows all.
    pub weekday_name_chars: usize,
    pub events: Vec<CalendarEvent>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            highlighted_day: None,
            week_start: WeekStart::Sunday,
            id: "calendar_id".to_string(),
            css_class: String::new(),
            title: "Calendar".to_string(),
            show_caption: true,
            base_url: "/calendar/".to_string(),
            month_name_chars: 10,
            weekday_name_chars: 3,
            events: Vec::new(),
        }
    }
}

impl CalendarConfig {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            ..Self::default()
        }
    }

    pub fn add_event(&mut self, date: NaiveDate, details: impl Into<String>) {
        self.events.push(CalendarEvent {
            date,
            details: details.into(),
        });
    }

    /// Removes the event at `index`; out-of-range indexes are ignored.
    pub fn remove_event(&mut self, index: usize) -> Option<CalendarEvent> {
        if index < self.events.len() {
            Some(self.events.remove(index))
        } else {
            debug!(index, len = self.events.len(), "remove_event index out of range");
            None
        }
    }

    /// Event details for `date` in insertion order.
    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &str> {
        self.events
            .iter()
            .filter(move |event| event.date == date)
            .map(|event| event.details.as_str())
    }

    pub fn render(&self, today: NaiveDate) -> String {
        render_calendar(self, today)
    }

    /// Year and month to draw, falling back to `today` when the configured
    /// pair is not a month whose full grid chrono can represent.
    fn effective_month(&self, today: NaiveDate) -> (i32, u32) {
        if !month_grid(self.year, self.month, self.week_start).is_empty() {
            (self.year, self.month)
        } else {
            warn!(
                year = self.year,
                month = self.month,
                "invalid calendar month, falling back to today"
            );
            (today.year(), today.month())
        }
    }
}

fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

fn relative_day(date: NaiveDate, today: NaiveDate) -> Option<(&'static str, &'static str)> {
    match (date - today).num_days() {
        0 => Some(("Today", "today")),
        1 => Some(("Tomorrow", "tomorrow")),
        -1 => Some(("Yesterday", "yesterday")),
        _ => None,
    }
}

/// Cell class: `weekend` beats the relative-day class.
fn cell_class(date: NaiveDate, today: NaiveDate, highlighted: bool) -> String {
    let mut class = if is_weekend(date.weekday()) {
        "weekend".to_string()
    } else {
        match relative_day(date, today) {
            Some((_, suffix)) => format!("date {suffix}"),
            None => "date".to_string(),
        }
    };
    if highlighted {
        class.push_str(" highlighted");
    }
    class
}

fn nav_href(base_url: &str, (year, month): (i32, u32)) -> String {
    let joiner = if base_url.contains('?') { "&amp;" } else { "?" };
    format!("{}{joiner}y={year}&amp;m={month}", escape_attr(base_url))
}

fn nav_cell(id: &str, suffix: &str, label: &str, href: &str, glyph: &str) -> String {
    format!("<th id=\"{id}_{suffix}\" title=\"{label}\"><a href=\"{href}\">{glyph}</a></th>")
}

pub fn render_calendar(config: &CalendarConfig, today: NaiveDate) -> String {
    let (year, month) = config.effective_month(today);
    let id = escape_attr(&config.id);
    let class = escape_attr(&config.css_class);
    let columns = config.week_start.columns();
    let grid = month_grid(year, month, config.week_start);

    let mut out = Vec::with_capacity(grid.len() + grid.len() / 7 * 2 + 20);
    if class.is_empty() {
        out.push(format!("<table id=\"{id}\">"));
    } else {
        out.push(format!("<table id=\"{id}\" class=\"{class}\">"));
    }
    if config.show_caption {
        out.push(format!("<caption>{}</caption>", escape_text(&config.title)));
    }
    if class.is_empty() {
        out.push(format!("<thead id=\"{id}_thead\">"));
    } else {
        out.push(format!("<thead id=\"{id}_thead\" class=\"{class}_thead\">"));
    }

    out.push(format!("<tr id=\"{id}_nav\">"));
    out.push(nav_cell(
        &id,
        "prev_year",
        "Prev. Year",
        &nav_href(&config.base_url, previous_year(year, month)),
        "&#171;",
    ));
    out.push(nav_cell(
        &id,
        "prev_month",
        "Prev. Month",
        &nav_href(&config.base_url, previous_month(year, month)),
        "&#8249;",
    ));
    let month_label = month_name(month).unwrap_or_default();
    out.push(format!(
        "<th colspan=\"3\"><div>{} {year}</div></th>",
        truncate_chars(month_label, config.month_name_chars)
    ));
    out.push(nav_cell(
        &id,
        "next_month",
        "Next Month",
        &nav_href(&config.base_url, next_month(year, month)),
        "&#8250;",
    ));
    out.push(nav_cell(
        &id,
        "next_year",
        "Next Year",
        &nav_href(&config.base_url, next_year(year, month)),
        "&#187;",
    ));
    out.push("</tr>".to_string());

    out.push("<tr>".to_string());
    for weekday in columns {
        let label = truncate_chars(weekday_label(weekday), config.weekday_name_chars);
        if is_weekend(weekday) {
            out.push(format!("<th class=\"weekend\"><div>{label}</div></th>"));
        } else {
            out.push(format!("<th><div>{label}</div></th>"));
        }
    }
    out.push("</tr>".to_string());
    out.push("</thead>".to_string());

    out.push("<tbody>".to_string());
    for week in grid.chunks(7) {
        out.push("<tr>".to_string());
        for date in week {
            out.push(render_cell(config, &id, *date, today, (year, month)));
        }
        out.push("</tr>".to_string());
    }
    out.push("</tbody>".to_string());
    out.push("</table>".to_string());

    out.join("\n")
}

fn render_cell(
    config: &CalendarConfig,
    id: &str,
    date: NaiveDate,
    today: NaiveDate,
    (year, month): (i32, u32),
) -> String {
    let highlighted = date.year() == year
        && date.month() == month
        && config.highlighted_day == Some(date.day());
    let class = cell_class(date, today, highlighted);
    let note = relative_day(date, today)
        .map(|(label, _)| format!(" ({label})"))
        .unwrap_or_default();
    let body = config.events_on(date).collect::<Vec<_>>().join("\n");
    format!(
        "<td id=\"{id}_cell_{}-{}-{}\" class=\"{class}\" title=\"{}, {} {}, {}{note}\"><div>{}</div>{body}</td>",
        date.year(),
        date.month(),
        date.day(),
        weekday_label(date.weekday()),
        month_name(date.month()).unwrap_or_default(),
        date.day(),
        date.year(),
        date.day(),
    )
}
