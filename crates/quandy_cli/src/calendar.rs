use std::path::PathBuf;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use quandy_core::config::{load_calendar_events, load_page_defaults};
use quandy_core::{CalendarConfig, WeekStart, render_calendar, render_page};

#[derive(Debug, Clone)]
pub struct CalendarOptions {
    pub year: i32,
    pub month: u32,
    pub highlighted_day: Option<u32>,
    pub week_start: WeekStart,
    pub events: Option<PathBuf>,
    pub id: Option<String>,
    pub css_class: Option<String>,
    pub title: Option<String>,
    pub show_caption: bool,
    pub base_url: Option<String>,
    /// Wraps the calendar in a page built from these defaults.
    pub page_config: Option<PathBuf>,
}

impl CalendarOptions {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            highlighted_day: None,
            week_start: WeekStart::Sunday,
            events: None,
            id: None,
            css_class: None,
            title: None,
            show_caption: true,
            base_url: None,
            page_config: None,
        }
    }
}

pub fn run_calendar(options: &CalendarOptions, today: NaiveDate) -> Result<String> {
    if let Some(day) = options.highlighted_day {
        if !(1..=31).contains(&day) {
            bail!("--highlight must be between 1 and 31, got {day}");
        }
    }
    let mut config = CalendarConfig::new(options.year, options.month);
    config.highlighted_day = options.highlighted_day;
    config.week_start = options.week_start;
    config.show_caption = options.show_caption;
    if let Some(id) = &options.id {
        config.id = id.clone();
    }
    if let Some(class) = &options.css_class {
        config.css_class = class.clone();
    }
    if let Some(title) = &options.title {
        config.title = title.clone();
    }
    if let Some(base_url) = &options.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(path) = &options.events {
        config.events = load_calendar_events(path)?;
    }

    let markup = render_calendar(&config, today);
    match &options.page_config {
        Some(path) => {
            let mut page = load_page_defaults(path)?;
            page.page_title = config.title.clone();
            page.body = markup;
            Ok(render_page(&page))
        }
        None => Ok(markup),
    }
}
