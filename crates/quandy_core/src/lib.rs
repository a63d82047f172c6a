//! Small HTML helpers: page boilerplate, a month calendar, form builders
//! and string/date utilities.
//!
//! Every renderer is a pure function from a configuration record to a
//! markup string. Nothing here reads the clock or touches the filesystem,
//! except the YAML loaders in [`config`].

pub mod calendar;
pub mod config;
pub mod date_math;
pub mod date_text;
pub mod error;
pub mod field;
pub mod form;
pub mod html;
pub mod names;
pub mod page;
pub mod password;
pub mod text;

pub use crate::calendar::{CalendarConfig, CalendarEvent, WeekStart, render_calendar};
pub use crate::field::{ChoiceOption, FieldConfig, WidgetKind, render_field};
pub use crate::form::{FormConfig, FormMethod, render_form};
pub use crate::page::{Doctype, PageConfig, render_page};
