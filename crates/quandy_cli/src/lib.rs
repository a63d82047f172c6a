pub mod calendar;
pub mod page;
pub mod tools;
