//! HTML template rendering handlers.

mod shortener;
mod statistics;

pub use shortener::{ShortenerTemplate, shorten_form_handler, shortener_page};
pub use statistics::{StatisticsTemplate, statistics_page};
