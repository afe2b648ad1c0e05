//! Presenters mapping domain entities to response bodies.
//!
//! Presenters are pure functions. They drop secrets such as the password
//! hash and format timestamps for display.

mod product;
mod role;
mod user;

pub use product::{ProductView, StockView, present_product};
pub use role::{RoleView, present_role};
pub use user::{UserView, present_user};

use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a UTC timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
