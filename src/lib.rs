#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod menu;
pub mod navigate;
pub mod parse;
pub mod render;
pub mod resolve;
pub mod slack;
pub mod webhook;

pub use config::Config;
pub use error::{Error, Result};
pub use format::format_menu_message;
pub use menu::{MealPeriod, MenuSnapshot};
pub use resolve::{MenuResolver, MenuSource};
