//! Understanding what a user asked for: slash command arguments, button ids
//! and message keywords.
use chrono::{Duration, NaiveDate};

/// Days relative to today that the buttons offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOffset {
    Today,
    Tomorrow,
    DayAfter,
}

impl DayOffset {
    pub const ALL: [Self; 3] = [Self::Today, Self::Tomorrow, Self::DayAfter];

    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Today => 0,
            Self::Tomorrow => 1,
            Self::DayAfter => 2,
        }
    }

    #[must_use]
    pub fn from_today(self, today: NaiveDate) -> NaiveDate {
        today + Duration::days(self.days())
    }

    #[must_use]
    pub const fn action_id(self) -> &'static str {
        match self {
            Self::Today => "menu_today",
            Self::Tomorrow => "menu_tomorrow",
            Self::DayAfter => "menu_day_after",
        }
    }

    pub fn from_action_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.action_id() == id)
    }

    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "🌅 오늘 메뉴",
            Self::Tomorrow => "📅 내일 메뉴",
            Self::DayAfter => "📆 모레 메뉴",
        }
    }

    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::DayAfter => "day_after",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandRequest {
    /// No argument: offer the day buttons.
    Prompt,
    Menu(NaiveDate),
}

/// The command argument is neither a known word nor a `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDate(pub String);

pub const INVALID_DATE_MESSAGE: &str =
    "날짜 형식이 올바르지 않습니다. YYYY-MM-DD 형식으로 입력해주세요.";

/// Reads the text after `/menu`.
pub fn parse_command(text: &str, today: NaiveDate) -> Result<CommandRequest, InvalidDate> {
    let text = text.trim();
    match text {
        "" => Ok(CommandRequest::Prompt),
        "내일" => Ok(CommandRequest::Menu(DayOffset::Tomorrow.from_today(today))),
        "모레" => Ok(CommandRequest::Menu(DayOffset::DayAfter.from_today(today))),
        _ => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(CommandRequest::Menu)
            .map_err(|_| InvalidDate(text.to_string())),
    }
}

/// Phrases in a channel message that ask for today's menu.
static TODAY_PHRASES: &[&str] = &["오늘 메뉴", "오늘 급식", "today menu", "menu"];

/// Words in a mention that are about the menu.
static MENU_KEYWORDS: &[&str] = &["메뉴", "급식", "menu"];

pub fn asks_for_today(text: &str) -> bool {
    TODAY_PHRASES.iter().any(|p| text.contains(p))
}

pub fn mentions_menu(text: &str) -> bool {
    let text = text.to_lowercase();
    MENU_KEYWORDS.iter().any(|k| text.contains(k))
}
