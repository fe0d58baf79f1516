//! Slack message bodies: plain text replies, the day picker and the home tab.
use serde::Serialize;
use serde_json::{json, Value};

use super::command::DayOffset;

pub const PROMPT_TEXT: &str = "🍽️ *어떤 메뉴를 확인하시겠어요?*";
pub const GREETING_TEXT: &str =
    "안녕하세요! 🏫 *학교 급식 메뉴 봇*입니다.\n\n어떤 메뉴를 확인하시겠어요?";

const HOME_INTRO: &str = "*🏫 학교 급식 메뉴 봇*\n\n급식 메뉴를 확인할 수 있는 봇입니다.";
const HOME_USAGE: &str = "*사용 방법:*\n\
    • `오늘 메뉴` 또는 `오늘 급식` 메시지 보내기\n\
    • `/menu` 또는 `/메뉴` 슬래시 커맨드 사용\n\
    • 봇을 멘션하고 '메뉴'라고 입력";

/// A message as Slack takes it, `text` doubles as the notification fallback
/// when `blocks` are present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Value>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            blocks: Vec::new(),
        }
    }

    /// What a user sees when fetching the menu failed.
    pub fn error(e: impl std::fmt::Display) -> Self {
        Self::text(format!("메뉴를 가져오는 중 오류가 발생했습니다: {e}"))
    }

    /// Day picker headed by `heading`.
    pub fn day_picker(heading: &str) -> Self {
        Self {
            text: heading.to_string(),
            blocks: vec![section(heading), day_buttons()],
        }
    }

    pub fn prompt() -> Self {
        Self::day_picker(PROMPT_TEXT)
    }

    pub fn greeting() -> Self {
        Self::day_picker(GREETING_TEXT)
    }
}

fn section(text: &str) -> Value {
    json!({
        "type": "section",
        "text": { "type": "mrkdwn", "text": text }
    })
}

fn divider() -> Value {
    json!({ "type": "divider" })
}

fn day_buttons() -> Value {
    let elements: Vec<Value> = DayOffset::ALL
        .into_iter()
        .map(|day| {
            json!({
                "type": "button",
                "text": { "type": "plain_text", "text": day.label() },
                "value": day.value(),
                "action_id": day.action_id(),
            })
        })
        .collect();
    json!({ "type": "actions", "elements": elements })
}

/// Home tab view showing `menu_text` between the intro and the usage notes.
pub fn home_view(menu_text: &str) -> Value {
    json!({
        "type": "home",
        "blocks": [
            section(HOME_INTRO),
            divider(),
            section(menu_text),
            divider(),
            section(HOME_USAGE),
        ]
    })
}
