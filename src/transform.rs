use serde_json::Value;

use crate::model::teams::{AdaptiveCard, CardElement, Fact, OpenUrlAction, TeamsMessage};

/// Adaptive Card의 색상 태그와 텍스트에 들어가는 이모지.
/// 카드 본문에는 이모지만 렌더링된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub tag: &'static str,
    pub emoji: &'static str,
}

/// 레벨 문자열을 있는 그대로 매칭한다. 대소문자 정규화 없음,
/// 모르는 값은 default 행으로.
pub fn level_style(level: &str) -> LevelStyle {
    match level {
        "fatal" | "error" => LevelStyle {
            tag: "attention",
            emoji: "🔴",
        },
        "warning" => LevelStyle {
            tag: "warning",
            emoji: "⚠️",
        },
        "info" => LevelStyle {
            tag: "good",
            emoji: "ℹ️",
        },
        "debug" => LevelStyle {
            tag: "default",
            emoji: "🐛",
        },
        _ => LevelStyle {
            tag: "default",
            emoji: "📢",
        },
    }
}

// 후보를 왼쪽부터 평가해서 처음 정의된 값, 없으면 default
fn first_defined<'a>(candidates: &[Option<&'a str>], default: &'a str) -> &'a str {
    candidates
        .iter()
        .find_map(|candidate| *candidate)
        .unwrap_or(default)
}

// 경로가 없거나 문자열이 아니면 None
fn lookup<'a>(payload: &'a Value, pointer: &str) -> Option<&'a str> {
    payload.pointer(pointer).and_then(Value::as_str)
}

/// Sentry webhook payload를 Teams Adaptive Card 메시지로 변환한다.
/// 순수 함수. 빈 객체를 포함해 어떤 JSON이 들어와도 실패하지 않는다.
pub fn transform_to_teams_card(payload: &Value) -> TeamsMessage {
    let action = first_defined(&[lookup(payload, "/action")], "unknown");
    let title = first_defined(
        &[
            lookup(payload, "/data/issue/title"),
            lookup(payload, "/data/event/title"),
        ],
        "Sentry Alert",
    );
    let message = first_defined(
        &[
            lookup(payload, "/data/event/message"),
            lookup(payload, "/data/issue/metadata/value"),
            lookup(payload, "/data/issue/culprit"),
        ],
        "No message available",
    );
    let level = first_defined(
        &[
            lookup(payload, "/data/issue/level"),
            lookup(payload, "/data/event/level"),
        ],
        "info",
    );
    let project = first_defined(
        &[lookup(payload, "/project_name"), lookup(payload, "/project")],
        "Unknown Project",
    );
    let url = first_defined(
        &[lookup(payload, "/data/issue/web_url"), lookup(payload, "/url")],
        "",
    );

    let style = level_style(level);

    let body = vec![
        CardElement::heading(format!("{} Sentry Alert: {}", style.emoji, action)),
        CardElement::fact_set(vec![
            Fact::new("Project", project),
            Fact::new("Level", level.to_uppercase()),
            Fact::new("Title", title),
        ]),
        CardElement::paragraph(message.to_string()),
    ];

    let actions = if url.is_empty() {
        Vec::new()
    } else {
        vec![OpenUrlAction::open_url("View in Sentry", url)]
    };

    TeamsMessage::single_card(AdaptiveCard::new(body, actions))
}
