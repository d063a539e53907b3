//! Human-readable rendering of roster events, and a sink that prints them.

use crate::domain::{EventSink, ResignRejection, RosterEvent};
use crate::ui::theme::Theme;

/// Renders an event as a one-line notice.
#[must_use]
pub fn render_event(event: &RosterEvent) -> String {
    match event {
        RosterEvent::Hired { name, id, .. } => format!("{name}さん（ID: {id}）を採用しました。"),
        RosterEvent::CapacityReached { limit, .. } => {
            format!("社員数が上限（{limit}名）に達しています。")
        }
        RosterEvent::Removed { name, .. } => format!("{name}さんを削除しました。"),
        RosterEvent::NotOnRoster { name, .. } => format!("{name}さんは社員リストに存在しません。"),
        RosterEvent::Promoted { name, to, .. } => format!("{name}さんが{to}に昇進しました！"),
        RosterEvent::Demoted { name, to, .. } => format!("{name}さんが{to}に降格しました。"),
        RosterEvent::AtCeiling { name, .. } => format!("{name}さんはすでに最高役職です。"),
        RosterEvent::AtFloor { name, .. } => format!("{name}さんはすでに最低役職です。"),
        RosterEvent::NoCompany { .. } => "会社が設定されていません。".to_string(),
        RosterEvent::ResignationRejected { reason, .. } => match reason {
            ResignRejection::EmptyRoster => {
                "いいえ、私以外に社員がいない場合は辞任しないでください".to_string()
            }
            ResignRejection::NoCandidate => "次期社長候補が見つかりません。".to_string(),
        },
        RosterEvent::SuccessionCompleted { outgoing, incoming } => {
            format!("{outgoing}は辞任し、{incoming}が新社長に就任しました。")
        }
        RosterEvent::PresidentRetired { president, .. } => {
            format!("{president}はすでに辞任しています。")
        }
    }
}

/// Prints every event's notice to stdout.
///
/// With a theme, changes are coloured with `notice_fg` and no-ops are dimmed.
#[derive(Debug, Default, Clone)]
pub struct ConsoleSink {
    theme: Option<Theme>,
}

impl ConsoleSink {
    #[must_use]
    pub const fn plain() -> Self {
        Self { theme: None }
    }

    #[must_use]
    pub fn themed(theme: Theme) -> Self {
        Self { theme: Some(theme) }
    }

    /// The line [`emit`](EventSink::emit) prints for `event`.
    #[must_use]
    pub fn format(&self, event: &RosterEvent) -> String {
        let text = render_event(event);
        match &self.theme {
            None => text,
            Some(theme) if event.is_no_op() => format!(
                "{}{}{text}{}",
                Theme::dim(),
                Theme::fg(&theme.colors.text_dim),
                Theme::reset()
            ),
            Some(theme) => format!("{}{text}{}", Theme::fg(&theme.colors.notice_fg), Theme::reset()),
        }
    }
}

impl EventSink for ConsoleSink {
    fn emit(&self, event: RosterEvent) {
        println!("{}", self.format(&event));
    }
}
