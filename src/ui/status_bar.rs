use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let props = &state.props;
    let mut parts: Vec<Span> = vec![Span::styled(" tapcoin ", Theme::status_accent())];

    if props.can_click {
        parts.push(Span::styled(
            format!(" {:+} per tap ", props.tap_value()),
            Theme::status_bar(),
        ));
    } else {
        parts.push(Span::styled(
            format!(" cooldown: {} ", props.cooldown_label()),
            Theme::status_bar(),
        ));
    }
    if props.fun_mode {
        parts.push(Span::styled(" | fun ", Theme::status_accent()));
    }
    if props.sleeping {
        parts.push(Span::styled(" | sleeping ", Theme::status_bar()));
    }

    let hint = " q quit ";
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hint.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(hint, Theme::status_accent()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
