//! 通用 UI 组件
//!
//! 对话框、输入框等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::state::{Toast, ToastLevel};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带标签、必填标记和校验提示的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    required: bool,
    is_focused: bool,
    error: Option<&str>,
) {
    let style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        style
    };

    let title = if required {
        format!("* {}:", label)
    } else {
        format!("{}:", label)
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    let cursor = if is_focused { "▏" } else { "" };
    let input = Paragraph::new(format!("{}{}", value, cursor))
        .style(style)
        .block(block);
    frame.render_widget(input, area);
}

/// [组件] 提示消息
pub fn toast_span(toast: &Toast) -> Span<'_> {
    let (icon, color) = match toast.level {
        ToastLevel::Loading => ("⏳", Color::Cyan),
        ToastLevel::Success => ("✔", Color::Green),
        ToastLevel::Error => ("✗", Color::Red),
    };
    Span::styled(
        format!("{} {}", icon, toast.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
