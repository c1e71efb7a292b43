//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};

use super::form::FormField;
use super::state::{App, AppMode, ConfirmAction, EditTarget};
use components::{render_dialog_framework, render_input_widget, toast_span};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 表格
            Constraint::Length(3), // 分页
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_table(frame, app, chunks[1]);
    render_pagination(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    // 渲染弹窗
    match &app.mode {
        AppMode::Modal(target) => render_form_dialog(frame, app, target),
        AppMode::Confirm(action) => render_confirm_dialog(frame, action),
        AppMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(format!("⚡ 电压设备  [{}]", app.scope.label()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(
        FormField::ALL
            .iter()
            .map(|field| Cell::from(field.label()))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .records
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.number.as_str()),
                Cell::from(record.range_or_empty()),
                Cell::from(record.model_or_empty()),
            ])
        })
        .collect();

    let title = if app.loading { "设备列表 (加载中…)" } else { "设备列表" };
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ],
    )
    .header(header)
    .block(Block::default().title(title).borders(Borders::ALL))
    .row_highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    );

    let mut state = TableState::default();
    if !app.records.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let pagination = &app.pagination;
    let text = format!(
        "第 {}/{} 页   共 {} 条   每页 {} 条",
        pagination.current,
        pagination.page_count(),
        pagination.total,
        pagination.page_size
    );
    let widget = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => {
            "[a] 新增  [e] 编辑  [d] 删除  [j/k] 选择  [h/l] 翻页  [g] 刷新  [q] 退出"
        }
        AppMode::Modal(_) => "[Tab] 切换字段  [Enter] 提交  [Esc] 取消",
        AppMode::Confirm(_) => "[y] 删除  [n] 取消",
    };

    let mut spans = vec![Span::styled(help_text, Style::default().fg(Color::Gray))];
    if let Some(toast) = &app.toast {
        spans.push(Span::raw("  |  "));
        spans.push(toast_span(toast));
    }

    let help = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn render_form_dialog(frame: &mut Frame, app: &App, target: &EditTarget) {
    let title = match target {
        EditTarget::Create => "添加设备",
        EditTarget::Edit(_) => "编辑设备",
    };
    let area = centered_rect(60, 60, frame.area());
    let inner = render_dialog_framework(frame, area, title);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    for (i, field) in FormField::ALL.into_iter().enumerate() {
        render_input_widget(
            frame,
            chunks[i],
            field.label(),
            app.form.value(field),
            field.required(),
            app.form.focus == field,
            app.form.error(field),
        );
    }

    let hint = Paragraph::new("按 Enter 提交，Esc 取消").style(Style::default().fg(Color::Gray));
    frame.render_widget(hint, chunks[3]);
}

fn render_confirm_dialog(frame: &mut Frame, action: &ConfirmAction) {
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let message = match action {
        ConfirmAction::Delete(record) => {
            format!("你确定要删除这个设备吗\n调度号: {}", record.number)
        }
    };

    let dialog = Paragraph::new(format!("{}\n\n[y] 删除  [n] 取消", message))
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title("⚠️ 注意").borders(Borders::ALL));

    frame.render_widget(dialog, area);
}
