// File: ./src/tui/view.rs
// Renders the TUI: task list, add form, footer and toast overlay.
use crate::reminder;
use crate::theme::Palette;
use crate::tui::state::{AppState, FormField, Mode, TaskForm};
use chrono::{Duration, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let palette = state.theme.palette();

    // Paint the whole frame first so the theme background covers everything.
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        f.area(),
    );

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let full_help_text = vec![
        Line::from(vec![
            Span::styled("  j/k ↑/↓     ", key_style),
            Span::raw("Select a task (or choose the drop position while moving)"),
        ]),
        Line::from(vec![
            Span::styled("  a           ", key_style),
            Span::raw("Add a task (text + deadline)"),
        ]),
        Line::from(vec![
            Span::styled("  d / Del     ", key_style),
            Span::raw("Delete the selected task"),
        ]),
        Line::from(vec![
            Span::styled("  Space / g   ", key_style),
            Span::raw("Grab the selected task to move it"),
        ]),
        Line::from(vec![
            Span::styled("  Enter       ", key_style),
            Span::raw("Drop the grabbed task at the highlighted position"),
        ]),
        Line::from(vec![
            Span::styled("  Esc         ", key_style),
            Span::raw("Cancel a grab / close the form or this help"),
        ]),
        Line::from(vec![
            Span::styled("  t           ", key_style),
            Span::raw("Toggle light/dark theme"),
        ]),
        Line::from(vec![
            Span::styled("  Wheel       ", key_style),
            Span::raw("Scroll through tasks"),
        ]),
        Line::from(vec![
            Span::styled("  q           ", key_style),
            Span::raw("Quit"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), footer_height])
        .split(f.area());

    // --- Task list ---
    let now = Utc::now();
    let warn_window = Duration::minutes(reminder::DUE_SOON_WINDOW_MINS);
    let moving_dest = match state.mode {
        Mode::Moving { dest, .. } => Some(dest),
        _ => None,
    };

    let task_items: Vec<ListItem> = state
        .display_tasks()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let due_style = match t.deadline.time_left(now) {
                Some(left) if left <= Duration::zero() => Style::default().fg(palette.overdue),
                Some(left) if left < warn_window => Style::default()
                    .fg(palette.due_soon)
                    .add_modifier(Modifier::BOLD),
                Some(_) => Style::default().fg(palette.dimmed),
                // Unparsable input is shown verbatim, visibly off to the side.
                None => Style::default()
                    .fg(palette.dimmed)
                    .add_modifier(Modifier::ITALIC),
            };

            let mut spans = Vec::new();
            if moving_dest == Some(i) {
                spans.push(Span::styled("↕ ", Style::default().fg(palette.accent)));
            }
            spans.push(Span::styled(
                t.text.clone(),
                Style::default().fg(palette.text),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!("(due: {})", t.deadline), due_style));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = match state.mode {
        Mode::Moving { .. } => " 📝 To-Do List [moving] ".to_string(),
        _ => format!(" 📝 To-Do List ({}) - {} ", state.tasks.len(), state.theme),
    };

    let task_list = List::new(task_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(Style::default().fg(palette.title))
                .border_style(Style::default().fg(palette.border)),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(palette.selection_bg)
                .fg(palette.selection_fg),
        );
    f.render_stateful_widget(task_list, v_chunks[0], &mut state.list_state);

    // --- Footer ---
    let footer_area = v_chunks[1];
    f.render_widget(Clear, footer_area);

    if state.show_full_help {
        let p = Paragraph::new(full_help_text)
            .style(Style::default().bg(palette.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .border_style(Style::default().fg(palette.border)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(p, footer_area);
    } else {
        let status = Paragraph::new(state.message.clone())
            .style(Style::default().fg(palette.status).bg(palette.background))
            .block(
                Block::default()
                    .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                    .title(" Status ")
                    .border_style(Style::default().fg(palette.border)),
            );
        let help_str = match state.mode {
            Mode::Adding(_) => "Tab:Switch Field  ↵:Add  Esc:Close",
            Mode::Moving { .. } => "j/k:Choose Position  ↵:Drop  Esc:Cancel",
            Mode::Normal => "?:Help q:Quit a:Add d:Del Spc:Move t:Theme",
        };
        let help = Paragraph::new(help_str)
            .style(Style::default().bg(palette.background))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                    .title(" Actions ")
                    .border_style(Style::default().fg(palette.border)),
            );

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(footer_area);
        f.render_widget(status, chunks[0]);
        f.render_widget(help, chunks[1]);
    }

    // --- Add-task form ---
    if let Mode::Adding(form) = &state.mode {
        draw_add_form(f, form, &palette);
    }

    // --- Toasts (top-right, newest on top) ---
    draw_toasts(f, state, &palette);
}

fn draw_add_form(f: &mut Frame, form: &TaskForm, palette: &Palette) {
    let area = centered_rect(54, 9, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Task ")
        .title_style(Style::default().fg(palette.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let focused_border = Style::default().fg(palette.accent);
    let idle_border = Style::default().fg(palette.border);

    let text_input = Paragraph::new(form.text.value.as_str())
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Task ")
                .border_style(if form.field == FormField::Text {
                    focused_border
                } else {
                    idle_border
                }),
        );
    f.render_widget(text_input, rows[0]);

    let deadline_input = Paragraph::new(form.deadline.value.as_str())
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Deadline (YYYY-MM-DD HH:MM) ")
                .border_style(if form.field == FormField::Deadline {
                    focused_border
                } else {
                    idle_border
                }),
        );
    f.render_widget(deadline_input, rows[1]);

    let hint = Paragraph::new("Enter: add    Tab: switch field    Esc: close")
        .style(Style::default().fg(palette.dimmed))
        .alignment(Alignment::Center);
    f.render_widget(hint, rows[2]);

    // Terminal cursor inside the focused field.
    let (field_rect, field) = match form.field {
        FormField::Text => (rows[0], &form.text),
        FormField::Deadline => (rows[1], &form.deadline),
    };
    let cursor_x = field_rect.x + 1 + field.cursor_position as u16;
    f.set_cursor_position((
        cursor_x.min(field_rect.x + field_rect.width.saturating_sub(2)),
        field_rect.y + 1,
    ));
}

fn draw_toasts(f: &mut Frame, state: &AppState, palette: &Palette) {
    let area = f.area();
    let mut y = area.y + 1;

    for toast in state.toasts.iter().rev() {
        let text_width = toast.text.width() as u16;
        let width = (text_width + 4).min(area.width.saturating_sub(2));
        if width < 6 || y + 3 > area.bottom() {
            break;
        }
        let rect = Rect {
            x: area.right().saturating_sub(width + 1),
            y,
            width,
            height: 3,
        };

        let p = Paragraph::new(toast.text.clone())
            .style(Style::default().fg(palette.text).bg(palette.background))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.toast_border)),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
        y += 3;
    }
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let v_pad = r.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(v_pad),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
