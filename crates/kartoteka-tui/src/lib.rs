// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use kartoteka_app::{Directory, DirectoryCommand, FormField, OrgId, SortKey, sanitize_for_display};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub show_hints: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self { show_hints: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct UiState {
    query_active: bool,
    selected_row: usize,
    form_field: usize,
}

pub fn run_app(directory: &mut Directory, options: &UiOptions) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut ui = UiState::default();

    let mut result = Ok(());
    loop {
        if let Err(error) = terminal.draw(|frame| render(frame, directory, &ui, options)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(directory, &mut ui, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn handle_key_event(directory: &mut Directory, ui: &mut UiState, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if directory.editor.is_some() {
        handle_form_key(directory, ui, key);
        return false;
    }

    if ui.query_active {
        handle_query_key(directory, ui, key);
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('/'), KeyModifiers::NONE) => {
            ui.query_active = true;
        }
        (KeyCode::Char('n'), KeyModifiers::NONE) => {
            directory.dispatch(DirectoryCommand::ToggleSort(SortKey::Name));
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            directory.dispatch(DirectoryCommand::ToggleSort(SortKey::Director));
        }
        (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
            directory.dispatch(DirectoryCommand::PrevPage);
            clamp_selection(directory, ui);
        }
        (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
            directory.dispatch(DirectoryCommand::NextPage);
            clamp_selection(directory, ui);
        }
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            ui.selected_row = ui.selected_row.saturating_sub(1);
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            let len = directory.page_view().items.len();
            ui.selected_row = (ui.selected_row + 1).min(len.saturating_sub(1));
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => {
            directory.dispatch(DirectoryCommand::OpenCreate);
            ui.form_field = 0;
        }
        (KeyCode::Enter, _) => {
            if let Some(id) = selected_org_id(directory, ui) {
                directory.dispatch(DirectoryCommand::RowActivated(id));
                ui.form_field = 0;
            }
        }
        (KeyCode::Char('x'), KeyModifiers::NONE) | (KeyCode::Delete, _) => {
            if let Some(id) = selected_org_id(directory, ui) {
                directory.dispatch(DirectoryCommand::DeleteRequested(id));
                clamp_selection(directory, ui);
            }
        }
        _ => {}
    }
    false
}

fn handle_query_key(directory: &mut Directory, ui: &mut UiState, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Enter, _) => {
            ui.query_active = false;
        }
        (KeyCode::Backspace, _) => {
            let mut query = directory.view.query.clone();
            query.pop();
            directory.dispatch(DirectoryCommand::SetQuery(query));
            clamp_selection(directory, ui);
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            directory.dispatch(DirectoryCommand::SetQuery(String::new()));
            clamp_selection(directory, ui);
        }
        (KeyCode::Char(ch), modifiers)
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
        {
            let mut query = directory.view.query.clone();
            query.push(ch);
            directory.dispatch(DirectoryCommand::SetQuery(query));
            clamp_selection(directory, ui);
        }
        _ => {}
    }
}

fn handle_form_key(directory: &mut Directory, ui: &mut UiState, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            directory.dispatch(DirectoryCommand::CancelForm);
            ui.form_field = 0;
        }
        (KeyCode::Tab, _) => {
            move_form_cursor(ui, 1);
        }
        (KeyCode::BackTab, _) => {
            move_form_cursor(ui, -1);
        }
        (KeyCode::Enter, _) => {
            submit_form(directory, ui);
        }
        (KeyCode::Char('s'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            submit_form(directory, ui);
        }
        (KeyCode::Backspace, _) => {
            edit_form_field(directory, ui, |value| {
                value.pop();
            });
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            edit_form_field(directory, ui, String::clear);
        }
        (KeyCode::Char(ch), modifiers)
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
        {
            edit_form_field(directory, ui, |value| value.push(ch));
        }
        _ => {}
    }
}

fn move_form_cursor(ui: &mut UiState, delta: isize) {
    let len = FormField::ALL.len() as isize;
    ui.form_field = (ui.form_field as isize + delta).rem_euclid(len) as usize;
}

fn submit_form(directory: &mut Directory, ui: &mut UiState) {
    directory.dispatch(DirectoryCommand::Submit);
    if directory.editor.is_none() {
        ui.form_field = 0;
        clamp_selection(directory, ui);
    }
}

fn edit_form_field(directory: &mut Directory, ui: &mut UiState, edit: impl FnOnce(&mut String)) {
    let field = active_form_field(ui);
    let Some(editor) = directory.editor.as_ref() else {
        return;
    };
    let mut value = editor.form.field(field).to_owned();
    edit(&mut value);
    directory.dispatch(DirectoryCommand::SetFormField { field, value });
}

fn active_form_field(ui: &UiState) -> FormField {
    FormField::ALL[ui.form_field.min(FormField::ALL.len() - 1)]
}

fn selected_org_id(directory: &Directory, ui: &UiState) -> Option<OrgId> {
    let page = directory.page_view();
    page.items
        .get(ui.selected_row)
        .map(|organization| organization.id)
}

fn clamp_selection(directory: &Directory, ui: &mut UiState) {
    let len = directory.page_view().items.len();
    ui.selected_row = ui.selected_row.min(len.saturating_sub(1));
}

fn render(frame: &mut ratatui::Frame<'_>, directory: &Directory, ui: &UiState, options: &UiOptions) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let header = Paragraph::new(query_line(directory))
        .block(Block::default().title("картотека").borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    render_table(frame, layout[1], directory, ui);

    let status = Paragraph::new(status_text(directory, ui, options))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, layout[2]);

    if directory.editor.is_some() {
        let area = centered_rect(56, 60, frame.area());
        frame.render_widget(Clear, area);
        let title = directory.form_title().unwrap_or_default();
        let form = Paragraph::new(render_form_overlay_text(directory, ui)).block(
            Block::default()
                .title(sanitize_for_display(&title))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(form, area);
    }
}

fn query_line(directory: &Directory) -> String {
    format!(
        "Поиск по директору: {}",
        sanitize_for_display(&directory.view.query)
    )
}

fn render_table(frame: &mut ratatui::Frame<'_>, area: Rect, directory: &Directory, ui: &UiState) {
    let page = directory.page_view();
    let widths = [
        Constraint::Min(18),
        Constraint::Min(14),
        Constraint::Min(16),
        Constraint::Min(24),
    ];

    let header_cells = [
        column_header(directory, SortKey::Name),
        column_header(directory, SortKey::Director),
        "Телефон".to_owned(),
        "Адрес".to_owned(),
    ]
    .map(|label| {
        Cell::from(label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells);

    let rows: Vec<Row> = if page.items.is_empty() {
        vec![Row::new([Cell::from("Нет данных")])]
    } else {
        page.items
            .iter()
            .enumerate()
            .map(|(row_index, organization)| {
                let mut style = Style::default();
                if row_index == ui.selected_row {
                    style = style.bg(Color::DarkGray);
                }
                let cells = [
                    sanitize_for_display(&organization.name),
                    sanitize_for_display(&organization.director),
                    sanitize_for_display(&organization.phone),
                    sanitize_for_display(&organization.address.display()),
                ]
                .map(|text| Cell::from(text).style(style));
                Row::new(cells)
            })
            .collect()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().title(page.label()).borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn column_header(directory: &Directory, key: SortKey) -> String {
    let mut label = key.label().to_owned();
    if directory.view.sort_key == key {
        label.push(' ');
        label.push_str(directory.view.sort_direction.marker());
    }
    label
}

fn status_text(directory: &Directory, ui: &UiState, options: &UiOptions) -> String {
    let mode = if directory.editor.is_some() {
        "FORM"
    } else if ui.query_active {
        "QUERY"
    } else {
        "NAV"
    };

    let mut parts = vec![mode.to_owned()];
    if directory.editor.is_some() {
        let field = active_form_field(ui);
        parts.push(format!(
            "field {} ({}/{})",
            field.name(),
            ui.form_field + 1,
            FormField::ALL.len()
        ));
    }
    if let Some(status) = &directory.status_line {
        parts.push(sanitize_for_display(status));
    }
    if options.show_hints {
        parts.push(hint_line(directory, ui).to_owned());
    }
    parts.join(" | ")
}

fn hint_line(directory: &Directory, ui: &UiState) -> &'static str {
    if directory.editor.is_some() {
        "tab/shift+tab field | enter or ctrl+s save | esc cancel"
    } else if ui.query_active {
        "type filter | ctrl+u clear | enter/esc done"
    } else {
        "j/k row | h/l page | n/d sort | / filter | a add | enter edit | x delete | q quit"
    }
}

fn render_form_overlay_text(directory: &Directory, ui: &UiState) -> String {
    let Some(editor) = &directory.editor else {
        return String::new();
    };

    let mut lines = Vec::new();
    for (index, field) in FormField::ALL.iter().enumerate() {
        let prefix = if index == ui.form_field { "> " } else { "  " };
        let value = sanitize_for_display(editor.form.field(*field));
        lines.push(format!("{prefix}{}: {value}", field.label()));
    }
    lines.push(String::new());
    if directory.can_submit() {
        lines.push("tab/shift+tab field | enter save | esc cancel".to_owned());
    } else {
        lines.push("tab/shift+tab field | esc cancel".to_owned());
        lines.push("(fill every field to save)".to_owned());
    }
    lines.join("\n")
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
