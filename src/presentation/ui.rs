use super::view::{view, FieldView, RegistrationView, UserListView, View};
use crate::application::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let current = view(app);
    render_header(f, &current, chunks[0]);
    match &current {
        View::Registration(form) => render_registration(f, form, chunks[1]),
        View::UserList(list) => render_user_list(f, list, chunks[1]),
    }
    render_status_bar(f, &current, chunks[2]);
}

fn render_header(f: &mut Frame, current: &View, area: Rect) {
    let screen = match current {
        View::Registration(_) => "Register",
        View::UserList(_) => "Users",
    };
    let header = Paragraph::new(format!("signup-tui - reqres.in | {screen}"))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_registration(f: &mut Frame, form: &RegistrationView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let title = Paragraph::new(form.title)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, rows[0]);

    render_field(f, &form.email, rows[2]);
    render_field(f, &form.password, rows[3]);

    let button_style = if form.submit_enabled {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(form.submit_label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(button_style);
    f.render_widget(button, rows[4]);

    if form.show_progress {
        let progress = Paragraph::new("Registering...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(progress, rows[5]);
    }

    if let Some(message) = &form.message {
        let text = Paragraph::new(message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Red));
        f.render_widget(text, rows[6]);
    }
}

fn render_field(f: &mut Frame, field: &FieldView, area: Rect) {
    let border_style = if field.focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let input = Paragraph::new(field.text.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(field.label)
            .border_style(border_style),
    );
    f.render_widget(input, area);

    if field.focused {
        let typed = u16::try_from(field.text.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(typed)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position((x, area.y.saturating_add(1)));
    }
}

fn render_user_list(f: &mut Frame, list: &UserListView, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Users");

    match list {
        UserListView::Progress => {
            let progress = Paragraph::new("Loading users...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            f.render_widget(progress, area);
        }
        UserListView::Message(message) => {
            let text = Paragraph::new(message.as_str())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Red))
                .block(block);
            f.render_widget(text, area);
        }
        UserListView::Rows { rows, scroll } => {
            let header = Row::new(vec![
                Cell::from("Name"),
                Cell::from("Email"),
                Cell::from("Avatar"),
            ])
            .style(Style::default().fg(Color::Yellow))
            .height(1);

            let body = rows.iter().skip(*scroll).map(|row| {
                Row::new(vec![
                    Cell::from(row.name.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
                    Cell::from(row.email.clone()),
                    Cell::from(row.avatar_url.clone()).style(Style::default().fg(Color::DarkGray)),
                ])
                .height(1)
            });

            let widths = [
                Constraint::Percentage(25),
                Constraint::Percentage(35),
                Constraint::Percentage(40),
            ];
            let table = Table::new(body, widths)
                .header(header)
                .block(block)
                .column_spacing(1);
            f.render_widget(table, area);
        }
    }
}

fn render_status_bar(f: &mut Frame, current: &View, area: Rect) {
    let (text, style) = match current {
        View::Registration(form) if form.show_progress => (
            "Submitting registration... | Esc: quit".to_string(),
            Style::default().fg(Color::Yellow),
        ),
        View::Registration(_) => (
            "Tab: switch field | Enter: register | Esc/Ctrl+C: quit".to_string(),
            Style::default(),
        ),
        View::UserList(UserListView::Progress) => {
            ("Loading... | q/Esc: quit".to_string(), Style::default().fg(Color::Yellow))
        }
        View::UserList(UserListView::Message(_)) => (
            "r: reload | q/Esc: quit".to_string(),
            Style::default().fg(Color::Red),
        ),
        View::UserList(UserListView::Rows { rows, .. }) => (
            format!("{} users | ↑↓/jk: scroll | q/Esc: quit", rows.len()),
            Style::default().fg(Color::Green),
        ),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}
