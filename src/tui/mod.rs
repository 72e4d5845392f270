// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive shell (ratatui + crossterm) over a `DocBrowser`,
//! including a built-in demo schema. All state transitions run in the key
//! handler; the draw pass only styles what the renderer produced.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::browser::DocBrowser;
use crate::model::{
    EnumType, EnumValue, Field, FieldName, InputObjectType, InputValue, ObjectType, OperationKind,
    Schema, TypeBody, TypeDef, TypeName, TypeRef, UnionType,
};
use crate::render::{render, DocView};
use crate::tui::theme::TuiTheme;

#[cfg(test)]
mod tests;
mod theme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅿 🅷 🅰 🆁 🅾 🆂 ";
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Runs the interactive terminal UI over the given schema (or the absent
/// placeholder when `None`).
pub fn run(schema: Option<Schema>) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(schema);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchInput {
    Inactive,
    Editing,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    browser: DocBrowser,
    view: DocView,
    link_count: usize,
    selected_link: usize,
    scroll: u16,
    search_input: SearchInput,
    theme: TuiTheme,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(schema: Option<Schema>) -> Self {
        let (theme, theme_error) = match TuiTheme::from_env() {
            Ok(theme) => (theme, None),
            Err(err) => (TuiTheme::default(), Some(err.to_string())),
        };

        let mut browser = DocBrowser::new();
        browser.set_schema(schema);
        let view = render(&browser);
        let link_count = view.link_spans().count();

        let mut app = Self {
            browser,
            view,
            link_count,
            selected_link: 0,
            scroll: 0,
            search_input: SearchInput::Inactive,
            theme,
            toast: None,
            should_quit: false,
        };
        if let Some(message) = theme_error {
            app.set_toast(message);
        }
        app
    }

    fn refresh_view(&mut self) {
        self.view = render(&self.browser);
        self.link_count = self.view.link_spans().count();
        if self.link_count == 0 {
            self.selected_link = 0;
        } else if self.selected_link >= self.link_count {
            self.selected_link = self.link_count - 1;
        }
    }

    fn reset_cursor(&mut self) {
        self.selected_link = 0;
        self.scroll = 0;
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn active_toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|toast| toast.expires_at > Instant::now())
            .map(|toast| toast.message.as_str())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.search_input {
            SearchInput::Editing => self.handle_search_key(key.code),
            SearchInput::Inactive => self.handle_browse_key(key.code),
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.search_input = SearchInput::Inactive;
                self.browser.set_query("");
                self.refresh_view();
            }
            KeyCode::Enter => {
                self.search_input = SearchInput::Inactive;
                if !self.browser.query().trim().is_empty() {
                    self.browser.open_search_results();
                    self.reset_cursor();
                }
                self.refresh_view();
            }
            KeyCode::Backspace => {
                let mut query = self.browser.query().to_owned();
                query.pop();
                self.browser.set_query(query);
                self.refresh_view();
            }
            KeyCode::Char(ch) => {
                let mut query = self.browser.query().to_owned();
                query.push(ch);
                self.browser.set_query(query);
                self.refresh_view();
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => {
                self.search_input = SearchInput::Editing;
                self.browser.set_query("");
                self.refresh_view();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_link = self.selected_link.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.link_count > 0 && self.selected_link + 1 < self.link_count {
                    self.selected_link += 1;
                }
            }
            KeyCode::Enter => self.follow_selected_link(),
            KeyCode::Backspace | KeyCode::Left => {
                self.browser.go_back();
                self.reset_cursor();
                self.refresh_view();
            }
            KeyCode::Char('h') | KeyCode::Home => {
                self.browser.go_home();
                self.reset_cursor();
                self.refresh_view();
            }
            _ => {}
        }
    }

    fn follow_selected_link(&mut self) {
        let Some(link) = self
            .view
            .link_spans()
            .nth(self.selected_link)
            .map(|(_, span)| span.link().clone())
        else {
            return;
        };

        self.browser
            .navigate(Some(link.pointer().clone()), link.mode());
        self.reset_cursor();
        self.refresh_view();
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let title_width = main_area.width.saturating_sub(4) as usize;
    let title = crate::render::text::truncate_with_ellipsis(app.view.title(), title_width);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(
            app.theme
                .panel_border_style(app.search_input == SearchInput::Inactive),
        );
    let content_area = block.inner(main_area);
    frame.render_widget(block, main_area);

    adjust_scroll(app, content_area.height);
    let text = doc_text(&app.view, app.selected_link, &app.theme);
    let content = Paragraph::new(text)
        .style(app.theme.base_style())
        .scroll((app.scroll, 0));
    frame.render_widget(content, content_area);

    let toast_suffix = match app.active_toast() {
        Some(message) => format!("  {message}"),
        None => String::new(),
    };

    if app.search_input == SearchInput::Editing {
        let query = app.browser.query();
        let status = Paragraph::new(Line::from(vec![
            Span::styled("/", Style::default().fg(FOOTER_KEY_COLOR)),
            Span::styled(query.to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)),
        ]));
        frame.render_widget(status, status_area);
        let cursor_x = status_area
            .x
            .saturating_add(1)
            .saturating_add(query.chars().count() as u16)
            .min(status_area.x.saturating_add(status_area.width.saturating_sub(1)));
        frame.set_cursor_position((cursor_x, status_area.y));
        return;
    }

    let status = Paragraph::new(footer_help_line(&toast_suffix));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);
}

/// Keeps the selected link's line inside the viewport.
fn adjust_scroll(app: &mut App, viewport_height: u16) {
    if viewport_height == 0 {
        return;
    }

    let selected_line = app
        .view
        .link_spans()
        .nth(app.selected_link)
        .map(|(line_idx, _)| line_idx as u16);
    let Some(selected_line) = selected_line else {
        return;
    };

    if selected_line < app.scroll {
        app.scroll = selected_line;
    } else if selected_line >= app.scroll + viewport_height {
        app.scroll = selected_line - viewport_height + 1;
    }
}

fn doc_text(view: &DocView, selected_link: usize, theme: &TuiTheme) -> Text<'static> {
    let mut link_counter = 0usize;
    let mut lines = Vec::with_capacity(view.lines().len());

    for line in view.lines() {
        if line.spans().is_empty() {
            lines.push(Line::styled(line.text().to_owned(), theme.base_style()));
            continue;
        }

        let chars: Vec<char> = line.text().chars().collect();
        let mut spans_out = Vec::new();
        let mut cursor = 0usize;
        for span in line.spans() {
            if span.start() > cursor {
                let text: String = chars[cursor..span.start()].iter().collect();
                spans_out.push(Span::styled(text, theme.base_style()));
            }
            let text: String = chars[span.start()..=span.end()].iter().collect();
            let style = if link_counter == selected_link {
                theme.selection_style()
            } else {
                theme.link_style()
            };
            spans_out.push(Span::styled(text, style));
            link_counter += 1;
            cursor = span.end() + 1;
        }
        if cursor < chars.len() {
            let text: String = chars[cursor..].iter().collect();
            spans_out.push(Span::styled(text, theme.base_style()));
        }
        lines.push(Line::from(spans_out));
    }

    Text::from(lines)
}

fn footer_help_line(toast_suffix: &str) -> Line<'static> {
    let key = Style::default().fg(FOOTER_KEY_COLOR);
    let label = Style::default().fg(FOOTER_LABEL_COLOR);

    let mut spans = Vec::new();
    for (key_text, label_text) in [
        ("/", " search  "),
        ("↵", " open  "),
        ("⌫", " back  "),
        ("h", " home  "),
        ("q", " quit"),
    ] {
        spans.push(Span::styled(key_text, key));
        spans.push(Span::styled(label_text, label));
    }
    if !toast_suffix.is_empty() {
        spans.push(Span::styled(toast_suffix.to_owned(), label));
    }
    Line::from(spans)
}

fn footer_brand_line() -> Line<'static> {
    Line::from(Span::styled(
        FOOTER_BRAND,
        Style::default().fg(FOOTER_BRAND_COLOR),
    ))
}

/// A built-in blog-style schema for `--demo` mode and tests: cyclic object
/// references, an interface, a union, an enum, an input object, and a
/// deprecated field.
pub fn demo_schema() -> Schema {
    fn type_name(value: &str) -> TypeName {
        TypeName::new(value).expect("demo type name")
    }
    fn field_name(value: &str) -> FieldName {
        FieldName::new(value).expect("demo field name")
    }
    fn named(value: &str) -> TypeRef {
        TypeRef::named(type_name(value))
    }
    fn non_null_list(value: &str) -> TypeRef {
        TypeRef::non_null(TypeRef::list(TypeRef::non_null(named(value))))
    }

    let mut schema = Schema::new();

    for scalar in ["ID", "String", "Int", "Boolean", "DateTime"] {
        schema.insert_type(TypeDef::new(type_name(scalar), TypeBody::Scalar));
    }

    let mut node = ObjectType::new();
    node.fields_mut()
        .insert(field_name("id"), Field::new(TypeRef::non_null(named("ID"))));
    schema.insert_type(
        TypeDef::new(type_name("Node"), TypeBody::Interface(node))
            .with_description("An object with a globally unique id."),
    );

    let mut query = ObjectType::new();
    query.fields_mut().insert(
        field_name("me"),
        Field::new(named("User")).with_description("The currently signed-in user."),
    );
    query.fields_mut().insert(
        field_name("user"),
        Field::new(named("User")).with_arg(InputValue::new(
            field_name("id"),
            TypeRef::non_null(named("ID")),
        )),
    );
    query
        .fields_mut()
        .insert(field_name("users"), Field::new(non_null_list("User")));
    query.fields_mut().insert(
        field_name("post"),
        Field::new(named("Post")).with_arg(InputValue::new(
            field_name("id"),
            TypeRef::non_null(named("ID")),
        )),
    );
    query.fields_mut().insert(
        field_name("feed"),
        Field::new(non_null_list("Post"))
            .with_description("Most recent posts, newest first.")
            .with_arg(
                InputValue::new(field_name("limit"), named("Int")).with_default_value("10"),
            ),
    );
    query.fields_mut().insert(
        field_name("search"),
        Field::new(TypeRef::list(named("SearchItem"))).with_arg(InputValue::new(
            field_name("term"),
            TypeRef::non_null(named("String")),
        )),
    );
    schema.insert_type(
        TypeDef::new(type_name("Query"), TypeBody::Object(query))
            .with_description("The blog's read entry point."),
    );

    let mut mutation = ObjectType::new();
    mutation.fields_mut().insert(
        field_name("createPost"),
        Field::new(named("Post")).with_arg(InputValue::new(
            field_name("input"),
            TypeRef::non_null(named("NewPostInput")),
        )),
    );
    mutation.fields_mut().insert(
        field_name("deletePost"),
        Field::new(named("Boolean")).with_arg(InputValue::new(
            field_name("id"),
            TypeRef::non_null(named("ID")),
        )),
    );
    schema.insert_type(TypeDef::new(
        type_name("Mutation"),
        TypeBody::Object(mutation),
    ));

    let mut subscription = ObjectType::new();
    subscription.fields_mut().insert(
        field_name("postAdded"),
        Field::new(named("Post")).with_description("Fires when any author publishes."),
    );
    schema.insert_type(TypeDef::new(
        type_name("Subscription"),
        TypeBody::Object(subscription),
    ));

    let mut user = ObjectType::new();
    user.interfaces_mut().push(type_name("Node"));
    user.fields_mut()
        .insert(field_name("id"), Field::new(TypeRef::non_null(named("ID"))));
    user.fields_mut().insert(
        field_name("name"),
        Field::new(TypeRef::non_null(named("String"))),
    );
    user.fields_mut()
        .insert(field_name("email"), Field::new(named("String")));
    user.fields_mut()
        .insert(field_name("role"), Field::new(TypeRef::non_null(named("Role"))));
    user.fields_mut()
        .insert(field_name("posts"), Field::new(non_null_list("Post")));
    schema.insert_type(
        TypeDef::new(type_name("User"), TypeBody::Object(user))
            .with_description("A registered author or reader."),
    );

    let mut post = ObjectType::new();
    post.interfaces_mut().push(type_name("Node"));
    post.fields_mut()
        .insert(field_name("id"), Field::new(TypeRef::non_null(named("ID"))));
    post.fields_mut().insert(
        field_name("title"),
        Field::new(TypeRef::non_null(named("String"))),
    );
    post.fields_mut()
        .insert(field_name("body"), Field::new(named("String")));
    post.fields_mut().insert(
        field_name("author"),
        Field::new(TypeRef::non_null(named("User"))),
    );
    post.fields_mut().insert(
        field_name("comments"),
        Field::new(TypeRef::list(named("Comment"))),
    );
    post.fields_mut().insert(
        field_name("publishedAt"),
        Field::new(named("DateTime")),
    );
    post.fields_mut().insert(
        field_name("slug"),
        Field::new(named("String")).with_deprecation(Some("Use id in URLs instead.".to_owned())),
    );
    schema.insert_type(TypeDef::new(type_name("Post"), TypeBody::Object(post)));

    let mut comment = ObjectType::new();
    comment.interfaces_mut().push(type_name("Node"));
    comment
        .fields_mut()
        .insert(field_name("id"), Field::new(TypeRef::non_null(named("ID"))));
    comment
        .fields_mut()
        .insert(field_name("body"), Field::new(TypeRef::non_null(named("String"))));
    comment
        .fields_mut()
        .insert(field_name("author"), Field::new(named("User")));
    comment
        .fields_mut()
        .insert(field_name("post"), Field::new(named("Post")));
    schema.insert_type(TypeDef::new(
        type_name("Comment"),
        TypeBody::Object(comment),
    ));

    let mut role = EnumType::new();
    role.values_mut().push(EnumValue::new("ADMIN"));
    role.values_mut().push(EnumValue::new("EDITOR"));
    role.values_mut()
        .push(EnumValue::new("READER").with_description("Default for new accounts."));
    schema.insert_type(TypeDef::new(type_name("Role"), TypeBody::Enum(role)));

    let mut search_item = UnionType::new();
    search_item.members_mut().push(type_name("User"));
    search_item.members_mut().push(type_name("Post"));
    search_item.members_mut().push(type_name("Comment"));
    schema.insert_type(
        TypeDef::new(type_name("SearchItem"), TypeBody::Union(search_item))
            .with_description("Anything full-text search can return."),
    );

    let mut new_post = InputObjectType::new();
    new_post.fields_mut().insert(
        field_name("title"),
        InputValue::new(field_name("title"), TypeRef::non_null(named("String"))),
    );
    new_post.fields_mut().insert(
        field_name("body"),
        InputValue::new(field_name("body"), named("String")),
    );
    new_post.fields_mut().insert(
        field_name("authorId"),
        InputValue::new(field_name("authorId"), TypeRef::non_null(named("ID"))),
    );
    schema.insert_type(TypeDef::new(
        type_name("NewPostInput"),
        TypeBody::InputObject(new_post),
    ));

    schema.set_root(OperationKind::Query, Some(type_name("Query")));
    schema.set_root(OperationKind::Mutation, Some(type_name("Mutation")));
    schema.set_root(OperationKind::Subscription, Some(type_name("Subscription")));
    schema
}
