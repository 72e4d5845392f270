// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{demo_schema, App, SearchInput};
use crate::browser::ViewMode;

fn app() -> App {
    App::new(Some(demo_schema()))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_query(app: &mut App, query: &str) {
    for ch in query.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[test]
fn starts_at_home_with_root_links() {
    let app = app();
    assert_eq!(app.view.title(), "Documentation");
    // query, mutation and subscription roots are all linkable.
    assert_eq!(app.link_count, 3);
    assert_eq!(app.selected_link, 0);
}

#[test]
fn without_a_schema_the_placeholder_has_no_links() {
    let mut app = App::new(None);
    assert!(app
        .view
        .lines()
        .iter()
        .any(|line| line.text().contains("No schema available")));
    assert_eq!(app.link_count, 0);

    // Enter has nothing to follow and must not panic or navigate.
    press(&mut app, KeyCode::Enter);
    assert!(app.browser.is_home());
}

#[test]
fn enter_follows_the_selected_link() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.view.title(), "Query");
    assert_eq!(app.browser.history().len(), 1);
}

#[test]
fn selection_moves_within_bounds() {
    let mut app = app();
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected_link, 0);

    for _ in 0..10 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.selected_link, app.link_count - 1);
}

#[test]
fn backspace_goes_back_to_the_previous_view() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Backspace);

    assert!(app.browser.is_home());
    assert_eq!(app.view.title(), "Documentation");
}

#[test]
fn h_goes_home_from_any_depth() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(app.browser.history().len() >= 2);

    press(&mut app, KeyCode::Char('h'));
    assert!(app.browser.is_home());
    assert_eq!(app.view.title(), "Documentation");
}

#[test]
fn slash_enters_search_editing_and_typing_recomputes_results() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.search_input, SearchInput::Editing);

    type_query(&mut app, "post");
    assert_eq!(app.browser.query(), "post");
    assert!(!app.browser.results().is_empty());

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.browser.query(), "pos");
}

#[test]
fn enter_submits_the_search_and_opens_the_results_view() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    type_query(&mut app, "post");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.search_input, SearchInput::Inactive);
    assert_eq!(app.browser.mode(), ViewMode::Search);
    assert_eq!(app.view.title(), "Search");
}

#[test]
fn submitting_an_empty_query_stays_out_of_the_results_view() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.search_input, SearchInput::Inactive);
    assert_eq!(app.browser.mode(), ViewMode::Explorer);
    assert!(app.browser.is_home());
}

#[test]
fn esc_cancels_search_editing_and_clears_the_query() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    type_query(&mut app, "user");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.search_input, SearchInput::Inactive);
    assert!(app.browser.query().is_empty());
    assert!(app.browser.results().is_empty());
}

#[test]
fn back_from_a_result_returns_to_the_results_view() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    type_query(&mut app, "User");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.browser.mode(), ViewMode::Search);
    assert!(app.link_count > 0, "expected a linkable result row");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view.title(), "User");

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.browser.mode(), ViewMode::Search);
    assert_eq!(app.view.title(), "Search");
}

#[test]
fn q_and_ctrl_c_quit() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    let mut app = app();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn q_while_editing_types_into_the_query() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('q'));

    assert!(!app.should_quit);
    assert_eq!(app.browser.query(), "q");
}

#[test]
fn demo_schema_defines_all_three_roots() {
    let schema = demo_schema();
    assert_eq!(schema.roots().count(), 3);
    assert!(schema.type_def("Post").is_some());
    assert!(schema.type_def("NewPostInput").is_some());
}
