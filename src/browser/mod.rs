// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation state for the documentation browser.
//!
//! `DocBrowser` owns everything the views are derived from: the optional
//! schema, the search index, the current pointer and view mode, the history
//! stack, and the query string with its ranked results. All transitions are
//! synchronous; the host calls `set_schema`/`set_query` explicitly instead
//! of relying on any reactive subscription.

use crate::model::{FieldName, Schema, TypeName, TypeRef};
use crate::query::{build_index, ranked_matches, SearchHit, SearchRecord};


/// Which renderer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Explorer,
    Search,
    Field,
}

/// The schema element currently displayed, when not at home.
///
/// Wrapper types are never pointed at; navigation unwraps to the innermost
/// named type first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaPointer {
    Type(TypeName),
    Field { parent: TypeName, name: FieldName },
}

/// One visited state. The top of the history stack is the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pointer: Option<SchemaPointer>,
    mode: ViewMode,
}

impl HistoryEntry {
    pub fn pointer(&self) -> Option<&SchemaPointer> {
        self.pointer.as_ref()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocBrowser {
    schema: Option<Schema>,
    index: Vec<SearchRecord>,
    pointer: Option<SchemaPointer>,
    mode: ViewMode,
    history: Vec<HistoryEntry>,
    query: String,
    results: Vec<SearchHit>,
}

impl DocBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(schema: Schema) -> Self {
        let mut browser = Self::new();
        browser.set_schema(Some(schema));
        browser
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn index(&self) -> &[SearchRecord] {
        &self.index
    }

    pub fn pointer(&self) -> Option<&SchemaPointer> {
        self.pointer.as_ref()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    /// Home is the root view: nothing visited, nothing pointed at.
    pub fn is_home(&self) -> bool {
        self.history.is_empty()
    }

    /// Replaces the schema and rebuilds everything derived from it. The
    /// history stack, pointer, query and results all reset.
    pub fn set_schema(&mut self, schema: Option<Schema>) {
        self.index = match &schema {
            Some(schema) => build_index(schema),
            None => Vec::new(),
        };
        self.schema = schema;
        self.history.clear();
        self.pointer = None;
        self.mode = ViewMode::Explorer;
        self.query.clear();
        self.results.clear();
    }

    /// Stores the query and synchronously recomputes the ranked results.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results = ranked_matches(&self.index, &self.query);
    }

    /// Records the new target in history and makes it current.
    pub fn navigate(&mut self, pointer: Option<SchemaPointer>, mode: ViewMode) {
        self.history.push(HistoryEntry {
            pointer: pointer.clone(),
            mode,
        });
        self.pointer = pointer;
        self.mode = mode;
    }

    pub fn open_type(&mut self, name: TypeName) {
        self.navigate(Some(SchemaPointer::Type(name)), ViewMode::Explorer);
    }

    pub fn open_field(&mut self, parent: TypeName, name: FieldName) {
        self.navigate(Some(SchemaPointer::Field { parent, name }), ViewMode::Field);
    }

    /// Opens the innermost named type of a field or argument position;
    /// list/non-null wrappers are never navigation targets.
    pub fn open_output(&mut self, ty: &TypeRef) {
        self.open_type(ty.unwrap().clone());
    }

    /// Opens the results view for the current query.
    pub fn open_search_results(&mut self) {
        self.navigate(None, ViewMode::Search);
    }

    /// Pops the current state; the previous entry becomes current, or home
    /// when none remains.
    pub fn go_back(&mut self) {
        self.history.pop();
        match self.history.last() {
            Some(entry) => {
                self.pointer = entry.pointer.clone();
                self.mode = entry.mode;
            }
            None => {
                self.pointer = None;
                self.mode = ViewMode::Explorer;
            }
        }
    }

    pub fn go_home(&mut self) {
        self.history.clear();
        self.pointer = None;
        self.mode = ViewMode::Explorer;
    }
}
