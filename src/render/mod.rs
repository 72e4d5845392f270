// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! View rendering.
//!
//! `render` is a pure function of the browser state producing plain text
//! lines plus a stable span index of clickable targets. The TUI applies
//! styling and drives selection over the spans; nothing here depends on the
//! terminal toolkit.

use crate::browser::{DocBrowser, SchemaPointer, ViewMode};
use crate::model::{Field, FieldName, InputValue, Schema, TypeBody, TypeDef, TypeName};
use crate::query::SearchHit;

pub(crate) mod text;

/// What following a link does: the pointer it navigates to and the view
/// mode it opens in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLink {
    pointer: SchemaPointer,
    mode: ViewMode,
}

impl DocLink {
    pub fn to_type(name: TypeName) -> Self {
        Self {
            pointer: SchemaPointer::Type(name),
            mode: ViewMode::Explorer,
        }
    }

    pub fn to_field(parent: TypeName, name: FieldName) -> Self {
        Self {
            pointer: SchemaPointer::Field { parent, name },
            mode: ViewMode::Field,
        }
    }

    pub fn pointer(&self) -> &SchemaPointer {
        &self.pointer
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }
}

/// A contiguous clickable span within a single line.
///
/// Coordinates are `(start, end)` character-cell indices, inclusive,
/// relative to the line's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    start: usize,
    end: usize,
    link: DocLink,
}

impl LinkSpan {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn link(&self) -> &DocLink {
        &self.link
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocLine {
    text: String,
    spans: Vec<LinkSpan>,
}

impl DocLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[LinkSpan] {
        &self.spans
    }
}

/// Accumulates one line of text and the spans of its links.
struct LineBuilder {
    text: String,
    len: usize,
    spans: Vec<LinkSpan>,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            text: String::new(),
            len: 0,
            spans: Vec::new(),
        }
    }

    fn push(&mut self, part: &str) -> &mut Self {
        self.text.push_str(part);
        self.len += text::text_len(part);
        self
    }

    fn push_link(&mut self, part: &str, link: DocLink) -> &mut Self {
        let start = self.len;
        self.push(part);
        if self.len > start {
            self.spans.push(LinkSpan {
                start,
                end: self.len - 1,
                link,
            });
        }
        self
    }

    fn finish(self) -> DocLine {
        DocLine {
            text: self.text,
            spans: self.spans,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocView {
    title: String,
    lines: Vec<DocLine>,
}

impl DocView {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[DocLine] {
        &self.lines
    }

    /// All link spans in reading order, with their line index.
    pub fn link_spans(&self) -> impl Iterator<Item = (usize, &LinkSpan)> {
        self.lines
            .iter()
            .enumerate()
            .flat_map(|(idx, line)| line.spans().iter().map(move |span| (idx, span)))
    }
}

/// Renders the view for the current browser state.
pub fn render(browser: &DocBrowser) -> DocView {
    let Some(schema) = browser.schema() else {
        return no_schema_view();
    };

    match browser.mode() {
        ViewMode::Search => search_view(schema, browser.query(), browser.results()),
        ViewMode::Explorer | ViewMode::Field => match browser.pointer() {
            None => roots_view(schema),
            Some(SchemaPointer::Type(name)) => type_view(schema, name),
            Some(SchemaPointer::Field { parent, name }) => field_view(schema, parent, name),
        },
    }
}

fn no_schema_view() -> DocView {
    DocView {
        title: "Documentation".to_owned(),
        lines: vec![
            DocLine::plain("No schema available."),
            DocLine::plain("Load a schema to browse its documentation."),
        ],
    }
}

fn roots_view(schema: &Schema) -> DocView {
    let mut lines = Vec::new();
    lines.push(DocLine::plain("Root types"));
    lines.push(DocLine::blank());

    let mut any = false;
    for (operation, root) in schema.roots() {
        any = true;
        let mut line = LineBuilder::new();
        line.push("  ").push(operation.label()).push(": ");
        line.push_link(root.name().as_str(), DocLink::to_type(root.name().clone()));
        lines.push(line.finish());
    }
    if !any {
        lines.push(DocLine::plain("  Schema defines no root types."));
    }

    DocView {
        title: "Documentation".to_owned(),
        lines,
    }
}

fn type_view(schema: &Schema, name: &TypeName) -> DocView {
    let Some(def) = schema.type_def(name.as_str()) else {
        return DocView {
            title: name.to_string(),
            lines: vec![DocLine::plain(format!("Unknown type {name}."))],
        };
    };

    let mut lines = Vec::new();
    lines.push(DocLine::plain(def.kind().label()));
    push_description(&mut lines, def.description());

    match def.body() {
        TypeBody::Scalar => {}
        TypeBody::Enum(body) => {
            lines.push(DocLine::blank());
            lines.push(DocLine::plain("Values"));
            for value in body.values() {
                let mut line = LineBuilder::new();
                line.push("  ").push(value.name());
                if value.is_deprecated() {
                    line.push(" (deprecated");
                    if let Some(reason) = value.deprecation_reason() {
                        line.push(": ").push(reason);
                    }
                    line.push(")");
                }
                lines.push(line.finish());
                if let Some(description) = value.description() {
                    lines.push(DocLine::plain(format!("    {description}")));
                }
            }
        }
        TypeBody::Union(body) => {
            lines.push(DocLine::blank());
            lines.push(DocLine::plain("Members"));
            for member in body.members() {
                let mut line = LineBuilder::new();
                line.push("  ");
                line.push_link(member.as_str(), DocLink::to_type(member.clone()));
                lines.push(line.finish());
            }
        }
        TypeBody::Object(body) | TypeBody::Interface(body) => {
            if !body.interfaces().is_empty() {
                let mut line = LineBuilder::new();
                line.push("implements");
                for interface in body.interfaces() {
                    line.push(" ");
                    line.push_link(interface.as_str(), DocLink::to_type(interface.clone()));
                }
                lines.push(line.finish());
            }
            lines.push(DocLine::blank());
            lines.push(DocLine::plain("Fields"));
            for (field_name, field) in body.fields() {
                push_field_row(&mut lines, name, field_name, field);
            }
        }
        TypeBody::InputObject(body) => {
            lines.push(DocLine::blank());
            lines.push(DocLine::plain("Input fields"));
            for value in body.fields().values() {
                lines.push(input_value_row(value));
            }
        }
    }

    DocView {
        title: name.to_string(),
        lines,
    }
}

fn field_view(schema: &Schema, parent: &TypeName, name: &FieldName) -> DocView {
    let title = format!("{parent}.{name}");
    let Some(field) = schema
        .type_def(parent.as_str())
        .and_then(|def| def.fields())
        .and_then(|fields| fields.get(name.as_str()))
    else {
        return DocView {
            title,
            lines: vec![DocLine::plain(format!("Unknown field {parent}.{name}."))],
        };
    };

    let mut lines = Vec::new();
    lines.push(signature_line(name, field));
    if field.is_deprecated() {
        let mut line = LineBuilder::new();
        line.push("deprecated");
        if let Some(reason) = field.deprecation_reason() {
            line.push(": ").push(reason);
        }
        lines.push(line.finish());
    }
    push_description(&mut lines, field.description());

    if !field.args().is_empty() {
        lines.push(DocLine::blank());
        lines.push(DocLine::plain("Arguments"));
        for arg in field.args() {
            lines.push(input_value_row(arg));
            if let Some(description) = arg.description() {
                lines.push(DocLine::plain(format!("    {description}")));
            }
        }
    }

    let inner = field.ty().unwrap();
    lines.push(DocLine::blank());
    lines.push(DocLine::plain("Returns"));
    let mut line = LineBuilder::new();
    line.push("  ");
    line.push_link(
        &field.ty().to_string(),
        DocLink::to_type(inner.clone()),
    );
    lines.push(line.finish());

    if let Some(fields) = schema
        .type_def(inner.as_str())
        .filter(|def| def.is_object_like())
        .and_then(TypeDef::fields)
    {
        lines.push(DocLine::blank());
        lines.push(DocLine::plain(format!("Fields of {inner}")));
        for (inner_field_name, inner_field) in fields {
            push_field_row(&mut lines, inner, inner_field_name, inner_field);
        }
    }

    DocView { title, lines }
}

fn search_view(schema: &Schema, query: &str, results: &[SearchHit]) -> DocView {
    let mut lines = Vec::new();
    if query.trim().is_empty() {
        lines.push(DocLine::plain("Type to search the schema."));
    } else {
        lines.push(DocLine::plain(format!(
            "{} results for \"{}\"",
            results.len(),
            query.trim()
        )));
    }
    lines.push(DocLine::blank());

    for hit in results {
        let mut line = LineBuilder::new();
        line.push("  ");
        match record_link(schema, hit) {
            Some(link) => {
                line.push_link(hit.record.name(), link);
            }
            None => {
                line.push(hit.record.name());
            }
        }
        line.push("  ").push(hit.record.kind().label());
        lines.push(line.finish());
    }

    DocView {
        title: "Search".to_owned(),
        lines,
    }
}

/// Search rows link to the named type where one exists. A bare field name
/// does not identify its parent type, so field records only link when the
/// name doubles as a type name.
fn record_link(schema: &Schema, hit: &SearchHit) -> Option<DocLink> {
    let def = schema.type_def(hit.record.name())?;
    Some(DocLink::to_type(def.name().clone()))
}

fn push_description(lines: &mut Vec<DocLine>, description: Option<&str>) {
    let Some(description) = description else {
        return;
    };
    lines.push(DocLine::blank());
    for part in description.lines() {
        lines.push(DocLine::plain(part.to_owned()));
    }
}

/// One field row: `name(arg: Type, …): ReturnType`, field name linking to
/// the field detail view and the return type to its innermost named type.
fn push_field_row(lines: &mut Vec<DocLine>, parent: &TypeName, name: &FieldName, field: &Field) {
    let mut line = LineBuilder::new();
    line.push("  ");
    line.push_link(name.as_str(), DocLink::to_field(parent.clone(), name.clone()));
    if !field.args().is_empty() {
        line.push("(");
        for (idx, arg) in field.args().iter().enumerate() {
            if idx > 0 {
                line.push(", ");
            }
            line.push(arg.name().as_str()).push(": ");
            line.push(&arg.ty().to_string());
        }
        line.push(")");
    }
    line.push(": ");
    line.push_link(
        &field.ty().to_string(),
        DocLink::to_type(field.ty().unwrap().clone()),
    );
    if field.is_deprecated() {
        line.push("  (deprecated)");
    }
    lines.push(line.finish());

    if let Some(description) = field.description() {
        lines.push(DocLine::plain(format!("    {description}")));
    }
}

/// One argument or input-field row: `name: Type = default`.
fn input_value_row(value: &InputValue) -> DocLine {
    let mut line = LineBuilder::new();
    line.push("  ").push(value.name().as_str()).push(": ");
    line.push_link(
        &value.ty().to_string(),
        DocLink::to_type(value.ty().unwrap().clone()),
    );
    if let Some(default_value) = value.default_value() {
        line.push(" = ").push(default_value);
    }
    line.finish()
}
