// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use smol_str::SmolStr;

use crate::model::{is_introspection_name, OperationKind, Schema, TypeName};

/// What a search record names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Type,
    Field,
    Query,
    Mutation,
    Subscription,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Field => "field",
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<OperationKind> for RecordKind {
    fn from(operation: OperationKind) -> Self {
        match operation {
            OperationKind::Query => Self::Query,
            OperationKind::Mutation => Self::Mutation,
            OperationKind::Subscription => Self::Subscription,
        }
    }
}

/// One searchable name. Uniqueness within an index is by `(name, kind)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchRecord {
    name: SmolStr,
    kind: RecordKind,
}

impl SearchRecord {
    pub fn new(name: impl Into<SmolStr>, kind: RecordKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }
}

/// Builds the flat, deduplicated search index for a schema.
///
/// Every non-introspection named type yields a `Type` record; each present
/// root type additionally yields a record under its operation kind. Fields
/// are collected by walking the root-type field graphs with an explicit
/// worklist so cyclic schemas terminate and deep ones cannot overflow the
/// stack. The visited set is keyed by type name and shared across roots;
/// record dedup is keyed by `(name, kind)`.
pub fn build_index(schema: &Schema) -> Vec<SearchRecord> {
    let mut records = Vec::new();
    let mut seen = BTreeSet::<(SmolStr, RecordKind)>::new();
    let mut push = |records: &mut Vec<SearchRecord>, name: &str, kind: RecordKind| {
        if seen.insert((SmolStr::new(name), kind)) {
            records.push(SearchRecord::new(name, kind));
        }
    };

    for name in schema.types().keys() {
        if is_introspection_name(name.as_str()) {
            continue;
        }
        push(&mut records, name.as_str(), RecordKind::Type);
    }

    let mut visited = BTreeSet::<TypeName>::new();
    let mut worklist = VecDeque::<TypeName>::new();

    for (operation, root) in schema.roots() {
        push(&mut records, root.name().as_str(), operation.into());
        if visited.insert(root.name().clone()) {
            worklist.push_back(root.name().clone());
        }
    }

    while let Some(type_name) = worklist.pop_front() {
        let Some(def) = schema.type_def(type_name.as_str()) else {
            continue;
        };
        let Some(fields) = def.fields() else {
            continue;
        };

        for (field_name, field) in fields {
            push(&mut records, field_name.as_str(), RecordKind::Field);

            let inner = field.ty().unwrap();
            let expands = schema
                .type_def(inner.as_str())
                .is_some_and(|inner_def| inner_def.fields().is_some());
            if expands && visited.insert(inner.clone()) {
                worklist.push_back(inner.clone());
            }
        }
    }

    records
}
