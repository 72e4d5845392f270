// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over a schema.
//!
//! The index builder flattens the schema into searchable records; ranked
//! search filters them. Both are recomputed explicitly by the browser when
//! the schema or the query string changes.

pub mod index;
pub mod search;

pub use index::{build_index, RecordKind, SearchRecord};
pub use search::{ranked_matches, SearchHit};
