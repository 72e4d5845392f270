// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pharos — terminal documentation browser for GraphQL schemas.
//!
//! The crate is a presentational layer over an already-built [`model::Schema`]:
//! [`browser::DocBrowser`] holds the navigation state, [`query`] derives the
//! search index and ranked matches, [`render`] turns state into linkable text
//! lines, and [`tui`] is the interactive shell.

pub mod browser;
pub mod format;
pub mod model;
pub mod query;
pub mod render;
pub mod tui;
