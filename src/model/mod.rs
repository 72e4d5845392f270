// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core schema data model.
//!
//! A `Schema` is a type map plus root operation slots, built by the hosting
//! application (or the introspection loader) and browsed read-only here.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod names;
pub mod schema;
pub mod type_ref;

pub use names::{FieldName, Name, NameError, TypeName};
pub use schema::{
    is_introspection_name, EnumType, EnumValue, Field, InputObjectType, InputValue, ObjectType,
    OperationKind, Schema, TypeBody, TypeDef, TypeKind, UnionType,
};
pub use type_ref::TypeRef;
