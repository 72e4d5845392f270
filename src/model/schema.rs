// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::names::{FieldName, TypeName};
use super::type_ref::TypeRef;

/// The three schema entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub const ALL: [Self; 3] = [Self::Query, Self::Mutation, Self::Subscription];

    pub fn label(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The kind of a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Object => "object",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::InputObject => "input object",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind-specific payload of a type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeBody {
    Scalar,
    Object(ObjectType),
    Interface(ObjectType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl TypeBody {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar => TypeKind::Scalar,
            Self::Object(_) => TypeKind::Object,
            Self::Interface(_) => TypeKind::Interface,
            Self::Union(_) => TypeKind::Union,
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
        }
    }
}

/// Field map shared by object and interface types.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectType {
    fields: BTreeMap<FieldName, Field>,
    interfaces: Vec<TypeName>,
}

impl ObjectType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &BTreeMap<FieldName, Field> {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut BTreeMap<FieldName, Field> {
        &mut self.fields
    }

    pub fn interfaces(&self) -> &[TypeName] {
        &self.interfaces
    }

    pub fn interfaces_mut(&mut self) -> &mut Vec<TypeName> {
        &mut self.interfaces
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnionType {
    members: Vec<TypeName>,
}

impl UnionType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[TypeName] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut Vec<TypeName> {
        &mut self.members
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumType {
    values: Vec<EnumValue>,
}

impl EnumType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut Vec<EnumValue> {
        &mut self.values
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputObjectType {
    fields: BTreeMap<FieldName, InputValue>,
}

impl InputObjectType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &BTreeMap<FieldName, InputValue> {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut BTreeMap<FieldName, InputValue> {
        &mut self.fields
    }
}

/// An output field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    description: Option<String>,
    args: Vec<InputValue>,
    ty: TypeRef,
    deprecated: bool,
    deprecation_reason: Option<String>,
}

impl Field {
    pub fn new(ty: TypeRef) -> Self {
        Self {
            description: None,
            args: Vec::new(),
            ty,
            deprecated: false,
            deprecation_reason: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_arg(mut self, arg: InputValue) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_deprecation(mut self, reason: Option<String>) -> Self {
        self.deprecated = true;
        self.deprecation_reason = reason;
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn args(&self) -> &[InputValue] {
        &self.args
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }
}

/// A named argument or input-object field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue {
    name: FieldName,
    description: Option<String>,
    ty: TypeRef,
    default_value: Option<String>,
}

impl InputValue {
    pub fn new(name: FieldName, ty: TypeRef) -> Self {
        Self {
            name,
            description: None,
            ty,
            default_value: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn name(&self) -> &FieldName {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    name: String,
    description: Option<String>,
    deprecated: bool,
    deprecation_reason: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecated: false,
            deprecation_reason: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_deprecation(mut self, reason: Option<String>) -> Self {
        self.deprecated = true;
        self.deprecation_reason = reason;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }
}

/// A single named type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    name: TypeName,
    description: Option<String>,
    body: TypeBody,
}

impl TypeDef {
    pub fn new(name: TypeName, body: TypeBody) -> Self {
        Self {
            name,
            description: None,
            body,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn body(&self) -> &TypeBody {
        &self.body
    }

    pub fn kind(&self) -> TypeKind {
        self.body.kind()
    }

    /// Field map for object-like types, `None` otherwise.
    pub fn fields(&self) -> Option<&BTreeMap<FieldName, Field>> {
        match &self.body {
            TypeBody::Object(object) | TypeBody::Interface(object) => Some(object.fields()),
            _ => None,
        }
    }

    pub fn is_object_like(&self) -> bool {
        matches!(self.body, TypeBody::Object(_) | TypeBody::Interface(_))
    }

    /// Leaf types have no sub-fields to drill into.
    pub fn is_leaf(&self) -> bool {
        matches!(self.body, TypeBody::Scalar | TypeBody::Enum(_))
    }

    pub fn is_introspection(&self) -> bool {
        is_introspection_name(self.name.as_str())
    }
}

/// Introspection types are named with a double-underscore prefix by
/// convention and are excluded from the search index.
pub fn is_introspection_name(name: &str) -> bool {
    name.starts_with("__")
}

/// A fully constructed schema: a type map plus the root operation types.
///
/// The schema is supplied by the hosting application; this crate never parses
/// SDL or validates the graph. A root slot naming a type missing from the
/// type map is treated as an absent root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    types: BTreeMap<TypeName, TypeDef>,
    query: Option<TypeName>,
    mutation: Option<TypeName>,
    subscription: Option<TypeName>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn types(&self) -> &BTreeMap<TypeName, TypeDef> {
        &self.types
    }

    pub fn insert_type(&mut self, def: TypeDef) {
        self.types.insert(def.name().clone(), def);
    }

    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn set_root(&mut self, operation: OperationKind, name: Option<TypeName>) {
        match operation {
            OperationKind::Query => self.query = name,
            OperationKind::Mutation => self.mutation = name,
            OperationKind::Subscription => self.subscription = name,
        }
    }

    pub fn root_name(&self, operation: OperationKind) -> Option<&TypeName> {
        match operation {
            OperationKind::Query => self.query.as_ref(),
            OperationKind::Mutation => self.mutation.as_ref(),
            OperationKind::Subscription => self.subscription.as_ref(),
        }
    }

    /// Root type definition for an operation, if both the slot and the type
    /// map entry exist.
    pub fn root(&self, operation: OperationKind) -> Option<&TypeDef> {
        self.root_name(operation)
            .and_then(|name| self.types.get(name.as_str()))
    }

    /// Present root types in query/mutation/subscription order.
    pub fn roots(&self) -> impl Iterator<Item = (OperationKind, &TypeDef)> {
        OperationKind::ALL
            .into_iter()
            .filter_map(|operation| self.root(operation).map(|def| (operation, def)))
    }
}
