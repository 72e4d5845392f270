// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Deserialize;

use crate::model::{
    EnumType, EnumValue, Field, FieldName, InputObjectType, InputValue, NameError, ObjectType,
    OperationKind, Schema, TypeBody, TypeDef, TypeName, TypeRef, UnionType,
};

/// Builds a `Schema` from a GraphQL introspection result.
///
/// Accepts either a bare `{"__schema": …}` object or one wrapped in the
/// usual `{"data": …}` response envelope. Conversion assumes a well-formed
/// introspection document; it rejects structurally broken input (unknown
/// type kinds, unnamed types, wrapper entries without `ofType`) but performs
/// no schema validation.
pub fn schema_from_introspection_json(json: &str) -> Result<Schema, IntrospectionError> {
    let envelope: EnvelopeDto = serde_json::from_str(json).map_err(IntrospectionError::Json)?;
    let schema = envelope
        .schema
        .or(envelope.data.map(|data| data.schema))
        .ok_or(IntrospectionError::MissingSchema)?;
    convert_schema(schema)
}

#[derive(Debug)]
pub enum IntrospectionError {
    Json(serde_json::Error),
    MissingSchema,
    UnknownTypeKind { kind: String },
    UnnamedType,
    MissingOfType { kind: String },
    InvalidName(NameError),
}

impl fmt::Display for IntrospectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid introspection JSON: {err}"),
            Self::MissingSchema => f.write_str("document contains no __schema object"),
            Self::UnknownTypeKind { kind } => write!(f, "unknown type kind {kind:?}"),
            Self::UnnamedType => f.write_str("named type entry is missing its name"),
            Self::MissingOfType { kind } => {
                write!(f, "{kind} type reference is missing ofType")
            }
            Self::InvalidName(err) => write!(f, "invalid name: {err}"),
        }
    }
}

impl std::error::Error for IntrospectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidName(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NameError> for IntrospectionError {
    fn from(err: NameError) -> Self {
        Self::InvalidName(err)
    }
}

#[derive(Debug, Deserialize)]
struct EnvelopeDto {
    data: Option<DataDto>,
    #[serde(rename = "__schema")]
    schema: Option<SchemaDto>,
}

#[derive(Debug, Deserialize)]
struct DataDto {
    #[serde(rename = "__schema")]
    schema: SchemaDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaDto {
    query_type: Option<RootTypeDto>,
    mutation_type: Option<RootTypeDto>,
    subscription_type: Option<RootTypeDto>,
    types: Vec<TypeDto>,
}

#[derive(Debug, Deserialize)]
struct RootTypeDto {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeDto {
    kind: String,
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    fields: Option<Vec<FieldDto>>,
    #[serde(default)]
    input_fields: Option<Vec<InputValueDto>>,
    #[serde(default)]
    interfaces: Option<Vec<TypeRefDto>>,
    #[serde(default)]
    enum_values: Option<Vec<EnumValueDto>>,
    #[serde(default)]
    possible_types: Option<Vec<TypeRefDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldDto {
    name: String,
    description: Option<String>,
    #[serde(default)]
    args: Vec<InputValueDto>,
    #[serde(rename = "type")]
    ty: TypeRefDto,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InputValueDto {
    name: String,
    description: Option<String>,
    #[serde(rename = "type")]
    ty: TypeRefDto,
    default_value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnumValueDto {
    name: String,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeRefDto {
    kind: String,
    name: Option<String>,
    of_type: Option<Box<TypeRefDto>>,
}

fn convert_schema(dto: SchemaDto) -> Result<Schema, IntrospectionError> {
    let mut schema = Schema::new();

    for type_dto in dto.types {
        schema.insert_type(convert_type(type_dto)?);
    }

    for (operation, root) in [
        (OperationKind::Query, dto.query_type),
        (OperationKind::Mutation, dto.mutation_type),
        (OperationKind::Subscription, dto.subscription_type),
    ] {
        let name = match root {
            Some(root) => Some(TypeName::new(root.name)?),
            None => None,
        };
        schema.set_root(operation, name);
    }

    Ok(schema)
}

fn convert_type(dto: TypeDto) -> Result<TypeDef, IntrospectionError> {
    let name = TypeName::new(dto.name.ok_or(IntrospectionError::UnnamedType)?)?;

    let body = match dto.kind.as_str() {
        "SCALAR" => TypeBody::Scalar,
        "OBJECT" => TypeBody::Object(convert_object(dto.fields, dto.interfaces)?),
        "INTERFACE" => TypeBody::Interface(convert_object(dto.fields, dto.interfaces)?),
        "UNION" => {
            let mut union = UnionType::new();
            for member in dto.possible_types.unwrap_or_default() {
                union.members_mut().push(named_type(&member)?);
            }
            TypeBody::Union(union)
        }
        "ENUM" => {
            let mut body = EnumType::new();
            for value in dto.enum_values.unwrap_or_default() {
                let mut enum_value = EnumValue::new(value.name);
                if let Some(description) = value.description {
                    enum_value = enum_value.with_description(description);
                }
                if value.is_deprecated {
                    enum_value = enum_value.with_deprecation(value.deprecation_reason);
                }
                body.values_mut().push(enum_value);
            }
            TypeBody::Enum(body)
        }
        "INPUT_OBJECT" => {
            let mut body = InputObjectType::new();
            for value in dto.input_fields.unwrap_or_default() {
                let value = convert_input_value(value)?;
                body.fields_mut().insert(value.name().clone(), value);
            }
            TypeBody::InputObject(body)
        }
        other => {
            return Err(IntrospectionError::UnknownTypeKind {
                kind: other.to_owned(),
            })
        }
    };

    let mut def = TypeDef::new(name, body);
    if let Some(description) = dto.description {
        def = def.with_description(description);
    }
    Ok(def)
}

fn convert_object(
    fields: Option<Vec<FieldDto>>,
    interfaces: Option<Vec<TypeRefDto>>,
) -> Result<ObjectType, IntrospectionError> {
    let mut object = ObjectType::new();
    for field_dto in fields.unwrap_or_default() {
        let field_name = FieldName::new(field_dto.name)?;
        let mut field = Field::new(convert_type_ref(&field_dto.ty)?);
        if let Some(description) = field_dto.description {
            field = field.with_description(description);
        }
        for arg in field_dto.args {
            field = field.with_arg(convert_input_value(arg)?);
        }
        if field_dto.is_deprecated {
            field = field.with_deprecation(field_dto.deprecation_reason);
        }
        object.fields_mut().insert(field_name, field);
    }
    for interface in interfaces.unwrap_or_default() {
        object.interfaces_mut().push(named_type(&interface)?);
    }
    Ok(object)
}

fn convert_input_value(dto: InputValueDto) -> Result<InputValue, IntrospectionError> {
    let mut value = InputValue::new(FieldName::new(dto.name)?, convert_type_ref(&dto.ty)?);
    if let Some(description) = dto.description {
        value = value.with_description(description);
    }
    if let Some(default_value) = dto.default_value {
        value = value.with_default_value(default_value);
    }
    Ok(value)
}

fn convert_type_ref(dto: &TypeRefDto) -> Result<TypeRef, IntrospectionError> {
    match dto.kind.as_str() {
        "LIST" => {
            let inner = dto.of_type.as_deref().ok_or(IntrospectionError::MissingOfType {
                kind: "LIST".to_owned(),
            })?;
            Ok(TypeRef::list(convert_type_ref(inner)?))
        }
        "NON_NULL" => {
            let inner = dto.of_type.as_deref().ok_or(IntrospectionError::MissingOfType {
                kind: "NON_NULL".to_owned(),
            })?;
            Ok(TypeRef::non_null(convert_type_ref(inner)?))
        }
        _ => Ok(TypeRef::named(named_type(dto)?)),
    }
}

fn named_type(dto: &TypeRefDto) -> Result<TypeName, IntrospectionError> {
    let name = dto.name.as_deref().ok_or(IntrospectionError::UnnamedType)?;
    Ok(TypeName::new(name)?)
}
