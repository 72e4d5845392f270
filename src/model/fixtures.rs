// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::names::{FieldName, TypeName};
use super::schema::{
    EnumType, EnumValue, Field, InputObjectType, InputValue, ObjectType, OperationKind, Schema,
    TypeBody, TypeDef, UnionType,
};
use super::type_ref::TypeRef;

pub(crate) fn type_name(value: &str) -> TypeName {
    TypeName::new(value).expect("type name")
}

pub(crate) fn field_name(value: &str) -> FieldName {
    FieldName::new(value).expect("field name")
}

pub(crate) fn named(value: &str) -> TypeRef {
    TypeRef::named(type_name(value))
}

fn scalar(schema: &mut Schema, name: &str) {
    schema.insert_type(TypeDef::new(type_name(name), TypeBody::Scalar));
}

/// The smallest interesting schema: `Query { user: User }`,
/// `User { id: ID!, name: String }`.
pub(crate) fn tiny_user_schema() -> Schema {
    let mut schema = Schema::new();

    let mut query = ObjectType::new();
    query
        .fields_mut()
        .insert(field_name("user"), Field::new(named("User")));
    schema.insert_type(TypeDef::new(type_name("Query"), TypeBody::Object(query)));

    let mut user = ObjectType::new();
    user.fields_mut()
        .insert(field_name("id"), Field::new(TypeRef::non_null(named("ID"))));
    user.fields_mut()
        .insert(field_name("name"), Field::new(named("String")));
    schema.insert_type(TypeDef::new(type_name("User"), TypeBody::Object(user)));

    scalar(&mut schema, "ID");
    scalar(&mut schema, "String");

    schema.set_root(OperationKind::Query, Some(type_name("Query")));
    schema
}

/// Mutually recursive object types plus a self-referencing one.
pub(crate) fn cyclic_schema() -> Schema {
    let mut schema = Schema::new();

    let mut query = ObjectType::new();
    query
        .fields_mut()
        .insert(field_name("user"), Field::new(named("User")));
    query
        .fields_mut()
        .insert(field_name("post"), Field::new(named("Post")));
    schema.insert_type(TypeDef::new(type_name("Query"), TypeBody::Object(query)));

    let mut user = ObjectType::new();
    user.fields_mut()
        .insert(field_name("id"), Field::new(TypeRef::non_null(named("ID"))));
    user.fields_mut().insert(
        field_name("posts"),
        Field::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(named(
            "Post",
        ))))),
    );
    schema.insert_type(TypeDef::new(type_name("User"), TypeBody::Object(user)));

    let mut post = ObjectType::new();
    post.fields_mut()
        .insert(field_name("id"), Field::new(TypeRef::non_null(named("ID"))));
    post.fields_mut().insert(
        field_name("author"),
        Field::new(TypeRef::non_null(named("User"))),
    );
    post.fields_mut().insert(
        field_name("comments"),
        Field::new(TypeRef::list(named("Comment"))),
    );
    schema.insert_type(TypeDef::new(type_name("Post"), TypeBody::Object(post)));

    let mut comment = ObjectType::new();
    comment
        .fields_mut()
        .insert(field_name("id"), Field::new(TypeRef::non_null(named("ID"))));
    comment
        .fields_mut()
        .insert(field_name("replyTo"), Field::new(named("Comment")));
    comment
        .fields_mut()
        .insert(field_name("author"), Field::new(named("User")));
    schema.insert_type(TypeDef::new(
        type_name("Comment"),
        TypeBody::Object(comment),
    ));

    scalar(&mut schema, "ID");
    scalar(&mut schema, "String");

    schema.set_root(OperationKind::Query, Some(type_name("Query")));
    schema
}

/// A schema exercising every type kind, deprecations, an interface, and an
/// introspection type that must stay out of the index.
pub(crate) fn library_schema() -> Schema {
    let mut schema = Schema::new();

    let mut query = ObjectType::new();
    query.fields_mut().insert(
        field_name("book"),
        Field::new(named("Book"))
            .with_description("Look up a single book by id.")
            .with_arg(InputValue::new(
                field_name("id"),
                TypeRef::non_null(named("ID")),
            )),
    );
    query.fields_mut().insert(
        field_name("books"),
        Field::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(named(
            "Book",
        ))))),
    );
    query.fields_mut().insert(
        field_name("search"),
        Field::new(TypeRef::list(named("SearchResult"))).with_arg(InputValue::new(
            field_name("term"),
            TypeRef::non_null(named("String")),
        )),
    );
    schema.insert_type(
        TypeDef::new(type_name("Query"), TypeBody::Object(query))
            .with_description("The library's read entry point."),
    );

    let mut mutation = ObjectType::new();
    mutation.fields_mut().insert(
        field_name("addBook"),
        Field::new(named("Book")).with_arg(InputValue::new(
            field_name("input"),
            TypeRef::non_null(named("NewBookInput")),
        )),
    );
    schema.insert_type(TypeDef::new(
        type_name("Mutation"),
        TypeBody::Object(mutation),
    ));

    let mut node = ObjectType::new();
    node.fields_mut()
        .insert(field_name("id"), Field::new(TypeRef::non_null(named("ID"))));
    schema.insert_type(
        TypeDef::new(type_name("Node"), TypeBody::Interface(node))
            .with_description("An object with a globally unique id."),
    );

    let mut book = ObjectType::new();
    book.interfaces_mut().push(type_name("Node"));
    book.fields_mut()
        .insert(field_name("id"), Field::new(TypeRef::non_null(named("ID"))));
    book.fields_mut().insert(
        field_name("title"),
        Field::new(TypeRef::non_null(named("String"))),
    );
    book.fields_mut()
        .insert(field_name("author"), Field::new(named("Author")));
    book.fields_mut()
        .insert(field_name("status"), Field::new(named("BookStatus")));
    book.fields_mut().insert(
        field_name("isbn"),
        Field::new(named("String")).with_deprecation(Some("Use id instead.".to_owned())),
    );
    schema.insert_type(TypeDef::new(type_name("Book"), TypeBody::Object(book)));

    let mut author = ObjectType::new();
    author.interfaces_mut().push(type_name("Node"));
    author
        .fields_mut()
        .insert(field_name("id"), Field::new(TypeRef::non_null(named("ID"))));
    author.fields_mut().insert(
        field_name("name"),
        Field::new(TypeRef::non_null(named("String"))),
    );
    author.fields_mut().insert(
        field_name("books"),
        Field::new(TypeRef::list(named("Book"))),
    );
    schema.insert_type(TypeDef::new(type_name("Author"), TypeBody::Object(author)));

    let mut search_result = UnionType::new();
    search_result.members_mut().push(type_name("Book"));
    search_result.members_mut().push(type_name("Author"));
    schema.insert_type(
        TypeDef::new(type_name("SearchResult"), TypeBody::Union(search_result))
            .with_description("Anything a catalogue search can return."),
    );

    let mut status = EnumType::new();
    status.values_mut().push(EnumValue::new("AVAILABLE"));
    status.values_mut().push(
        EnumValue::new("LOANED")
            .with_deprecation(Some("Loans moved to a separate service.".to_owned())),
    );
    schema.insert_type(TypeDef::new(
        type_name("BookStatus"),
        TypeBody::Enum(status),
    ));

    let mut new_book = InputObjectType::new();
    new_book.fields_mut().insert(
        field_name("title"),
        InputValue::new(field_name("title"), TypeRef::non_null(named("String"))),
    );
    new_book.fields_mut().insert(
        field_name("authorId"),
        InputValue::new(field_name("authorId"), named("ID")).with_default_value("\"0\""),
    );
    schema.insert_type(TypeDef::new(
        type_name("NewBookInput"),
        TypeBody::InputObject(new_book),
    ));

    scalar(&mut schema, "ID");
    scalar(&mut schema, "String");
    schema.insert_type(TypeDef::new(
        type_name("__Schema"),
        TypeBody::Object(ObjectType::new()),
    ));

    schema.set_root(OperationKind::Query, Some(type_name("Query")));
    schema.set_root(OperationKind::Mutation, Some(type_name("Mutation")));
    schema
}
