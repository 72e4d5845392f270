// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::names::TypeName;

/// A reference to a type as it appears in a field or argument position:
/// either a named type or a list/non-null wrapper around another reference.
///
/// Wrapper chains are finite by construction and always bottom out at a
/// `Named` variant. Wrappers are display detail only; navigation always
/// targets the innermost named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named(TypeName),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: TypeName) -> Self {
        Self::Named(name)
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// The innermost named type, with all list/non-null wrappers removed.
    pub fn unwrap(&self) -> &TypeName {
        let mut current = self;
        loop {
            match current {
                Self::Named(name) => return name,
                Self::List(inner) | Self::NonNull(inner) => current = inner,
            }
        }
    }

    pub fn is_wrapped(&self) -> bool {
        !matches!(self, Self::Named(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name.as_str()),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TypeRef;
    use crate::model::TypeName;

    fn named(name: &str) -> TypeRef {
        TypeRef::named(TypeName::new(name).expect("type name"))
    }

    #[test]
    fn display_uses_graphql_notation() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(named("User"))));
        assert_eq!(ty.to_string(), "[User!]!");
    }

    #[test]
    fn unwrap_reaches_the_innermost_named_type() {
        let ty = TypeRef::list(TypeRef::non_null(named("User")));
        assert_eq!(ty.unwrap().as_str(), "User");
        assert!(ty.is_wrapped());
    }

    #[test]
    fn unwrap_of_named_is_identity() {
        let ty = named("ID");
        assert_eq!(ty.unwrap().as_str(), "ID");
        assert!(!ty.is_wrapped());
    }
}
