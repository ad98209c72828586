// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Target-language type value objects.
//!
//! **DDD Context:** Service Synthesis
//!
//! This module provides value objects for the Java-style type names that
//! flow through synthesized artifacts. Value objects are immutable and
//! compared by value, not identity.
//!
//! ## `JavaType`
//!
//! A fully qualified type name, optionally carrying one generic argument:
//!
//! ```
//! use servicegen_core::java_types::JavaType;
//!
//! let entity = JavaType::new("com.a.domain.User");
//! assert_eq!(entity.package(), "com.a.domain");
//! assert_eq!(entity.simple(), "User");
//! assert_eq!(entity.qualified(), "com.a.domain.User");
//!
//! let wrapped = JavaType::simple_name("DataStore").with_argument(JavaType::simple_name("User"));
//! assert_eq!(wrapped.to_string(), "DataStore<User>");
//! ```
//!
//! ## `PrimitiveKind`
//!
//! The eight target-language primitives, each knowing its boxed form:
//!
//! ```
//! use servicegen_core::java_types::PrimitiveKind;
//!
//! assert_eq!(PrimitiveKind::Int.keyword(), "int");
//! assert_eq!(PrimitiveKind::Int.boxed(), "Integer");
//! ```

use ecow::EcoString;
use std::fmt;

/// A target-language type name value object.
///
/// Carries the package (possibly empty for unqualified names), the simple
/// name, and at most one generic argument. Synthesized signatures display
/// the short form (`DataStore<User>`); import sets record the qualified
/// form (`com.a.domain.User`).
///
/// # Invariants
///
/// - The simple name never contains `.` or `<`
/// - The qualified name is `package + "." + simple` when a package is
///   present, the simple name alone otherwise
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaType {
    package: EcoString,
    simple: EcoString,
    argument: Option<Box<JavaType>>,
}

impl JavaType {
    /// Creates a type from a qualified name, splitting on the last `.`.
    ///
    /// A name with no `.` becomes an unqualified type with an empty
    /// package. Generic arguments are not parsed from the input; use
    /// [`JavaType::with_argument`] to attach one.
    #[must_use]
    pub fn new(qualified: impl AsRef<str>) -> Self {
        let qualified = qualified.as_ref();
        match qualified.rsplit_once('.') {
            Some((package, simple)) => Self {
                package: package.into(),
                simple: simple.into(),
                argument: None,
            },
            None => Self::simple_name(qualified),
        }
    }

    /// Creates an unqualified type from a simple name.
    #[must_use]
    pub fn simple_name(simple: impl Into<EcoString>) -> Self {
        Self {
            package: EcoString::new(),
            simple: simple.into(),
            argument: None,
        }
    }

    /// Attaches a generic argument, producing `Self<argument>`.
    #[must_use]
    pub fn with_argument(mut self, argument: JavaType) -> Self {
        self.argument = Some(Box::new(argument));
        self
    }

    /// The package portion, empty for unqualified names.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The simple name without package or generic argument.
    #[must_use]
    pub fn simple(&self) -> &str {
        &self.simple
    }

    /// The generic argument, if one is attached.
    #[must_use]
    pub fn argument(&self) -> Option<&JavaType> {
        self.argument.as_deref()
    }

    /// The qualified name (`package.Simple`), without generic argument.
    ///
    /// This is the form recorded in artifact import sets.
    #[must_use]
    pub fn qualified(&self) -> EcoString {
        if self.package.is_empty() {
            self.simple.clone()
        } else {
            ecow::eco_format!("{}.{}", self.package, self.simple)
        }
    }
}

impl fmt::Display for JavaType {
    /// Displays the short form used in synthesized signatures:
    /// `Simple` or `Simple<Argument>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple)?;
        if let Some(argument) = &self.argument {
            write!(f, "<{argument}>")?;
        }
        Ok(())
    }
}

/// A target-language primitive kind.
///
/// Primitives cannot appear as generic arguments; the envelope wrapper
/// substitutes the boxed form ([`PrimitiveKind::boxed`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// `int` / `Integer`
    Int,
    /// `long` / `Long`
    Long,
    /// `short` / `Short`
    Short,
    /// `byte` / `Byte`
    Byte,
    /// `float` / `Float`
    Float,
    /// `double` / `Double`
    Double,
    /// `boolean` / `Boolean`
    Boolean,
    /// `char` / `Character`
    Char,
}

impl PrimitiveKind {
    /// The primitive keyword as written in source (`int`, `boolean`, …).
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Char => "char",
        }
    }

    /// The boxed (object wrapper) simple name (`Integer`, `Boolean`, …).
    #[must_use]
    pub fn boxed(self) -> &'static str {
        match self {
            Self::Int => "Integer",
            Self::Long => "Long",
            Self::Short => "Short",
            Self::Byte => "Byte",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Char => "Character",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Well-known service-layer runtime types.
///
/// Every generated service method returns the result envelope; paginated
/// variants take the pagination parameter and read the paging result back
/// from the data-access layer. Injection annotations mark the generated
/// class and its delegation field for the host container.
pub mod runtime {
    use super::JavaType;

    /// The generic result envelope returned by every service method.
    #[must_use]
    pub fn envelope() -> JavaType {
        JavaType::new("com.yk.hornet.common.domain.DataStore")
    }

    /// The pagination parameter bundling start index, page size, and an
    /// optional order-by clause.
    #[must_use]
    pub fn page_bounds() -> JavaType {
        JavaType::new("com.yk.hornet.common.domain.PageBounds")
    }

    /// The paging result exposing the row window and total count.
    #[must_use]
    pub fn page() -> JavaType {
        JavaType::new("com.github.pagehelper.Page")
    }

    /// The paging trigger armed before a paginated delegation call.
    #[must_use]
    pub fn page_helper() -> JavaType {
        JavaType::new("com.github.pagehelper.PageHelper")
    }

    /// The field-injection annotation type.
    #[must_use]
    pub fn autowired() -> JavaType {
        JavaType::new("org.springframework.beans.factory.annotation.Autowired")
    }

    /// The service-exposure annotation type placed on implementations.
    #[must_use]
    pub fn service_annotation() -> JavaType {
        JavaType::new("com.alibaba.dubbo.config.annotation.Service")
    }

    /// The name given to the inserted pagination parameter.
    pub const PAGE_BOUNDS_PARAM: &str = "pageBounds";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_splits_on_last_dot() {
        let ty = JavaType::new("com.a.domain.User");
        assert_eq!(ty.package(), "com.a.domain");
        assert_eq!(ty.simple(), "User");
        assert_eq!(ty.qualified(), "com.a.domain.User");
    }

    #[test]
    fn unqualified_name_has_empty_package() {
        let ty = JavaType::new("User");
        assert_eq!(ty.package(), "");
        assert_eq!(ty.qualified(), "User");
    }

    #[test]
    fn display_short_form() {
        let ty = JavaType::new("com.a.domain.User");
        assert_eq!(ty.to_string(), "User");
    }

    #[test]
    fn display_with_generic_argument() {
        let ty = JavaType::simple_name("DataStore").with_argument(JavaType::simple_name("User"));
        assert_eq!(ty.to_string(), "DataStore<User>");
    }

    #[test]
    fn qualified_ignores_generic_argument() {
        let ty = JavaType::new("com.github.pagehelper.Page")
            .with_argument(JavaType::simple_name("User"));
        assert_eq!(ty.qualified(), "com.github.pagehelper.Page");
        assert_eq!(ty.to_string(), "Page<User>");
    }

    #[test]
    fn type_equality() {
        let a = JavaType::new("com.a.User");
        let b = JavaType::new("com.a.User");
        let c = JavaType::new("com.b.User");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn primitive_boxed_forms() {
        assert_eq!(PrimitiveKind::Int.boxed(), "Integer");
        assert_eq!(PrimitiveKind::Long.boxed(), "Long");
        assert_eq!(PrimitiveKind::Boolean.boxed(), "Boolean");
        assert_eq!(PrimitiveKind::Char.boxed(), "Character");
    }

    #[test]
    fn primitive_keywords() {
        assert_eq!(PrimitiveKind::Boolean.to_string(), "boolean");
        assert_eq!(PrimitiveKind::Char.keyword(), "char");
    }

    #[test]
    fn runtime_types_are_qualified() {
        assert_eq!(
            runtime::envelope().qualified(),
            "com.yk.hornet.common.domain.DataStore"
        );
        assert_eq!(runtime::page_bounds().simple(), "PageBounds");
        assert_eq!(runtime::page_helper().package(), "com.github.pagehelper");
    }
}
