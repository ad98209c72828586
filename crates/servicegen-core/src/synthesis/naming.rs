// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Naming policy for derived identifiers.
//!
//! Pure functions computing the generated type names and the delegation
//! field name from a table's domain-object name and the configured
//! packages. The only failure mode is a precondition violation: an empty
//! domain-object name cannot produce any derived identifier.

use ecow::{EcoString, eco_format};

use super::{Result, SynthesisError};
use crate::java_types::JavaType;

/// Derives the service-contract type name:
/// `base_package + "." + domain + "Service"`.
///
/// # Errors
///
/// Returns [`SynthesisError::EmptyDomainObjectName`] for an empty domain
/// name.
pub fn service_type_name(base_package: &str, domain_object_name: &str) -> Result<JavaType> {
    derived_type_name(base_package, domain_object_name, "Service")
}

/// Derives the service-implementation type name:
/// `impl_package + "." + domain + "ServiceImpl"`.
///
/// # Errors
///
/// Returns [`SynthesisError::EmptyDomainObjectName`] for an empty domain
/// name.
pub fn impl_type_name(impl_package: &str, domain_object_name: &str) -> Result<JavaType> {
    derived_type_name(impl_package, domain_object_name, "ServiceImpl")
}

/// Derives the backing data-access interface type name:
/// `mapper_package + "." + domain + "Mapper"`.
///
/// # Errors
///
/// Returns [`SynthesisError::EmptyDomainObjectName`] for an empty domain
/// name.
pub fn mapper_type_name(mapper_package: &str, domain_object_name: &str) -> Result<JavaType> {
    derived_type_name(mapper_package, domain_object_name, "Mapper")
}

fn derived_type_name(package: &str, domain_object_name: &str, suffix: &str) -> Result<JavaType> {
    if domain_object_name.is_empty() {
        return Err(SynthesisError::EmptyDomainObjectName);
    }
    Ok(JavaType::new(eco_format!(
        "{package}.{domain_object_name}{suffix}"
    )))
}

/// Derives a field name from a type's simple name by lowering exactly the
/// first character, and only when it is an uppercase ASCII letter.
///
/// Everything else passes through verbatim: names starting with a
/// non-letter or an already-lowercase letter, and every character after
/// the first, including further uppercase runs:
///
/// ```
/// use servicegen_core::synthesis::naming::field_name;
///
/// assert_eq!(field_name("UserMapper"), "userMapper");
/// assert_eq!(field_name("mapper"), "mapper");
/// assert_eq!(field_name("ABMapper"), "aBMapper");
/// assert_eq!(field_name("_internal"), "_internal");
/// ```
#[must_use]
pub fn field_name(type_simple_name: &str) -> EcoString {
    match type_simple_name.as_bytes().first() {
        Some(first) if first.is_ascii_uppercase() => {
            let lowered = first.to_ascii_lowercase() as char;
            eco_format!("{lowered}{}", &type_simple_name[1..])
        }
        _ => type_simple_name.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_name_appends_suffix() {
        let ty = service_type_name("com.a.service", "User").unwrap();
        assert_eq!(ty.qualified(), "com.a.service.UserService");
        assert_eq!(ty.simple(), "UserService");
    }

    #[test]
    fn impl_type_name_appends_suffix() {
        let ty = impl_type_name("com.a.service.impl", "User").unwrap();
        assert_eq!(ty.qualified(), "com.a.service.impl.UserServiceImpl");
    }

    #[test]
    fn mapper_type_name_appends_suffix() {
        let ty = mapper_type_name("com.a.dao", "OrderItem").unwrap();
        assert_eq!(ty.qualified(), "com.a.dao.OrderItemMapper");
    }

    #[test]
    fn empty_domain_name_is_rejected() {
        assert_eq!(
            service_type_name("com.a.service", ""),
            Err(SynthesisError::EmptyDomainObjectName)
        );
        assert_eq!(
            mapper_type_name("com.a.dao", ""),
            Err(SynthesisError::EmptyDomainObjectName)
        );
    }

    #[test]
    fn field_name_lowers_first_uppercase_only() {
        assert_eq!(field_name("UserMapper"), "userMapper");
        assert_eq!(field_name("ABMapper"), "aBMapper");
    }

    #[test]
    fn field_name_passes_through_lowercase() {
        assert_eq!(field_name("mapper"), "mapper");
    }

    #[test]
    fn field_name_passes_through_non_letters() {
        assert_eq!(field_name("_Mapper"), "_Mapper");
        assert_eq!(field_name("1Mapper"), "1Mapper");
        assert_eq!(field_name(""), "");
    }
}
