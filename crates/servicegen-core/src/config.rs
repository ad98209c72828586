// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Host-supplied service-layer settings.
//!
//! The host tool reads a generator configuration file and hands this core
//! a [`ServiceLayerConfig`] block per run. The keys mirror the plugin
//! properties the host exposes: contract package/project and
//! implementation package/project. The mapper package is not part of this
//! block; it belongs to the sibling data-access generator's configuration
//! and is passed alongside when assembling a [`TableIdentity`].

use camino::Utf8PathBuf;
use ecow::EcoString;
use serde::Deserialize;

use crate::descriptor::TableIdentity;
use crate::java_types::JavaType;

/// Settings block for the generated service layer.
///
/// All fields are optional: a missing package surfaces later as a
/// synthesis error naming the key, so the host can report which
/// configuration entry to fix.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceLayerConfig {
    /// Package of generated service contracts (`targetPackage`).
    pub target_package: Option<EcoString>,
    /// Project directory for generated contracts (`targetProject`).
    pub target_project: Option<Utf8PathBuf>,
    /// Package of generated implementations (`targetImplPackage`).
    pub target_impl_package: Option<EcoString>,
    /// Project directory for generated implementations (`targetImplProject`).
    pub target_impl_project: Option<Utf8PathBuf>,
}

impl ServiceLayerConfig {
    /// Assembles the identity for one table from this settings block plus
    /// the introspected domain-object name, entity type, and the sibling
    /// data-access generator's target package.
    #[must_use]
    pub fn table_identity(
        &self,
        domain_object_name: impl Into<EcoString>,
        entity_type: JavaType,
        mapper_package: Option<&str>,
    ) -> TableIdentity {
        let mut identity = TableIdentity::new(domain_object_name, entity_type);
        identity.target_package = self.target_package.clone();
        identity.target_impl_package = self.target_impl_package.clone();
        identity.mapper_package = mapper_package.map(EcoString::from);
        identity.target_project = self.target_project.clone();
        identity.target_impl_project = self.target_impl_project.clone();
        identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_keys() {
        let source = r#"
            targetPackage = "com.a.service"
            targetProject = "src/main/java"
            targetImplPackage = "com.a.service.impl"
            targetImplProject = "impl/src/main/java"
        "#;
        let config: ServiceLayerConfig = toml::from_str(source).unwrap();
        assert_eq!(config.target_package.as_deref(), Some("com.a.service"));
        assert_eq!(
            config.target_impl_project.as_deref(),
            Some(camino::Utf8Path::new("impl/src/main/java"))
        );
    }

    #[test]
    fn missing_keys_deserialize_to_none() {
        let config: ServiceLayerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServiceLayerConfig::default());
    }

    #[test]
    fn table_identity_carries_all_settings() {
        let config = ServiceLayerConfig {
            target_package: Some("com.a.service".into()),
            target_project: Some("src/main/java".into()),
            target_impl_package: Some("com.a.service.impl".into()),
            target_impl_project: Some("impl/src/main/java".into()),
        };
        let identity = config.table_identity(
            "User",
            JavaType::new("com.a.domain.User"),
            Some("com.a.dao"),
        );
        assert_eq!(identity.domain_object_name, "User");
        assert_eq!(identity.target_package.as_deref(), Some("com.a.service"));
        assert_eq!(identity.mapper_package.as_deref(), Some("com.a.dao"));
        assert_eq!(
            identity.target_project.as_deref(),
            Some(camino::Utf8Path::new("src/main/java"))
        );
    }
}
