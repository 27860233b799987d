//! Compile-time registry of emergency resources.
//!
//! Each region's resources are defined in a TOML file under `resources/`.
//! The registry embeds these at compile time and exposes them via
//! [`seed_resources`].

use serde::Deserialize;

use crate::Resource;

#[derive(Debug, Deserialize)]
struct ResourceFile {
    resources: Vec<Resource>,
}

// ── Compile-time embedded TOML files ────────────────────────────────

const RESOURCE_TOMLS: &[(&str, &str)] = &[("cocle", include_str!("../resources/cocle.toml"))];

#[cfg(test)]
const EXPECTED_RESOURCE_COUNT: usize = 8;

/// Returns every seeded resource, in file order.
///
/// # Panics
///
/// Panics if any TOML file is malformed (this is a compile-time guarantee
/// since the files are embedded).
#[must_use]
pub fn seed_resources() -> Vec<Resource> {
    RESOURCE_TOMLS
        .iter()
        .flat_map(|(name, toml_str)| {
            toml::de::from_str::<ResourceFile>(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse resource file '{name}': {e}"))
                .resources
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::ResourceType;

    #[test]
    fn loads_all_resources() {
        assert_eq!(seed_resources().len(), EXPECTED_RESOURCE_COUNT);
    }

    #[test]
    fn resource_ids_are_unique() {
        let mut seen = BTreeSet::new();
        for resource in seed_resources() {
            assert!(seen.insert(resource.id), "Duplicate resource ID: {}", resource.id);
        }
    }

    #[test]
    fn all_resources_have_required_fields() {
        for resource in seed_resources() {
            assert!(!resource.name.is_empty(), "Resource {} has empty name", resource.id);
            assert!(!resource.phone.is_empty(), "Resource {} has empty phone", resource.id);
            assert!(
                resource.coordinate.is_valid(),
                "Resource {} has invalid coordinate",
                resource.id
            );
        }
    }

    #[test]
    fn parses_type_and_coordinate() {
        let bomberos = seed_resources()
            .into_iter()
            .find(|r| r.id == 5)
            .unwrap();
        assert_eq!(bomberos.resource_type, ResourceType::Fire);
        assert!((bomberos.coordinate.latitude - 8.4003).abs() < 1e-9);
        assert!((bomberos.coordinate.longitude - -80.2650).abs() < 1e-9);
    }
}
