//! Subproject Configuration Overrides
//!
//! Name-keyed table of configuration overrides applied before layout
//! assignment. An override runs only for the subproject whose name matches
//! its key exactly.

use std::collections::HashMap;
use tracing::debug;

use minq_build_core::project::{Subproject, SubprojectKind};

/// Compile SDK applied to the Isar library subproject
pub const ISAR_COMPILE_SDK: u32 = 34;

/// Fallback when a subproject declares no minimum SDK
pub const FALLBACK_MIN_SDK: u32 = 16;

/// Floor applied to the minimum SDK
pub const MIN_SDK_FLOOR: u32 = 21;

/// Override applied to a matching subproject
pub type SubprojectOverride = Box<dyn Fn(&mut Subproject) + Send + Sync>;

/// Name-keyed table of subproject overrides
pub struct OverrideTable {
    overrides: HashMap<String, SubprojectOverride>,
}

impl OverrideTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Table with the stock Minq workspace overrides
    pub fn with_defaults() -> Self {
        let mut table = Self::new();

        table.register("isar_flutter_libs", |sp| {
            if sp.kind != SubprojectKind::Library {
                return;
            }
            sp.namespace = Some("dev.isar.isar_flutter_libs".to_string());
            sp.compile_sdk = Some(ISAR_COMPILE_SDK);
            sp.min_sdk = Some(sp.min_sdk.unwrap_or(FALLBACK_MIN_SDK).max(MIN_SDK_FLOOR));
        });

        table
    }

    /// Register an override for an exact subproject name
    pub fn register<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&mut Subproject) + Send + Sync + 'static,
    {
        self.overrides.insert(name.to_string(), Box::new(f));
    }

    /// Apply the matching override, if any. Returns whether one matched.
    pub fn apply(&self, subproject: &mut Subproject) -> bool {
        match self.overrides.get(&subproject.name) {
            Some(f) => {
                debug!("Applying override for {}", subproject.name);
                f(subproject);
                true
            }
            None => false,
        }
    }

    /// Apply matching overrides to every subproject in place
    pub fn apply_all(&self, subprojects: &mut [Subproject]) {
        for sp in subprojects.iter_mut() {
            self.apply(sp);
        }
    }

    /// Number of registered overrides
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl Default for OverrideTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn subproject(name: &str, kind: SubprojectKind, min_sdk: Option<u32>) -> Subproject {
        Subproject {
            name: name.to_string(),
            dir: PathBuf::from("/workspace").join(name),
            kind,
            namespace: None,
            compile_sdk: None,
            min_sdk,
        }
    }

    #[test]
    fn test_isar_override_floors_min_sdk() {
        let table = OverrideTable::with_defaults();

        // No declared minimum: falls back to 16, floored to 21
        let mut sp = subproject("isar_flutter_libs", SubprojectKind::Library, None);
        assert!(table.apply(&mut sp));
        assert_eq!(sp.min_sdk, Some(21));
        assert_eq!(sp.compile_sdk, Some(34));
        assert_eq!(sp.namespace.as_deref(), Some("dev.isar.isar_flutter_libs"));

        // Declared minimum below the floor
        let mut sp = subproject("isar_flutter_libs", SubprojectKind::Library, Some(19));
        table.apply(&mut sp);
        assert_eq!(sp.min_sdk, Some(21));

        // Declared minimum above the floor is kept
        let mut sp = subproject("isar_flutter_libs", SubprojectKind::Library, Some(24));
        table.apply(&mut sp);
        assert_eq!(sp.min_sdk, Some(24));
    }

    #[test]
    fn test_override_is_name_gated() {
        let table = OverrideTable::with_defaults();

        let mut sp = subproject("app", SubprojectKind::Application, Some(19));
        assert!(!table.apply(&mut sp));
        assert_eq!(sp.min_sdk, Some(19));
        assert!(sp.namespace.is_none());
    }

    #[test]
    fn test_override_is_kind_gated() {
        let table = OverrideTable::with_defaults();

        // Matching name but not a library: left untouched
        let mut sp = subproject("isar_flutter_libs", SubprojectKind::Application, Some(19));
        table.apply(&mut sp);
        assert_eq!(sp.min_sdk, Some(19));
        assert!(sp.namespace.is_none());
    }

    #[test]
    fn test_apply_all() {
        let table = OverrideTable::with_defaults();

        let mut subprojects = vec![
            subproject("app", SubprojectKind::Application, None),
            subproject("isar_flutter_libs", SubprojectKind::Library, None),
        ];
        table.apply_all(&mut subprojects);

        assert!(subprojects[0].namespace.is_none());
        assert_eq!(subprojects[1].min_sdk, Some(21));
    }
}
