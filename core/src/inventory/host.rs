use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Vars;

/// A named endpoint as it appears in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Host {
    pub name: String,
    pub variables: Vars,
    /// Names of the groups this host is a member of.
    pub groups: BTreeSet<String>,
    pub enabled: bool,
    /// Free-form key/value pairs kept apart from `variables`.
    pub metadata: Vars,
}

impl Default for Host {
    fn default() -> Self {
        Self {
            name: String::new(),
            variables: Vars::new(),
            groups: BTreeSet::new(),
            enabled: true,
            metadata: Vars::new(),
        }
    }
}

impl Host {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// `true` if the host belongs to no group and is rendered at the `all` scope.
    pub fn is_groupless(&self) -> bool {
        self.groups.is_empty()
    }

    /// Folds a later record for the same host into this one.
    ///
    /// Variables and metadata are overwritten key by key, group memberships are
    /// unioned and the enabled flag can only go from disabled to enabled.
    pub(super) fn merge(&mut self, other: Host) {
        self.variables.extend(other.variables);
        self.metadata.extend(other.metadata);
        self.groups.extend(other.groups);
        if other.enabled {
            self.enabled = true;
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
