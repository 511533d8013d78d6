use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Vars;

/// A named collection of hosts with its own variables and group edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Group {
    pub name: String,
    pub variables: Vars,
    pub children: BTreeSet<String>,
    pub parents: BTreeSet<String>,
    pub hosts: BTreeSet<String>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.children.insert(child.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.insert(parent.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.hosts.insert(host.into());
        self
    }

    pub(super) fn merge(&mut self, other: Group) {
        self.variables.extend(other.variables);
        self.children.extend(other.children);
        self.parents.extend(other.parents);
        self.hosts.extend(other.hosts);
    }
}
