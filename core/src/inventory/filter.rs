use std::collections::BTreeSet;

use super::{Host, Inventory};

/// Host and group allow-lists applied by [`Inventory::copy_filtered`].
///
/// An empty list does not filter on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    hosts: BTreeSet<String>,
    groups: BTreeSet<String>,
}

impl Filter {
    pub fn new<H, G>(hosts: H, groups: G) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        Self {
            hosts: hosts.into_iter().map(Into::into).collect(),
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// True when the filter keeps everything, so copying can be skipped.
    pub fn is_passthrough(&self) -> bool {
        self.hosts.is_empty() && self.groups.is_empty()
    }

    /// Keeps a host if it is allow-listed by name and belongs to at least one
    /// allow-listed group.
    pub fn keeps_host(&self, host: &Host) -> bool {
        let by_name = self.hosts.is_empty() || self.hosts.contains(&host.name);
        let by_group = self.groups.is_empty() || host.groups.iter().any(|g| self.groups.contains(g));
        by_name && by_group
    }

    pub fn keeps_group(&self, name: &str) -> bool {
        self.groups.is_empty() || self.groups.contains(name)
    }

    /// Allow-listed host names that the inventory does not know.
    pub fn unknown_hosts<'a>(&'a self, inventory: &Inventory) -> Vec<&'a str> {
        self.hosts
            .iter()
            .filter(|name| inventory.host(name).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Allow-listed group names that the inventory does not know.
    pub fn unknown_groups<'a>(&'a self, inventory: &Inventory) -> Vec<&'a str> {
        self.groups
            .iter()
            .filter(|name| inventory.group(name).is_none())
            .map(String::as_str)
            .collect()
    }
}

impl Inventory {
    /// Returns an independent copy holding only what `filter` keeps.
    ///
    /// Hosts and groups are tested separately. Kept groups carry their member
    /// and child lists unchanged, so they may name hosts the filter dropped.
    /// Inventory-wide variables are always copied.
    pub fn copy_filtered(&self, filter: &Filter) -> Inventory {
        let mut out = Inventory::new();
        out.vars = self.vars.clone();

        out.hosts = self
            .hosts
            .iter()
            .filter(|(_, host)| filter.keeps_host(host))
            .map(|(name, host)| (name.clone(), host.clone()))
            .collect();

        out.placeholders = self
            .placeholders
            .iter()
            .filter(|name| out.hosts.contains_key(*name))
            .cloned()
            .collect();

        out.groups = self
            .groups
            .iter()
            .filter(|(name, _)| filter.keeps_group(name))
            .map(|(name, group)| (name.clone(), group.clone()))
            .collect();

        out
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
