//! # Inventory Model
//!
//! The in-memory host/group graph built from state records.
//!
//! Records can arrive in any order and may reference hosts or groups that have
//! not been defined yet. Every mutation keeps two invariants:
//! * Every group named by a host, and every child named by a group, exists as a [`Group`].
//! * Membership is symmetric: `host.groups` contains `g` iff `groups[g].hosts` contains the host.
//!
//! Nothing here fails. Empty or odd names are stored as they are.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::record::Record;

mod filter;
mod group;
mod host;

pub use filter::Filter;
pub use group::Group;
pub use host::Host;

/// Variable name to value. Ordered so that every walk over it is reproducible.
pub type Vars = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Inventory {
    hosts: BTreeMap<String, Host>,
    groups: BTreeMap<String, Group>,
    vars: Vars,
    /// Hosts that exist only because a group listed them. The first host
    /// record for one of them sets its enabled flag instead of merging it.
    #[serde(skip)]
    placeholders: BTreeSet<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hosts(&self) -> &BTreeMap<String, Host> {
        &self.hosts
    }

    pub fn groups(&self) -> &BTreeMap<String, Group> {
        &self.groups
    }

    /// Inventory-wide variables.
    pub fn vars(&self) -> &Vars {
        &self.vars
    }

    pub fn host(&self, name: &str) -> Option<&Host> {
        self.hosts.get(name)
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty() && self.groups.is_empty() && self.vars.is_empty()
    }

    /// Hosts that belong to no group, in name order.
    pub fn groupless_hosts(&self) -> impl Iterator<Item = &Host> {
        self.hosts.values().filter(|host| host.is_groupless())
    }

    /// Merges inventory-wide variables. Later values win.
    pub fn add_vars(&mut self, vars: impl IntoIterator<Item = (String, String)>) {
        self.vars.extend(vars);
    }

    /// Inserts `host`, or merges it into the host of the same name.
    ///
    /// Every group the host names is created if missing and gets the host
    /// added to its member set.
    pub fn add_host(&mut self, host: Host) {
        let name: String = host.name.clone();
        let memberships: Vec<String> = host.groups.iter().cloned().collect();
        let placeholder: bool = self.placeholders.remove(&name);

        match self.hosts.entry(name.clone()) {
            Entry::Occupied(mut existing) => {
                let existing = existing.get_mut();
                if placeholder {
                    existing.enabled = host.enabled;
                }
                existing.merge(host);
            }
            Entry::Vacant(slot) => {
                slot.insert(host);
            }
        }

        for group in memberships {
            self.ensure_group(&group).hosts.insert(name.clone());
        }
    }

    /// Inserts `group`, or merges it into the group of the same name.
    ///
    /// Children are created as empty groups if missing. Listed hosts are
    /// created with this group assigned, or get the membership added.
    pub fn add_group(&mut self, group: Group) {
        let name: String = group.name.clone();
        let children: Vec<String> = group.children.iter().cloned().collect();
        let members: Vec<String> = group.hosts.iter().cloned().collect();

        self.ensure_group(&name).merge(group);

        for child in &children {
            self.ensure_group(child);
        }

        for member in members {
            self.ensure_host(&member).groups.insert(name.clone());
        }
    }

    /// Applies one extracted record to the inventory.
    pub fn fold(&mut self, record: Record) {
        trace!(kind = ?record.kind(), "folding record");
        match record {
            Record::Host(host) => self.add_host(host),
            Record::Group(group) => self.add_group(group),
            Record::Vars(vars) => self.add_vars(vars),
        }
    }

    /// Returns the group called `name`, creating an empty one if it is unknown.
    pub fn ensure_group(&mut self, name: &str) -> &mut Group {
        self.groups.entry(name.to_string()).or_insert_with(|| {
            debug!("creating group `{name}` ahead of its definition");
            Group::new(name)
        })
    }

    /// Returns the host called `name`, creating an enabled placeholder without
    /// variables if it is unknown.
    ///
    /// The caller is responsible for keeping group memberships symmetric.
    fn ensure_host(&mut self, name: &str) -> &mut Host {
        match self.hosts.entry(name.to_string()) {
            Entry::Occupied(existing) => existing.into_mut(),
            Entry::Vacant(slot) => {
                debug!("creating host `{name}` ahead of its definition");
                self.placeholders.insert(name.to_string());
                slot.insert(Host::new(name))
            }
        }
    }
}

impl FromIterator<Record> for Inventory {
    fn from_iter<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut inventory = Inventory::new();
        inventory.extend(records);
        inventory
    }
}

impl Extend<Record> for Inventory {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        for record in records {
            self.fold(record);
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
