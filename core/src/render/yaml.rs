//! Hierarchical rendering: one `all` scope with nested `children`.

use std::collections::BTreeMap;
use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tfinv_common::error::RenderError;

use super::view;
use crate::inventory::{Group, Host, Inventory};

#[derive(Debug, Default, serde::Serialize)]
struct GroupNode<'a> {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    hosts: BTreeMap<&'a str, HostNode<'a>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    vars: BTreeMap<&'a str, &'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    children: BTreeMap<&'a str, GroupNode<'a>>,
}

/// Host variables in rendering order rather than key order.
#[derive(Debug, Default)]
struct HostNode<'a>(Vec<(&'a str, &'a str)>);

impl<'a> HostNode<'a> {
    fn of(host: &'a Host) -> Self {
        Self(view::host_entries(host))
    }
}

impl Serialize for HostNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

pub(super) fn write<W: Write>(inventory: &Inventory, out: &mut W) -> Result<(), RenderError> {
    let document: BTreeMap<&str, GroupNode<'_>> = BTreeMap::from([("all", root_node(inventory))]);
    serde_yaml::to_writer(&mut *out, &document)?;
    Ok(())
}

fn root_node(inventory: &Inventory) -> GroupNode<'_> {
    let hosts = inventory
        .groupless_hosts()
        .map(|host| (host.name.as_str(), HostNode::of(host)))
        .collect();

    let vars = inventory
        .vars()
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    let children = inventory
        .groups()
        .iter()
        .map(|(name, group)| (name.as_str(), group_node(inventory, group)))
        .collect();

    GroupNode {
        hosts,
        vars,
        children,
    }
}

/// Builds the full node for `group`.
///
/// Children are emitted as empty references. Each group's body is written once,
/// under `all.children`, and Ansible merges the references into it.
fn group_node<'a>(inventory: &'a Inventory, group: &'a Group) -> GroupNode<'a> {
    let hosts = group
        .hosts
        .iter()
        .map(|member| {
            let node = inventory.host(member).map(HostNode::of).unwrap_or_default();
            (member.as_str(), node)
        })
        .collect();

    let vars = group
        .variables
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    let children = group
        .children
        .iter()
        .map(|child| (child.as_str(), GroupNode::default()))
        .collect();

    GroupNode {
        hosts,
        vars,
        children,
    }
}
