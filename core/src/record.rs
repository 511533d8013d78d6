//! # State Records
//!
//! Turns loosely-typed resource objects into typed records the inventory can fold.
//!
//! A resource object carries a `type` discriminator and a `values` object:
//!
//! ```json
//! { "type": "ansible_host", "values": { "name": "web1", "groups": ["web"], "enabled": true } }
//! ```
//!
//! Extraction is permissive. A field that is missing or has the wrong shape is
//! read as empty or `false`, and non-string entries inside lists and maps are
//! skipped.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::inventory::{Group, Host, Vars};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Host,
    Group,
    InventoryVars,
}

impl RecordKind {
    /// Maps a resource `type` onto a record kind.
    ///
    /// Accepts the provider resource names as well as the bare logical names.
    /// See [`Record::from_object`] for where the bare names count.
    pub fn from_type(resource_type: &str) -> Option<Self> {
        match resource_type {
            "ansible_host" | "host" => Some(RecordKind::Host),
            "ansible_group" | "group" => Some(RecordKind::Group),
            "ansible_inventory" | "inventory-variables" => Some(RecordKind::InventoryVars),
            _ => None,
        }
    }
}

/// One unit of input for [`crate::inventory::Inventory::fold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Host(Host),
    Group(Group),
    Vars(Vars),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Host(_) => RecordKind::Host,
            Record::Group(_) => RecordKind::Group,
            Record::Vars(_) => RecordKind::InventoryVars,
        }
    }

    /// Builds a record from a resource object, or `None` if its `type` is not
    /// an inventory resource.
    ///
    /// The bare names `host`, `group` and `inventory-variables` only count on
    /// objects that carry a `values` object.
    pub fn from_object(object: &Map<String, Value>) -> Option<Record> {
        let resource_type: &str = object.get("type").and_then(Value::as_str)?;
        let kind: RecordKind = RecordKind::from_type(resource_type)?;
        let values: Option<&Map<String, Value>> = object.get("values").and_then(Value::as_object);

        if values.is_none() && !resource_type.starts_with("ansible_") {
            return None;
        }

        let empty: Map<String, Value> = Map::new();
        let values: &Map<String, Value> = values.unwrap_or(&empty);

        Some(Record::from_values(kind, values))
    }

    /// Builds a record of `kind` from the fields of a `values` object.
    pub fn from_values(kind: RecordKind, values: &Map<String, Value>) -> Record {
        match kind {
            RecordKind::Host => Record::Host(Host {
                name: string_field(values, "name"),
                variables: string_map_field(values, "variables"),
                groups: string_set_field(values, "groups"),
                enabled: values.get("enabled").and_then(Value::as_bool).unwrap_or(false),
                metadata: string_map_field(values, "metadata"),
            }),
            RecordKind::Group => Record::Group(Group {
                name: string_field(values, "name"),
                variables: string_map_field(values, "variables"),
                children: string_set_field(values, "children"),
                parents: string_set_field(values, "parents"),
                hosts: string_set_field(values, "hosts"),
            }),
            RecordKind::InventoryVars => Record::Vars(string_map_field(values, "variables")),
        }
    }
}

fn string_field(values: &Map<String, Value>, key: &str) -> String {
    values
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_set_field(values: &Map<String, Value>, key: &str) -> BTreeSet<String> {
    let Some(items) = values.get(key).and_then(Value::as_array) else {
        return BTreeSet::new();
    };

    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn string_map_field(values: &Map<String, Value>, key: &str) -> Vars {
    let Some(map) = values.get(key).and_then(Value::as_object) else {
        return Vars::new();
    };

    map.iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
