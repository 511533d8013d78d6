//! Locates inventory resources anywhere inside a state document.
//!
//! The walk does not assume a particular state layout: every object at any
//! depth whose `type` names an inventory resource becomes a [`Record`]. The
//! walk does not descend into a record it has matched.

use std::io::Read;

use anyhow::Context;
use serde_json::Value;
use tracing::debug;

use crate::inventory::Inventory;
use crate::record::Record;

/// Collects every inventory record in `document`.
///
/// Folding is order independent, so no particular record order is promised.
pub fn find_records(document: &Value) -> Vec<Record> {
    let mut records = Vec::new();
    collect(document, &mut records);
    records
}

fn collect(value: &Value, records: &mut Vec<Record>) {
    match value {
        Value::Object(object) => {
            if let Some(record) = Record::from_object(object) {
                records.push(record);
                return;
            }
            for child in object.values() {
                collect(child, records);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, records);
            }
        }
        _ => {}
    }
}

pub fn records_from_slice(bytes: &[u8]) -> anyhow::Result<Vec<Record>> {
    let document: Value = serde_json::from_slice(bytes).context("state document is not valid JSON")?;
    Ok(find_records(&document))
}

pub fn records_from_reader<R: Read>(reader: R) -> anyhow::Result<Vec<Record>> {
    let document: Value =
        serde_json::from_reader(reader).context("state document is not valid JSON")?;
    Ok(find_records(&document))
}

/// Reads a state document and folds every record it contains.
pub fn inventory_from_reader<R: Read>(reader: R) -> anyhow::Result<Inventory> {
    let records: Vec<Record> = records_from_reader(reader)?;
    debug!("found {} inventory records", records.len());
    Ok(records.into_iter().collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
