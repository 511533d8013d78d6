#![cfg(test)]
use tfinv_core::inventory::{Filter, Inventory};
use tfinv_core::render::{Format, render_to_string};
use tfinv_core::state;

use crate::fixtures::STATE;

fn folded() -> Inventory {
    state::inventory_from_reader(STATE.as_bytes()).expect("fixture state must parse")
}

#[test]
fn state_document_folds_into_consistent_graph() {
    let inv = folded();

    let hosts: Vec<&str> = inv.hosts().keys().map(String::as_str).collect();
    assert_eq!(hosts, vec!["bastion", "db1", "web1", "web2"]);

    let groups: Vec<&str> = inv.groups().keys().map(String::as_str).collect();
    assert_eq!(groups, vec!["canary", "db", "web"]);

    // web2 only appears in the group's host list
    let web2 = inv.host("web2").unwrap();
    assert!(web2.enabled);
    assert!(web2.variables.is_empty());
    assert!(web2.groups.contains("web"));

    let db1 = inv.host("db1").unwrap();
    assert!(!db1.enabled);
    // non-string variables are skipped
    assert!(!db1.variables.contains_key("port"));

    assert_eq!(inv.vars()["env"], "test");
    assert_eq!(inv.host("bastion").unwrap().metadata["owner"], "ops");
}

#[test]
fn folding_is_order_independent() {
    let records = state::records_from_slice(STATE.as_bytes()).unwrap();

    let forward: Inventory = records.iter().cloned().collect();
    let backward: Inventory = records.into_iter().rev().collect();

    assert_eq!(forward, backward);
}

#[test]
fn folding_twice_changes_nothing() {
    let records = state::records_from_slice(STATE.as_bytes()).unwrap();

    let once: Inventory = records.iter().cloned().collect();
    let mut twice = once.clone();
    twice.extend(records);

    assert_eq!(once, twice);
}

#[test]
fn filtered_render_lists_host_once() {
    let inv = folded().copy_filtered(&Filter::new(["web1"], Vec::<String>::new()));
    let ini = render_to_string(&inv, Format::Ini).unwrap();

    assert_eq!(ini.matches("web1 ansible_host=10.0.1.10").count(), 1);
    // web keeps its member list, web2 is just not described
    assert!(ini.contains("[web]\nweb1 ansible_host=10.0.1.10 os=linux\nweb2\n\n"));
    assert!(!ini.contains("bastion"));
}

#[test]
fn full_passthrough_filter_keeps_everything() {
    let inv = folded();
    assert_eq!(inv.copy_filtered(&Filter::default()), inv);
}

#[test]
fn disabled_host_is_marked_in_text_formats() {
    let inv = folded();

    let ini = render_to_string(&inv, Format::Ini).unwrap();
    assert!(ini.contains("[db]\ndb1 ansible_host=10.0.2.10 enabled=false\n\n"));

    let yaml: serde_yaml::Value = serde_yaml::from_str(&render_to_string(&inv, Format::Yaml).unwrap()).unwrap();
    let db1 = &yaml["all"]["children"]["db"]["hosts"]["db1"];
    assert_eq!(db1["enabled"], serde_yaml::Value::from("false"));
}

#[test]
fn missing_or_malformed_enabled_renders_disabled() {
    let state = br#"[
        { "type": "ansible_host", "values": { "name": "h1" } },
        { "type": "ansible_host", "values": { "name": "h2", "enabled": "no" } }
    ]"#;
    let inv = state::inventory_from_reader(&state[..]).unwrap();

    let ini = render_to_string(&inv, Format::Ini).unwrap();
    assert_eq!(ini, "[all]\nh1 enabled=false\nh2 enabled=false\n\n");
}
