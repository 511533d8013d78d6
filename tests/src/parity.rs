#![cfg(test)]
use serde_json::Value as Json;
use serde_yaml::Value as Yaml;
use tfinv_core::inventory::{Host, Inventory};
use tfinv_core::render::{Format, render_to_string, strip_cidr};

use crate::fixtures::parity_inventory;

fn yaml(inv: &Inventory) -> Yaml {
    serde_yaml::from_str(&render_to_string(inv, Format::Yaml).unwrap()).unwrap()
}

fn json(inv: &Inventory) -> Json {
    serde_json::from_str(&render_to_string(inv, Format::Json).unwrap()).unwrap()
}

#[test]
fn formats_agree_on_host_group_and_inventory_values() {
    let inv = parity_inventory();
    let y = yaml(&inv);
    let j = json(&inv);
    let ini = render_to_string(&inv, Format::Ini).unwrap();

    let web = &y["all"]["children"]["web"];
    let y_ip = web["hosts"]["test1"]["ansible_host"].as_str().unwrap();
    let y_os = web["hosts"]["test1"]["os"].as_str().unwrap();
    let y_tier = web["vars"]["tier"].as_str().unwrap();
    let y_env = y["all"]["vars"]["env"].as_str().unwrap();

    let j_ip = strip_cidr(j["Hosts"]["test1"]["Variables"]["ip"].as_str().unwrap());
    let j_os = j["Hosts"]["test1"]["Variables"]["os"].as_str().unwrap();
    let j_tier = j["Groups"]["web"]["Variables"]["tier"].as_str().unwrap();
    let j_env = j["Vars"]["env"].as_str().unwrap();

    assert_eq!((y_ip, y_os), (j_ip, j_os));
    assert_eq!(y_tier, j_tier);
    assert_eq!(y_env, j_env);

    assert!(ini.contains(&format!("test1 ansible_host={j_ip} os={j_os}")));
    assert!(ini.contains(&format!("[all:vars]\nenv={j_env}")));
    assert!(ini.contains(&format!("[web:vars]\ntier={j_tier}")));
}

#[test]
fn cidr_is_stripped_only_in_derived_views() {
    let inv = parity_inventory();

    assert_eq!(
        yaml(&inv)["all"]["children"]["web"]["hosts"]["test1"]["ansible_host"],
        Yaml::from("192.168.1.10")
    );
    assert!(render_to_string(&inv, Format::Ini).unwrap().contains("ansible_host=192.168.1.10 "));
    assert_eq!(json(&inv)["Hosts"]["test1"]["Variables"]["ip"], "192.168.1.10/24");
}

#[test]
fn grouped_host_is_not_repeated_at_top_scope() {
    let mut inv = parity_inventory();
    inv.add_host(Host::new("solo"));

    let y = yaml(&inv);
    let top = y["all"]["hosts"].as_mapping().unwrap();
    assert!(top.contains_key("solo"));
    assert!(!top.contains_key("test1"));

    let ini = render_to_string(&inv, Format::Ini).unwrap();
    assert!(ini.starts_with("[all]\nsolo\n\n"));
    assert_eq!(ini.matches("test1").count(), 1);

    // JSON has no scopes: the grouped host still lists its group
    let j = json(&inv);
    assert_eq!(j["Hosts"]["test1"]["Groups"], serde_json::json!(["web"]));
    assert_eq!(j["Hosts"]["solo"]["Groups"], serde_json::json!([]));
}

#[test]
fn unknown_format_has_stable_message() {
    let err = "toml".parse::<Format>().unwrap_err();
    assert_eq!(err.to_string(), "unknown inventory format: toml");
}
