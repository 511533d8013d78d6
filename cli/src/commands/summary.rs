use colored::*;
use tfinv_common::config::Config;
use tfinv_core::inventory::{Host, Inventory};
use tfinv_core::render::view::{IP_KEY, strip_cidr};

use super::{SourceArgs, load_inventory};
use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

pub fn summary(source: &SourceArgs, cfg: &Config) -> anyhow::Result<()> {
    let inventory: Inventory = load_inventory(source, cfg)?;

    if inventory.is_empty() {
        print::no_results();
        return Ok(());
    }

    if cfg.quiet < 2 {
        print_trees(&inventory);
    }
    print_totals(&inventory, cfg);
    Ok(())
}

fn print_trees(inventory: &Inventory) {
    let mut idx: usize = 0;

    let groupless: Vec<&Host> = inventory.groupless_hosts().collect();
    if !groupless.is_empty() || !inventory.vars().is_empty() {
        print::tree_head(idx, "all");
        let mut details: Vec<Detail> = Vec::new();
        if !groupless.is_empty() {
            details.push(("Hosts".to_string(), join_hosts(groupless.into_iter())));
        }
        if !inventory.vars().is_empty() {
            details.push(("Vars".to_string(), join_names(inventory.vars().keys())));
        }
        print::as_tree_one_level(details);
        idx += 1;
    }

    for (name, group) in inventory.groups() {
        print::tree_head(idx, name);

        let members = group.hosts.iter().map(|member| match inventory.host(member) {
            Some(host) => describe_host(host),
            None => member.color(colors::SEPARATOR),
        });
        let mut details: Vec<Detail> = vec![("Hosts".to_string(), join(members))];

        if !group.variables.is_empty() {
            details.push(("Vars".to_string(), join_names(group.variables.keys())));
        }
        if !group.children.is_empty() {
            details.push(("Children".to_string(), join_names(group.children.iter())));
        }
        if !group.parents.is_empty() {
            details.push(("Parents".to_string(), join_names(group.parents.iter())));
        }

        print::as_tree_one_level(details);
        idx += 1;
    }
}

fn print_totals(inventory: &Inventory, cfg: &Config) {
    let hosts: usize = inventory.hosts().len();
    let disabled: usize = inventory.hosts().values().filter(|h| !h.enabled).count();
    let groups: usize = inventory.groups().len();

    let hosts_str: ColoredString = format!("{hosts} hosts").bold().green();
    let groups_str: ColoredString = format!("{groups} groups").bold().yellow();
    let mut output: String = format!("Inventory: {hosts_str} in {groups_str}");
    if disabled > 0 {
        output.push_str(&format!(", {}", format!("{disabled} disabled").color(colors::DISABLED)));
    }

    if cfg.quiet == 0 {
        print::fat_separator();
    }
    print::print(&output);
}

fn describe_host(host: &Host) -> ColoredString {
    let mut text: String = host.name.clone();
    if let Some(ip) = host.variables.get(IP_KEY) {
        text.push_str(&format!(" ({})", strip_cidr(ip)));
    }

    if host.enabled {
        text.color(colors::ADDRESS)
    } else {
        text.color(colors::DISABLED)
    }
}

fn join_hosts<'a>(hosts: impl Iterator<Item = &'a Host>) -> ColoredString {
    join(hosts.map(describe_host))
}

fn join_names<'a>(names: impl Iterator<Item = &'a String>) -> ColoredString {
    join(names.map(|name| name.color(colors::TEXT_DEFAULT)))
}

fn join(items: impl Iterator<Item = ColoredString>) -> ColoredString {
    let joined: Vec<String> = items.map(|item| item.to_string()).collect();
    if joined.is_empty() {
        return "none".color(colors::SEPARATOR);
    }
    joined.join(", ").normal()
}
