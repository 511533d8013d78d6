//! The derived host view shared by the text renderers.
//!
//! YAML and INI must expose exactly the same key/value pairs for a host, so
//! both build them here.

use crate::inventory::Host;

/// Variable holding the host address as written in state, possibly with a prefix length.
pub const IP_KEY: &str = "ip";
/// Key the address is exposed under in rendered inventories.
pub const CONNECTION_ADDRESS_KEY: &str = "ansible_host";
/// Key of the marker emitted for disabled hosts.
pub const DISABLED_MARKER_KEY: &str = "enabled";
pub const DISABLED_MARKER_VALUE: &str = "false";

/// Drops a `/<prefix>` suffix from an address.
pub fn strip_cidr(ip: &str) -> &str {
    ip.split_once('/').map_or(ip, |(addr, _)| addr)
}

/// The key/value pairs a host is rendered with, in output order.
///
/// `ansible_host` (from `ip`) comes first, then the remaining variables, the
/// disabled marker and the metadata. A repeated key keeps its first position
/// and takes the later value.
pub fn host_entries(host: &Host) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, &str)> = Vec::with_capacity(host.variables.len() + host.metadata.len() + 1);
    let address: Option<&str> = host.variables.get(IP_KEY).map(|ip| strip_cidr(ip));

    if let Some(address) = address {
        entries.push((CONNECTION_ADDRESS_KEY, address));
    }

    for (key, value) in &host.variables {
        match key.as_str() {
            IP_KEY => continue,
            // the address derived from `ip` wins over a literal one
            CONNECTION_ADDRESS_KEY if address.is_some() => continue,
            _ => put(&mut entries, key, value),
        }
    }

    if !host.enabled {
        put(&mut entries, DISABLED_MARKER_KEY, DISABLED_MARKER_VALUE);
    }

    for (key, value) in &host.metadata {
        put(&mut entries, key, value);
    }

    entries
}

fn put<'a>(entries: &mut Vec<(&'a str, &'a str)>, key: &'a str, value: &'a str) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => entries.push((key, value)),
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
