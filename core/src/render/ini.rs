//! Flat rendering: `[all]`, `[all:vars]`, then `[group]`, `[group:vars]` and
//! `[group:children]` per group. Empty sections are left out.

use std::io::{self, Write};

use tfinv_common::error::RenderError;

use super::view;
use crate::inventory::{Host, Inventory};

pub(super) fn write<W: Write>(inventory: &Inventory, out: &mut W) -> Result<(), RenderError> {
    section(out, "all", inventory.groupless_hosts().map(host_line))?;
    section(out, "all:vars", inventory.vars().iter().map(|(k, v)| format!("{k}={v}")))?;

    for (name, group) in inventory.groups() {
        let members = group.hosts.iter().map(|member| match inventory.host(member) {
            Some(host) => host_line(host),
            None => member.clone(),
        });
        section(out, name, members)?;
        section(out, &format!("{name}:vars"), group.variables.iter().map(|(k, v)| format!("{k}={v}")))?;
        section(out, &format!("{name}:children"), group.children.iter().cloned())?;
    }

    Ok(())
}

/// Formats a host as `name key=value ...`.
fn host_line(host: &Host) -> String {
    let mut line: String = host.name.clone();
    for (key, value) in view::host_entries(host) {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        line.push_str(value);
    }
    line
}

fn section<W, I>(out: &mut W, header: &str, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut lines = lines.into_iter().peekable();
    if lines.peek().is_none() {
        return Ok(());
    }

    writeln!(out, "[{header}]")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
