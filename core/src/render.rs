//! # Format Renderer
//!
//! Serializes a finished [`Inventory`] into one of the supported [`Format`]s.
//!
//! Every renderer writes into a caller-supplied sink and walks maps in key
//! order, so identical inventories always produce identical bytes. The text
//! formats share one derived host view (see [`view`]):
//! * `ip` is exposed as `ansible_host` without its prefix length.
//! * A disabled host carries an `enabled=false` marker after its variables.
//! * Metadata follows the variables.
//! * Only hosts without any group are listed at the `all` scope.
//!
//! JSON is a structural dump of the model and does none of the above.

use std::io::Write;

pub use tfinv_common::error::RenderError;
pub use tfinv_common::format::Format;
use tracing::debug;

use crate::inventory::Inventory;

mod ini;
mod json;
pub mod view;
mod yaml;

pub use view::strip_cidr;

/// Renders `inventory` as `format` into `out`.
pub fn render<W: Write>(inventory: &Inventory, format: Format, out: &mut W) -> Result<(), RenderError> {
    debug!(
        hosts = inventory.hosts().len(),
        groups = inventory.groups().len(),
        "rendering inventory as {format}"
    );
    match format {
        Format::Json => json::write(inventory, out),
        Format::Yaml => yaml::write(inventory, out),
        Format::Ini => ini::write(inventory, out),
    }
}

/// Like [`render`], with the format given by its identifier.
pub fn render_named<W: Write>(inventory: &Inventory, format: &str, out: &mut W) -> Result<(), RenderError> {
    render(inventory, format.parse()?, out)
}

pub fn render_to_string(inventory: &Inventory, format: Format) -> Result<String, RenderError> {
    let mut buffer: Vec<u8> = Vec::new();
    render(inventory, format, &mut buffer)?;
    // every renderer only writes UTF-8 text
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
