use std::io::Write;

use tfinv_common::error::RenderError;

use crate::inventory::Inventory;

/// Dumps the inventory as indented JSON.
///
/// This is the model itself, so `ip` is kept verbatim and no derived keys are added.
pub(super) fn write<W: Write>(inventory: &Inventory, out: &mut W) -> Result<(), RenderError> {
    serde_json::to_writer_pretty(&mut *out, inventory)?;
    out.write_all(b"\n")?;
    Ok(())
}
