use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use tfinv_common::config::Config;
use tfinv_core::render;
use tracing::info;

use super::{SourceArgs, load_inventory};

pub fn export(source: &SourceArgs, output: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let inventory = load_inventory(source, cfg)?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            render::render(&inventory, cfg.format, &mut writer)?;
            writer.flush()?;
            info!("Wrote {} inventory to {}", cfg.format, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            render::render(&inventory, cfg.format, &mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
