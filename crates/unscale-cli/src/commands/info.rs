use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use unscale_core::io::probe;

#[derive(Args)]
pub struct InfoArgs {
    /// Input images
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    for (i, path) in args.files.iter().enumerate() {
        let info = probe(path).with_context(|| format!("Failed to read {}", path.display()))?;

        if i > 0 {
            println!();
        }
        println!("File:        {}", info.path.display());
        match info.format {
            Some(format) => println!("Format:      {:?}", format),
            None => println!("Format:      unknown"),
        }
        println!("Dimensions:  {}x{}", info.width, info.height);
        println!("Frames:      {}", info.frame_count);
    }

    Ok(())
}
