//! Command line interface for the layout writer.
//!
//! Parses arguments, turns them into a [`DmgLayout`] and writes the
//! `.DS_Store` for the given volume root.

mod args;

pub use args::Args;

use crate::bundler::{
    platform::macos::{
        alias::HostFileSystem,
        dmg::{apply_dmg_customizations, build_ds_store, stage_background_image},
    },
    settings::{DmgBackground, DmgLayout},
};
use crate::error::{CliError, Result};
use anyhow::Context;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    run_with(&args)
}

/// Executes already-parsed arguments.
pub fn run_with(args: &Args) -> Result<i32> {
    args.validate()?;

    let mut layout = match (&args.layout, &args.app_name) {
        (Some(path), _) => DmgLayout::from_file(path)
            .with_context(|| format!("failed to load layout {}", path.display()))?,
        (None, Some(app_name)) => DmgLayout::centered(
            app_name,
            args.width,
            args.height,
            args.icon_size,
            args.label_size,
        ),
        (None, None) => {
            return Err(CliError::MissingArgument {
                argument: "--layout or --app-name".to_string(),
            }
            .into());
        }
    };

    if let Some(image) = &args.background_image {
        let staged = stage_background_image(&args.volume_root, image)?;
        layout.background = DmgBackground::Image(staged);
    }

    let written = match &args.output {
        Some(output) => {
            let store = build_ds_store(&args.volume_root, &layout, &HostFileSystem)?;
            store.write(output)?;
            output.clone()
        }
        None => apply_dmg_customizations(&args.volume_root, &layout, &HostFileSystem)?,
    };

    println!("Wrote {}", written.display());
    Ok(0)
}
