//! Command line argument parsing and validation.

use crate::error::CliError;
use clap::Parser;
use std::path::PathBuf;

/// Finder window layout writer for disk image volumes
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_dsstore",
    version,
    about = "Writes the .DS_Store that lays out a disk image's Finder window",
    long_about = "Writes the .DS_Store that lays out a disk image's Finder window.

Either describe the layout in a TOML or JSON file, or pass --app-name for the
standard drag-to-install layout (app on the left, Applications on the right).

Usage:
  kodegen_bundler_dsstore /Volumes/MyApp --layout dmg-layout.toml
  kodegen_bundler_dsstore ./staging --app-name MyApp.app --background-image bg.png

Exit code 0 = .DS_Store written."
)]
pub struct Args {
    /// Root folder of the volume (staging directory or mount point)
    #[arg(value_name = "VOLUME_ROOT")]
    pub volume_root: PathBuf,

    /// Layout file (.toml or .json)
    #[arg(short, long, value_name = "FILE", conflicts_with = "app_name")]
    pub layout: Option<PathBuf>,

    /// App bundle name for the default drag-to-install layout
    #[arg(short, long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Window size for the default layout
    #[arg(long, value_name = "WIDTH", default_value_t = 640)]
    pub width: i32,

    /// Window height for the default layout
    #[arg(long, value_name = "HEIGHT", default_value_t = 480)]
    pub height: i32,

    /// Icon size for the default layout
    #[arg(long, value_name = "POINTS", default_value_t = 128.0)]
    pub icon_size: f64,

    /// Label size for the default layout
    #[arg(long, value_name = "POINTS", default_value_t = 12.0)]
    pub label_size: f64,

    /// Picture to copy into VOLUME_ROOT/.background and use as the background
    #[arg(short, long, value_name = "FILE")]
    pub background_image: Option<PathBuf>,

    /// Where to write the file (defaults to VOLUME_ROOT/.DS_Store)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate that the referenced paths exist
    pub fn validate(&self) -> Result<(), CliError> {
        if !self.volume_root.is_dir() {
            return Err(CliError::InvalidArguments {
                reason: format!("{} is not a directory", self.volume_root.display()),
            });
        }

        if let Some(image) = &self.background_image {
            if !image.is_file() {
                return Err(CliError::InvalidArguments {
                    reason: format!("background image {} does not exist", image.display()),
                });
            }
        }

        Ok(())
    }
}
