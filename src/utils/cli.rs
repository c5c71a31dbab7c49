use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "resume-wizard")]
#[command(about = "Build a resume PDF through an interactive form session", long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,

    /// Directory the PDF (and photo thumbnail) are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Optional profile photo, resized to a 150x150 thumbnail
    #[arg(short, long, value_name = "FILE")]
    pub photo: Option<PathBuf>,

    /// Resume language: en (English) or pt (Portuguese)
    #[arg(short, long, value_name = "LANG", default_value = "en")]
    pub language: String,

    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,
}
