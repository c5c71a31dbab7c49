mod builder;
mod errors;
mod input;
mod latex;
mod models;
mod utils;

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use log::{debug, info};
use tectonic::latex_to_pdf;

use crate::builder::collect::ProfileBuilder;
use crate::errors::ResumeError;
use crate::input::stdin::StdinCollector;
use crate::latex::assembler::{LatexResumeAssembler, ResumeLanguage, output_filename};
use crate::utils::cli::Args;
use crate::utils::config::{Config, config};
use crate::utils::log::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    info!(
        "starting resume-wizard {}",
        format!("v{}", env!("CARGO_PKG_VERSION")).magenta()
    );

    let config: Config = config(args.config)?;
    tokio::fs::create_dir_all(&args.output_dir).await?;

    println!("{}", "Welcome to Resume Wizard".cyan().bold());

    let mut collector = StdinCollector::new();
    let profile = ProfileBuilder::new(config, &mut collector)
        .build_profile(args.photo.as_deref(), &args.output_dir)?;

    debug!("assembled profile: {:#?}", profile);
    info!(
        "profile for {} complete, rendering PDF",
        profile.personal_info.name.bold()
    );

    let language = ResumeLanguage::from(args.language.as_str());
    let latex = LatexResumeAssembler::new(&profile, language).assemble();

    info!("compiling LaTeX to PDF");
    let pdf = tokio::task::spawn_blocking(move || latex_to_pdf(latex))
        .await?
        .map_err(|e| ResumeError::Render(e.description().to_string()))?;

    // the PDF is only written once compilation fully succeeded
    let output = args.output_dir.join(output_filename(&profile.personal_info.name));
    tokio::fs::write(&output, pdf).await?;
    info!("generated resume at {}", output.display());

    Ok(())
}
