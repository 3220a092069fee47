use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use pdf_optimizer::{optimize_pdf, Args, Settings};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG applies when no -v flag is given
    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose > 0 || std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(args.log_level());
    }
    logger
        .try_init()
        .context("Failed to initialize logging")?;

    let settings = Settings::from_args(&args);
    log::debug!("{:?}", settings);

    println!("Optimizing PDF: {}", args.input_pdf.display());

    if optimize_pdf(&args.input_pdf, &args.output, &settings) {
        println!("Optimized PDF saved as: {}", args.output.display());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("PDF optimization failed.");
        Ok(if args.strict {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }
}
