//! Print the OpenAPI document as JSON.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use loanapp::ApiDoc;
use utoipa::OpenApi;

/// Export the loan application API description.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump")]
struct Args {
    /// Write the document here instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let json = ApiDoc::openapi()
        .to_pretty_json()
        .wrap_err("serialise OpenAPI document")?;

    match args.output {
        Some(path) => std::fs::write(&path, json)
            .wrap_err_with(|| format!("write OpenAPI document to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
