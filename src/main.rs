use clap::Parser;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use boxlist::error_fmt::{
    AppError, IoResultExt, ParseResultExt, RenderResultExt, ScanResultExt,
};
use boxlist::{ead, render, table};

#[derive(Parser)]
#[command(name = "boxlist")]
#[command(about = "Render the container list of an EAD finding aid as a sorted HTML table")]
struct Cli {
    /// EAD file to read
    #[arg(long, short)]
    input: PathBuf,
    /// HTML file to write
    #[arg(long, short)]
    output: PathBuf,
    /// Template file overriding the built-in page template
    #[arg(long, short)]
    template: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli.input, &cli.output, cli.template.as_deref()) {
        eprint!("{}", e);
        std::process::exit(1);
    }
}

fn run(input: &Path, output: &Path, template: Option<&Path>) -> Result<(), AppError> {
    let input_path = input.display().to_string();
    let xml =
        std::fs::read_to_string(input).with_context(&format!("failed to read {}", input_path))?;

    let doc = ead::parse(&xml).with_path(&input_path)?;
    let listing = table::scan(&doc).with_path(&input_path)?;

    let custom = match template {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(&format!("failed to read {}", path.display()))?,
        ),
        None => None,
    };
    let template_name = match template {
        Some(path) => path.display().to_string(),
        None => "built-in template".to_string(),
    };
    let html = render::render(&listing, custom.as_deref()).with_template(&template_name)?;

    std::fs::write(output, html)
        .with_context(&format!("failed to write {}", output.display()))?;
    println!("wrote: {}", output.display().to_string().bright_green());

    Ok(())
}
