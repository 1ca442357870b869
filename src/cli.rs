use clap::Parser;

/// Input and output paths are fixed; run from the site root.
#[derive(Parser)]
#[command(name = "magazine-data")]
#[command(about = "Generate the magazine dataset from pdfimages and pdftotext dumps")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
