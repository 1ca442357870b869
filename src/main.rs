mod cli;

use clap::Parser;
use cli::Cli;
use magazine_dataset::{generate, GenerateConfig};
use tracing::{error, info, Level};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = GenerateConfig::default();
    info!(
        "Generating dataset from {} and {}",
        config.image_list.display(),
        config.text_dump.display()
    );

    match generate(&config) {
        Ok(report) => {
            for source in [&report.image_list, &report.text_dump] {
                info!(
                    "Source {} ({} lines) read at {}",
                    source.path.display(),
                    source.total_lines,
                    source.read_at.to_rfc3339()
                );
            }
            println!("Data generated at {}", report.output.display());
            Ok(())
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
