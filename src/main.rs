use clap::Parser;
use daylink::application::{fix_links, generate_config, FixLinksOptions, GenerateConfigOptions};
use daylink::cli::{format_fix_report, Cli, Commands};
use daylink::error::DaylinkError;
use daylink::infrastructure::{Config, FileSystemRepository};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DaylinkError> {
    match cli.command {
        Commands::FixLinks { file, dry_run } => {
            let config = Config::load(cli.config.as_deref())?;
            let repo = FileSystemRepository::new();

            let report = fix_links(&repo, &config, FixLinksOptions { file, dry_run })?;
            println!("{}", format_fix_report(&report));
            Ok(())
        }
        Commands::GenerateConfig {
            output,
            force,
            minimal,
        } => {
            generate_config(&output, GenerateConfigOptions { force, minimal })?;
            println!("Wrote default configuration to {}", output.display());
            if !minimal {
                println!("Edit the 'dir' entries to point at your journal and standup notes.");
            }
            Ok(())
        }
    }
}
