use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process;

use vizzini_cli::commands;
use vizzini_cli::logging::init_tracing;
use vizzini_extender::{ExtenderConfig, Region, SectionedOptionStore};

#[derive(Parser)]
#[command(name = "vizzini")]
#[command(about = "Vizzini display extender - subtitle, result placement and header suppression")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the extender descriptor
    Info,
    /// Print a default option record
    Defaults,
    /// Print the edit view for one section
    Describe {
        #[arg(long, help = "Section name: subtitle, move_result or suppress_headers")]
        section: String,
        #[arg(long, help = "Option record (JSON)")]
        options: PathBuf,
        #[arg(long, help = "Header handler list (JSON)")]
        headers: Option<PathBuf>,
    },
    /// Commit submitted values for one section
    Commit {
        #[arg(long, help = "Section name: subtitle, move_result or suppress_headers")]
        section: String,
        #[arg(long, help = "Option record (JSON)")]
        options: PathBuf,
        #[arg(long, help = "Submitted values as a JSON object")]
        values: String,
        #[arg(long, help = "Print the result without writing it")]
        dry_run: bool,
    },
    /// Summarize an option record
    Summary {
        #[arg(long, help = "Option record (JSON)")]
        options: PathBuf,
    },
    /// Show the render plan for a record and header list
    Plan {
        #[arg(long, help = "Option record (JSON)")]
        options: PathBuf,
        #[arg(long, help = "Header handler list (JSON)")]
        headers: Option<PathBuf>,
    },
    /// Drop suppressed header ids the header list no longer declares
    Prune {
        #[arg(long, help = "Option record (JSON)")]
        options: PathBuf,
        #[arg(long, help = "Header handler list (JSON)")]
        headers: Option<PathBuf>,
        #[arg(long, help = "Print the result without writing it")]
        dry_run: bool,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let store = SectionedOptionStore::with_config(ExtenderConfig::from_env()?);

    match cli.command {
        Commands::Info => println!("{}", commands::info_json()?),
        Commands::Defaults => println!("{}", commands::defaults_json(&store)?),
        Commands::Describe {
            section,
            options,
            headers,
        } => {
            println!(
                "{}",
                commands::describe(&store, &section, &options, headers.as_deref())?
            );
        }
        Commands::Commit {
            section,
            options,
            values,
            dry_run,
        } => {
            let next = commands::commit(&store, &section, &options, &values, dry_run)?;
            println!("{}", next.to_json_pretty()?);
        }
        Commands::Summary { options } => {
            let items = commands::summary(&store, &options)?;
            println!("{}", store.summary_category().title.blue().bold());
            println!();
            println!("{}", commands::summary_table(&items));
        }
        Commands::Plan { options, headers } => {
            let plan = commands::plan(&store, &options, headers.as_deref())?;
            for region in &plan.regions {
                match region {
                    Region::Header { id } => println!("{:<15} {}", "header".cyan(), id),
                    Region::Subtitle { text } => println!("{:<15} {}", "subtitle".cyan(), text),
                    Region::ExposedForm => println!("{}", "exposed form".cyan()),
                    Region::Result { id } => println!("{:<15} {}", "result".cyan(), id),
                    Region::Content => println!("{}", "content".cyan()),
                }
            }
            if !plan.suppressed.is_empty() {
                println!();
                println!("{} {}", "Suppressed:".yellow(), plan.suppressed.join(", "));
            }
        }
        Commands::Prune {
            options,
            headers,
            dry_run,
        } => {
            let next = commands::prune(&store, &options, headers.as_deref(), dry_run)?;
            println!("{}", next.to_json_pretty()?);
        }
    }

    Ok(())
}
