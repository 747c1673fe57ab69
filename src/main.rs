use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_VALIDATION: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a patient record (default if no subcommand)
    Score {
        /// Path to a YAML or JSON record; `-` or omitted reads stdin
        file: Option<PathBuf>,
    },
    /// Print a starter record to fill in
    Template,
}

#[derive(Parser, Debug)]
#[command(name = "apache2-score")]
#[command(about = "APACHE II severity-of-illness calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Show the per-parameter point breakdown
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Score { file: None });

    match command {
        Commands::Template => {
            print!("{}", apache2_score::input::TEMPLATE);
        }
        Commands::Score { file } => {
            let input = match apache2_score::input::load_record(file) {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("Record error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            // Range-check before the engine sees the record; the engine
            // itself accepts any numbers.
            if let Err(errors) = apache2_score::input::validate_record(&input) {
                eprintln!("Record out of clinical range:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_VALIDATION);
            }

            let scored = apache2_score::scoring::calculate_with_breakdown(&input);

            if cli.json {
                match serde_json::to_string_pretty(&scored) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                let use_colors = apache2_score::output::should_use_colors();
                println!(
                    "{}",
                    apache2_score::output::format_result(&scored.result, use_colors)
                );
                if cli.verbose {
                    println!();
                    println!(
                        "{}",
                        apache2_score::output::format_breakdown(&scored.breakdown, use_colors)
                    );
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
