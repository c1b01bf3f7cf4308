use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textkit::TextConfig;

mod commands;
mod output;

use commands::CommandExecutor;
use output::OutputFormatter;

#[derive(Parser)]
#[command(
    name = "textkit",
    about = "Read, search and pretty-print text, CSV, JSON and XML files",
    version,
    author
)]
struct Cli {
    #[arg(short, long, global = true, help = "Path to a TOML or JSON config file")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Check whether a path exists")]
    Exists {
        #[arg(help = "Path to check")]
        path: PathBuf,
    },

    #[command(about = "Print the absolute form of an existing path")]
    Validate {
        #[arg(help = "Path to validate")]
        path: PathBuf,
    },

    #[command(about = "Print the trimmed lines of a file")]
    Lines {
        #[arg(help = "File to read")]
        path: PathBuf,
    },

    #[command(about = "Show the lines of a file containing a substring")]
    Grep {
        #[arg(help = "File to search")]
        path: PathBuf,

        #[arg(help = "Substring to look for")]
        needle: String,
    },

    #[command(about = "Print the size of a file in bytes")]
    Bytes {
        #[arg(help = "File to read")]
        path: PathBuf,
    },

    #[command(about = "Render a CSV file as a table, first record as header")]
    Csv {
        #[arg(help = "CSV file to read")]
        path: PathBuf,
    },

    #[command(about = "Create a CSV file from rows typed on stdin")]
    WriteCsv {
        #[arg(help = "CSV file to create")]
        path: PathBuf,

        #[arg(long, value_delimiter = ',', required = true, help = "Comma-separated column headers")]
        headers: Vec<String>,

        #[arg(long, default_value = ",", help = "Field separator used on stdin")]
        sep: String,
    },

    #[command(about = "Pretty-print a JSON file")]
    Json {
        #[arg(help = "JSON file to format")]
        path: PathBuf,

        #[arg(long, help = "Print without indentation")]
        flat: bool,
    },

    #[command(about = "Re-indent an XML file")]
    Xml {
        #[arg(help = "XML file to format")]
        path: PathBuf,
    },

    #[command(about = "Read a single line from stdin and echo it")]
    Ask {
        #[arg(help = "Prompt to show first")]
        prompt: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let formatter = OutputFormatter::new(!cli.no_color, cli.verbose);

    let config = match cli.config {
        Some(ref path) => match TextConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                formatter.print_error(&format!("Failed to load config: {}", err));
                std::process::exit(1);
            }
        },
        None => TextConfig::default(),
    };

    let executor = CommandExecutor::new(config, !cli.no_color, cli.verbose);

    let result = match cli.command {
        Commands::Exists { path } => executor.exists(path),
        Commands::Validate { path } => executor.validate(path),
        Commands::Lines { path } => executor.lines(path),
        Commands::Grep { path, needle } => executor.grep(path, needle),
        Commands::Bytes { path } => executor.bytes(path),
        Commands::Csv { path } => executor.csv(path),
        Commands::WriteCsv { path, headers, sep } => executor.write_csv(path, headers, sep),
        Commands::Json { path, flat } => executor.json(path, flat),
        Commands::Xml { path } => executor.xml(path),
        Commands::Ask { prompt } => executor.ask(prompt),
    };

    if let Err(err) = result {
        formatter.print_error(&format!("Error: {}", err));
        std::process::exit(1);
    }
}
