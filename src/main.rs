use clap::{Parser, Subcommand};
use glyphforge::corpus;
use glyphforge::sections;
use std::collections::BTreeMap;
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Transcription CSV (`section,token` rows). Falls back to the
    /// built-in demo transcription when omitted.
    #[arg(global = true, short, long)]
    transcription: Option<String>,

    /// Project JSON with symbols, candidates, marker, and feedback table.
    #[arg(global = true, short, long)]
    project: Option<String>,

    #[arg(global = true, short = 'S', long)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Run(cmd::run::RunArgs),
    Cluster(cmd::cluster::ClusterArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let transcription: BTreeMap<String, Vec<String>> = match &cli.transcription {
        Some(path) => match corpus::load_transcription(path) {
            Ok(t) => t,
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        },
        None => sections::builtin_transcription(),
    };

    let outcome = match cli.command {
        Commands::Run(args) => cmd::run::run(args, transcription, cli.project, cli.seed),
        Commands::Cluster(args) => cmd::cluster::run(args, transcription),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
