use crate::reports;
use clap::Args;
use glyphforge::annotate::CannedAnnotator;
use glyphforge::config::Config;
use glyphforge::corpus;
use glyphforge::error::GfResult;
use glyphforge::pipeline;
use glyphforge::script::ScriptAlphabet;
use glyphforge::sections;
use std::collections::BTreeMap;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: Config,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(
    args: RunArgs,
    transcription: BTreeMap<String, Vec<String>>,
    project: Option<String>,
    seed: Option<u64>,
) -> GfResult<()> {
    let (alphabet, feedback) = match project {
        Some(path) => corpus::load_project(path)?,
        None => (
            ScriptAlphabet::from_definitions(&args.config.script)?,
            sections::builtin_feedback(),
        ),
    };

    let results = pipeline::run_sections(
        &transcription,
        &alphabet,
        &feedback,
        &args.config,
        seed,
        &CannedAnnotator,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        reports::print_section_report(&results);
        for result in &results {
            reports::print_mapping_table(result);
        }
    }
    Ok(())
}
