use crate::annotate::SectionAnnotator;
use crate::config::Config;
use crate::error::GfResult;
use crate::graph::community::detect_communities;
use crate::graph::CooccurrenceGraph;
use crate::optimizer::SearchEngine;
use crate::scorer::Scorer;
use crate::script::ScriptAlphabet;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// The per-section output bundle. Assembled once per run, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct SectionResult {
    pub section: String,
    pub best_mapping: BTreeMap<String, String>,
    pub best_fitness: i64,
    pub communities: Vec<Vec<String>>,
    pub translation: String,
    pub alignment: f32,
}

/// Runs the full pipeline over every section: mapping search, graph
/// construction, community detection, and the collaborator outputs.
///
/// Sections are independent: each gets its own scorer built from the
/// explicit `(alphabet, tokens, feedback)` triple and its own RNG seeded
/// `seed + section index`, so they can run in parallel without shared
/// search state. Any section error aborts the run; no partial results.
pub fn run_sections(
    transcription: &BTreeMap<String, Vec<String>>,
    alphabet: &ScriptAlphabet,
    feedback: &BTreeMap<String, String>,
    config: &Config,
    seed: Option<u64>,
    annotator: &dyn SectionAnnotator,
) -> GfResult<Vec<SectionResult>> {
    config.validate()?;

    let entries: Vec<(usize, &String, &Vec<String>)> = transcription
        .iter()
        .enumerate()
        .map(|(i, (name, tokens))| (i, name, tokens))
        .collect();

    entries
        .par_iter()
        .map(|&(index, name, tokens)| {
            let section_seed = seed.map(|s| s + index as u64);
            process_section(name, tokens, alphabet, feedback, config, section_seed, annotator)
        })
        .collect()
}

fn process_section(
    name: &str,
    tokens: &[String],
    alphabet: &ScriptAlphabet,
    feedback: &BTreeMap<String, String>,
    config: &Config,
    seed: Option<u64>,
    annotator: &dyn SectionAnnotator,
) -> GfResult<SectionResult> {
    info!(section = %name, tokens = tokens.len(), "processing section");

    let scorer = Scorer::new(alphabet.clone(), tokens.to_vec(), feedback);
    let engine = SearchEngine::new(&scorer, config.search.clone());
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let outcome = engine.run(&mut rng)?;

    let graph = CooccurrenceGraph::build(tokens, config.graph.window_size)?;
    let communities = detect_communities(&graph);
    debug!(
        section = %name,
        best_fitness = outcome.best_fitness,
        nodes = graph.node_count(),
        communities = communities.len(),
        "section complete"
    );

    Ok(SectionResult {
        section: name.to_string(),
        best_mapping: alphabet.mapping_pairs(&outcome.best_mapping),
        best_fitness: outcome.best_fitness,
        communities,
        translation: annotator.translation(name),
        alignment: annotator.alignment(name),
    })
}
