use crate::reports;
use clap::Args;
use glyphforge::config::Config;
use glyphforge::error::GfResult;
use glyphforge::graph::community::detect_communities;
use glyphforge::graph::CooccurrenceGraph;
use std::collections::BTreeMap;

#[derive(Args, Debug, Clone)]
pub struct ClusterArgs {
    #[command(flatten)]
    pub config: Config,
}

/// Graph-only mode: build each section's co-occurrence graph and print the
/// community breakdown, skipping the mapping search entirely.
pub fn run(args: ClusterArgs, transcription: BTreeMap<String, Vec<String>>) -> GfResult<()> {
    args.config.validate()?;

    for (section, tokens) in &transcription {
        let graph = CooccurrenceGraph::build(tokens, args.config.graph.window_size)?;
        let communities = detect_communities(&graph);
        reports::print_cluster_report(section, &graph, &communities);
    }
    Ok(())
}
