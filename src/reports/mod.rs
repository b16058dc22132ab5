use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use glyphforge::graph::CooccurrenceGraph;
use glyphforge::pipeline::SectionResult;

pub fn print_section_report(results: &[SectionResult]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Section",
            "Best Fitness",
            "Clusters",
            "Alignment",
            "Translation",
        ]);

    for r in results {
        table.add_row(vec![
            Cell::new(&r.section),
            Cell::new(r.best_fitness).set_alignment(CellAlignment::Right),
            Cell::new(r.communities.len()).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", r.alignment)).set_alignment(CellAlignment::Right),
            Cell::new(&r.translation),
        ]);
    }

    println!("\n=== SECTION RESULTS ===");
    println!("{table}");
}

pub fn print_mapping_table(result: &SectionResult) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(vec!["Symbol", "Candidate"]);
    for (symbol, candidate) in &result.best_mapping {
        table.add_row(vec![symbol, candidate]);
    }

    println!(
        "\nSection '{}' (fitness {}):",
        result.section, result.best_fitness
    );
    println!("{table}");
}

pub fn print_cluster_report(section: &str, graph: &CooccurrenceGraph, communities: &[Vec<String>]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Cluster", "Size", "Tokens"]);

    for (i, community) in communities.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i).set_alignment(CellAlignment::Right),
            Cell::new(community.len()).set_alignment(CellAlignment::Right),
            Cell::new(community.join(" ")),
        ]);
    }

    println!(
        "\nSection '{}': {} tokens, {} edges, {} clusters",
        section,
        graph.node_count(),
        graph.edge_count(),
        communities.len()
    );
    println!("{table}");
}
