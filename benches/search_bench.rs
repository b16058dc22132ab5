use criterion::{criterion_group, criterion_main, Criterion};
use glyphforge::config::SearchParams;
use glyphforge::graph::community::detect_communities;
use glyphforge::graph::CooccurrenceGraph;
use glyphforge::optimizer::SearchEngine;
use glyphforge::scorer::Scorer;
use glyphforge::script::ScriptAlphabet;
use std::collections::BTreeMap;
use std::hint::black_box;

fn setup_scorer() -> Scorer {
    let alphabet = ScriptAlphabet::new(
        vec!["qo".into(), "kch".into(), "arin".into(), "tar".into()],
        vec![
            "her".into(),
            "ba".into(),
            "aqua".into(),
            "igni".into(),
            "sol".into(),
        ],
        "aqua".into(),
    )
    .expect("alphabet");

    // Repeat a short vocabulary into a corpus-sized token sequence.
    let vocab = ["qokedy", "qo", "kch", "arin", "tar", "daiin", "chol", "ar"];
    let tokens: Vec<String> = (0..2000)
        .map(|i| vocab[i % vocab.len()].to_string())
        .collect();

    let mut feedback = BTreeMap::new();
    feedback.insert("qo".to_string(), "her".to_string());
    feedback.insert("arin".to_string(), "aqua".to_string());

    Scorer::new(alphabet, tokens, &feedback)
}

fn bench_score(c: &mut Criterion) {
    let scorer = setup_scorer();
    let mapping = vec![0u16, 1, 2, 3];
    c.bench_function("composite_score_2k_tokens", |b| {
        b.iter(|| black_box(scorer.score(black_box(&mapping))))
    });
}

fn bench_generation(c: &mut Criterion) {
    let scorer = setup_scorer();
    let params = SearchParams {
        population_size: 50,
        generations: 5,
        ..SearchParams::default()
    };
    let engine = SearchEngine::new(&scorer, params);
    c.bench_function("search_50pop_5gen", |b| {
        b.iter(|| {
            let mut rng = fastrand::Rng::with_seed(42);
            black_box(engine.run(&mut rng).expect("search"))
        })
    });
}

fn bench_graph(c: &mut Criterion) {
    let vocab = ["qokedy", "qo", "kch", "arin", "tar", "daiin", "chol", "ar"];
    let tokens: Vec<String> = (0..2000)
        .map(|i| vocab[i % vocab.len()].to_string())
        .collect();
    c.bench_function("graph_and_communities_2k_tokens", |b| {
        b.iter(|| {
            let graph = CooccurrenceGraph::build(black_box(&tokens), 5).expect("graph");
            black_box(detect_communities(&graph))
        })
    });
}

criterion_group!(benches, bench_score, bench_generation, bench_graph);
criterion_main!(benches);
