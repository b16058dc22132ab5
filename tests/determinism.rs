use glyphforge::annotate::CannedAnnotator;
use glyphforge::config::{Config, SearchParams};
use glyphforge::optimizer::{GenerationObserver, SearchEngine};
use glyphforge::pipeline::run_sections;
use glyphforge::scorer::Scorer;
use glyphforge::script::{Mapping, ScriptAlphabet};
use glyphforge::sections;
use std::collections::BTreeMap;

/// Records the full per-generation state so two seeded runs can be compared
/// generation by generation.
struct Recorder {
    best_trace: Vec<i64>,
    populations: Vec<Vec<Mapping>>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            best_trace: Vec::new(),
            populations: Vec::new(),
        }
    }
}

impl GenerationObserver for Recorder {
    fn on_generation(&mut self, _gen: usize, best_fitness: i64, population: &[Mapping]) -> bool {
        self.best_trace.push(best_fitness);
        self.populations.push(population.to_vec());
        true
    }
}

fn small_scorer() -> Scorer {
    let alphabet = ScriptAlphabet::new(
        vec!["qo".into(), "kch".into(), "arin".into(), "tar".into()],
        vec!["her".into(), "ba".into(), "aqua".into(), "igni".into()],
        "aqua".into(),
    )
    .expect("alphabet");
    let tokens: Vec<String> = ["qo", "kch", "arin", "tar", "qo"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    Scorer::new(alphabet, tokens, &sections::builtin_feedback())
}

#[test]
fn seeded_runs_match_generation_by_generation() {
    let scorer = small_scorer();
    let params = SearchParams {
        population_size: 16,
        generations: 12,
        ..SearchParams::default()
    };
    let engine = SearchEngine::new(&scorer, params);

    let mut rec_a = Recorder::new();
    let mut rec_b = Recorder::new();
    let mut rng_a = fastrand::Rng::with_seed(1234);
    let mut rng_b = fastrand::Rng::with_seed(1234);

    let a = engine.run_observed(&mut rng_a, &mut rec_a).expect("run a");
    let b = engine.run_observed(&mut rng_b, &mut rec_b).expect("run b");

    assert_eq!(rec_a.best_trace, rec_b.best_trace);
    assert_eq!(rec_a.populations, rec_b.populations);
    assert_eq!(a.best_mapping, b.best_mapping);
    assert_eq!(a.best_fitness, b.best_fitness);
    assert_eq!(rec_a.best_trace.len(), 12);
}

#[test]
fn observer_can_abort_early() {
    struct StopAfter(usize, usize);
    impl GenerationObserver for StopAfter {
        fn on_generation(&mut self, _: usize, _: i64, _: &[Mapping]) -> bool {
            self.1 += 1;
            self.1 < self.0
        }
    }

    let scorer = small_scorer();
    let engine = SearchEngine::new(
        &scorer,
        SearchParams {
            population_size: 8,
            generations: 50,
            ..SearchParams::default()
        },
    );
    let mut stopper = StopAfter(3, 0);
    let mut rng = fastrand::Rng::with_seed(5);
    let outcome = engine.run_observed(&mut rng, &mut stopper).expect("run");
    assert_eq!(stopper.1, 3);
    assert_eq!(outcome.best_fitness, scorer.score(&outcome.best_mapping));
}

#[test]
fn seeded_pipeline_runs_are_identical() {
    let transcription = sections::builtin_transcription();
    let alphabet = ScriptAlphabet::new(
        vec!["qo".into(), "kch".into(), "arin".into(), "tar".into()],
        vec!["her".into(), "ba".into(), "aqua".into(), "igni".into()],
        "aqua".into(),
    )
    .expect("alphabet");
    let feedback: BTreeMap<String, String> = sections::builtin_feedback();

    let mut config = Config::default();
    config.search.population_size = 12;
    config.search.generations = 6;

    let run = |seed| {
        run_sections(
            &transcription,
            &alphabet,
            &feedback,
            &config,
            Some(seed),
            &CannedAnnotator,
        )
        .expect("pipeline")
    };

    let a = serde_json::to_string(&run(99)).expect("serialize a");
    let b = serde_json::to_string(&run(99)).expect("serialize b");
    assert_eq!(a, b);
}
