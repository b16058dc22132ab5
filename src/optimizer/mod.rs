pub mod variation;

use crate::config::SearchParams;
use crate::error::{GfResult, GlyphForgeError};
use crate::scorer::Scorer;
use crate::script::Mapping;
use fastrand::Rng;
use rayon::prelude::*;

pub struct SearchOutcome {
    pub best_mapping: Mapping,
    pub best_fitness: i64,
}

/// A hook for receiving per-generation state during a search.
/// Boolean return value indicates if the search should continue (true)
/// or abort (false).
pub trait GenerationObserver {
    fn on_generation(&mut self, generation: usize, best_fitness: i64, population: &[Mapping])
        -> bool;
}

pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _: usize, _: i64, _: &[Mapping]) -> bool {
        true
    }
}

/// Generational search over symbol-to-candidate mappings. Fitness comes
/// solely from the scorer; every individual is re-scored every generation.
/// All randomness flows through the caller's `Rng`, so a seeded run is
/// reproducible generation by generation.
pub struct SearchEngine<'a> {
    scorer: &'a Scorer,
    params: SearchParams,
}

impl<'a> SearchEngine<'a> {
    pub fn new(scorer: &'a Scorer, params: SearchParams) -> Self {
        Self { scorer, params }
    }

    pub fn run(&self, rng: &mut Rng) -> GfResult<SearchOutcome> {
        self.run_observed(rng, &mut NoopObserver)
    }

    pub fn run_observed<O: GenerationObserver>(
        &self,
        rng: &mut Rng,
        observer: &mut O,
    ) -> GfResult<SearchOutcome> {
        self.check_params()?;

        let symbol_count = self.scorer.alphabet().symbol_count();
        let candidate_count = self.scorer.alphabet().candidate_count();
        let n = self.params.population_size;

        // Initialization is sequential on the caller's RNG.
        let mut population: Vec<Mapping> = (0..n)
            .map(|_| variation::random_mapping(rng, symbol_count, candidate_count))
            .collect();
        let mut fitness = self.evaluate(&population);

        for generation in 0..self.params.generations {
            let mut offspring = population.clone();

            for pair in offspring.chunks_exact_mut(2) {
                if rng.f64() < self.params.crossover_prob {
                    let (left, right) = pair.split_at_mut(1);
                    variation::crossover_segment(&mut left[0], &mut right[0], rng);
                }
            }

            for individual in offspring.iter_mut() {
                if rng.f64() < self.params.mutation_prob {
                    variation::mutate_shuffle(individual, rng);
                }
            }

            let offspring_fitness = self.evaluate(&offspring);
            let (next, next_fitness) = self.select(&offspring, &offspring_fitness, rng);
            population = next;
            fitness = next_fitness;

            let best = first_maximal(&fitness);
            if !observer.on_generation(generation, fitness[best], &population) {
                break;
            }
        }

        let best = first_maximal(&fitness);
        Ok(SearchOutcome {
            best_mapping: population[best].clone(),
            best_fitness: fitness[best],
        })
    }

    /// Fitness evaluations are independent pure functions; rayon's
    /// order-preserving collect keeps the result deterministic.
    fn evaluate(&self, population: &[Mapping]) -> Vec<i64> {
        population
            .par_iter()
            .map(|mapping| self.scorer.score(mapping))
            .collect()
    }

    /// Tournament selection over the offspring pool: k draws with
    /// replacement, highest fitness wins, ties to the first-seen draw.
    fn select(&self, pool: &[Mapping], fitness: &[i64], rng: &mut Rng) -> (Vec<Mapping>, Vec<i64>) {
        let n = self.params.population_size;
        let k = self.params.tournament_size;
        let mut next = Vec::with_capacity(n);
        let mut next_fitness = Vec::with_capacity(n);

        for _ in 0..n {
            let mut winner = rng.usize(0..pool.len());
            for _ in 1..k {
                let challenger = rng.usize(0..pool.len());
                if fitness[challenger] > fitness[winner] {
                    winner = challenger;
                }
            }
            next.push(pool[winner].clone());
            next_fitness.push(fitness[winner]);
        }

        (next, next_fitness)
    }

    fn check_params(&self) -> GfResult<()> {
        let p = &self.params;
        if p.population_size == 0 {
            return Err(GlyphForgeError::Config(
                "population size must be at least 1".to_string(),
            ));
        }
        if p.tournament_size == 0 {
            return Err(GlyphForgeError::Config(
                "tournament size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&p.crossover_prob) || !(0.0..=1.0).contains(&p.mutation_prob) {
            return Err(GlyphForgeError::Config(
                "variation probabilities must lie within [0, 1]".to_string(),
            ));
        }
        Ok(())
    }
}

/// First maximal index in population order; the fixed tie-break.
fn first_maximal(fitness: &[i64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > fitness[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptAlphabet;
    use std::collections::BTreeMap;

    fn tiny_scorer() -> Scorer {
        let alphabet = ScriptAlphabet::new(
            vec!["qo".into(), "kch".into()],
            vec!["her".into(), "ba".into()],
            "ba".into(),
        )
        .unwrap();
        let mut table = BTreeMap::new();
        table.insert("qo".to_string(), "her".to_string());
        Scorer::new(alphabet, vec!["qo".into(), "kch".into()], &table)
    }

    #[test]
    fn first_maximal_breaks_ties_to_front() {
        assert_eq!(first_maximal(&[3, 7, 7, 1]), 1);
        assert_eq!(first_maximal(&[5]), 0);
    }

    #[test]
    fn singleton_pool_tournament_returns_it() {
        let scorer = tiny_scorer();
        let engine = SearchEngine::new(
            &scorer,
            SearchParams {
                population_size: 1,
                tournament_size: 3,
                ..SearchParams::default()
            },
        );
        let pool = vec![vec![0u16, 1u16]];
        let fitness = vec![17];
        let mut rng = fastrand::Rng::with_seed(9);
        let (next, next_fitness) = engine.select(&pool, &fitness, &mut rng);
        assert_eq!(next, pool);
        assert_eq!(next_fitness, fitness);
    }

    #[test]
    fn zero_population_is_rejected() {
        let scorer = tiny_scorer();
        let engine = SearchEngine::new(
            &scorer,
            SearchParams {
                population_size: 0,
                ..SearchParams::default()
            },
        );
        let mut rng = fastrand::Rng::with_seed(1);
        assert!(engine.run(&mut rng).is_err());
    }

    #[test]
    fn outcome_fitness_matches_independent_rescore() {
        let scorer = tiny_scorer();
        let engine = SearchEngine::new(
            &scorer,
            SearchParams {
                population_size: 10,
                generations: 5,
                ..SearchParams::default()
            },
        );
        let mut rng = fastrand::Rng::with_seed(42);
        let outcome = engine.run(&mut rng).unwrap();
        assert_eq!(outcome.best_fitness, scorer.score(&outcome.best_mapping));
    }
}
