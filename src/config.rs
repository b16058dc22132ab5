use crate::error::{GfResult, GlyphForgeError};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub graph: GraphParams,
    #[command(flatten)]
    pub script: ScriptDefinitions,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    #[arg(long, default_value_t = 200)]
    pub population_size: usize,
    #[arg(long, default_value_t = 100)]
    pub generations: usize,
    #[arg(long, default_value_t = 0.5)]
    pub crossover_prob: f64,
    #[arg(long, default_value_t = 0.2)]
    pub mutation_prob: f64,
    #[arg(long, default_value_t = 3)]
    pub tournament_size: usize,
}

#[derive(Args, Debug, Clone)]
pub struct GraphParams {
    #[arg(long, default_value_t = 5)]
    pub window_size: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ScriptDefinitions {
    #[arg(long, default_value = "qo,kch,arin,tar")]
    pub symbols: String,
    #[arg(long, default_value = "her,ba,aqua,igni,sol")]
    pub candidates: String,
    #[arg(long, default_value = "aqua")]
    pub marker: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population_size: 200,
            generations: 100,
            crossover_prob: 0.5,
            mutation_prob: 0.2,
            tournament_size: 3,
        }
    }
}

impl Default for GraphParams {
    fn default() -> Self {
        Self { window_size: 5 }
    }
}

impl Default for ScriptDefinitions {
    fn default() -> Self {
        Self {
            symbols: "qo,kch,arin,tar".to_string(),
            candidates: "her,ba,aqua,igni,sol".to_string(),
            marker: "aqua".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchParams::default(),
            graph: GraphParams::default(),
            script: ScriptDefinitions::default(),
        }
    }
}

impl ScriptDefinitions {
    pub fn get_symbols(&self) -> Vec<String> {
        split_list(&self.symbols)
    }

    pub fn get_candidates(&self) -> Vec<String> {
        split_list(&self.candidates)
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

impl Config {
    /// Rejects invalid parameters before any search begins.
    pub fn validate(&self) -> GfResult<()> {
        let s = &self.search;
        if s.population_size == 0 {
            return Err(GlyphForgeError::Config(
                "--population-size must be at least 1".to_string(),
            ));
        }
        if s.tournament_size == 0 {
            return Err(GlyphForgeError::Config(
                "--tournament-size must be at least 1".to_string(),
            ));
        }
        for (name, p) in [
            ("--crossover-prob", s.crossover_prob),
            ("--mutation-prob", s.mutation_prob),
        ] {
            if !(0.0..=1.0).contains(&p) || !p.is_finite() {
                return Err(GlyphForgeError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }
        if self.graph.window_size == 0 {
            return Err(GlyphForgeError::Config(
                "--window-size must be at least 1".to_string(),
            ));
        }
        if self.script.get_symbols().is_empty() {
            return Err(GlyphForgeError::Config(
                "--symbols must name at least one script symbol".to_string(),
            ));
        }
        if self.script.get_candidates().is_empty() {
            return Err(GlyphForgeError::Config(
                "--candidates must name at least one substitution token".to_string(),
            ));
        }
        if self.script.marker.is_empty() {
            return Err(GlyphForgeError::Config(
                "--marker must be a non-empty fragment".to_string(),
            ));
        }
        Ok(())
    }
}
