use crate::script::{FeedbackEntry, Mapping, ScriptAlphabet};
use std::collections::BTreeMap;

pub const FEEDBACK_MATCH_REWARD: i64 = 10;
pub const FEEDBACK_MISMATCH_PENALTY: i64 = 5;

/// Composite fitness evaluator for one section: a frequency term over the
/// section's raw tokens plus an expert-feedback term. Built per invocation
/// from explicit inputs; holds no shared or registered state.
pub struct Scorer {
    alphabet: ScriptAlphabet,
    tokens: Vec<String>,
    feedback: Vec<FeedbackEntry>,
}

impl Scorer {
    pub fn new(
        alphabet: ScriptAlphabet,
        tokens: Vec<String>,
        feedback_table: &BTreeMap<String, String>,
    ) -> Self {
        let feedback = alphabet.resolve_feedback(feedback_table);
        Self {
            alphabet,
            tokens,
            feedback,
        }
    }

    pub fn alphabet(&self) -> &ScriptAlphabet {
        &self.alphabet
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Counts marker-fragment occurrences across the substituted token
    /// sequence. Substitution runs one sequential whole-token pass per
    /// symbol, in alphabet order; a later symbol's pass may rewrite text
    /// produced by an earlier one. That cascading order is part of the
    /// contract and must not be "fixed".
    pub fn score_frequency(&self, mapping: &Mapping) -> i64 {
        let marker = self.alphabet.marker.as_str();
        let mut count: i64 = 0;
        for token in &self.tokens {
            let mut text = token.clone();
            for (slot, symbol) in self.alphabet.symbols.iter().enumerate() {
                let replacement = &self.alphabet.candidates[mapping[slot] as usize];
                if text.contains(symbol.as_str()) {
                    text = text.replace(symbol.as_str(), replacement);
                }
            }
            count += text.matches(marker).count() as i64;
        }
        count
    }

    /// +10 per feedback entry the mapping reproduces, -5 per entry it
    /// contradicts. Symbols absent from the table contribute nothing.
    pub fn score_feedback(&self, mapping: &Mapping) -> i64 {
        let mut score: i64 = 0;
        for entry in &self.feedback {
            match entry.expected {
                Some(expected) if mapping[entry.symbol] == expected => {
                    score += FEEDBACK_MATCH_REWARD;
                }
                _ => score -= FEEDBACK_MISMATCH_PENALTY,
            }
        }
        score
    }

    /// The sole fitness signal: frequency term + feedback term.
    pub fn score(&self, mapping: &Mapping) -> i64 {
        self.score_frequency(mapping) + self.score_feedback(mapping)
    }
}
