use crate::config::ScriptDefinitions;
use crate::error::{GfResult, GlyphForgeError};
use std::collections::BTreeMap;
use tracing::warn;

/// Index into [`ScriptAlphabet::candidates`].
pub type CandidateId = u16;

/// A total symbol-to-candidate assignment: one candidate id per symbol slot,
/// in alphabet order. Values may repeat across slots.
pub type Mapping = Vec<CandidateId>;

/// The fixed script configuration a section is deciphered against: the symbol
/// alphabet, the candidate substitution tokens, and the marker fragment the
/// frequency evaluator counts after substitution.
#[derive(Debug, Clone)]
pub struct ScriptAlphabet {
    pub symbols: Vec<String>,
    pub candidates: Vec<String>,
    pub marker: String,
}

/// One expert-feedback expectation, resolved against the alphabet.
/// `expected` is `None` when the presumed token is not in the candidate set;
/// such an entry can never be matched and always scores as a mismatch.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackEntry {
    pub symbol: usize,
    pub expected: Option<CandidateId>,
}

impl ScriptAlphabet {
    pub fn new(symbols: Vec<String>, candidates: Vec<String>, marker: String) -> GfResult<Self> {
        if symbols.is_empty() {
            return Err(GlyphForgeError::Config(
                "script alphabet is empty".to_string(),
            ));
        }
        if candidates.is_empty() {
            return Err(GlyphForgeError::Config(
                "candidate token set is empty".to_string(),
            ));
        }
        if candidates.len() > CandidateId::MAX as usize {
            return Err(GlyphForgeError::Config(format!(
                "candidate set too large: {} tokens",
                candidates.len()
            )));
        }
        if marker.is_empty() {
            return Err(GlyphForgeError::Config(
                "marker fragment is empty".to_string(),
            ));
        }
        Ok(Self {
            symbols,
            candidates,
            marker,
        })
    }

    pub fn from_definitions(defs: &ScriptDefinitions) -> GfResult<Self> {
        Self::new(defs.get_symbols(), defs.get_candidates(), defs.marker.clone())
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidate_index(&self, token: &str) -> Option<CandidateId> {
        self.candidates
            .iter()
            .position(|c| c == token)
            .map(|i| i as CandidateId)
    }

    /// Renders a mapping as symbol -> candidate token pairs for output.
    pub fn mapping_pairs(&self, mapping: &Mapping) -> BTreeMap<String, String> {
        self.symbols
            .iter()
            .zip(mapping.iter())
            .map(|(sym, &cid)| (sym.clone(), self.candidates[cid as usize].clone()))
            .collect()
    }

    /// Resolves a symbol -> presumed-token table against this alphabet.
    /// Entries for symbols outside the alphabet are dropped.
    pub fn resolve_feedback(&self, table: &BTreeMap<String, String>) -> Vec<FeedbackEntry> {
        let mut entries = Vec::with_capacity(table.len());
        for (symbol, token) in table {
            match self.symbols.iter().position(|s| s == symbol) {
                Some(idx) => entries.push(FeedbackEntry {
                    symbol: idx,
                    expected: self.candidate_index(token),
                }),
                None => warn!(symbol = %symbol, "feedback entry ignored: symbol not in alphabet"),
            }
        }
        entries
    }
}
