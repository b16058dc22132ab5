use crate::error::{GfResult, GlyphForgeError};
use crate::script::ScriptAlphabet;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Loads a transcription CSV of `section,token` rows into ordered per-section
/// token sequences. The reader is flexible: short or empty rows are skipped
/// rather than fatal, matching how the corpus loaders treat ragged data.
pub fn load_transcription<P: AsRef<Path>>(path: P) -> GfResult<BTreeMap<String, Vec<String>>> {
    let file = File::open(path.as_ref())?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(file);

    let mut sections: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for record in rdr.records().flatten() {
        if record.len() < 2 {
            continue;
        }
        let section = record[0].trim().to_string();
        let token = record[1].trim().to_string();
        if section.is_empty() || token.is_empty() {
            continue;
        }
        sections.entry(section).or_default().push(token);
    }

    info!(
        path = %path.as_ref().display(),
        sections = sections.len(),
        "transcription loaded"
    );
    for (name, tokens) in &sections {
        debug!(section = %name, tokens = tokens.len(), "section tokens");
    }

    if sections.is_empty() {
        return Err(GlyphForgeError::Validation(
            "transcription contains no usable section,token rows".to_string(),
        ));
    }
    Ok(sections)
}

/// On-disk project description: the script alphabet, candidate tokens,
/// marker fragment, and the expert feedback table.
#[derive(Debug, Deserialize)]
pub struct ProjectSpec {
    pub symbols: Vec<String>,
    pub candidates: Vec<String>,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default)]
    pub feedback: BTreeMap<String, String>,
}

fn default_marker() -> String {
    "aqua".to_string()
}

pub fn load_project<P: AsRef<Path>>(
    path: P,
) -> GfResult<(ScriptAlphabet, BTreeMap<String, String>)> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let spec: ProjectSpec = serde_json::from_str(&content)?;
    let alphabet = ScriptAlphabet::new(spec.symbols, spec.candidates, spec.marker)?;
    info!(
        path = %path.as_ref().display(),
        symbols = alphabet.symbol_count(),
        candidates = alphabet.candidate_count(),
        feedback = spec.feedback.len(),
        "project loaded"
    );
    Ok((alphabet, spec.feedback))
}
