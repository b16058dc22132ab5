//! External collaborator boundary. Translation generation and text-image
//! alignment live outside the mapping-search core; the reference system
//! served both as hardcoded strings keyed by section name, and
//! [`CannedAnnotator`] keeps that behavior for the demo pipeline.

/// Opaque per-section collaborators: a translation text and an alignment
/// score. Implementations must be pure per section name.
pub trait SectionAnnotator: Send + Sync {
    fn translation(&self, section: &str) -> String;
    fn alignment(&self, section: &str) -> f32;
}

/// The simulated collaborators: fixed outputs per known section, empty
/// translation and zero alignment for anything else.
pub struct CannedAnnotator;

impl SectionAnnotator for CannedAnnotator {
    fn translation(&self, section: &str) -> String {
        match section {
            "herbal" => "herba aquae folium, radix in sole siccata".to_string(),
            "astronomical" => "stella ignis orbem ducit, luna aquam trahit".to_string(),
            "biological" => "aqua per vasa fluit, corpus balneo fovetur".to_string(),
            "pharmaceutical" => "radix cum aqua tunditur, unguentum paratur".to_string(),
            "recipes" => "herba et aqua coquuntur, ignis lenis servatur".to_string(),
            _ => String::new(),
        }
    }

    fn alignment(&self, section: &str) -> f32 {
        match section {
            "herbal" => 0.78,
            "astronomical" => 0.64,
            "biological" => 0.71,
            "pharmaceutical" => 0.69,
            "recipes" => 0.58,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sections_get_neutral_outputs() {
        let a = CannedAnnotator;
        assert_eq!(a.translation("margins"), "");
        assert_eq!(a.alignment("margins"), 0.0);
    }

    #[test]
    fn known_sections_are_stable() {
        let a = CannedAnnotator;
        assert_eq!(a.translation("herbal"), a.translation("herbal"));
        assert!(a.alignment("herbal") > 0.0);
    }
}
