// Chord catalog: the named chords the scales are tested against.
//
// Each chord is a set of consonant tones plus a (possibly empty) set of
// avoid notes. The shipped catalog is `data/chord_catalog.json`, embedded at
// compile time and parsed through `ChordCatalog::from_json`, the same
// JSON-string-in, typed-struct-out path the lexicon uses. Note names arrive
// as plain strings and are checked against the 12 canonical spellings during
// the load, so a typo in the catalog stops the program before any matching
// happens.
//
// Catalog order is preserved for iteration. Everything downstream keys by
// chord name in a `BTreeMap`, so output order does not depend on it.

use crate::error::{AnalysisError, Result};
use crate::pitch::PitchClass;
use serde::Deserialize;
use std::collections::BTreeSet;

/// A chord entry as stored in JSON.
#[derive(Debug, Deserialize)]
struct ChordDef {
    name: String,
    tones: Vec<String>,
    #[serde(default)]
    avoids: Vec<String>,
}

/// The top-level JSON structure for the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    chords: Vec<ChordDef>,
}

/// A named chord with its consonant tones and avoid notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub name: String,
    pub tones: BTreeSet<PitchClass>,
    /// Any candidate scale containing one of these is rejected outright.
    pub avoids: BTreeSet<PitchClass>,
}

impl Chord {
    pub fn new(
        name: impl Into<String>,
        tones: impl IntoIterator<Item = PitchClass>,
        avoids: impl IntoIterator<Item = PitchClass>,
    ) -> Self {
        Chord {
            name: name.into(),
            tones: tones.into_iter().collect(),
            avoids: avoids.into_iter().collect(),
        }
    }

    fn from_def(def: ChordDef) -> Result<Self> {
        let parse = |names: &[String]| -> Result<BTreeSet<PitchClass>> {
            names
                .iter()
                .map(|n| {
                    n.parse::<PitchClass>().map_err(|()| AnalysisError::UnknownPitchClass {
                        chord: def.name.clone(),
                        name: n.clone(),
                    })
                })
                .collect()
        };
        let tones = parse(&def.tones)?;
        let avoids = parse(&def.avoids)?;

        if !tones.is_disjoint(&avoids) {
            let both: Vec<&PitchClass> = tones.intersection(&avoids).collect();
            log::warn!("chord '{}' lists {both:?} as both tone and avoid", def.name);
        }

        Ok(Chord {
            name: def.name,
            tones,
            avoids,
        })
    }
}

/// An ordered, validated set of chords.
#[derive(Debug, Clone)]
pub struct ChordCatalog {
    chords: Vec<Chord>,
}

impl ChordCatalog {
    /// Build a catalog from already-typed chords. Rejects empty chords and
    /// repeated names.
    pub fn new(chords: Vec<Chord>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for chord in &chords {
            if chord.tones.is_empty() {
                return Err(AnalysisError::EmptyChord(chord.name.clone()));
            }
            if !seen.insert(chord.name.as_str()) {
                return Err(AnalysisError::DuplicateChord(chord.name.clone()));
            }
        }
        Ok(ChordCatalog { chords })
    }

    /// Parse and validate a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let chords = file
            .chords
            .into_iter()
            .map(Chord::from_def)
            .collect::<Result<Vec<_>>>()?;
        let catalog = ChordCatalog::new(chords)?;
        log::debug!("loaded chord catalog with {} chords", catalog.len());
        Ok(catalog)
    }

    /// All chords, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Chord> {
        self.chords.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Chord> {
        self.chords.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

/// Load the catalog embedded at compile time from `data/chord_catalog.json`.
pub fn default_catalog() -> Result<ChordCatalog> {
    ChordCatalog::from_json(include_str!("../../data/chord_catalog.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchClass::*;

    fn set(pcs: &[PitchClass]) -> BTreeSet<PitchClass> {
        pcs.iter().copied().collect()
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"{"chords": [
            {"name": "C6", "tones": ["C", "E", "G", "A"]},
            {"name": "Cmaj", "tones": ["C", "E", "G", "B"], "avoids": ["F"]}
        ]}"#;

        let catalog = ChordCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let cmaj = catalog.get("Cmaj").unwrap();
        assert_eq!(cmaj.tones, set(&[C, E, G, B]));
        assert_eq!(cmaj.avoids, set(&[F]));
        assert!(catalog.get("C6").unwrap().avoids.is_empty());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let json = r#"{"chords": [
            {"name": "Zeta", "tones": ["C"]},
            {"name": "Alpha", "tones": ["D"]}
        ]}"#;

        let catalog = ChordCatalog::from_json(json).unwrap();
        let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
    }

    #[test]
    fn test_unknown_pitch_class_rejected() {
        let json = r#"{"chords": [{"name": "F#7", "tones": ["F#", "A#", "C#", "E"]}]}"#;
        match ChordCatalog::from_json(json) {
            Err(AnalysisError::UnknownPitchClass { chord, name }) => {
                assert_eq!(chord, "F#7");
                assert_eq!(name, "F#");
            }
            other => panic!("expected UnknownPitchClass, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_avoid_rejected() {
        let json = r#"{"chords": [{"name": "C", "tones": ["C"], "avoids": ["Fb"]}]}"#;
        assert!(matches!(
            ChordCatalog::from_json(json),
            Err(AnalysisError::UnknownPitchClass { .. })
        ));
    }

    #[test]
    fn test_empty_chord_rejected() {
        let json = r#"{"chords": [{"name": "Nothing", "tones": []}]}"#;
        assert!(matches!(
            ChordCatalog::from_json(json),
            Err(AnalysisError::EmptyChord(name)) if name == "Nothing"
        ));
    }

    #[test]
    fn test_duplicate_chord_rejected() {
        let chords = vec![
            Chord::new("C", [C, E, G], set(&[])),
            Chord::new("C", [C, Eb, G], set(&[])),
        ];
        assert!(matches!(
            ChordCatalog::new(chords),
            Err(AnalysisError::DuplicateChord(name)) if name == "C"
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            ChordCatalog::from_json(r#"{"chords": [{"name": "C"}]}"#),
            Err(AnalysisError::Catalog(_))
        ));
    }

    #[test]
    fn test_default_catalog_loads() {
        let catalog = default_catalog().unwrap();
        let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Cmaj", "D-7", "G7", "Gsus", "GAlt", "B-7b5"]);
    }

    #[test]
    fn test_default_catalog_tones_and_avoids_disjoint() {
        for chord in default_catalog().unwrap().iter() {
            assert!(
                chord.tones.is_disjoint(&chord.avoids),
                "{} has an avoid note among its tones",
                chord.name
            );
        }
    }

    #[test]
    fn test_default_catalog_avoids() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.get("Cmaj").unwrap().avoids, set(&[F]));
        assert_eq!(catalog.get("G7").unwrap().avoids, set(&[C]));
        assert!(catalog.get("D-7").unwrap().avoids.is_empty());
    }
}
