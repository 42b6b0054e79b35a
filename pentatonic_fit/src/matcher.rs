// Chord/scale matching.
//
// For one chord and one scale:
//   matching  = scale ∩ tones
//   out       = scale \ tones
//   tolerance = min(|scale|, |tones|)
// The pair is accepted when `|matching| >= tolerance` and the scale contains
// none of the chord's avoid notes. With 5-note scales this reads as "every
// scale note is a chord tone" for chords of five or more tones, and "every
// chord tone is in the scale" for smaller chords.
//
// `Fits::analyze` runs the rule over the full chord × scale cross product for
// one scale table and appends accepted pairs per chord in scale-name order.
// Analyzing the dominant table and then the major table therefore lists each
// chord's dominant fits first. Every chord gets an entry, even if nothing
// fits it, so the reduced report covers exactly the catalog.

use crate::chord::{Chord, ChordCatalog};
use crate::pitch::PitchClass;
use crate::scale::{Scale, ScaleTable};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// An accepted chord/scale pair with the note-level detail behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fit {
    /// Scale name, e.g. `Gdom`.
    pub scale: String,
    /// Scale notes that are chord tones.
    pub matching: BTreeSet<PitchClass>,
    /// Scale notes that are not chord tones.
    pub out: BTreeSet<PitchClass>,
}

/// Minimum overlap required between a scale and a chord.
pub fn tolerance(chord: &Chord, scale: &Scale) -> usize {
    scale.notes.len().min(chord.tones.len())
}

/// Apply the acceptance rule to one pair.
pub fn evaluate(chord: &Chord, scale: &Scale) -> Option<Fit> {
    if !scale.notes.is_disjoint(&chord.avoids) {
        return None;
    }
    let matching: BTreeSet<PitchClass> =
        scale.notes.intersection(&chord.tones).copied().collect();
    if matching.len() < tolerance(chord, scale) {
        return None;
    }
    let out = scale.notes.difference(&chord.tones).copied().collect();
    Some(Fit {
        scale: scale.name(),
        matching,
        out,
    })
}

/// Accepted fits per chord name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fits(BTreeMap<String, Vec<Fit>>);

impl Fits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test every chord in the catalog against every scale in the table.
    pub fn analyze(&mut self, catalog: &ChordCatalog, table: &ScaleTable) {
        for chord in catalog.iter() {
            let entry = self.0.entry(chord.name.clone()).or_default();
            let before = entry.len();
            entry.extend(table.iter().filter_map(|(_, scale)| evaluate(chord, scale)));
            log::debug!(
                "{}: {} of {} {} scales fit",
                chord.name,
                entry.len() - before,
                table.len(),
                table.form.suffix()
            );
        }
    }

    pub fn get(&self, chord: &str) -> Option<&[Fit]> {
        self.0.get(chord).map(Vec::as_slice)
    }

    /// Chords in name order, each with its fits in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Fit])> {
        self.0.iter().map(|(c, f)| (c.as_str(), f.as_slice()))
    }

    /// Total accepted pairs across all chords.
    pub fn accepted(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// Run the matcher over each table in turn.
pub fn match_chords(catalog: &ChordCatalog, tables: &[ScaleTable]) -> Fits {
    let mut fits = Fits::new();
    for table in tables {
        fits.analyze(catalog, table);
    }
    fits
}
