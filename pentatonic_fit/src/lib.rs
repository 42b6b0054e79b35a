// Pentatonic Fit
//
// Finds which transposed pentatonic scales fit a set of named chords. Every
// transposition of the dominant (1 2 3 5 b7) and major (1 2 3 5 6)
// pentatonic forms is tested against every chord in the catalog; a scale
// fits when it covers the chord to within the smaller of the two sizes and
// contains none of the chord's avoid notes. The accepted pairs are reduced to
// a report listing, for each chord and form, the roots that fit.
//
// Architecture:
// - pitch.rs: The 12 pitch classes, flat-spelled, with modular transposition
// - scale.rs: Scale forms and their 12 transpositions, cached per form
// - chord.rs: Chord catalog loaded from data/chord_catalog.json + validation
// - matcher.rs: The acceptance rule and per-chord accumulation of fits
// - reduce.rs: Fits -> chord/form/roots report, YAML output
// - audit.rs: Scales that fit more than one chord
// - error.rs: `AnalysisError` for malformed constants
//
// Data flows one way: scales + catalog -> matcher -> reducer -> report. All
// stages are pure and deterministic; running twice gives identical output.

pub mod audit;
pub mod chord;
pub mod error;
pub mod matcher;
pub mod pitch;
pub mod reduce;
pub mod scale;

pub use chord::{Chord, ChordCatalog, default_catalog};
pub use error::{AnalysisError, Result};
pub use matcher::{Fit, Fits, match_chords};
pub use pitch::PitchClass;
pub use reduce::{Report, reduce};
pub use scale::{Scale, ScaleForm, ScaleTable, scale_tables};

/// Output of one pipeline run: the detailed fits and the reduced report.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub fits: Fits,
    pub report: Report,
}

/// Reject scale forms whose offsets cannot produce a pentatonic scale.
pub fn validate_forms() -> Result<()> {
    ScaleForm::ALL.into_iter().try_for_each(ScaleForm::validate)
}

/// Match `catalog` against every scale table and reduce the result.
pub fn analyze(catalog: &ChordCatalog) -> Result<Analysis> {
    validate_forms()?;
    let fits = match_chords(catalog, scale_tables());
    let report = reduce(&fits)?;
    Ok(Analysis { fits, report })
}

/// Load the embedded catalog and run the full pipeline over it.
pub fn analyze_default() -> Result<Analysis> {
    analyze(&default_catalog()?)
}
