// Pentatonic scale forms and their 12 transpositions.
//
// A `ScaleForm` is a fixed pattern of five semitone offsets from a root.
// `ScaleTable::generate` applies a form to every root of the chromatic cycle
// by modular index arithmetic (`CHROMATIC[(root + offset) % 12]`) and keys
// each result by its scale name, e.g. `Cdom` or `Dbmaj`. The table is a
// `BTreeMap`, so iteration is in lexicographic scale-name order, which is the
// order the matcher emits fits in.
//
// The two shipped tables are built once on first use (`scale_tables()`) and
// shared read-only for the rest of the run.

use crate::error::{AnalysisError, Result};
use crate::pitch::{CHROMATIC, PitchClass};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Number of notes in every scale form.
pub const PENTATONIC_SIZE: usize = 5;

/// Length of the form suffix at the end of every scale name.
pub const SUFFIX_LEN: usize = 3;

/// The pentatonic interval patterns under analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScaleForm {
    /// 1 2 3 5 b7: major pentatonic with the sixth lowered to a flat seventh.
    Dominant,
    /// 1 2 3 5 6
    Major,
}

impl ScaleForm {
    pub const ALL: [ScaleForm; 2] = [ScaleForm::Dominant, ScaleForm::Major];

    /// Semitone offsets from the root, in scale-degree order.
    pub fn offsets(self) -> [u8; PENTATONIC_SIZE] {
        match self {
            ScaleForm::Dominant => [0, 2, 4, 7, 10],
            ScaleForm::Major => [0, 2, 4, 7, 9],
        }
    }

    /// Three-letter tag appended to a root name to form a scale name.
    pub fn suffix(self) -> &'static str {
        match self {
            ScaleForm::Dominant => "dom",
            ScaleForm::Major => "maj",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<ScaleForm> {
        ScaleForm::ALL.into_iter().find(|f| f.suffix() == suffix)
    }

    /// Check that the offsets are usable as indices into the 12-note cycle
    /// and produce five distinct notes, and that the suffix has the width the
    /// reducer splits on.
    pub fn validate(self) -> Result<()> {
        check_offsets(self.suffix(), &self.offsets())?;
        if self.suffix().len() != SUFFIX_LEN {
            return Err(AnalysisError::InvalidScaleForm {
                form: self.suffix(),
                reason: format!("suffix '{}' is not {SUFFIX_LEN} characters", self.suffix()),
            });
        }
        Ok(())
    }
}

/// Reject an offset pattern that is not five distinct cyclic indices.
pub fn check_offsets(form: &'static str, offsets: &[u8]) -> Result<()> {
    let invalid = |reason: String| AnalysisError::InvalidScaleForm { form, reason };

    if offsets.len() != PENTATONIC_SIZE {
        return Err(invalid(format!(
            "{} offsets, expected {PENTATONIC_SIZE}",
            offsets.len()
        )));
    }
    if let Some(&bad) = offsets.iter().find(|&&o| o as usize >= CHROMATIC.len()) {
        return Err(invalid(format!("offset {bad} is not a cyclic index 0..12")));
    }
    let distinct: BTreeSet<u8> = offsets.iter().copied().collect();
    if distinct.len() != offsets.len() {
        return Err(invalid(format!("offsets {offsets:?} repeat a degree")));
    }
    Ok(())
}

/// One transposition of a form: a root plus the notes it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    pub root: PitchClass,
    pub form: ScaleForm,
    pub notes: BTreeSet<PitchClass>,
}

impl Scale {
    pub fn new(root: PitchClass, form: ScaleForm) -> Self {
        let notes = form.offsets().iter().map(|&o| root.transpose(o)).collect();
        Scale { root, form, notes }
    }

    /// `<root><suffix>`, e.g. `Bbdom`.
    pub fn name(&self) -> String {
        format!("{}{}", self.root, self.form.suffix())
    }
}

/// All 12 transpositions of one form, keyed by scale name.
#[derive(Debug, Clone)]
pub struct ScaleTable {
    pub form: ScaleForm,
    scales: BTreeMap<String, Scale>,
}

impl ScaleTable {
    pub fn generate(form: ScaleForm) -> Self {
        let scales: BTreeMap<String, Scale> = CHROMATIC
            .iter()
            .map(|&root| {
                let scale = Scale::new(root, form);
                (scale.name(), scale)
            })
            .collect();
        log::debug!("generated {} {} scales", scales.len(), form.suffix());
        ScaleTable { form, scales }
    }

    pub fn get(&self, name: &str) -> Option<&Scale> {
        self.scales.get(name)
    }

    /// Scales in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scale)> {
        self.scales.iter().map(|(name, scale)| (name.as_str(), scale))
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

static SCALE_TABLES: LazyLock<Vec<ScaleTable>> =
    LazyLock::new(|| ScaleForm::ALL.into_iter().map(ScaleTable::generate).collect());

/// The dominant and major tables, in that order.
pub fn scale_tables() -> &'static [ScaleTable] {
    &SCALE_TABLES
}
