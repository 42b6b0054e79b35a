// Reduction of matcher output into the final report.
//
// The report drops the note-level detail and keeps only which roots fit each
// chord, grouped by form tag:
//
//   Cmaj:
//     dom: [D]
//     maj: [C, D, G]
//
// Scale names are split positionally: the last three characters are the form
// tag and the rest is the root. Roots are appended in the order the matcher
// emitted them; nothing here re-sorts.

use crate::error::{AnalysisError, Result};
use crate::matcher::Fits;
use crate::pitch::PitchClass;
use crate::scale::{SUFFIX_LEN, ScaleForm};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Split `Dbmaj` into (`Db`, `Major`).
pub fn split_scale_name(name: &str) -> Result<(PitchClass, ScaleForm)> {
    let malformed = || AnalysisError::MalformedScaleName(name.to_string());
    let split = name.len().checked_sub(SUFFIX_LEN).ok_or_else(malformed)?;
    let (root, suffix) = name.split_at_checked(split).ok_or_else(malformed)?;
    let form = ScaleForm::from_suffix(suffix).ok_or_else(malformed)?;
    let root = root.parse::<PitchClass>().map_err(|()| malformed())?;
    Ok((root, form))
}

/// Chord name → form tag → matching roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report(BTreeMap<String, BTreeMap<String, Vec<PitchClass>>>);

impl Report {
    /// Chord names in report order.
    pub fn chords(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Roots of `form` that fit `chord`. Empty if none do.
    pub fn roots(&self, chord: &str, form: ScaleForm) -> &[PitchClass] {
        self.0
            .get(chord)
            .and_then(|forms| forms.get(form.suffix()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every (chord, form tag, root) entry, flattened.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, PitchClass)> {
        self.0.iter().flat_map(|(chord, forms)| {
            forms.iter().flat_map(move |(form, roots)| {
                roots.iter().map(move |&root| (chord.as_str(), form.as_str(), root))
            })
        })
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Group every accepted fit by chord and form tag.
pub fn reduce(fits: &Fits) -> Result<Report> {
    let mut report = BTreeMap::new();
    for (chord, chord_fits) in fits.iter() {
        let forms: &mut BTreeMap<String, Vec<PitchClass>> =
            report.entry(chord.to_string()).or_default();
        for fit in chord_fits {
            let (root, form) = split_scale_name(&fit.scale)?;
            forms.entry(form.suffix().to_string()).or_default().push(root);
        }
    }
    log::debug!("reduced {} fits over {} chords", fits.accepted(), report.len());
    Ok(Report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{Chord, ChordCatalog};
    use crate::matcher::match_chords;
    use crate::pitch::PitchClass::*;
    use crate::scale::scale_tables;

    const NO_AVOIDS: [PitchClass; 0] = [];

    #[test]
    fn test_split_scale_name() {
        assert_eq!(split_scale_name("Cdom").unwrap(), (C, ScaleForm::Dominant));
        assert_eq!(split_scale_name("Dbmaj").unwrap(), (Db, ScaleForm::Major));
        assert_eq!(split_scale_name("Bbdom").unwrap(), (Bb, ScaleForm::Dominant));
    }

    #[test]
    fn test_split_rejects_malformed_names() {
        for bad in ["Cmin", "dom", "X#dom", "", "Cmajor", "C♯maj"] {
            assert!(
                matches!(split_scale_name(bad), Err(AnalysisError::MalformedScaleName(_))),
                "{bad} should not split"
            );
        }
    }

    #[test]
    fn test_reduce_groups_by_form() {
        let catalog = ChordCatalog::new(vec![Chord::new("G7", [G, B, D, F, A, Db, E], [C])]).unwrap();
        let report = reduce(&match_chords(&catalog, scale_tables())).unwrap();

        assert_eq!(report.roots("G7", ScaleForm::Dominant), [A, G]);
        assert_eq!(report.roots("G7", ScaleForm::Major), [G]);
        assert!(report.roots("Cmaj", ScaleForm::Major).is_empty());
    }

    #[test]
    fn test_unmatched_chord_has_empty_entry() {
        let catalog = ChordCatalog::new(vec![Chord::new("Cluster", [C, Db, D], NO_AVOIDS)]).unwrap();
        let report = reduce(&match_chords(&catalog, scale_tables())).unwrap();

        assert_eq!(report.chords().collect::<Vec<_>>(), ["Cluster"]);
        assert_eq!(report.entries().count(), 0);
        assert_eq!(report.to_yaml().unwrap().trim(), "Cluster: {}");
    }

    #[test]
    fn test_entries_match_fits_one_to_one() {
        let catalog = ChordCatalog::new(vec![
            Chord::new("D-7", [D, F, A, C, E, G, B], NO_AVOIDS),
            Chord::new("C", [C, E, G], NO_AVOIDS),
        ])
        .unwrap();
        let fits = match_chords(&catalog, scale_tables());
        let report = reduce(&fits).unwrap();

        let mut from_fits: Vec<(String, String)> = fits
            .iter()
            .flat_map(|(chord, fs)| fs.iter().map(move |f| (chord.to_string(), f.scale.clone())))
            .collect();
        let mut from_report: Vec<(String, String)> = report
            .entries()
            .map(|(chord, form, root)| (chord.to_string(), format!("{root}{form}")))
            .collect();
        from_fits.sort();
        from_report.sort();
        assert_eq!(from_fits, from_report);
    }
}
