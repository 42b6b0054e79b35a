// Frequency audit over matcher output.
//
// Counts how many distinct chords each exact scale (root + form) fits, and
// surfaces the scales that serve more than one chord. Reads the same `Fits`
// the reducer does but is independent of it.

use crate::matcher::Fits;
use std::collections::{BTreeMap, BTreeSet};

/// Number of distinct chords each accepted scale name fits, by scale name.
pub fn scale_frequencies(fits: &Fits) -> BTreeMap<String, usize> {
    let mut chords_by_scale: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (chord, chord_fits) in fits.iter() {
        for fit in chord_fits {
            chords_by_scale.entry(fit.scale.as_str()).or_default().insert(chord);
        }
    }
    chords_by_scale
        .into_iter()
        .map(|(scale, chords)| (scale.to_string(), chords.len()))
        .collect()
}

/// Scales that fit more than one chord, with their chord counts.
pub fn shared_scales(fits: &Fits) -> BTreeMap<String, usize> {
    scale_frequencies(fits)
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .collect()
}

/// Render shared scales as a YAML document to follow the report: a `---`
/// line, then `<scale>: <count>` per line. Empty when nothing is shared.
pub fn render_shared(shared: &BTreeMap<String, usize>) -> String {
    if shared.is_empty() {
        return String::new();
    }
    let mut out = String::from("---\n");
    for (scale, count) in shared {
        out.push_str(&format!("{scale}: {count}\n"));
    }
    out
}
