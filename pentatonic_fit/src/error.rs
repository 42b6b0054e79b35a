// Error type for the pentatonic fit pipeline.
//
// Every stage is total over well-formed constants, so nothing here is a
// runtime condition a caller is expected to recover from. These variants
// exist so that a malformed catalog entry or scale form fails loudly at
// startup instead of quietly producing a wrong report.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unknown pitch class '{name}' in chord '{chord}'")]
    UnknownPitchClass { chord: String, name: String },

    #[error("chord '{0}' has no tones")]
    EmptyChord(String),

    #[error("chord '{0}' is defined more than once")]
    DuplicateChord(String),

    #[error("scale form '{form}' is invalid: {reason}")]
    InvalidScaleForm { form: &'static str, reason: String },

    #[error("scale name '{0}' is not a root name followed by a known form suffix")]
    MalformedScaleName(String),

    #[error("chord catalog is malformed: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
