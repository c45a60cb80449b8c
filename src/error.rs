use thiserror::Error;

/// Fatal conditions that abort a reduction run.
///
/// There is no per-row recovery: the only non-fatal case is a row missing
/// `x0` or `ci`, which the driving loop skips without constructing an error
/// at all.
#[derive(Debug, Error)]
pub enum ReduceError {
    /// The catalog header lacks one of the recognized column names.
    #[error("catalog header is missing required column `{0}`")]
    MissingColumn(&'static str),

    /// A data row carries none of the seven identifier fields.
    #[error("no usable identifier in row: {row:?}")]
    NoName { row: Vec<String> },

    /// A field that passed the presence filter failed to parse as a float.
    #[error("column `{column}` value `{value}` is not a valid number")]
    BadFloat {
        column: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
