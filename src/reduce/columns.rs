use csv::StringRecord;

use crate::error::ReduceError;

/// Positional indices of the recognized AT-HYG columns, resolved once from
/// the header row and reused for every data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub tyc: usize,
    pub gaia: usize,
    pub hyg: usize,
    pub hip: usize,
    pub hd: usize,
    pub hr: usize,
    pub proper: usize,
    pub x0: usize,
    pub y0: usize,
    pub z0: usize,
    pub ci: usize,
    pub mag_src: usize,
    pub absmag: usize,
}

impl ColumnIndices {
    /// Resolve every recognized column name against the header row.
    ///
    /// Extra columns are ignored; a missing one aborts the run before any
    /// data row is read.
    pub fn from_header(header: &StringRecord) -> Result<Self, ReduceError> {
        let find = |name: &'static str| -> Result<usize, ReduceError> {
            header
                .iter()
                .position(|h| h == name)
                .ok_or(ReduceError::MissingColumn(name))
        };

        Ok(Self {
            tyc: find("tyc")?,
            gaia: find("gaia")?,
            hyg: find("hyg")?,
            hip: find("hip")?,
            hd: find("hd")?,
            hr: find("hr")?,
            proper: find("proper")?,
            x0: find("x0")?,
            y0: find("y0")?,
            z0: find("z0")?,
            ci: find("ci")?,
            mag_src: find("mag_src")?,
            absmag: find("absmag")?,
        })
    }
}
