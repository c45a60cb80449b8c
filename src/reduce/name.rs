use csv::StringRecord;

use crate::error::ReduceError;
use crate::reduce::columns::ColumnIndices;

/// Pick the display name for one catalog row.
///
/// Preference order: proper name, then the HD, HR, HIP, HYG, Gaia and Tycho
/// designations. Proper names are used verbatim; catalog numbers get their
/// survey prefix. A row with none of the seven identifiers is a
/// data-integrity failure and aborts the whole run.
pub fn display_name(record: &StringRecord, cols: &ColumnIndices) -> Result<String, ReduceError> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let name = if !field(cols.proper).is_empty() {
        field(cols.proper).to_string()
    } else if !field(cols.hd).is_empty() {
        format!("HD {}", field(cols.hd))
    } else if !field(cols.hr).is_empty() {
        format!("HR {}", field(cols.hr))
    } else if !field(cols.hip).is_empty() {
        format!("HIP {}", field(cols.hip))
    } else if !field(cols.hyg).is_empty() {
        format!("HYG {}", field(cols.hyg))
    } else if !field(cols.gaia).is_empty() {
        format!("GAIA {}", field(cols.gaia))
    } else if !field(cols.tyc).is_empty() {
        format!("TYC {}", field(cols.tyc))
    } else {
        return Err(ReduceError::NoName {
            row: record.iter().map(str::to_string).collect(),
        });
    };

    Ok(name)
}
