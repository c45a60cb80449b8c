// src/reduce/mod.rs
//
// Reduce an AT-HYG v2.4 catalog export to the 6-column table consumed by
// the encoder. Each star gets a best-available display name and a Johnson
// B−V colour index; rows without position or colour data are dropped.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};
use tracing::{debug, info};

pub mod colour;
pub mod columns;
pub mod name;

use crate::error::ReduceError;
use crate::reduce::colour::correct_colour_index;
use crate::reduce::columns::ColumnIndices;
use crate::reduce::name::display_name;

/// One output row. Field order here is the output column order.
#[derive(Debug, PartialEq, Serialize)]
pub struct ReducedStar {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub colour_index: f64,
    pub abs_mag: f64,
}

/// Output header, matching the field order of [`ReducedStar`].
const OUTPUT_HEADER: [&str; 6] = ["name", "x", "y", "z", "colour_index", "abs_mag"];

/// Row totals for one reduction run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReduceStats {
    /// Data rows read from the catalog (header excluded).
    pub rows: u64,
    /// Rows written to the output.
    pub emitted: u64,
    /// Rows dropped for missing `x0` or `ci`.
    pub skipped: u64,
}

/// Map one data row to its output row, or `None` when the row lacks
/// position or colour data.
///
/// The name is resolved before the presence filter, so a row that would be
/// skipped still aborts the run when it has no usable identifier.
fn transform_record(
    record: &StringRecord,
    cols: &ColumnIndices,
) -> Result<Option<ReducedStar>, ReduceError> {
    let name = display_name(record, cols)?;

    let field = |idx: usize| record.get(idx).unwrap_or("");
    if field(cols.x0).is_empty() || field(cols.ci).is_empty() {
        return Ok(None);
    }

    let parse = |column: &'static str, idx: usize| -> Result<f64, ReduceError> {
        let value = field(idx);
        value.parse().map_err(|source| ReduceError::BadFloat {
            column,
            value: value.to_string(),
            source,
        })
    };

    let x = parse("x0", cols.x0)?;
    let y = parse("y0", cols.y0)?;
    let z = parse("z0", cols.z0)?;
    let ci = parse("ci", cols.ci)?;
    let abs_mag = parse("absmag", cols.absmag)?;

    Ok(Some(ReducedStar {
        name,
        x,
        y,
        z,
        colour_index: correct_colour_index(ci, field(cols.mag_src)),
        abs_mag,
    }))
}

/// Run the whole reduction: resolve the header, emit the fixed output
/// header, then map every data row in input order.
///
/// A catalog with no header row at all produces an empty output and
/// succeeds.
pub fn reduce_catalog<R: Read, W: Write>(input: R, output: W) -> Result<ReduceStats> {
    let mut rdr = ReaderBuilder::new().has_headers(false).from_reader(input);
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(output);

    let mut records = rdr.records();
    let header = match records.next() {
        Some(header) => header.context("reading catalog header")?,
        None => return Ok(ReduceStats::default()),
    };
    let cols = ColumnIndices::from_header(&header)?;
    debug!(?cols, "resolved catalog columns");

    wtr.write_record(OUTPUT_HEADER)
        .context("writing output header")?;

    let mut stats = ReduceStats::default();
    for (idx, result) in records.enumerate() {
        let record = result.with_context(|| format!("reading catalog data row {}", idx + 1))?;
        stats.rows += 1;

        match transform_record(&record, &cols)
            .with_context(|| format!("at catalog data row {}", idx + 1))?
        {
            Some(star) => {
                wtr.serialize(&star)
                    .with_context(|| format!("writing output for data row {}", idx + 1))?;
                stats.emitted += 1;
            }
            None => stats.skipped += 1,
        }
    }

    wtr.flush().context("flushing output")?;
    info!(
        rows = stats.rows,
        emitted = stats.emitted,
        skipped = stats.skipped,
        "catalog reduced"
    );
    Ok(stats)
}

/// Reduce the catalog at `input_path` into `output_path`, overwriting any
/// existing output file.
#[tracing::instrument(
    level = "info",
    skip(input_path, output_path),
    fields(input = %input_path.as_ref().display(), output = %output_path.as_ref().display())
)]
pub fn reduce_catalog_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<ReduceStats> {
    let input = File::open(&input_path)
        .with_context(|| format!("opening catalog {}", input_path.as_ref().display()))?;
    let output = File::create(&output_path)
        .with_context(|| format!("creating output {}", output_path.as_ref().display()))?;

    reduce_catalog(BufReader::new(input), BufWriter::new(output))
}
