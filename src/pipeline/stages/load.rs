//! Loading stage: CSV file into a [`RowTable`].

use crate::errors::PipelineError;
use crate::pipeline::data::{Cell, RowTable};
use csv::{ByteRecord, ReaderBuilder};
use std::collections::HashMap;
use std::path::Path;

/// Field values treated as missing, in addition to the empty field.
pub const DEFAULT_NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Options controlling how the input file is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    pub delimiter: u8,
    pub null_markers: Vec<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LoaderOptions {
    fn is_null(&self, field: &[u8]) -> bool {
        field.is_empty() || self.null_markers.iter().any(|m| m.as_bytes() == field)
    }
}

/// Read and parse the input file.
pub fn load_table(path: &Path, options: &LoaderOptions) -> Result<RowTable, PipelineError> {
    let bytes = std::fs::read(path).map_err(|e| PipelineError::from_input_io(path, &e))?;
    let table = parse_table(&bytes, path, options)?;
    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.len(),
        table.headers,
        path.display()
    );
    Ok(table)
}

/// Parse CSV bytes. `path` is only used for error context.
///
/// Blank lines are skipped. Rows shorter than the header are padded with
/// missing cells; rows longer than the header are a parse error.
pub fn parse_table(
    bytes: &[u8],
    path: &Path,
    options: &LoaderOptions,
) -> Result<RowTable, PipelineError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(PipelineError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut records = reader.byte_records();
    let header = match records.next() {
        Some(record) => record.map_err(|e| csv_error(path, e))?,
        None => {
            return Err(PipelineError::EmptyInput {
                path: path.to_path_buf(),
            })
        }
    };

    let mut table = RowTable::new(parse_headers(&header, path)?);
    let width = table.headers.len();

    for record in records {
        let record = record.map_err(|e| csv_error(path, e))?;
        if record.len() > width {
            let line = record.position().map_or(0, |p| p.line());
            return Err(PipelineError::unparsable(
                path,
                format!(
                    "Expected {} fields in line {}, saw {}",
                    width,
                    line,
                    record.len()
                ),
            ));
        }
        let mut row: Vec<Cell> = record
            .iter()
            .map(|field| (!options.is_null(field)).then(|| field.to_vec()))
            .collect();
        row.resize(width, None);
        table.rows.push(row);
    }

    Ok(table)
}

/// Decode header names, suffixing repeated names with `.1`, `.2`, ...
fn parse_headers(record: &ByteRecord, path: &Path) -> Result<Vec<String>, PipelineError> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    record
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let name = std::str::from_utf8(raw).map_err(|_| {
                PipelineError::unparsable(path, format!("header field {} is not valid UTF-8", i))
            })?;
            let count = seen.entry(name.to_string()).or_insert(0);
            let unique = if *count == 0 {
                name.to_string()
            } else {
                format!("{}.{}", name, count)
            };
            *count += 1;
            Ok(unique)
        })
        .collect()
}

fn csv_error(path: &Path, error: csv::Error) -> PipelineError {
    match error.kind() {
        csv::ErrorKind::Io(io) => PipelineError::InputUnreadable {
            path: path.to_path_buf(),
            message: io.to_string(),
        },
        _ => PipelineError::unparsable(path, error.to_string()),
    }
}
