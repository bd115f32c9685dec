use anyhow::{Context, Result};
use std::io::{self, Read};

/// Raw CSV contents: header row plus string cells.
#[derive(Debug, Clone)]
pub struct CsvData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read CSV from any reader. Requires a header row and at least one data row.
pub fn read_csv<R: Read>(reader: R) -> Result<CsvData> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("Failed to parse CSV row {}", i + 1))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.is_empty() {
        anyhow::bail!("CSV must contain at least one data row");
    }

    Ok(CsvData { headers, rows })
}

pub fn read_csv_from_stdin() -> Result<CsvData> {
    read_csv(io::stdin().lock())
}
