use anyhow::{anyhow, Result};
use indexmap::IndexMap;
use serde_json::Value;

use crate::request::{Datum, Grouping};

/// Tabular input for the command-line host: named columns of string cells.
#[derive(Debug, Clone)]
pub struct PlotData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PlotData {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_csv(csv: crate::csv_reader::CsvData) -> Self {
        Self {
            headers: csv.headers,
            rows: csv.rows,
        }
    }

    /// Create PlotData from a JSON Array of Objects
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value.as_array().ok_or_else(||
            anyhow!("Input data must be a JSON array of objects")
        )?;

        if array.is_empty() {
            return Err(anyhow!("Input data array is empty"));
        }

        // Headers come from the first object; later objects may omit keys
        let first_obj = array[0].as_object().ok_or_else(||
            anyhow!("Items in array must be objects")
        )?;

        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut rows = Vec::with_capacity(array.len());
        for item in array {
            let obj = item.as_object().ok_or_else(||
                anyhow!("Items in array must be objects")
            )?;

            let mut row = Vec::with_capacity(headers.len());
            for header in &headers {
                let cell = match obj.get(header) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    Some(Value::Bool(b)) => b.to_string(),
                    Some(Value::Null) | None => String::new(),
                    _ => return Err(anyhow!("Unsupported value type for field '{}'", header)),
                };
                row.push(cell);
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Index of a column, matched case-insensitively.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                anyhow!(
                    "Column '{}' not found (available: {})",
                    name,
                    self.headers.join(", ")
                )
            })
    }

    /// Values of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<Datum>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| cell(row, idx)).collect())
    }

    /// Raw labels of one column, in row order.
    pub fn labels(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or_default())
            .collect())
    }

    /// Split x/y columns into one sub-series per distinct value of `group`.
    ///
    /// Groups are ordered by first appearance; rows keep their order within
    /// each group.
    pub fn split_by(&self, group: &str, x: &str, y: &str) -> Result<Grouping> {
        let g_idx = self.column_index(group)?;
        let x_idx = self.column_index(x)?;
        let y_idx = self.column_index(y)?;

        let mut groups: IndexMap<String, (Vec<Datum>, Vec<Datum>)> = IndexMap::new();
        for row in &self.rows {
            let key = row.get(g_idx).cloned().unwrap_or_default();
            let (xs, ys) = groups.entry(key).or_default();
            xs.push(cell(row, x_idx));
            ys.push(cell(row, y_idx));
        }

        let mut grouping = Grouping {
            group_names: Vec::with_capacity(groups.len()),
            x: Vec::with_capacity(groups.len()),
            y: Vec::with_capacity(groups.len()),
        };
        for (name, (xs, ys)) in groups {
            grouping.group_names.push(name);
            grouping.x.push(xs);
            grouping.y.push(ys);
        }
        Ok(grouping)
    }
}

fn cell(row: &[String], idx: usize) -> Datum {
    row.get(idx).map(|c| Datum::parse(c)).unwrap_or(Datum::Missing)
}
