// File: crates/linechart-window/src/source.rs
// Summary: Header-less numeric CSV tables and column selection.

use std::path::Path;

use anyhow::{bail, Context, Result};

/// Rows of equal width, parsed as f64.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl Table {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let columns = match rows.first() {
            Some(r) if !r.is_empty() => r.len(),
            _ => bail!("table is empty"),
        };
        if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            bail!("row {i} has {} columns, expected {columns}", r.len());
        }
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> usize { self.rows.len() }
    pub fn columns(&self) -> usize { self.columns }

    /// Column-major selection; a negative index yields the row number.
    pub fn select(&self, index: &[i64]) -> Result<Vec<Vec<f64>>> {
        let mut out = Vec::with_capacity(index.len());
        for &i in index {
            if i >= self.columns as i64 {
                bail!("column {i} out of range ({} columns)", self.columns);
            }
            let column = if i < 0 {
                (0..self.rows.len()).map(|r| r as f64).collect()
            } else {
                self.rows.iter().map(|row| row[i as usize]).collect()
            };
            out.push(column);
        }
        Ok(out)
    }
}

/// Load `path` as a delimited numeric table. Reading stops at the first blank line.
pub fn load_table(path: &Path, separator: char) -> Result<Table> {
    if !path.is_file() {
        bail!("file not found: {}", path.display());
    }
    if !separator.is_ascii() {
        bail!("separator {separator:?} is not ASCII");
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_table(&text, separator).with_context(|| format!("loading {}", path.display()))
}

pub fn parse_table(text: &str, separator: char) -> Result<Table> {
    let body = text
        .lines()
        .take_while(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(separator as u8)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for (n, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("wrong line {}", n + 1))?;
        let row = rec
            .iter()
            .map(|s| s.parse::<f64>().with_context(|| format!("line {}: '{s}' is not a number", n + 1)))
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }
    Table::from_rows(rows).context("reading failed")
}
