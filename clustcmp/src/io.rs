//! reading labels of a clusterization from a csv like file.
//!
//! Each record gives the label of one observation, records are in observation order.
//! Labels are kept as strings : they are only compared for equality.

use anyhow::anyhow;
use std::fs::OpenOptions;
use std::io::BufReader;
use std::io::prelude::*;
use std::path::Path;

/// how to decode a label file
#[derive(Clone, Debug)]
pub struct LabelFileParams {
    /// true if first record is a header to skip
    header: bool,
    /// rank of the field containing the label
    column: usize,
    /// field delimiter
    delimiter: u8,
}

impl LabelFileParams {
    pub fn new(header: bool, column: usize, delimiter: u8) -> Self {
        LabelFileParams {
            header,
            column,
            delimiter,
        }
    }
    //
    pub fn get_header(&self) -> bool {
        self.header
    }
    //
    pub fn get_column(&self) -> usize {
        self.column
    }
    //
    pub fn get_delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl Default for LabelFileParams {
    fn default() -> Self {
        LabelFileParams {
            header: false,
            column: 0,
            delimiter: b',',
        }
    }
}

/// decode labels from any reader
pub fn read_labels_csv(
    bufreader: &mut dyn Read,
    params: &LabelFileParams,
) -> anyhow::Result<Vec<String>> {
    //
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(params.header)
        .delimiter(params.delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bufreader);
    //
    let mut labels = Vec::<String>::with_capacity(10000);
    for (num_record, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        match record.get(params.column) {
            Some(field) if !field.is_empty() => labels.push(field.to_string()),
            Some(_) => {
                log::error!("record {} (line {}) has an empty label", num_record, line);
                return Err(anyhow!(
                    "record {} (line {}) has an empty label at column {}",
                    num_record,
                    line,
                    params.column
                ));
            }
            None => {
                log::debug!("record {} has {} fields", num_record, record.len());
                return Err(anyhow!(
                    "record {} (line {}) has {} fields, no field at column {}",
                    num_record,
                    line,
                    record.len(),
                    params.column
                ));
            }
        }
    }
    log::info!("number of labels loaded : {}", labels.len());
    //
    Ok(labels)
} // end of read_labels_csv

/// load labels from a file
pub fn read_labels(path: &Path, params: &LabelFileParams) -> anyhow::Result<Vec<String>> {
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|e| anyhow!("could not open label file : {:?}, {}", path, e))?;
    let mut bufreader = BufReader::new(file);
    log::info!("reading labels from {:?}", path);
    read_labels_csv(&mut bufreader, params)
}

// end of mod tests
