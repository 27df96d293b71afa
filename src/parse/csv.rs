//! CSV replacer tables
//!
//! The first record is the header and must name a `key` and a `value` column
//! (any order, exact case). Every following record yields one [`ReplaceItem`].

use crate::domain::{Format, ReplaceData, ReplaceItem};
use crate::error::{ReplaceError, Result};

const KEY_COLUMN: &str = "key";
const VALUE_COLUMN: &str = "value";

pub fn parse_csv(content: &str) -> Result<ReplaceData> {
    // Flexible so that short rows reach the length check below instead of
    // surfacing as a generic reader error.
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut records = reader.records();

    let Some(header) = records.next() else {
        return Ok(ReplaceData::default());
    };
    let header = header.map_err(|e| ReplaceError::parse(Format::Csv, e))?;

    let key_idx = last_column(&header, KEY_COLUMN);
    let value_idx = last_column(&header, VALUE_COLUMN);
    let (key_idx, value_idx) = match (key_idx, value_idx) {
        (Some(k), Some(v)) => (k, v),
        (k, v) => {
            let mut missing = Vec::new();
            if k.is_none() {
                missing.push(KEY_COLUMN.to_string());
            }
            if v.is_none() {
                missing.push(VALUE_COLUMN.to_string());
            }
            return Err(ReplaceError::MissingColumns { missing });
        }
    };
    let expected = key_idx.max(value_idx) + 1;

    let mut data = ReplaceData::default();
    for (i, record) in records.enumerate() {
        let record = record.map_err(|e| ReplaceError::parse(Format::Csv, e))?;
        let (Some(key), Some(value)) = (record.get(key_idx), record.get(value_idx)) else {
            return Err(ReplaceError::MalformedRow { row: i + 1, expected, found: record.len() });
        };
        data.push(ReplaceItem::new(key, value));
    }

    Ok(data)
}

/// Index of the last header cell equal to `name`; later duplicates win.
fn last_column(header: &::csv::StringRecord, name: &str) -> Option<usize> {
    header.iter().enumerate().filter(|(_, h)| *h == name).map(|(i, _)| i).last()
}
