use serde::Deserialize;
use std::io::Read;

use crate::{CatalogError, CatalogResult};

/// One CSV data row, numbers still as text
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ItemRecord {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl ItemRecord {
    /// Parse `price` and `quantity`. `row` is the 1-based data row, for errors.
    pub fn parse_numbers(&self, row: usize) -> CatalogResult<(f64, f64)> {
        let price = parse_field(row, "price", &self.price)?;
        let quantity = parse_field(row, "quantity", &self.quantity)?;
        Ok((price, quantity))
    }
}

/// Read every row up front; any malformed row fails the whole read.
/// Columns other than `name`, `price` and `quantity` are ignored.
pub fn read_records<R: Read>(reader: R) -> CatalogResult<Vec<ItemRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.deserialize::<ItemRecord>() {
        let record = result?;
        tracing::debug!(?record, "Read item row");
        records.push(record);
    }

    Ok(records)
}

fn parse_field(row: usize, field: &'static str, raw: &str) -> CatalogResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CatalogError::InvalidNumber {
            row,
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_rows_and_ignores_extra_columns() {
        let data = "name,price,quantity,tag\nPhone,100,1,x\n\"Cable, USB\",10,5,y\n";
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Phone");
        assert_eq!(records[1].name, "Cable, USB");
        assert_eq!(records[1].parse_numbers(2).unwrap(), (10.0, 5.0));
    }

    #[test]
    fn test_column_order_follows_header() {
        let data = "quantity,name,price\n3,A,10\n";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records[0].parse_numbers(1).unwrap(), (10.0, 3.0));
    }

    #[test]
    fn test_missing_column_fails() {
        let data = "name,price\nA,10\n";
        let err = read_records(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Csv(_)));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let record = ItemRecord {
            name: "A".to_string(),
            price: " 10.5 ".to_string(),
            quantity: "2".to_string(),
        };
        assert_eq!(record.parse_numbers(1).unwrap(), (10.5, 2.0));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        let record = ItemRecord {
            name: "A".to_string(),
            price: "ten".to_string(),
            quantity: "2".to_string(),
        };

        match record.parse_numbers(4).unwrap_err() {
            CatalogError::InvalidNumber { row, field, value } => {
                assert_eq!(row, 4);
                assert_eq!(field, "price");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input_has_no_records() {
        let records = read_records("name,price,quantity\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }
}
