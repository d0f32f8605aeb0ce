use crate::error::TreeError;
use crate::merkle_tree::utils::parse_address;
use ethers::types::Address;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CsvEntry {
    address: String,
}

/// Reads an allow-list from a CSV file with an `address` column.
pub fn parse_csv_to_addresses<P: AsRef<Path>>(path: P) -> Result<Vec<Address>, TreeError> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut addresses = Vec::new();
    for result in rdr.deserialize() {
        let record: CsvEntry = result?;
        addresses.push(parse_address(&record.address)?);
    }

    Ok(addresses)
}
