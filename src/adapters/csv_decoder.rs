use crate::domain::model::Product;
use crate::domain::ports::Decoder;
use crate::utils::error::{ReportError, Result};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::io::{Read, Write};

const EXPECTED_FIELDS: usize = 3;
const HEADER: [&str; EXPECTED_FIELDS] = ["name", "price", "rating"];

const QUOTED_FIELD_ERROR: &str = "extraneous or missing \" in quoted field";
const BARE_QUOTE_ERROR: &str = "bare \" in non-quoted field";

/// Decodes `name,price,rating` rows. The first row is always treated as a
/// header and dropped, whatever it contains.
///
/// Quoting is strict: a `"` may only open a field or appear doubled inside a
/// quoted one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvDecoder;

impl Decoder for CsvDecoder {
    fn decode(&self, reader: &mut dyn Read) -> Result<Vec<Product>> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(csv::Error::from)?;
        check_quotes(&data)?;

        // Field counts are checked here rather than by the reader so the
        // header row gets the same treatment as the data rows.
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            if record.len() != EXPECTED_FIELDS {
                return Err(ReportError::FieldCount {
                    line: line_of(&record),
                    expected: EXPECTED_FIELDS,
                    found: record.len(),
                });
            }
            records.push(record);
        }

        tracing::debug!("Read {} CSV rows (including header)", records.len());

        records.iter().skip(1).map(parse_product).collect()
    }
}

fn parse_product(record: &StringRecord) -> Result<Product> {
    Ok(Product {
        name: record[0].to_string(),
        price: parse_number(record, 1, "price")?,
        rating: parse_number(record, 2, "rating")?,
    })
}

fn parse_number(record: &StringRecord, index: usize, field: &'static str) -> Result<f64> {
    let raw = &record[index];
    let text = raw.trim();
    let value = text
        .parse::<f64>()
        .map_err(|source| ReportError::InvalidNumber {
            line: line_of(record),
            field,
            value: raw.to_string(),
            source,
        })?;

    // `1e400` parses to infinity; only a spelled-out infinity may.
    if value.is_infinite() && !is_infinity_literal(text) {
        return Err(ReportError::NumberOutOfRange {
            line: line_of(record),
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Rejects quotes the reader would otherwise accept loosely: a `"` inside an
/// unquoted field, text after a closing quote, or an unterminated quoted field.
fn check_quotes(data: &[u8]) -> Result<()> {
    let mut line = 1u64;
    let mut field_start = true;
    let mut i = 0;

    while i < data.len() {
        if field_start && data[i] == b'"' {
            i += 1;
            loop {
                match data.get(i) {
                    None => return Err(quote_error(line, QUOTED_FIELD_ERROR)),
                    Some(b'"') => match data.get(i + 1) {
                        Some(b'"') => i += 2,
                        None | Some(b',') | Some(b'\n') | Some(b'\r') => {
                            i += 1;
                            break;
                        }
                        Some(_) => return Err(quote_error(line, QUOTED_FIELD_ERROR)),
                    },
                    Some(b'\n') => {
                        line += 1;
                        i += 1;
                    }
                    Some(_) => i += 1,
                }
            }
            field_start = false;
            continue;
        }

        match data[i] {
            b',' => field_start = true,
            b'\n' => {
                line += 1;
                field_start = true;
            }
            b'"' => return Err(quote_error(line, BARE_QUOTE_ERROR)),
            _ => field_start = false,
        }
        i += 1;
    }

    Ok(())
}

fn quote_error(line: u64, reason: &'static str) -> ReportError {
    ReportError::Quote { line, reason }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or(0)
}

/// Writes a header row followed by one row per product.
pub fn encode_csv<W: Write>(products: &[Product], writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for product in products {
        csv_writer.write_record([
            product.name.clone(),
            product.price.to_string(),
            product.rating.to_string(),
        ])?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
