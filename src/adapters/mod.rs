// Adapters layer: concrete decoders for the supported input formats.

pub mod csv_decoder;
pub mod json_decoder;

use crate::domain::model::InputFormat;
use crate::domain::ports::Decoder;

pub use csv_decoder::{encode_csv, CsvDecoder};
pub use json_decoder::JsonDecoder;

pub fn decoder_for(format: InputFormat) -> Box<dyn Decoder> {
    match format {
        InputFormat::Csv => Box::new(CsvDecoder),
        InputFormat::Json => Box::new(JsonDecoder),
    }
}
