use crate::domain::model::{InputFormat, Product};
use crate::utils::error::Result;
use std::io::Read;
use std::path::Path;

pub trait ConfigProvider {
    /// Path of the product file. May be empty.
    fn input_path(&self) -> &Path;
    /// Explicit format; `None` means detect from the extension.
    fn format_override(&self) -> Option<InputFormat>;
}

pub trait Decoder {
    fn decode(&self, reader: &mut dyn Read) -> Result<Vec<Product>>;
}
