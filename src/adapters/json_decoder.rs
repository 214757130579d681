use crate::domain::model::Product;
use crate::domain::ports::Decoder;
use crate::utils::error::Result;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;

/// Decodes a top-level JSON array of `{"product", "price", "rating"}` objects.
///
/// Only the first JSON value in the stream is read; anything after it is
/// ignored. Keys match their field without regard to ASCII case, and unknown
/// keys are skipped. `null` decodes to nothing: a `null` document is an empty
/// list, a `null` element is a zero-valued product and a `null` field keeps
/// whatever value the field already had.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode(&self, reader: &mut dyn Read) -> Result<Vec<Product>> {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        let items = Option::<Vec<Value>>::deserialize(&mut deserializer)?;

        let products = items
            .unwrap_or_default()
            .into_iter()
            .map(product_from_value)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Decoded {} JSON products", products.len());
        Ok(products)
    }
}

fn product_from_value(value: Value) -> Result<Product> {
    match value {
        Value::Null => Ok(Product::default()),
        Value::Object(fields) => product_from_object(fields),
        other => Err(type_error("object", &other).into()),
    }
}

fn product_from_object(fields: Map<String, Value>) -> Result<Product> {
    let mut product = Product::default();

    // Document order, so a repeated key overwrites the earlier one.
    for (key, value) in fields {
        if value.is_null() {
            continue;
        }
        if key.eq_ignore_ascii_case("product") {
            product.name = value
                .as_str()
                .ok_or_else(|| type_error("string", &value))?
                .to_string();
        } else if key.eq_ignore_ascii_case("price") {
            product.price = value.as_f64().ok_or_else(|| type_error("f64", &value))?;
        } else if key.eq_ignore_ascii_case("rating") {
            product.rating = value.as_f64().ok_or_else(|| type_error("f64", &value))?;
        }
    }

    Ok(product)
}

fn type_error(expected: &str, found: &Value) -> serde_json::Error {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    serde_json::Error::custom(format!("invalid type: {}, expected {}", found, expected))
}
