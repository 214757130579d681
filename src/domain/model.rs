use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::ReportError;

/// A single product row. Serializes with the same keys the JSON decoder reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Product {
    #[serde(rename = "product")]
    pub name: String,
    pub price: f64,
    pub rating: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, rating: f64) -> Self {
        Self {
            name: name.into(),
            price,
            rating,
        }
    }

    /// `Gadget ($19.99)`
    pub fn price_label(&self) -> String {
        format!("{} (${:.2})", self.name, self.price)
    }

    /// `Gadget (rating 4.80)`
    pub fn rating_label(&self) -> String {
        format!("{} (rating {:.2})", self.name, self.rating)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductReport {
    pub most_expensive: Product,
    pub highest_rated: Product,
}

impl fmt::Display for ProductReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most expensive product: {}", self.most_expensive.price_label())?;
        writeln!(f, "Highest rated product: {}", self.highest_rated.rating_label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    pub const SUPPORTED: [&'static str; 2] = ["csv", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Json => "json",
        }
    }
}

/// Matches the extension verbatim; `CSV` is not `csv`.
impl FromStr for InputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            other => Err(ReportError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
