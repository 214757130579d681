pub mod engine;
pub mod report;
pub mod resolver;

pub use crate::domain::model::{InputFormat, Product, ProductReport};
pub use crate::domain::ports::{ConfigProvider, Decoder};
pub use crate::utils::error::Result;
