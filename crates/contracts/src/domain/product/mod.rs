pub mod aggregate;

pub use aggregate::{Category, Product, ProductDto, ProductId, StockStatus};
