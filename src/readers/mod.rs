pub mod catalog_reader;
pub mod range_parser;

pub use catalog_reader::CatalogReader;
pub use range_parser::{parse_day_span, parse_range, parse_span, parse_temperature_profile};
