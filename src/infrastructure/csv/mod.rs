// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Delimited-file parsing with delimiter detection

mod csv_parser;

pub use csv_parser::CsvParser;
