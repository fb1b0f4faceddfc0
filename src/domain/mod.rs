pub mod error;
pub mod llm_config;
pub mod payload;
pub mod table;
