pub mod analyze;
pub mod format_detector;
pub mod payload_builder;
pub mod prompt_composer;
pub mod rating;
pub mod sampler;
