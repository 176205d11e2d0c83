pub mod preprocessor;

pub use preprocessor::Preprocessor;
