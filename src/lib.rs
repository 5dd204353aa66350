pub mod case;
pub mod cli;
pub mod config;
pub mod error;

pub use case::tokenizer::{fields, Fields};
pub use case::{
    camel_case, constant_case, flat_case, join, join_with, kebab_case, pascal_case, snake_case,
    train_case, upper_flat_case, Convention,
};
pub use config::Config;
pub use error::Error;

/// One input rendered in a set of conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub fields: Vec<String>,
    pub outputs: Vec<(Convention, String)>,
}

impl Conversion {
    pub fn new(input: &str, conventions: &[Convention]) -> Self {
        let words = fields(input);
        let outputs = conventions
            .iter()
            .map(|&convention| (convention, convention.format_words(&words)))
            .collect();

        Self {
            input: input.to_string(),
            fields: words.into_iter().map(str::to_string).collect(),
            outputs,
        }
    }
}
