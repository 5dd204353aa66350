#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown naming convention `{0}` (try camelCase, PascalCase, Train-Case, CONSTANT_CASE, snake_case, kebab-case, flatcase or UPPERFLATCASE)")]
    UnknownConvention(String),
}
