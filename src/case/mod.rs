pub mod tokenizer;

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokenizer::Fields;

const KEBAB: &str = "-";
const SNAKE: &str = "_";
const BLANK: &str = "";

/// A naming convention: a per-word case transform plus a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Convention {
    /// `littleSampleVarName`
    Camel,
    /// `LittleSampleVarName`
    Pascal,
    /// `Little-Sample-Var-Name`
    Train,
    /// `LITTLE_SAMPLE_VAR_NAME`
    Constant,
    /// `little_sample_var_name`
    Snake,
    /// `little-sample-var-name`
    Kebab,
    /// `littlesamplevarname`
    Flat,
    /// `LITTLESAMPLEVARNAME`
    UpperFlat,
}

impl Convention {
    pub const ALL: [Convention; 8] = [
        Convention::Camel,
        Convention::Pascal,
        Convention::Train,
        Convention::Constant,
        Convention::Snake,
        Convention::Kebab,
        Convention::Flat,
        Convention::UpperFlat,
    ];

    /// Canonical spelling, written in the convention itself.
    pub fn name(self) -> &'static str {
        match self {
            Convention::Camel => "camelCase",
            Convention::Pascal => "PascalCase",
            Convention::Train => "Train-Case",
            Convention::Constant => "CONSTANT_CASE",
            Convention::Snake => "snake_case",
            Convention::Kebab => "kebab-case",
            Convention::Flat => "flatcase",
            Convention::UpperFlat => "UPPERFLATCASE",
        }
    }

    pub fn separator(self) -> &'static str {
        match self {
            Convention::Train | Convention::Kebab => KEBAB,
            Convention::Constant | Convention::Snake => SNAKE,
            Convention::Camel | Convention::Pascal | Convention::Flat | Convention::UpperFlat => {
                BLANK
            }
        }
    }

    fn transform(self, index: usize, word: &str) -> String {
        match self {
            Convention::Camel if index == 0 => word.to_lowercase(),
            Convention::Camel | Convention::Pascal | Convention::Train => title(word),
            Convention::Constant | Convention::UpperFlat => word.to_uppercase(),
            Convention::Snake | Convention::Kebab | Convention::Flat => word.to_lowercase(),
        }
    }

    /// Tokenize `text` and rewrite it in this convention.
    pub fn format(self, text: &str) -> String {
        self.format_words(Fields::new(text))
    }

    /// Rewrite already tokenized words in this convention.
    pub fn format_words<I, S>(self, words: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        join_with(words, self.separator(), |index, word| self.transform(index, word))
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Convention {
    type Err = Error;

    /// Accepts the canonical names in any convention (`snake_case`, `SnakeCase`,
    /// `snake-case`) as well as short aliases such as `snake` or `screaming`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match flat_case(s).as_str() {
            "camelcase" | "camel" | "lowercamelcase" => Ok(Convention::Camel),
            "pascalcase" | "pascal" | "uppercamelcase" => Ok(Convention::Pascal),
            "traincase" | "train" => Ok(Convention::Train),
            "constantcase" | "constant" | "screamingsnakecase" | "screaming" => {
                Ok(Convention::Constant)
            }
            "snakecase" | "snake" => Ok(Convention::Snake),
            "kebabcase" | "kebab" => Ok(Convention::Kebab),
            "flatcase" | "flat" | "lowercase" => Ok(Convention::Flat),
            "upperflatcase" | "upperflat" | "uppercase" => Ok(Convention::UpperFlat),
            _ => Err(Error::UnknownConvention(s.to_string())),
        }
    }
}

impl TryFrom<String> for Convention {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Convention> for String {
    fn from(convention: Convention) -> Self {
        convention.name().to_string()
    }
}

/// Uppercase the first character of `word` and keep the rest as is.
fn title(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Apply `transform` to each word with its position and concatenate the results.
///
/// ```
/// let words = ["http", "request"];
/// let out = naming::join(words, |i, w| if i == 0 { w.to_uppercase() } else { w.to_string() });
/// assert_eq!(out, "HTTPrequest");
/// ```
pub fn join<I, S, F>(words: I, transform: F) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(usize, &str) -> String,
{
    join_with(words, BLANK, transform)
}

/// Like [`join`], with `separator` placed between consecutive words.
pub fn join_with<I, S, F>(words: I, separator: &str, mut transform: F) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(usize, &str) -> String,
{
    let mut out = String::new();
    for (index, word) in words.into_iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        out.push_str(&transform(index, word.as_ref()));
    }
    out
}

/// `camel case data-19` -> `camelCaseData19`
pub fn camel_case(s: &str) -> String {
    Convention::Camel.format(s)
}

/// `camel case data-19` -> `CamelCaseData19`
pub fn pascal_case(s: &str) -> String {
    Convention::Pascal.format(s)
}

/// `HTTP header case` -> `HTTP-Header-Case`
pub fn train_case(s: &str) -> String {
    Convention::Train.format(s)
}

/// `cgo enabled` -> `CGO_ENABLED`
pub fn constant_case(s: &str) -> String {
    Convention::Constant.format(s)
}

/// `kebab-case Data_19` -> `kebab_case_data_19`
pub fn snake_case(s: &str) -> String {
    Convention::Snake.format(s)
}

/// `kebab-case Data_19` -> `kebab-case-data-19`
pub fn kebab_case(s: &str) -> String {
    Convention::Kebab.format(s)
}

/// `go-toolDir` -> `gotooldir`
pub fn flat_case(s: &str) -> String {
    Convention::Flat.format(s)
}

/// `Go_Host arch` -> `GOHOSTARCH`
pub fn upper_flat_case(s: &str) -> String {
    Convention::UpperFlat.format(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "little-sample varName b_42";

    fn formatters() -> [(fn(&str) -> String, &'static str); 8] {
        [
            (camel_case, "littleSampleVarNameB42"),
            (pascal_case, "LittleSampleVarNameB42"),
            (train_case, "Little-Sample-Var-Name-B-42"),
            (constant_case, "LITTLE_SAMPLE_VAR_NAME_B_42"),
            (snake_case, "little_sample_var_name_b_42"),
            (kebab_case, "little-sample-var-name-b-42"),
            (flat_case, "littlesamplevarnameb42"),
            (upper_flat_case, "LITTLESAMPLEVARNAMEB42"),
        ]
    }

    #[test]
    fn test_sample() {
        for (format, expected) in formatters() {
            assert_eq!(format(SAMPLE), expected);
        }
    }

    #[test]
    fn test_capitalized_first_word() {
        assert_eq!(camel_case("Little-sample varName b_42"), "littleSampleVarNameB42");
    }

    #[test]
    fn test_empty_input() {
        for (format, _) in formatters() {
            assert_eq!(format(""), "");
            assert_eq!(format(" -_ "), "");
        }
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(camel_case("camel case data-19"), "camelCaseData19");
        assert_eq!(pascal_case("camel case data-19"), "CamelCaseData19");
        assert_eq!(constant_case("cgo enabled"), "CGO_ENABLED");
        assert_eq!(flat_case("go-toolDir"), "gotooldir");
        assert_eq!(kebab_case("kebab-case Data_19"), "kebab-case-data-19");
        assert_eq!(snake_case("kebab-case Data_19"), "kebab_case_data_19");
        assert_eq!(train_case("HTTP header case"), "HTTP-Header-Case");
        assert_eq!(upper_flat_case("Go_Host arch"), "GOHOSTARCH");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [SAMPLE, "HTTP header case", "someXMLValue", "a-b_c d"];
        for input in inputs {
            for convention in Convention::ALL {
                let once = convention.format(input);
                assert_eq!(convention.format(&once), once, "{} on {:?}", convention, input);
            }
        }
    }

    #[test]
    fn test_camel_and_pascal_canonical_input() {
        assert_eq!(camel_case("httpHeaderCase"), "httpHeaderCase");
        assert_eq!(pascal_case("HTTPHeaderCase"), "HTTPHeaderCase");
        assert_eq!(pascal_case("LittleSampleVarNameB42"), "LittleSampleVarNameB42");
    }

    #[test]
    fn test_title_keeps_tail() {
        assert_eq!(title("hTTP"), "HTTP");
        assert_eq!(title("word"), "Word");
        assert_eq!(title("42"), "42");
        assert_eq!(title(""), "");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(Vec::<String>::new(), |_, w| w.to_string()), "");
        assert_eq!(
            join(["a", "b", "c"], |i, w| format!("{}{}", w, i)),
            "a0b1c2"
        );
        assert_eq!(join_with(["a", "b"], "::", |_, w| w.to_uppercase()), "A::B");
    }

    #[test]
    fn test_format_words_skips_tokenizing() {
        let words = vec!["Little".to_string(), "SAMPLE".to_string()];
        assert_eq!(Convention::Camel.format_words(&words), "littleSAMPLE");
        assert_eq!(Convention::Snake.format_words(&words), "little_sample");
        assert_eq!(Convention::Kebab.format_words(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_parse_convention() {
        for convention in Convention::ALL {
            assert_eq!(convention.name().parse::<Convention>().unwrap(), convention);
            assert_eq!(convention.to_string().parse::<Convention>().unwrap(), convention);
        }
        assert_eq!("snake".parse::<Convention>().unwrap(), Convention::Snake);
        assert_eq!("SCREAMING_SNAKE_CASE".parse::<Convention>().unwrap(), Convention::Constant);
        assert_eq!("upper-flat".parse::<Convention>().unwrap(), Convention::UpperFlat);
        assert_eq!("KebabCase".parse::<Convention>().unwrap(), Convention::Kebab);
    }

    #[test]
    fn test_parse_unknown_convention() {
        let err = "sponge-case".parse::<Convention>().unwrap_err();
        assert_eq!(err, Error::UnknownConvention("sponge-case".to_string()));
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&Convention::Train).unwrap();
        assert_eq!(json, "\"Train-Case\"");

        let parsed: Convention = serde_json::from_str("\"constant\"").unwrap();
        assert_eq!(parsed, Convention::Constant);

        assert!(serde_json::from_str::<Convention>("\"nope\"").is_err());
    }
}
