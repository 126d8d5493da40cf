use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_INPUTS: usize = 1000;
pub const DEFAULT_BANNER: &str = "=== Statistics Calculator (Rust) ===";
pub const DEFAULT_PROMPT: &str = "Enter a list of integers separated by spaces: ";

/// Runtime limits and console strings for one calculator session.
///
/// Every field has a default, so `Config::builder().build()` is the same as
/// [Config]::default().
#[derive(Debug, TypedBuilder, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tokens past this count are discarded.
    #[builder(default = DEFAULT_MAX_INPUTS)]
    pub max_inputs: usize,
    #[builder(default = DEFAULT_BANNER.to_string(), setter(into))]
    pub banner: String,
    #[builder(default = DEFAULT_PROMPT.to_string(), setter(into))]
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}
