// the token table is the main output of an analysis, so it is on unless disabled
pub const DEFAULT_SHOW_TOKENS: bool = true;

pub const DEFAULT_SHOW_TREE: bool = false;

/// Options for a single analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Print the token table in the lexical section
    pub show_tokens: bool,
    /// Print the syntax tree after a successful parse
    pub show_tree: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            // set default values here, unless overridden via command-line
            show_tokens: DEFAULT_SHOW_TOKENS,
            show_tree: DEFAULT_SHOW_TREE,
        }
    }
}
