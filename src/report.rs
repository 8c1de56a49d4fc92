//! The analysis report.
//!
//! Runs both phases over a document and renders the textual report: a lexical
//! section with the token table, a syntax section with the verdict, and an
//! optional tree dump. A lexical failure skips the syntax phase.

use log::info;

use crate::{
    ast::{ast::Program, printer::TreePrinter},
    config::AnalysisConfig,
    errors::errors::{Error, ErrorTip},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    parser::parser::parse_tokens,
};

pub const EMPTY_INPUT_WARNING: &str = "Please enter some code to analyze.";

/// Sample program covering every statement form of the language.
pub const EXAMPLE_PROGRAM: &str = r#"// Example toy language program
function factorial(int n) {
    if (n <= 1) {
        return 1;
    } else {
        return n * factorial(n - 1);
    }
}

var result = factorial(5);
print(result);

// Variable declarations
int x = 10;
string message = "Hello World";
bool flag = true;

// Control structures
if (x > 5) {
    print("x is greater than 5");
}

while (x > 0) {
    x = x - 1;
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Ok,
    SyntaxError,
    LexicalError,
    /// Input was empty or whitespace only; nothing was analysed.
    Empty,
}

impl AnalysisStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, AnalysisStatus::Ok)
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub status: AnalysisStatus,
    pub text: String,
    /// Tokens of the document without the EOF marker. Empty on lexical failure.
    pub tokens: Vec<Token>,
    pub program: Option<Program>,
    pub error: Option<Error>,
}

impl AnalysisReport {
    fn empty() -> Self {
        AnalysisReport {
            status: AnalysisStatus::Empty,
            text: format!("{}\n", EMPTY_INPUT_WARNING),
            tokens: vec![],
            program: None,
            error: None,
        }
    }
}

pub fn analyze(source: &str, config: &AnalysisConfig) -> AnalysisReport {
    if source.trim().is_empty() {
        return AnalysisReport::empty();
    }

    let mut text = String::new();
    text.push_str("=== LEXICAL ANALYSIS ===\n");
    text.push_str("Scanning tokens...\n\n");

    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => {
            info!("lexical error: {}", error);
            text.push_str("✗ LEXICAL ERROR!\n");
            push_error(&mut text, &error.message(), error.get_tip());
            text.push_str("\n=== ANALYSIS COMPLETE ===\n");

            return AnalysisReport {
                status: AnalysisStatus::LexicalError,
                text,
                tokens: vec![],
                program: None,
                error: Some(Error::Lex(error)),
            };
        }
    };

    let table_tokens = tokens
        .iter()
        .filter(|token| token.kind != TokenKind::EOF)
        .cloned()
        .collect::<Vec<_>>();

    if config.show_tokens {
        text.push_str(&token_table(&table_tokens));
        text.push('\n');
    }
    text.push_str(&format!("Found {} tokens.\n\n", table_tokens.len()));

    text.push_str("=== SYNTAX ANALYSIS ===\n");

    let (status, program, error) = match parse_tokens(tokens) {
        Ok(program) => {
            text.push_str("✓ Syntax is VALID!\n");
            text.push_str("Code parsed successfully without errors.\n");

            if config.show_tree {
                text.push('\n');
                for line in TreePrinter::new().print(&program) {
                    text.push_str(&line);
                    text.push('\n');
                }
            }

            (AnalysisStatus::Ok, Some(program), None)
        }
        Err(error) => {
            info!("syntax error: {}", error);
            text.push_str("✗ Syntax ERROR!\n");
            text.push_str(&format!("Parse error: {}\n", error.message()));
            if let ErrorTip::Suggestion(tip) = error.get_tip() {
                text.push_str(&format!("Tip: {}\n", tip));
            }

            (AnalysisStatus::SyntaxError, None, Some(Error::Parse(error)))
        }
    };

    text.push_str("\n=== ANALYSIS COMPLETE ===\n");

    AnalysisReport {
        status,
        text,
        tokens: table_tokens,
        program,
        error,
    }
}

fn push_error(text: &mut String, message: &str, tip: ErrorTip) {
    text.push_str(&format!("Error: {}\n", message));
    if let ErrorTip::Suggestion(tip) = tip {
        text.push_str(&format!("Tip: {}\n", tip));
    }
}

/// Type / Value / Line / Column table, one row per token.
pub fn token_table(tokens: &[Token]) -> String {
    let mut table = String::new();

    table.push_str(&format!(
        "{:<16} {:<24} {:>5} {:>7}\n",
        "Type", "Value", "Line", "Column"
    ));
    table.push_str(&format!("{}\n", "-".repeat(55)));

    for token in tokens {
        table.push_str(&format!(
            "{:<16} {:<24} {:>5} {:>7}\n",
            token.kind.to_string(),
            token.display_value(),
            token.span.start.line,
            token.span.start.column
        ));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_warns() {
        for source in ["", "   \n\t  \r\n"] {
            let report = analyze(source, &AnalysisConfig::default());

            assert_eq!(report.status, AnalysisStatus::Empty);
            assert_eq!(report.text, "Please enter some code to analyze.\n");
            assert!(report.tokens.is_empty());
        }
    }

    #[test]
    fn test_comment_only_input_is_analysed() {
        let report = analyze("// nothing here\n", &AnalysisConfig::default());

        assert_eq!(report.status, AnalysisStatus::Ok);
        assert!(report.text.contains("Found 0 tokens."));
    }

    #[test]
    fn test_example_program_is_valid() {
        let report = analyze(EXAMPLE_PROGRAM, &AnalysisConfig::default());

        assert_eq!(report.status, AnalysisStatus::Ok, "{}", report.text);
        assert!(report.text.starts_with("=== LEXICAL ANALYSIS ===\n"));
        assert!(report.text.contains("✓ Syntax is VALID!"));
        assert!(report.text.ends_with("\n=== ANALYSIS COMPLETE ===\n"));
        assert_eq!(report.program.as_ref().map(|p| p.body.len()), Some(8));
    }

    #[test]
    fn test_token_table_rows() {
        let report = analyze("int x = 42;", &AnalysisConfig::default());

        assert_eq!(report.tokens.len(), 5);
        assert!(report.text.contains("Found 5 tokens."));

        let row = report
            .text
            .lines()
            .find(|line| line.starts_with("IntLiteral"))
            .unwrap();
        let columns = row.split_whitespace().collect::<Vec<_>>();
        assert_eq!(columns, vec!["IntLiteral", "42", "1", "9"]);
    }

    #[test]
    fn test_token_table_layout() {
        let tokens = tokenize("print(x);").unwrap();
        let table = token_table(&tokens[..tokens.len() - 1]);
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), vec!["Type", "Value", "Line", "Column"]);
        assert_eq!(lines[1], "-".repeat(55));
        assert!(lines[2].starts_with("Print "));
        assert!(table.ends_with('\n'));
    }

    #[test]
    fn test_token_table_can_be_hidden() {
        let config = AnalysisConfig {
            show_tokens: false,
            ..AnalysisConfig::default()
        };
        let report = analyze("int x = 42;", &config);

        assert!(!report.text.contains("Column"));
        assert!(report.text.contains("Found 5 tokens."));
    }

    #[test]
    fn test_syntax_error_section() {
        let report = analyze("int x = ;", &AnalysisConfig::default());

        assert_eq!(report.status, AnalysisStatus::SyntaxError);
        assert!(report.text.contains("=== SYNTAX ANALYSIS ===\n✗ Syntax ERROR!\n"));
        assert!(report.text.contains("Parse error: "));
        assert!(report.text.contains("line 1, column 9"));
        assert!(matches!(report.error, Some(Error::Parse(_))));
    }

    #[test]
    fn test_lexical_error_skips_syntax_section() {
        let report = analyze("string s = \"abc", &AnalysisConfig::default());

        assert_eq!(report.status, AnalysisStatus::LexicalError);
        assert!(report.text.contains("✗ LEXICAL ERROR!"));
        assert!(!report.text.contains("=== SYNTAX ANALYSIS ==="));
        assert!(report.text.ends_with("\n=== ANALYSIS COMPLETE ===\n"));
        assert!(report.error.as_ref().is_some_and(|e| e.is_lexical()));
    }

    #[test]
    fn test_tree_dump() {
        let config = AnalysisConfig {
            show_tree: true,
            ..AnalysisConfig::default()
        };
        let report = analyze("int x = 1 + 2 * 3;", &config);

        assert!(report.text.contains("Program\n|--VarDecl int x\n|  |--(1 + (2 * 3))\n"));
    }
}
