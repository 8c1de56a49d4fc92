use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{debug, warn};
use toylang::{
    config::AnalysisConfig,
    format_error,
    report::{analyze, AnalysisStatus},
};

/// Lexical and syntax analyzer for the toy language
#[derive(Parser, Debug)]
#[command(name = "toylang")]
#[command(version, long_about = None)]
struct Cli {
    /// Source file to analyze
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Do not print the token table
    #[arg(long = "no-tokens")]
    no_tokens: bool,

    /// Print the syntax tree when the program is valid
    #[arg(long)]
    tree: bool,
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            show_tokens: !self.no_tokens,
            show_tree: self.tree,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    if cli.file.extension().and_then(|e| e.to_str()) != Some("toy") {
        warn!("{} does not have a .toy extension", cli.file.display());
    }

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error loading file: {}", error);
            return ExitCode::FAILURE;
        }
    };

    debug!("read {} bytes from {}", source.len(), cli.file.display());

    let report = analyze(&source, &cli.config());
    print!("{}", report.text);

    if let Some(error) = &report.error {
        let file_name = cli
            .file
            .file_name()
            .map_or_else(|| cli.file.display().to_string(), |n| n.to_string_lossy().into_owned());
        eprint!("\n{}", format_error(error, &source, &file_name));
    }

    match report.status {
        AnalysisStatus::Ok => ExitCode::SUCCESS,
        AnalysisStatus::Empty | AnalysisStatus::SyntaxError | AnalysisStatus::LexicalError => {
            ExitCode::FAILURE
        }
    }
}
