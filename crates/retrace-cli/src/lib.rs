use clap::ValueEnum;
use retrace_analyzer::TargetLanguage;

pub mod commands;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
    Table,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
        }
    }
}

/// CLI-facing names for the reproduction-script languages.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum LanguageArg {
    Python,
    Typescript,
    Go,
    Rust,
    Php,
}

impl LanguageArg {
    pub fn target(&self) -> TargetLanguage {
        match self {
            LanguageArg::Python => TargetLanguage::Python,
            LanguageArg::Typescript => TargetLanguage::TypeScript,
            LanguageArg::Go => TargetLanguage::Go,
            LanguageArg::Rust => TargetLanguage::Rust,
            LanguageArg::Php => TargetLanguage::Php,
        }
    }
}
