use serde::{Deserialize, Serialize};

/// Reproduction-script targets.
///
/// A closed set: the structured result carries one field per variant,
/// so adding a language is a deliberate schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    Python,
    TypeScript,
    Go,
    Rust,
    Php,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::Python,
        TargetLanguage::TypeScript,
        TargetLanguage::Go,
        TargetLanguage::Rust,
        TargetLanguage::Php,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TargetLanguage::Python => "Python",
            TargetLanguage::TypeScript => "TypeScript",
            TargetLanguage::Go => "Go",
            TargetLanguage::Rust => "Rust",
            TargetLanguage::Php => "PHP",
        }
    }
}

/// Structured outcome of analyzing one HTTP exchange.
///
/// Field names mirror the JSON schema the generation service is asked
/// to fill. `error_analysis` is empty for successful exchanges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    #[serde(default)]
    pub error_analysis: String,
    pub python_code: String,
    pub typescript_code: String,
    pub go_code: String,
    pub rust_code: String,
    pub php_code: String,
}

impl AnalysisResult {
    /// The fixed fallback returned when the generation service cannot
    /// be used successfully.
    pub fn degraded() -> Self {
        Self {
            summary: "Failed to analyze request.".to_string(),
            error_analysis: "Could not generate error analysis.".to_string(),
            python_code: "# Error generating reproduction code.".to_string(),
            typescript_code: "// Error generating reproduction code.".to_string(),
            go_code: "// Error generating reproduction code.".to_string(),
            rust_code: "// Error generating reproduction code.".to_string(),
            php_code: "// Error generating reproduction code.".to_string(),
        }
    }

    pub fn code_for(&self, language: TargetLanguage) -> &str {
        match language {
            TargetLanguage::Python => &self.python_code,
            TargetLanguage::TypeScript => &self.typescript_code,
            TargetLanguage::Go => &self.go_code,
            TargetLanguage::Rust => &self.rust_code,
            TargetLanguage::Php => &self.php_code,
        }
    }
}
