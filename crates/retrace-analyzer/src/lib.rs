pub mod analyzer;
pub mod client;
pub mod context;
pub mod error;
pub mod result;

pub use analyzer::RequestAnalyzer;
pub use client::{DEFAULT_MODEL, GeminiClient, GenerationClient};
pub use context::RequestContext;
pub use error::ClientError;
pub use result::{AnalysisResult, TargetLanguage};
