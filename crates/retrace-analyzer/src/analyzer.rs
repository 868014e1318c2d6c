use crate::client::GenerationClient;
use crate::context::RequestContext;
use crate::error::ClientError;
use crate::result::AnalysisResult;
use retrace_core::har::Entry;

const SYSTEM_INSTRUCTION: &str = "\
You are an expert Network Security Engineer and Backend Developer.
Your job is to analyze HTTP requests from a HAR file (User Session).

You need to deconstruct the request and explain it in these ways:
1. **Summary**: Plain English explanation of the User Action (e.g., \"User created a new admin account named 'John'\").
2. **Error Analysis**: If the response status code is 4xx or 5xx, specifically explain the error, why it likely happened based on the request/response, and suggest potential fixes.
3. **Reproduction**: Machine Instructions/Reproduction code in multiple languages to programmatically reproduce this exact action.

Be concise, technical but accessible. Focus on the payload, the intent, and any failure reasons.";

/// Turns one HTTP exchange plus its synthesized curl command into a
/// structured explanation, delegating the reasoning to an injected
/// [`GenerationClient`].
pub struct RequestAnalyzer<C> {
    client: C,
}

impl<C: GenerationClient> RequestAnalyzer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Analyze one entry. Never fails: any problem with the external
    /// call (transport, timeout, malformed reply, schema violation)
    /// collapses into the fixed degraded result.
    pub async fn analyze(&self, entry: &Entry, curl_command: &str) -> AnalysisResult {
        match self.try_analyze(entry, curl_command).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Analysis failed, returning degraded result: {}", e);
                AnalysisResult::degraded()
            }
        }
    }

    async fn try_analyze(
        &self,
        entry: &Entry,
        curl_command: &str,
    ) -> Result<AnalysisResult, ClientError> {
        let context = RequestContext::from_entry(entry, curl_command);
        let prompt = build_prompt(&context)?;

        let text = self.client.generate(SYSTEM_INSTRUCTION, &prompt).await?;

        let mut result: AnalysisResult =
            serde_json::from_str(&text).map_err(|e| ClientError::Contract(e.to_string()))?;

        if result.summary.trim().is_empty() {
            return Err(ClientError::Contract("summary is empty".to_string()));
        }

        // A successful exchange has nothing to diagnose, whatever the
        // service decided to put there.
        if (200..400).contains(&entry.response.status) {
            result.error_analysis.clear();
        }

        Ok(result)
    }
}

fn build_prompt(context: &RequestContext) -> Result<String, ClientError> {
    let context_json =
        serde_json::to_string_pretty(context).map_err(|e| ClientError::Contract(e.to_string()))?;

    Ok(format!(
        "Analyze the following HTTP Request context:\n\
         {context_json}\n\
         \n\
         Determine the likely user intent (Add, Delete, Update, View, Login, etc.).\n\
         \n\
         If the 'responseStatus' is 4xx or 5xx, provide a detailed 'errorAnalysis' explaining the failure and next steps.\n\
         If successful (2xx/3xx), 'errorAnalysis' should be an empty string.\n\
         \n\
         Provide reproduction scripts for the following languages:\n\
         - Python (using 'requests')\n\
         - TypeScript (using 'fetch')\n\
         - Go (using 'net/http')\n\
         - Rust (using 'reqwest')\n\
         - PHP (using 'curl' or 'guzzle')\n\
         \n\
         Ensure headers, cookies, and payloads are correctly formatted in the code.\n"
    ))
}
