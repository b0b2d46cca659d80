//! Report body text acquisition: best-effort external generation with a
//! deterministic local fallback. `generate` never fails from the caller's
//! point of view.

use tracing::{info, warn};

use crate::config::ProviderConfig;

pub mod fallback;
mod openai;

use openai::OpenAiClient;

const SYSTEM_PROMPT: &str = "You are a professional research analyst creating detailed reports.";

/// Outcome of one external generation attempt. Absence of a client, network
/// failure, provider error and empty output all collapse into `Unavailable`;
/// the fallback decision happens in exactly one place.
enum ProviderResult {
    Success(String),
    Unavailable,
}

pub struct ContentProvider {
    client: Option<OpenAiClient>,
}

impl ContentProvider {
    pub fn from_config(config: &ProviderConfig) -> Self {
        let client = match &config.api_key {
            Some(key) => match OpenAiClient::new(config, key.clone()) {
                Ok(c) => Some(c),
                Err(e) => {
                    warn!(error = %e, "could not build provider client; using local template only");
                    None
                }
            },
            None => None,
        };
        Self { client }
    }

    /// Produce report body text for a topic. Falls back to the local
    /// template on any provider problem, so this always yields content.
    pub async fn generate(&self, topic: &str) -> String {
        match self.try_external(topic).await {
            ProviderResult::Success(text) => text,
            ProviderResult::Unavailable => fallback::demo_report(topic),
        }
    }

    async fn try_external(&self, topic: &str) -> ProviderResult {
        let Some(client) = &self.client else {
            return ProviderResult::Unavailable;
        };
        match client.complete(SYSTEM_PROMPT, &report_prompt(topic)).await {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    warn!(topic, "provider returned empty content; using local template");
                    ProviderResult::Unavailable
                } else {
                    info!(topic, chars = trimmed.len(), "provider content generated");
                    ProviderResult::Success(trimmed.to_string())
                }
            }
            Err(e) => {
                warn!(topic, error = %e, "provider call failed; using local template");
                ProviderResult::Unavailable
            }
        }
    }
}

fn report_prompt(topic: &str) -> String {
    format!(
        r#"Create a comprehensive, detailed research report on the topic: "{topic}"

The report should include:
1. Executive Summary
2. Introduction and Background
3. Current State Analysis
4. Key Findings and Insights
5. Challenges and Opportunities
6. Future Trends and Predictions
7. Recommendations
8. Conclusion

Make the report professional, well-structured, and informative.
Use clear headings for each section (end each heading with a colon).
Provide detailed explanations and analysis.
The report should be suitable for business or academic purposes."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    fn no_key_config() -> ProviderConfig {
        ProviderConfig {
            api_key: None,
            base_url: "http://localhost:9".into(),
            model: "gpt-3.5-turbo".into(),
            timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn without_api_key_generate_returns_fallback() {
        let provider = ContentProvider::from_config(&no_key_config());
        let out = provider.generate("Quantum Computing").await;
        assert_eq!(out, fallback::demo_report("Quantum Computing"));
    }

    #[tokio::test]
    async fn unreachable_provider_degrades_to_fallback() {
        // Port 9 (discard) refuses connections; the single attempt fails and
        // the fallback must be byte-identical to the local template.
        let config = ProviderConfig {
            api_key: Some("sk-test".into()),
            ..no_key_config()
        };
        let provider = ContentProvider::from_config(&config);
        let out = provider.generate("Edge Caching").await;
        assert_eq!(out, fallback::demo_report("Edge Caching"));
    }

    #[test]
    fn prompt_lists_all_eight_sections() {
        let prompt = report_prompt("Rust");
        for (i, heading) in fallback::SECTION_HEADINGS.iter().enumerate() {
            let name = heading.trim_end_matches(':');
            assert!(prompt.contains(&format!("{}. {}", i + 1, name)));
        }
        assert!(prompt.contains("\"Rust\""));
    }
}
