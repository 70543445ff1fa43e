use crate::error::GenerationError;
use crate::parse::{dedup_by_url, parse_research_reply};
use crate::prompt::{fallback_image_prompt, research_instruction};
use crate::provider::{GenerateContentRequest, Part};
use crate::types::{GenerationRequest, ResearchResult};

use super::InfographicEngine;

impl InfographicEngine {
    /// Research `request.topic` with search grounding and plan the image.
    ///
    /// Provider failures propagate. A reply that ignores the requested
    /// format still succeeds: missing facts become an empty list and a
    /// missing image prompt is synthesized from the topic and instructions.
    pub async fn research(
        &self,
        request: &GenerationRequest,
    ) -> Result<ResearchResult, GenerationError> {
        tracing::info!(
            "Researching topic {:?} (level: {}, style: {}, language: {})",
            request.topic,
            request.level,
            request.style,
            request.language
        );

        let body = GenerateContentRequest::from_parts(vec![Part::text(research_instruction(request))])
            .with_google_search();
        let response = self.provider.generate_content(&self.models.text, &body).await?;

        let parsed = parse_research_reply(&response.text());
        let image_prompt = match parsed.image_prompt {
            Some(prompt) => prompt,
            None => {
                tracing::warn!("Research reply has no image prompt, using fallback");
                fallback_image_prompt(request)
            }
        };
        if parsed.facts.is_empty() {
            tracing::warn!("Research reply has no facts");
        }

        let search_results = dedup_by_url(response.web_sources());
        tracing::debug!(
            "Research parsed: {} facts, {} sources",
            parsed.facts.len(),
            search_results.len()
        );

        Ok(ResearchResult {
            image_prompt,
            facts: parsed.facts,
            search_results,
        })
    }
}
