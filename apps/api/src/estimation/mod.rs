// Estimate generation: scope text (typed or extracted from a PDF) → prompt → LLM → markdown.
// All LLM calls go through llm_client via the EstimateGenerator trait.

pub mod extract;
pub mod generator;
pub mod handlers;
pub mod prompts;
