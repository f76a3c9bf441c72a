//! Display labels for providers and models.

use super::info::ModelInfo;

/// Family prefixes stripped from model names before display.
/// Case-sensitive and anchored at the start; only the first match applies.
const STRIPPED_PREFIXES: &[&str] = &["gpt-", "gemini-", "llama-"];

/// Display label for a provider key. Known providers get a branded name;
/// anything else passes through unchanged.
pub fn provider_display_name(provider: &str) -> &str {
    match provider {
        "openai" => "OpenAI",
        "gemini" => "Google Gemini",
        "nvdev" => "NVIDIA",
        other => other,
    }
}

/// Display label for a model: family prefix stripped, remainder upper-cased,
/// followed by its token budget. `gpt-4o` / 128000 becomes `4O (128000 tokens)`.
pub fn model_display_name(model: &ModelInfo) -> String {
    let base = STRIPPED_PREFIXES
        .iter()
        .find_map(|prefix| model.name.strip_prefix(prefix))
        .unwrap_or(&model.name);
    format!("{} ({} tokens)", base.to_uppercase(), model.max_tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, max_tokens: u32) -> ModelInfo {
        ModelInfo {
            id: "x".to_string(),
            name: name.to_string(),
            max_tokens,
        }
    }

    #[test]
    fn strips_gpt_prefix_and_uppercases() {
        assert_eq!(
            model_display_name(&model("gpt-4o", 128000)),
            "4O (128000 tokens)"
        );
    }

    #[test]
    fn strips_gemini_prefix() {
        assert_eq!(
            model_display_name(&model("gemini-2.0-flash", 8192)),
            "2.0-FLASH (8192 tokens)"
        );
    }

    #[test]
    fn strips_llama_prefix() {
        assert_eq!(
            model_display_name(&model("llama-3.1-nemotron", 4096)),
            "3.1-NEMOTRON (4096 tokens)"
        );
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        assert_eq!(
            model_display_name(&model("GPT-4", 1000)),
            "GPT-4 (1000 tokens)"
        );
    }

    #[test]
    fn prefix_must_be_anchored_at_start() {
        assert_eq!(
            model_display_name(&model("my-gpt-4", 1000)),
            "MY-GPT-4 (1000 tokens)"
        );
    }

    #[test]
    fn name_without_prefix_is_only_uppercased() {
        assert_eq!(
            model_display_name(&model("claude-3-haiku", 200000)),
            "CLAUDE-3-HAIKU (200000 tokens)"
        );
    }

    #[test]
    fn known_providers_get_branded_labels() {
        assert_eq!(provider_display_name("openai"), "OpenAI");
        assert_eq!(provider_display_name("gemini"), "Google Gemini");
        assert_eq!(provider_display_name("nvdev"), "NVIDIA");
    }

    #[test]
    fn unknown_provider_passes_through() {
        assert_eq!(provider_display_name("custom"), "custom");
    }
}
