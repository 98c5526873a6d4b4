//! Configurable LLM prompt templates used by the engine.
//!
//! Every template has a hard-coded default that can be replaced at deploy
//! time through an environment variable derived from its key.

/// All prompt template keys as constants.
pub mod keys {
    /// System prompt for turning a rough idea into a video generation prompt.
    pub const VIDEO_PROMPT_SYSTEM: &str = "video_prompt.system_prompt";
    /// System prompt for prompt enhancement. Must ask for the JSON answer shape.
    pub const ENHANCE_SYSTEM: &str = "enhance.system_prompt";
}

/// Default values for all prompt templates.
pub mod defaults {
    pub const VIDEO_PROMPT_SYSTEM: &str = "You are an expert at creating detailed video generation prompts. \
Your task is to transform user descriptions into detailed, structured prompts optimized for AI video generation. \
Include specific visual details, camera movements, lighting, style, and composition.";

    pub const ENHANCE_SYSTEM: &str = r#"You are an expert prompt engineer for AI video generation.
Analyze the given prompt and provide:
1. An enhanced version with more visual details
2. Suggestions for improvement
3. Important keywords extracted

Respond in the following JSON format:
{
  "enhancedPrompt": "detailed enhanced prompt",
  "suggestions": ["suggestion 1", "suggestion 2"],
  "keywords": ["keyword1", "keyword2"]
}"#;
}

/// Convert a template key to its environment variable name.
pub fn key_to_env_var(key: &str) -> String {
    format!("REELGATE_PROMPT_{}", key.to_uppercase().replace('.', "_"))
}

/// Get the default value for a template key.
pub fn get_default(key: &str) -> Option<&'static str> {
    match key {
        keys::VIDEO_PROMPT_SYSTEM => Some(defaults::VIDEO_PROMPT_SYSTEM),
        keys::ENHANCE_SYSTEM => Some(defaults::ENHANCE_SYSTEM),
        _ => None,
    }
}

/// Get all known template keys.
pub fn all_keys() -> Vec<&'static str> {
    vec![keys::VIDEO_PROMPT_SYSTEM, keys::ENHANCE_SYSTEM]
}

/// Resolve a template using `lookup` for environment access.
///
/// Blank overrides are ignored.
pub fn resolve_with(key: &str, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    let default = get_default(key)?;
    let value = lookup(&key_to_env_var(key))
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string());
    Some(value)
}

/// Resolved templates, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplates {
    pub video_prompt_system: String,
    pub enhance_system: String,
}

impl PromptTemplates {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            resolve_with(key, &lookup).unwrap_or_else(|| default.to_string())
        };
        Self {
            video_prompt_system: get(keys::VIDEO_PROMPT_SYSTEM, defaults::VIDEO_PROMPT_SYSTEM),
            enhance_system: get(keys::ENHANCE_SYSTEM, defaults::ENHANCE_SYSTEM),
        }
    }
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
