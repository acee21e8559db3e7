//! Prompt templates.
//!
//! Every function here is pure: the same inputs always produce the same text.

use crate::characters_line;
use storyloom_core::StoryMetadata;

/// Stands in for each metadata field when no metadata was supplied.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Prompt asking for the next ~125-word passage.
///
/// `previous_context` is whatever the memory strategy carried forward, and may
/// be empty. Without metadata every metadata line reads [`NOT_SPECIFIED`].
pub fn generation_prompt(
    beat: &str,
    previous_context: &str,
    metadata: Option<&StoryMetadata>,
) -> String {
    let (genre, setting, characters, style) = match metadata {
        Some(m) => (
            m.genre.clone(),
            m.setting.clone(),
            characters_line(m),
            m.style.clone(),
        ),
        None => (
            NOT_SPECIFIED.to_string(),
            NOT_SPECIFIED.to_string(),
            NOT_SPECIFIED.to_string(),
            NOT_SPECIFIED.to_string(),
        ),
    };

    format!(
        "\nPrevious context:\n\"{previous_context}\"\n\n\
         Story Metadata:\n\
         - Genre: {genre}\n\
         - Setting: {setting}\n\
         - Characters: {characters}\n\
         - Prose Style: {style}\n\n\
         You are a novelist tasked with turning story beats into beautifully written prose. \
         Given the current beat and the metadata above, write a vivid, emotionally resonant \
         passage (approximately 125 words) that flows with the previous content.\n\n\
         Current beat:\n\"{beat}\"\n\n\
         Now write the next passage:\n"
    )
}

/// Prompt asking for a concise summary of the running context.
pub fn summary_prompt(context: &str) -> String {
    format!(
        "\nYou are a summarization expert. Please provide a concise summary of the following text:\n\n\
         Context:\n\"{context}\"\n\n\
         Summary:\n"
    )
}

/// Prompt asking whether two adjacent passages read as a coherent transition.
pub fn coherence_prompt(previous_text: &str, current_text: &str) -> String {
    format!(
        "\nEvaluate the coherence between the following two paragraphs.\n\
         Paragraph 1: \"{previous_text}\"\n\
         Paragraph 2: \"{current_text}\"\n\
         Is the transition between these paragraphs coherent? \
         Answer only \"Good\" or \"Needs Improvement\" followed by a brief explanation.\n"
    )
}

/// Prompt asking whether a passage respects the formatted metadata.
pub fn metadata_judgment_prompt(metadata: &str, passage: &str) -> String {
    format!(
        "\nEvaluate the following passage for how well it adheres to the given story metadata.\n\n\
         Metadata:\n\"{metadata}\"\n\n\
         Passage:\n\"{passage}\"\n\n\
         Is the passage consistent with the metadata above? \
         Answer only \"Good\" or \"Needs Improvement\" with a brief explanation.\n"
    )
}
