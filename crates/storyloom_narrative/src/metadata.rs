//! Flattening story metadata into a single descriptive line.

use storyloom_core::StoryMetadata;
use storyloom_error::{FormattingError, FormattingErrorKind};
use tracing::warn;

/// Returned by [`format_metadata_or_unavailable`] when the metadata is malformed.
pub const METADATA_UNAVAILABLE: &str = "Metadata unavailable due to an error.";

/// Render the cast as `"{name}: {description}"` pairs joined by `", "`.
///
/// # Examples
///
/// ```
/// use storyloom_core::{Character, StoryMetadata};
/// use storyloom_narrative::characters_line;
///
/// let metadata = StoryMetadata {
///     setting: String::new(),
///     genre: String::new(),
///     style: String::new(),
///     characters: vec![
///         Character::new("Mara", "a lighthouse keeper"),
///         Character::new("Tobin", "her brother"),
///     ],
/// };
/// assert_eq!(characters_line(&metadata), "Mara: a lighthouse keeper, Tobin: her brother");
/// ```
pub fn characters_line(metadata: &StoryMetadata) -> String {
    metadata
        .characters
        .iter()
        .map(|c| format!("{}: {}", c.name, c.description))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flatten metadata into
/// `"Genre: {genre}. Setting: {setting}. Characters: {cast}. Prose Style: {style}."`.
///
/// Fails when a character has a blank name or description.
pub fn format_metadata(metadata: &StoryMetadata) -> Result<String, FormattingError> {
    for (index, character) in metadata.characters.iter().enumerate() {
        let blank = if character.name.trim().is_empty() {
            Some("name")
        } else if character.description.trim().is_empty() {
            Some("description")
        } else {
            None
        };
        if let Some(field) = blank {
            return Err(FormattingError::new(
                FormattingErrorKind::MissingCharacterField {
                    index,
                    field: field.to_string(),
                },
            ));
        }
    }

    Ok(format!(
        "Genre: {}. Setting: {}. Characters: {}. Prose Style: {}.",
        metadata.genre,
        metadata.setting,
        characters_line(metadata),
        metadata.style
    ))
}

/// Like [`format_metadata`], but a malformed block yields [`METADATA_UNAVAILABLE`].
pub fn format_metadata_or_unavailable(metadata: &StoryMetadata) -> String {
    format_metadata(metadata).unwrap_or_else(|e| {
        warn!(error = %e, "Metadata formatting failed");
        METADATA_UNAVAILABLE.to_string()
    })
}
