//! Story metadata supplied alongside the beats.

use serde::{Deserialize, Serialize};

/// A named character and a short description of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Character name
    pub name: String,
    /// One-line description
    pub description: String,
}

impl Character {
    /// Create a character entry.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Genre, setting, cast, and prose style the generated story should respect.
///
/// Read-only for the lifetime of a generation request.
///
/// # Examples
///
/// ```
/// use storyloom_core::{Character, StoryMetadata};
///
/// let metadata = StoryMetadata {
///     setting: "A fog-bound harbor town".to_string(),
///     genre: "Gothic mystery".to_string(),
///     style: "Spare, first person".to_string(),
///     characters: vec![Character::new("Mara", "a lighthouse keeper")],
/// };
/// assert_eq!(metadata.characters.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryMetadata {
    /// Where the story takes place
    pub setting: String,
    /// Genre label
    pub genre: String,
    /// Desired prose style
    pub style: String,
    /// Cast list, in the order supplied
    pub characters: Vec<Character>,
}
