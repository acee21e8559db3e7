//! Memory strategies for carrying context between beats.

use serde::{Deserialize, Serialize};

/// How much previously generated prose is carried forward into the next prompt.
///
/// # Examples
///
/// ```
/// use storyloom_core::MemoryStrategy;
/// use std::str::FromStr;
///
/// assert_eq!(MemoryStrategy::default(), MemoryStrategy::Full);
/// assert_eq!(MemoryStrategy::from_str("summary").unwrap(), MemoryStrategy::Summary);
/// assert_eq!(MemoryStrategy::None.to_string(), "none");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MemoryStrategy {
    /// Every passage is appended to the context; the context grows without bound
    #[default]
    Full,
    /// Context is replaced by an LLM summary of itself plus the newest passage
    Summary,
    /// Context is cleared after every beat
    None,
}
