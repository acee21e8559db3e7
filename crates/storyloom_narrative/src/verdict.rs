//! Classifying free-text judge verdicts.

/// Whether a judge verdict counts as a pass.
///
/// The judge is asked to answer "Good" or "Needs Improvement" followed by an
/// explanation, so a verdict passes when, after trimming, it starts with
/// "good" in any case. This is a prefix match only: "Good, but..." and
/// "Goodness, no" both pass. Keep it that loose until the judge output format
/// is pinned down.
///
/// # Examples
///
/// ```
/// use storyloom_narrative::verdict_passes;
///
/// assert!(verdict_passes("  GOOD. The transition is smooth."));
/// assert!(!verdict_passes("Needs Improvement: the tone shifts abruptly."));
/// ```
pub fn verdict_passes(verdict: &str) -> bool {
    verdict.trim().to_lowercase().starts_with("good")
}
