//! Name resolution: computes the display name a card should carry.
//!
//! # Precedence (for beginners)
//!
//! A card can be matched by three layers of configuration.  The first layer
//! that produces a name wins:
//!
//! ```text
//! 1. renames[card_id]        "Strike_R"  -> "打击"        most specific
//! 2. renames[original_name]  "Strike"    -> "重拳"
//! 3. batch_rule              prefix + original_name + suffix
//! 4. nothing                 keep the original name
//! ```
//!
//! IDs are stable across languages and display-name changes, so an ID match
//! beats a name match.  The batch rule is a bulk fallback and never overrides
//! a specific entry.
//!
//! Everything here is a total, side-effect-free function: "no match" is the
//! ordinary `None` result, never an error.

use super::config::Configuration;

/// CJK spelling of the strike keyword, matched case-sensitively.
pub const STRIKE_KEYWORD_CJK: &str = "打击";

/// Latin spelling of the strike keyword, matched after lower-casing.
pub const STRIKE_KEYWORD_LATIN: &str = "strike";

/// The identity of a card as seen at one lifecycle point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRef<'a> {
    /// Stable card identifier (e.g. `"Strike_R"`).
    pub id: &'a str,
    /// The name the card currently carries, if the host has assigned one.
    pub current_name: Option<&'a str>,
}

impl<'a> CardRef<'a> {
    pub fn new(id: &'a str, current_name: Option<&'a str>) -> Self {
        Self { id, current_name }
    }
}

/// Outcome of [`apply_name`].
///
/// Keyword tagging only ever adds a classification, so there is no field for
/// removing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedResult {
    /// The name to commit, or `None` to leave the card untouched.
    pub new_name: Option<String>,
    /// Whether the host should add the strike tag (if not already present).
    pub should_add_keyword_tag: bool,
}

/// Resolves the configured display name for a card.
///
/// Returns `None` when no layer applies and the original name must be kept.
pub fn resolve(config: &Configuration, id: &str, original_name: Option<&str>) -> Option<String> {
    if let Some(name) = config.renames.get(id) {
        return Some(name.to_string());
    }

    let original_name = original_name?;

    if let Some(name) = config.renames.get(original_name) {
        return Some(name.to_string());
    }

    config.batch_rule.apply(original_name)
}

/// Returns `true` if `name` looks like a strike card.
///
/// Matches `"打击"` verbatim or `"strike"` in any letter case.
pub fn detects_keyword(name: &str) -> bool {
    name.contains(STRIKE_KEYWORD_CJK) || name.to_lowercase().contains(STRIKE_KEYWORD_LATIN)
}

/// Resolves a card's name and decides whether the strike tag should be added.
///
/// The tag signal is only raised for cards that actually receive a new name;
/// a card keeping its original name keeps whatever tags the game gave it.
pub fn apply_name(config: &Configuration, card: CardRef<'_>) -> AppliedResult {
    let new_name = resolve(config, card.id, card.current_name);
    let should_add_keyword_tag = new_name.as_deref().is_some_and(detects_keyword);
    AppliedResult {
        new_name,
        should_add_keyword_tag,
    }
}
