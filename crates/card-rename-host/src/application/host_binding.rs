//! HostBinding: commits resolved names to the host's card objects.
//!
//! The host implements [`NamedEntity`] for its card type and calls
//! [`commit_name`] at every lifecycle point where a card's name may have been
//! (re)assigned, such as construction and upgrade.
//!
//! # Why resolve against the base name? (for beginners)
//!
//! A card may be initialised more than once.  If the second call resolved
//! against the *display* name it would see the already-decorated text and a
//! batch prefix would be applied twice (`"铁壁铁壁Defend"`).  Resolving
//! against the base name the host assigned makes every call produce the same
//! result, so hosts are free to call `commit_name` from as many hook points as
//! they need.

use card_rename_core::{apply_name, AppliedResult, CardRef, Configuration};
use tracing::{debug, info};

/// A host object whose display name can be overridden.
pub trait NamedEntity {
    /// Stable identifier, or `None` if the host has not assigned one.
    fn entity_id(&self) -> Option<&str>;
    /// The name the host itself assigned, before any override.
    fn base_name(&self) -> Option<&str>;
    /// The name currently shown.
    fn display_name(&self) -> Option<&str>;
    /// Replaces the name currently shown.
    fn set_display_name(&mut self, name: String);
    /// Whether the entity already carries the strike tag.
    fn has_keyword_tag(&self) -> bool;
    /// Adds the strike tag.
    fn add_keyword_tag(&mut self);
}

/// Resolves and commits the configured name for `entity`.
///
/// Entities without an ID are left untouched.  The strike tag is only ever
/// added, never removed, so classification the host assigned for its own
/// reasons is preserved.
pub fn commit_name<E: NamedEntity + ?Sized>(config: &Configuration, entity: &mut E) -> AppliedResult {
    let Some(id) = entity.entity_id() else {
        return AppliedResult::default();
    };
    let result = apply_name(config, CardRef::new(id, entity.base_name()));

    if let Some(new_name) = &result.new_name {
        info!(
            "renaming card {id}: {:?} -> {new_name:?}",
            entity.display_name().unwrap_or_default()
        );
        entity.set_display_name(new_name.clone());
    }

    if result.should_add_keyword_tag && !entity.has_keyword_tag() {
        entity.add_keyword_tag();
        debug!("name contains a strike keyword, added strike tag");
    }

    result
}
