//! Reaction aggregation - per-message emoji reactions grouped for display
//!
//! Each rendered message owns one [`ReactionSet`]: an ordered collection of
//! emoji entries, each tracking which members reacted with it. The set is
//! mutated by [`ReactionSet::toggle`] for local user actions and by the
//! idempotent [`ReactionSet::insert`] / [`ReactionSet::remove`] for
//! deliveries that originate elsewhere. All mutation is synchronous on the
//! owned value; callers serialize local and remote mutations through the
//! same event queue.

use serde::Serialize;

use crate::value_objects::Snowflake;

/// One emoji entry on a message: the symbol plus the members who applied it.
///
/// Invariants upheld by [`ReactionSet`]:
/// - `members` is never empty while the entry is stored
/// - a member ID appears at most once in `members`
/// - `members` keeps the order in which members reacted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reaction {
    pub emoji: String,
    pub members: Vec<Snowflake>,
}

impl Reaction {
    fn new(emoji: &str, member_id: Snowflake) -> Self {
        Self {
            emoji: emoji.to_owned(),
            members: vec![member_id],
        }
    }

    /// Number of members who reacted with this emoji
    #[inline]
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Check whether a member is among the reactors
    #[inline]
    pub fn has_member(&self, member_id: Snowflake) -> bool {
        self.members.contains(&member_id)
    }
}

/// Which side of the add/remove pair a toggle landed on.
///
/// A caller wiring up a broadcast collaborator would map `Added` to the
/// server's add-reaction call and `Removed` to the delete call; no such
/// transport exists in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The member's reaction was added
    Added,
    /// The member's reaction was removed
    Removed,
}

impl ToggleOutcome {
    #[inline]
    pub fn is_added(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Aggregated reaction count for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCount {
    pub emoji: String,
    pub count: i32,
    pub me: bool,
}

impl ReactionCount {
    /// Create a new ReactionCount
    pub fn new(emoji: String, count: i32, me: bool) -> Self {
        Self { emoji, count, me }
    }
}

/// Ordered set of reactions on one message, unique by emoji.
///
/// Entry order is the order each emoji was first used and governs display
/// order. Entries are pruned the instant their last reactor is removed, so
/// every stored entry has at least one member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReactionSet {
    entries: Vec<Reaction>,
}

impl ReactionSet {
    /// Create an empty set (the state of a freshly rendered message)
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a member's reaction for an emoji.
    ///
    /// - emoji not present: a new entry is appended with this member
    /// - member not in the entry: the member is appended
    /// - member already in the entry: the member is removed, and the entry
    ///   itself is removed if no members remain
    ///
    /// `emoji` must be non-empty and `member_id` non-zero; both are caller
    /// preconditions, not failure paths.
    pub fn toggle(&mut self, emoji: &str, member_id: Snowflake) -> ToggleOutcome {
        debug_assert!(!emoji.is_empty());
        debug_assert!(!member_id.is_zero());

        match self.position(emoji) {
            None => {
                self.entries.push(Reaction::new(emoji, member_id));
                ToggleOutcome::Added
            }
            Some(idx) => {
                let entry = &mut self.entries[idx];
                match entry.members.iter().position(|&m| m == member_id) {
                    None => {
                        entry.members.push(member_id);
                        ToggleOutcome::Added
                    }
                    Some(pos) => {
                        entry.members.remove(pos);
                        if entry.members.is_empty() {
                            self.entries.remove(idx);
                        }
                        ToggleOutcome::Removed
                    }
                }
            }
        }
    }

    /// Record a member's reaction if not already present.
    ///
    /// Idempotent form of the add half of [`toggle`](Self::toggle), for
    /// deliveries that state a fact ("member X reacted") rather than a
    /// request to flip. Returns whether the set changed.
    pub fn insert(&mut self, emoji: &str, member_id: Snowflake) -> bool {
        match self.position(emoji) {
            None => {
                self.entries.push(Reaction::new(emoji, member_id));
                true
            }
            Some(idx) => {
                let entry = &mut self.entries[idx];
                if entry.has_member(member_id) {
                    false
                } else {
                    entry.members.push(member_id);
                    true
                }
            }
        }
    }

    /// Remove a member's reaction if present, pruning an emptied entry.
    ///
    /// Idempotent form of the remove half of [`toggle`](Self::toggle).
    /// Returns whether the set changed.
    pub fn remove(&mut self, emoji: &str, member_id: Snowflake) -> bool {
        let Some(idx) = self.position(emoji) else {
            return false;
        };
        let entry = &mut self.entries[idx];
        let Some(pos) = entry.members.iter().position(|&m| m == member_id) else {
            return false;
        };
        entry.members.remove(pos);
        if entry.members.is_empty() {
            self.entries.remove(idx);
        }
        true
    }

    /// Remove every reaction (moderator bulk removal)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up the entry for an emoji
    pub fn get(&self, emoji: &str) -> Option<&Reaction> {
        self.position(emoji).map(|idx| &self.entries[idx])
    }

    /// Iterate entries in display order
    pub fn iter(&self) -> impl Iterator<Item = &Reaction> {
        self.entries.iter()
    }

    /// Number of distinct emoji entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render-ready aggregates in display order.
    ///
    /// One [`ReactionCount`] per entry; `me` marks the entries the viewing
    /// member has reacted to, which the view uses to highlight the pill that
    /// doubles as that reaction's toggle control.
    pub fn counts(&self, viewer: Snowflake) -> Vec<ReactionCount> {
        self.entries
            .iter()
            .map(|r| ReactionCount::new(r.emoji.clone(), r.count() as i32, r.has_member(viewer)))
            .collect()
    }

    fn position(&self, emoji: &str) -> Option<usize> {
        self.entries.iter().position(|r| r.emoji == emoji)
    }
}

impl<'a> IntoIterator for &'a ReactionSet {
    type Item = &'a Reaction;
    type IntoIter = std::slice::Iter<'a, Reaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
