use super::RelationKind;
use indexmap::{IndexMap, IndexSet};

/// Bookkeeping shared between the steps of one resolution run.
#[derive(Debug, Default)]
pub(super) struct State {
    /// Relationships emitted so far, keyed by `(source, target)`.
    emitted: IndexMap<(String, String), RelationKind>,

    /// Canonical `(lesser, greater)` pairs already declared many-to-many.
    many_to_many: IndexSet<(String, String)>,

    /// Many-to-one sides waiting for their one-to-many counterpart, keyed by
    /// `(one side, many side)`.
    deferred: IndexMap<(String, String), String>,
}

/// A many-to-one relationship whose one-to-many counterpart was never
/// emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    /// The entity expected to declare the one-to-many side.
    pub owner: String,

    /// The entity declaring the many-to-one side.
    pub source: String,

    /// The many-to-one field.
    pub field: String,
}

impl State {
    pub(super) fn record(&mut self, source: &str, target: &str, kind: RelationKind) {
        self.emitted
            .insert((source.to_string(), target.to_string()), kind);
    }

    pub(super) fn emitted(&self, source: &str, target: &str) -> Option<RelationKind> {
        self.emitted
            .get(&(source.to_string(), target.to_string()))
            .copied()
    }

    /// Marks the unordered pair as declared many-to-many. Returns `false` if
    /// it already was.
    pub(super) fn claim_many_to_many(&mut self, a: &str, b: &str) -> bool {
        let key = if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        };
        self.many_to_many.insert(key)
    }

    pub(super) fn defer(&mut self, owner: &str, source: &str, field: &str) {
        self.deferred
            .insert((owner.to_string(), source.to_string()), field.to_string());
    }

    /// Removes and returns the deferred field waiting on `(owner, source)`.
    pub(super) fn take_deferred(&mut self, owner: &str, source: &str) -> Option<String> {
        self.deferred
            .shift_remove(&(owner.to_string(), source.to_string()))
    }

    pub(super) fn into_pending(self) -> Vec<Pending> {
        self.deferred
            .into_iter()
            .map(|((owner, source), field)| Pending {
                owner,
                source,
                field,
            })
            .collect()
    }
}
