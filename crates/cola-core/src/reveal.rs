//! One-shot reveal of elements entering the viewport.
//!
//! Elements start out pending. The first intersecting report for an element
//! reveals it and takes it out of observation; later reports for it are
//! ignored, so the transition is monotonic.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::debug;

use crate::attach::Attachment;

/// One entry of an intersection report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection<K> {
    pub target: K,
    pub is_intersecting: bool,
}

impl<K> Intersection<K> {
    pub fn new(target: K, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
        }
    }
}

/// Tracks which marked elements have been revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    pending: HashSet<K>,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    /// Attach to the marked elements. Not applicable when there are none.
    pub fn attach(targets: impl IntoIterator<Item = K>) -> Attachment<Self> {
        let pending: HashSet<K> = targets.into_iter().collect();
        if pending.is_empty() {
            return Attachment::not_applicable("reveal targets");
        }
        Attachment::Attached(Self {
            pending,
            revealed: HashSet::new(),
        })
    }

    /// Process one batch of intersection reports.
    ///
    /// Returns the targets that just became visible. Each should receive the
    /// visible marker and be unobserved.
    pub fn on_intersections(
        &mut self,
        entries: impl IntoIterator<Item = Intersection<K>>,
    ) -> Vec<K> {
        let mut newly_visible = Vec::new();
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if self.pending.remove(&entry.target) {
                self.revealed.insert(entry.target.clone());
                newly_visible.push(entry.target);
            }
        }
        if !newly_visible.is_empty() {
            debug!(
                revealed = newly_visible.len(),
                pending = self.pending.len(),
                "reveal batch processed"
            );
        }
        newly_visible
    }

    pub fn is_revealed(&self, target: &K) -> bool {
        self.revealed.contains(target)
    }

    pub fn is_pending(&self, target: &K) -> bool {
        self.pending.contains(target)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// True once every target has been revealed; the watcher can be dropped.
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_targets_not_applicable() {
        assert!(!RevealTracker::<usize>::attach(Vec::new()).is_attached());
    }

    #[test]
    fn test_batch_reveals_only_intersecting() {
        let mut tracker = RevealTracker::attach(0..3).into_option().unwrap();
        let mut visible = tracker.on_intersections(vec![
            Intersection::new(2, true),
            Intersection::new(1, false),
            Intersection::new(0, true),
        ]);
        visible.sort();
        assert_eq!(visible, vec![0, 2]);
        assert!(tracker.is_pending(&1));
        assert_eq!(tracker.pending_count(), 1);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::attach(["hero", "intro"]).into_option().unwrap();
        assert_eq!(
            tracker.on_intersections([Intersection::new("hero", true)]),
            vec!["hero"]
        );
        // Leaving and re-entering the viewport changes nothing
        assert!(tracker
            .on_intersections([
                Intersection::new("hero", false),
                Intersection::new("hero", true),
            ])
            .is_empty());
        assert!(tracker.is_revealed(&"hero"));
        assert!(!tracker.is_complete());
    }

    #[test]
    fn test_unknown_target_ignored() {
        let mut tracker = RevealTracker::attach([1u32]).into_option().unwrap();
        assert!(tracker.on_intersections([Intersection::new(9, true)]).is_empty());
        assert!(!tracker.is_revealed(&9));
    }
}
