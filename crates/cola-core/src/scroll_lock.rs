//! Shared page scroll lock.
//!
//! Both the navigation menu and the video overlay freeze page scrolling while
//! open. Instead of each writing the body's `overflow` style directly, each
//! takes a hold on the lock; the page stays locked while any hold remains.
//!
//! ```text
//! menu opens   ─► holders {Menu}          locked
//! video opens  ─► holders {Menu, Video}   locked
//! menu closes  ─► holders {Video}         locked   (video still needs it)
//! video closes ─► holders {}              unlocked
//! ```

use std::collections::BTreeSet;

/// A feature that can hold the scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LockHolder {
    Menu,
    Video,
}

/// Reference-counted scroll lock keyed by holder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: BTreeSet<LockHolder>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    pub fn is_held_by(&self, holder: LockHolder) -> bool {
        self.holders.contains(&holder)
    }

    pub fn holders(&self) -> impl Iterator<Item = LockHolder> + '_ {
        self.holders.iter().copied()
    }

    /// Take a hold. Returns the new effective state if it changed.
    pub fn acquire(&mut self, holder: LockHolder) -> Option<bool> {
        let was_locked = self.is_locked();
        self.holders.insert(holder);
        self.change_from(was_locked)
    }

    /// Drop a hold. Releasing a hold that was never taken is a no-op.
    /// Returns the new effective state if it changed.
    pub fn release(&mut self, holder: LockHolder) -> Option<bool> {
        let was_locked = self.is_locked();
        self.holders.remove(&holder);
        self.change_from(was_locked)
    }

    /// Acquire when `held` is true, release otherwise.
    pub fn set(&mut self, holder: LockHolder, held: bool) -> Option<bool> {
        if held {
            self.acquire(holder)
        } else {
            self.release(holder)
        }
    }

    fn change_from(&self, was_locked: bool) -> Option<bool> {
        let now = self.is_locked();
        (now != was_locked).then_some(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_holder() {
        let mut lock = ScrollLock::new();
        assert!(!lock.is_locked());
        assert_eq!(lock.acquire(LockHolder::Menu), Some(true));
        assert!(lock.is_locked());
        assert_eq!(lock.release(LockHolder::Menu), Some(false));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_overlapping_holders_keep_lock() {
        let mut lock = ScrollLock::new();
        lock.acquire(LockHolder::Menu);
        assert_eq!(lock.acquire(LockHolder::Video), None);

        // Menu closing must not unlock what the video still needs
        assert_eq!(lock.release(LockHolder::Menu), None);
        assert!(lock.is_locked());
        assert!(lock.is_held_by(LockHolder::Video));

        assert_eq!(lock.release(LockHolder::Video), Some(false));
    }

    #[test]
    fn test_idempotent_operations() {
        let mut lock = ScrollLock::new();
        assert_eq!(lock.release(LockHolder::Video), None);
        lock.acquire(LockHolder::Video);
        assert_eq!(lock.acquire(LockHolder::Video), None);
        assert_eq!(lock.holders().count(), 1);
        assert_eq!(lock.set(LockHolder::Video, false), Some(false));
    }
}
