use std::collections::HashSet;
use std::hash::Hash;

/// A toggled membership set. Used for liked tracks (by id) and liked playlists (by index).
#[derive(Debug, Clone)]
pub struct LikedSet<K> {
    members: HashSet<K>,
}

impl<K> Default for LikedSet<K> {
    fn default() -> Self {
        Self {
            members: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> LikedSet<K> {
    /// Add `key` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, key: &K) -> bool {
        if self.members.remove(key) {
            false
        } else {
            self.members.insert(key.clone());
            true
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.members.contains(key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}
