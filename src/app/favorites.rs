//! Favorite post ids, kept in the order the user added them

/// Ordered list of favorited post ids.
///
/// Insertion does not enforce uniqueness, `toggle` just never creates
/// duplicates on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<i64>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every occurrence if present, otherwise append
    pub fn toggle(&mut self, id: i64) {
        if self.contains(id) {
            self.remove(id);
        } else {
            self.ids.push(id);
        }
    }

    /// Remove every occurrence of `id`
    pub fn remove(&mut self, id: i64) {
        self.ids.retain(|&fav| fav != id);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<i64>> for Favorites {
    fn from(ids: Vec<i64>) -> Self {
        Favorites { ids }
    }
}
