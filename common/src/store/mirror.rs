/// In-memory copy of one remote collection.
///
/// A mirror is only ever replaced as a whole. `revision` counts replacements
/// so callers can tell a reload happened even when the content is unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Mirror<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Mirror<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// `false` until the first successful load.
    pub fn is_loaded(&self) -> bool {
        self.revision > 0
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.revision += 1;
    }
}

impl<T> Default for Mirror<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }
}
