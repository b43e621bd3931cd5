/// Addresses an item in a sectioned list or grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// List-style alias for [`Self::item`].
    pub const fn row(self) -> usize {
        self.item
    }
}
