use std::collections::HashMap;

/// Engine object identifier (crop harvests, seeds, forage).
pub type ItemId = i32;

/// Resolves engine object ids to display names.
pub trait ItemOracle {
    fn object_name(&self, id: ItemId) -> Option<String>;

    /// Display name, or a placeholder naming the id when the engine has none.
    fn object_name_or_unknown(&self, id: ItemId) -> String {
        self.object_name(id)
            .unwrap_or_else(|| format!("Unknown item {id}"))
    }
}

/// In-memory item name table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemNameTable {
    names: HashMap<ItemId, String>,
}

impl ItemNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: ItemId, name: impl Into<String>) -> Self {
        self.insert(id, name);
        self
    }

    pub fn insert(&mut self, id: ItemId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }
}

impl FromIterator<(ItemId, String)> for ItemNameTable {
    fn from_iter<T: IntoIterator<Item = (ItemId, String)>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl ItemOracle for ItemNameTable {
    fn object_name(&self, id: ItemId) -> Option<String> {
        self.names.get(&id).cloned()
    }
}
