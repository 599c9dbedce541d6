use serde::Serialize;

/// A single (index, quantity) pair of a record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DataPair {
    index: u32,
    quantity: f64,
}

impl DataPair {
    /// Creates a new data pair.
    ///
    /// # Arguments
    /// * `index` - The index of the item.
    /// * `quantity` - The quantity of the item.
    pub fn new(index: u32, quantity: f64) -> DataPair {
        DataPair { index, quantity }
    }

    /// Returns the index of the pair.
    pub fn get_index(&self) -> u32 {
        self.index
    }

    /// Returns the quantity of the pair.
    pub fn get_quantity(&self) -> f64 {
        self.quantity
    }
}

/// A completely parsed order record.
///
/// Records are only created by the parser, hence the number of items always equals the
/// declared count.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    /// The id of the record.
    id: u32,

    /// The name, without its quotes.
    name: String,

    /// The number of items the record declared.
    declared_count: u32,

    /// The items in input order.
    items: Vec<DataPair>,
}

impl Record {
    pub(crate) fn new(id: u32, name: String, declared_count: u32, items: Vec<DataPair>) -> Record {
        debug_assert_eq!(items.len(), declared_count as usize);

        Record {
            id,
            name,
            declared_count,
            items,
        }
    }

    /// Returns the id of the record.
    pub fn get_id(&self) -> u32 {
        self.id
    }

    /// Returns the name of the record.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Returns the number of items the record declared.
    pub fn get_declared_count(&self) -> u32 {
        self.declared_count
    }

    /// Returns the items of the record in input order.
    pub fn get_items(&self) -> &[DataPair] {
        &self.items
    }
}
