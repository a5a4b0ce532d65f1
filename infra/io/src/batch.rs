//! Upsert-style batch writes against a caller supplied store.

use tracing::debug;

/// Largest slice handed to a single [`BatchMapper::insert_batch`] call.
pub const MAX_INSERT_COUNT: usize = 3000;

/// A record with a primary key.
pub trait Identified {
    type Id;

    fn id(&self) -> Option<Self::Id>;
    fn set_id(&mut self, id: Option<Self::Id>);
}

/// Store operations used by [`write_batch`].
pub trait BatchMapper<T> {
    type Error;

    /// Looks up the stored record matching `item`, whatever "matching" means for the store.
    ///
    /// # Errors
    /// Any store failure.
    fn select(&self, item: &T) -> Result<Option<T>, Self::Error>;

    /// # Errors
    /// Any store failure.
    fn update(&self, item: &T) -> Result<usize, Self::Error>;

    /// # Errors
    /// Any store failure.
    fn insert_batch(&self, items: &[T]) -> Result<usize, Self::Error>;
}

/// Writes `items` and returns the number of affected rows.
///
/// With `direct_insert` every item is inserted. Otherwise items found by
/// [`BatchMapper::select`] take the stored id and are updated; the rest are inserted once
/// each, duplicates dropped.
///
/// # Errors
/// Stops at the first store error.
pub fn write_batch<T, M>(items: &[T], mapper: &M, direct_insert: bool) -> Result<usize, M::Error>
where
    T: Identified + Clone + PartialEq,
    M: BatchMapper<T>,
{
    if items.is_empty() {
        return Ok(0);
    }
    if direct_insert {
        return insert_chunked(items, mapper);
    }

    let mut affected = 0;
    let mut pending: Vec<T> = Vec::new();
    for item in items {
        match mapper.select(item)? {
            Some(stored) => {
                let mut item = item.clone();
                item.set_id(stored.id());
                affected += mapper.update(&item)?;
            },
            None if !pending.contains(item) => pending.push(item.clone()),
            None => {},
        }
    }
    debug!(updated = affected, inserts = pending.len(), "Batch split into updates and inserts");

    if !pending.is_empty() {
        affected += insert_chunked(&pending, mapper)?;
    }
    Ok(affected)
}

fn insert_chunked<T, M: BatchMapper<T>>(items: &[T], mapper: &M) -> Result<usize, M::Error> {
    items.chunks(MAX_INSERT_COUNT).try_fold(0, |acc, chunk| Ok(acc + mapper.insert_batch(chunk)?))
}
