//! Curation edits on one owner's record list of a single kind.
//!
//! Every edit returns a new list whose `display_order` values are the dense
//! permutation `0..n` in list position order.

use crate::error::CoreError;
use crate::records::{Curatable, Highlightable};

/// Rewrite `display_order` to match list position.
pub fn renumber<T: Curatable + Clone>(records: &[T]) -> Vec<T> {
    let mut renumbered = records.to_vec();
    renumber_in_place(&mut renumbered);
    renumbered
}

fn renumber_in_place<T: Curatable>(records: &mut [T]) {
    for (position, record) in records.iter_mut().enumerate() {
        record.set_display_order(position as i64);
    }
}

/// Whether `display_order` is exactly `0..n` in list order.
pub fn is_dense<T: Curatable>(records: &[T]) -> bool {
    records
        .iter()
        .enumerate()
        .all(|(position, record)| record.display_order() == Some(position as i64))
}

/// Insert `record` at `position` (clamped to the list length; `None`
/// appends).
pub fn insert<T: Curatable + Clone>(records: &[T], record: T, position: Option<usize>) -> Vec<T> {
    let mut updated = records.to_vec();
    let position = position.map_or(updated.len(), |p| p.min(updated.len()));
    updated.insert(position, record);
    renumber_in_place(&mut updated);
    updated
}

/// Remove the record at `index`.
pub fn remove<T: Curatable + Clone>(records: &[T], index: usize) -> Result<Vec<T>, CoreError> {
    check_index(records.len(), index)?;
    let mut updated = records.to_vec();
    updated.remove(index);
    renumber_in_place(&mut updated);
    Ok(updated)
}

/// Move the record at `from` so it ends up at `to` (drag-to-reorder).
pub fn move_item<T: Curatable + Clone>(
    records: &[T],
    from: usize,
    to: usize,
) -> Result<Vec<T>, CoreError> {
    check_index(records.len(), from)?;
    check_index(records.len(), to)?;
    let mut updated = records.to_vec();
    let record = updated.remove(from);
    updated.insert(to, record);
    renumber_in_place(&mut updated);
    Ok(updated)
}

/// Flag or unflag the record at `index` for the highlight view.
pub fn set_highlight<T: Highlightable + Clone>(
    records: &[T],
    index: usize,
    flag: bool,
) -> Result<Vec<T>, CoreError> {
    check_index(records.len(), index)?;
    let mut updated = records.to_vec();
    updated[index].set_highlight(flag);
    Ok(updated)
}

fn check_index(len: usize, index: usize) -> Result<(), CoreError> {
    if index < len {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "record",
            index,
        })
    }
}
