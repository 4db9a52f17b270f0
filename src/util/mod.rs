mod debounce;
mod pager;

pub(crate) use debounce::Debouncer;
pub(crate) use pager::{page_window, PageSlot};

/// Move `item` to the front, dropping any entry with the same key and
/// anything past `max`. Returns the keys that fell off the end.
pub(crate) fn upsert_lru_by_key<T: Clone>(
    items: &mut Vec<T>,
    item: T,
    same_key: impl Fn(&T, &T) -> bool,
    max: usize,
) -> Vec<T> {
    items.retain(|x| !same_key(x, &item));
    items.insert(0, item);
    if items.len() > max {
        items.split_off(max)
    } else {
        Vec::new()
    }
}
