/// Slice one 1-based page out of a full ordered result set.
/// A page past the end of the data yields an empty slice, not an error.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}
