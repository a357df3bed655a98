/// Rows per page of every list view.
pub const PAGE_SIZE: usize = 10;

/// Items of the one-based `page`. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items; zero for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_one_based_pages() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(paginate(&items, 1, PAGE_SIZE), &items[0..10]);
        assert_eq!(paginate(&items, 3, PAGE_SIZE), &[21, 22, 23]);
        assert!(paginate(&items, 4, PAGE_SIZE).is_empty());
        assert!(paginate(&items, 0, PAGE_SIZE).is_empty());
    }

    #[test]
    fn counts_pages() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
    }
}
