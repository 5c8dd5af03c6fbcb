pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice out the 1-indexed `page` of `items`. Out-of-range pages, page 0
/// included, come back empty.
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let Some(start) = (page as usize)
        .checked_sub(1)
        .map(|p| p * QUESTIONS_PER_PAGE)
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + QUESTIONS_PER_PAGE, items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_ten_items() {
        let items: Vec<i64> = (1..=15).collect();
        assert_eq!(paginate(&items, 1), &(1..=10).collect::<Vec<i64>>()[..]);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<i64> = (1..=15).collect();
        assert_eq!(paginate(&items, 2), &(11..=15).collect::<Vec<i64>>()[..]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<i64> = (1..=15).collect();
        assert!(paginate(&items, 3).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        let items: Vec<i64> = (1..=15).collect();
        assert!(paginate(&items, 0).is_empty());
    }

    #[test]
    fn full_pages_split_exactly() {
        let items: Vec<i64> = (1..=20).collect();
        assert_eq!(paginate(&items, 2).len(), QUESTIONS_PER_PAGE);
        assert!(paginate(&items, 3).is_empty());
    }

    #[test]
    fn empty_input_is_empty() {
        let items: Vec<i64> = vec![];
        assert!(paginate(&items, 1).is_empty());
    }
}
