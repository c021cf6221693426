/// Fixed number of entries per listing page.
pub const PAGE_SIZE: u32 = 20;

/// Pages shown on each side of the current page.
const WINDOW_DELTA: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

/// Keys that move between pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
}

pub fn total_pages(count: u64) -> u32 {
    let pages = count.div_ceil(u64::from(PAGE_SIZE));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Zero-based offset of the first entry on a 1-indexed page.
pub fn page_offset(page: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(PAGE_SIZE)
}

pub fn is_valid_page(page: u32, total: u32) -> bool {
    (1..=total).contains(&page)
}

/// Target page for a key press, or `None` when already at that edge.
pub fn page_for_key(current: u32, total: u32, key: NavKey) -> Option<u32> {
    match key {
        NavKey::Left if current > 1 => Some(current - 1),
        NavKey::Right if current < total => Some(current + 1),
        _ => None,
    }
}

/// Page tokens for the pagination bar: first page, a window around `current`,
/// last page, with ellipses where the window is detached from either end.
pub fn page_numbers(current: u32, total: u32) -> Vec<PageToken> {
    if total == 0 {
        return Vec::new();
    }
    let current = i64::from(current);
    let total_i = i64::from(total);

    let mut tokens = vec![PageToken::Page(1)];
    if current - WINDOW_DELTA > 2 {
        tokens.push(PageToken::Ellipsis);
    }

    let start = (current - WINDOW_DELTA).max(2);
    let end = (current + WINDOW_DELTA).min(total_i - 1);
    for page in start..=end {
        // Bounded by `total`, so the conversion cannot fail.
        tokens.push(PageToken::Page(page as u32));
    }

    if current + WINDOW_DELTA < total_i - 1 {
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total));
    } else if total > 1 {
        tokens.push(PageToken::Page(total));
    }
    tokens
}
