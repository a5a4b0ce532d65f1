//! Offset arithmetic for 1-based pages.

/// Index of the first row on `page_no`. Pages below 1 count as 1, sizes below 1 as 0.
/// Saturates at `i32::MAX`.
#[must_use]
pub const fn get_start(page_no: i32, page_size: i32) -> i32 {
    let page_no = if page_no < 1 { 1 } else { page_no };
    let page_size = if page_size < 1 { 0 } else { page_size };
    (page_no - 1).saturating_mul(page_size)
}

/// `[start, end)` row range of `page_no`.
#[must_use]
pub const fn trans_to_start_end(page_no: i32, page_size: i32) -> [i32; 2] {
    let start = get_start(page_no, page_size);
    let page_size = if page_size < 1 { 0 } else { page_size };
    [start, start.saturating_add(page_size)]
}

/// Number of pages needed for `total` rows. Zero when `page_size` is not positive.
#[must_use]
pub const fn total_page(total: i32, page_size: i32) -> i32 {
    if page_size <= 0 || total <= 0 {
        return 0;
    }
    total / page_size + if total % page_size == 0 { 0 } else { 1 }
}
