use serde::Serialize;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    /// The page actually returned, after clamping.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Slice an already-loaded list into one 1-based page.
///
/// Out-of-range pages are clamped into `[1, total_pages]` (page 1 when there
/// are no items). A `page_size` of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    Page {
        data: items[start..end].to_vec(),
        pagination: Pagination {
            total,
            page,
            page_size,
            total_pages,
        },
    }
}
