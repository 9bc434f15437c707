//! Pagination and page metadata.

use trove_core::errors::QueryError;
use trove_core::models::Pagination;

/// Reject malformed paging parameters at the boundary, before any
/// dataset work happens.
pub fn validate(page: usize, size: usize) -> Result<(), QueryError> {
    if size < 1 {
        return Err(QueryError::Validation {
            reason: format!("size must be at least 1, got {size}"),
        });
    }
    if page < 1 {
        return Err(QueryError::Validation {
            reason: format!("page must be at least 1, got {page}"),
        });
    }
    Ok(())
}

/// Slice one 1-indexed page out of the ordered result set and compute
/// the metadata. `total_results` always counts the full set, independent
/// of the window.
pub fn paginate<T>(items: &[T], page: usize, size: usize) -> (&[T], Pagination) {
    let total_results = items.len();
    let total_pages = total_results.div_ceil(size);
    let offset = page.saturating_sub(1).saturating_mul(size);
    let window = if offset >= total_results {
        &items[0..0]
    } else {
        &items[offset..(offset + size).min(total_results)]
    };

    let pagination = Pagination {
        page,
        size,
        total_results,
        total_pages,
        has_more: page < total_pages,
    };
    (window, pagination)
}
