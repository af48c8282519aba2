// Pagination adapter - maps user-facing pages onto the API's native pages
//
// The remote API paginates characters 20 at a time; the UI presents 10 at
// a time. Two user pages therefore share one remote page: odd user pages
// show the first half, even user pages the second half. All functions here
// are pure so the mapping can be tested exhaustively without any I/O.

/// Number of characters shown per user-facing page
pub const USER_PAGE_SIZE: usize = 10;

/// Number of characters the remote API returns per page
#[allow(dead_code)]
pub const REMOTE_PAGE_SIZE: usize = 20;

/// Convert a 1-based user page into the remote API page that contains it.
///
/// User pages 1 and 2 live on remote page 1, pages 3 and 4 on remote page 2,
/// and so on: `ceil(user_page / 2)`.
pub fn to_remote_page(user_page: u32) -> u32 {
    user_page.div_ceil(2)
}

/// Slice a remote result page down to the characters for one user page.
///
/// Odd user pages take the first half of the remote page, even pages the
/// second half. Remote pages shorter than 20 items (the API's final page)
/// yield a shorter or empty slice rather than an error.
pub fn slice_for_user_page<T: Clone>(results: &[T], user_page: u32) -> Vec<T> {
    let start = if user_page % 2 == 1 {
        0
    } else {
        USER_PAGE_SIZE
    };
    if start >= results.len() {
        return Vec::new();
    }
    let end = (start + USER_PAGE_SIZE).min(results.len());
    results[start..end].to_vec()
}

/// The highest user page reachable given the remote page count.
///
/// Each remote page expands to exactly two user pages.
pub fn max_user_page(remote_page_count: u32) -> u32 {
    remote_page_count * 2
}
