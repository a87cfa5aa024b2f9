//! Page identifier type.

use std::fmt;
use std::hash::Hash;

/// Anything usable as a page reference by the replacement policies.
///
/// Policies only compare references for equality and keep them in hash
/// sets, so any `Clone + Eq + Hash` type qualifies.
pub trait PageKey: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> PageKey for T {}

/// Identifies a virtual page in a reference trace.
///
/// Traces are lists of non-negative integers; `u32` covers every page
/// number a generated or recorded trace will contain.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
