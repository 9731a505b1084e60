use tracing::debug;

use crate::{PAGE_SIZE, ROW_SIZE, ROWS_PER_PAGE, TABLE_MAX_PAGES};

type Page = [u8; PAGE_SIZE];

/// Rows stored back to back in fixed-size pages.
///
/// Pages are allocated the first time a row index lands in them and live
/// as long as the table does.
pub struct Table {
    pages: [Option<Box<Page>>; TABLE_MAX_PAGES],
    pub(crate) num_rows: usize,
}

impl Table {
    pub fn new() -> Self {
        Self {
            pages: std::array::from_fn(|_| None),
            num_rows: 0,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    /// Returns `(page_index, byte_offset)` of the slot holding `row_num`.
    pub fn slot_location(row_num: usize) -> (usize, usize) {
        let page_num = row_num / ROWS_PER_PAGE;
        let row_offset = row_num % ROWS_PER_PAGE;
        (page_num, row_offset * ROW_SIZE)
    }

    /// Mutable slot for `row_num`, allocating its page if needed.
    ///
    /// # Panics
    ///
    /// Panics if `row_num` maps past the last page.
    pub fn row_slot_mut(&mut self, row_num: usize) -> &mut [u8] {
        let (page_num, byte_offset) = Self::slot_location(row_num);
        assert!(
            page_num < TABLE_MAX_PAGES,
            "row {row_num} maps to page {page_num}, table has {TABLE_MAX_PAGES} pages"
        );

        let page = self.pages[page_num].get_or_insert_with(|| {
            debug!(page = page_num, "allocating page");
            Box::new([0u8; PAGE_SIZE])
        });
        &mut page[byte_offset..byte_offset + ROW_SIZE]
    }

    /// Slot for `row_num`, or `None` when its page was never allocated.
    pub fn row_slot(&self, row_num: usize) -> Option<&[u8]> {
        let (page_num, byte_offset) = Self::slot_location(row_num);
        let page = self.pages.get(page_num)?.as_deref()?;
        Some(&page[byte_offset..byte_offset + ROW_SIZE])
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
