//! Page map and page layout types.

use std::sync::Arc;

/// Mapping from page index to the collection slots shown on that page.
///
/// Built once per rebuild and never patched; a new layout replaces the
/// whole map. Page 0 and the last page are boundary windows rendered just
/// beyond the visible edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMap {
    tiles_per_page: usize,
    pages: Vec<Box<[usize]>>,
}

impl PageMap {
    /// Assemble a map from raw pages. The builder is the normal source;
    /// this exists so malformed maps can be fed to validation.
    pub fn from_pages(tiles_per_page: usize, pages: Vec<Box<[usize]>>) -> Self {
        Self {
            tiles_per_page,
            pages,
        }
    }

    pub fn tiles_per_page(&self) -> usize {
        self.tiles_per_page
    }

    /// Number of pages including both boundary pages.
    pub fn max_page(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, page: usize) -> Option<&[usize]> {
        self.pages.get(page).map(|slots| &**slots)
    }

    /// Pages in index order, boundary pages included.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.pages
            .iter()
            .enumerate()
            .map(|(index, slots)| (index, &**slots))
    }

    /// Real pages only, `1..=max_page - 2`.
    pub fn real_pages(&self) -> impl Iterator<Item = (usize, &[usize])> {
        let last_real = self.pages.len().saturating_sub(2);
        self.iter()
            .filter(move |(index, _)| *index >= 1 && *index <= last_real)
    }
}

/// Output of the page map builder: a map plus where the viewer stands in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub pages: Arc<PageMap>,
    pub current_page: usize,
    /// Real tiles on the first real page; the rest are borrowed tail tiles.
    pub first_page_length: usize,
    /// Real tiles on the last real page; the rest are borrowed head tiles.
    pub last_page_length: usize,
}

impl PageLayout {
    pub fn tiles_per_page(&self) -> usize {
        self.pages.tiles_per_page()
    }

    pub fn max_page(&self) -> usize {
        self.pages.max_page()
    }

    /// Tail tiles padding the front of the first real page.
    pub fn borrowed(&self) -> usize {
        self.tiles_per_page() - self.first_page_length
    }

    /// Layout starts exactly at the first tile.
    pub fn is_start_aligned(&self) -> bool {
        self.first_page_length == self.tiles_per_page()
    }

    /// Layout ends exactly at the last tile.
    pub fn is_end_aligned(&self) -> bool {
        self.last_page_length == self.tiles_per_page()
    }
}
