//! Per-product image gallery: current image, thumbnail window and wishlist flag.
use serde::{Deserialize, Serialize};

use crate::model::Image;

/// Number of thumbnails visible at once.
pub const WINDOW_SIZE: usize = 5;

/// Navigation state of one detail view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GalleryCursor {
    pub current_index: usize,
    pub thumbnail_start: usize,
    pub wishlisted: bool,
}

/// Dots-style indicator derived from the thumbnail window position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    pub count: usize,
    pub active: usize,
}

/// Owns the cursor for a fixed image sequence.
///
/// Every transition is a no-op on an empty gallery.
#[derive(Debug, Clone)]
pub struct GalleryNavigator<'a> {
    images: &'a [Image],
    window: usize,
    cursor: GalleryCursor,
}

impl<'a> GalleryNavigator<'a> {
    pub fn new(images: &'a [Image]) -> Self {
        Self::restore(images, GalleryCursor::default())
    }

    /// Rebuild a navigator from a previously observed cursor, clamping both
    /// indices into range for `images`.
    pub fn restore(images: &'a [Image], cursor: GalleryCursor) -> Self {
        let mut nav = Self {
            images,
            window: WINDOW_SIZE,
            cursor,
        };
        let count = images.len();
        nav.cursor.current_index = if count == 0 {
            0
        } else {
            cursor.current_index.min(count - 1)
        };
        nav.cursor.thumbnail_start = cursor.thumbnail_start.min(nav.max_thumbnail_start());
        nav
    }

    pub fn cursor(&self) -> GalleryCursor {
        self.cursor
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn window_size(&self) -> usize {
        self.window
    }

    pub fn current_image(&self) -> Option<&'a Image> {
        self.images.get(self.cursor.current_index)
    }

    fn max_thumbnail_start(&self) -> usize {
        self.images.len().saturating_sub(self.window)
    }

    pub fn next(&mut self) {
        let count = self.images.len();
        if count == 0 {
            return;
        }
        self.cursor.current_index = (self.cursor.current_index + 1) % count;
    }

    pub fn previous(&mut self) {
        let count = self.images.len();
        if count == 0 {
            return;
        }
        self.cursor.current_index = (self.cursor.current_index + count - 1) % count;
    }

    /// Jump to a thumbnail. Returns `false` (and changes nothing) when `index`
    /// is out of range.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.cursor.current_index = index;
        true
    }

    pub fn can_page_forward(&self) -> bool {
        self.cursor.thumbnail_start + self.window < self.images.len()
    }

    pub fn can_page_backward(&self) -> bool {
        self.cursor.thumbnail_start > 0
    }

    /// Scroll the thumbnail strip one image forward.
    pub fn page_thumbnails_forward(&mut self) {
        if self.can_page_forward() {
            self.cursor.thumbnail_start += 1;
        }
    }

    /// Scroll the thumbnail strip one image back.
    pub fn page_thumbnails_backward(&mut self) {
        if self.can_page_backward() {
            self.cursor.thumbnail_start -= 1;
        }
    }

    pub fn toggle_wishlist(&mut self) {
        self.cursor.wishlisted = !self.cursor.wishlisted;
    }

    /// Thumbnails inside the window, paired with their absolute index.
    pub fn visible_thumbnails(&self) -> impl Iterator<Item = (usize, &'a Image)> + 'a {
        let images: &'a [Image] = self.images;
        let start = self.cursor.thumbnail_start.min(images.len());
        let end = (start + self.window).min(images.len());
        images[start..end]
            .iter()
            .enumerate()
            .map(move |(i, img)| (start + i, img))
    }

    /// Tracks the window position, not the current image.
    pub fn page_indicator(&self) -> PageIndicator {
        PageIndicator {
            count: self.images.len().div_ceil(self.window),
            active: self.cursor.thumbnail_start / self.window,
        }
    }

    /// Whether the strip needs paging controls at all.
    pub fn is_paged(&self) -> bool {
        self.images.len() > self.window
    }

    /// Cursor reached by applying `f` to a copy of this navigator.
    pub fn peek(&self, f: impl FnOnce(&mut Self)) -> GalleryCursor {
        let mut next = self.clone();
        f(&mut next);
        next.cursor
    }
}
