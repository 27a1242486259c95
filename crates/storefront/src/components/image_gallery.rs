//! Product image gallery with thumbnails.

use crate::catalog::{PLACEHOLDER_IMAGE, ProductImage};

/// One image as rendered, with fallbacks applied.
#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub thumbnail_alt: String,
    pub thumbnail_label: String,
    pub href: String,
    pub active: bool,
}

/// Main image plus thumbnail strip.
#[derive(Debug, Clone)]
pub struct ImageGallery {
    pub images: Vec<GalleryImage>,
    pub current: usize,
    /// CSS `aspect-ratio` value for the main image, e.g. `"4 / 3"`.
    pub aspect_ratio: String,
    pub enable_zoom: bool,
    param: &'static str,
    base_href: String,
}

impl ImageGallery {
    /// Build a gallery.
    ///
    /// `requested` is the index from the query string; anything out of range
    /// falls back to the first image.
    #[must_use]
    pub fn new(
        images: &[ProductImage],
        requested: Option<usize>,
        param: &'static str,
        base_href: impl Into<String>,
    ) -> Self {
        let base_href = base_href.into();
        let current = requested.filter(|&i| i < images.len()).unwrap_or(0);
        let separator = if base_href.contains('?') { '&' } else { '?' };

        let images = images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let number = index + 1;
                let src = if image.src.trim().is_empty() {
                    PLACEHOLDER_IMAGE.to_string()
                } else {
                    image.src.clone()
                };
                let has_alt = !image.alt.trim().is_empty();
                GalleryImage {
                    index,
                    src,
                    alt: if has_alt {
                        image.alt.clone()
                    } else {
                        "Main product image".to_string()
                    },
                    thumbnail_alt: if has_alt {
                        image.alt.clone()
                    } else {
                        format!("Thumbnail {number}")
                    },
                    thumbnail_label: format!("View image {number}"),
                    href: format!("{base_href}{separator}{param}={index}"),
                    active: index == current,
                }
            })
            .collect();

        Self {
            images,
            current,
            aspect_ratio: "1 / 1".to_string(),
            enable_zoom: true,
            param,
            base_href,
        }
    }

    /// Set the main image ratio as width / height.
    #[must_use]
    pub fn ratio(mut self, width: u32, height: u32) -> Self {
        self.aspect_ratio = format!("{width} / {height}");
        self
    }

    #[must_use]
    pub const fn zoom(mut self, enable: bool) -> Self {
        self.enable_zoom = enable;
        self
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&GalleryImage> {
        self.images.get(self.current)
    }

    #[must_use]
    pub const fn empty_text(&self) -> &'static str {
        "No image available"
    }

    #[must_use]
    pub fn has_multiple(&self) -> bool {
        self.images.len() > 1
    }

    /// Index shown by the previous arrow (wraps to the last image).
    #[must_use]
    pub fn prev_index(&self) -> usize {
        if self.current == 0 {
            self.images.len().saturating_sub(1)
        } else {
            self.current - 1
        }
    }

    /// Index shown by the next arrow (wraps to the first image).
    #[must_use]
    pub fn next_index(&self) -> usize {
        if self.current + 1 >= self.images.len() {
            0
        } else {
            self.current + 1
        }
    }

    #[must_use]
    pub fn prev_href(&self) -> String {
        self.href_for(self.prev_index())
    }

    #[must_use]
    pub fn next_href(&self) -> String {
        self.href_for(self.next_index())
    }

    fn href_for(&self, index: usize) -> String {
        self.images
            .get(index)
            .map_or_else(|| self.base_href.clone(), |image| image.href.clone())
    }

    /// Query parameter that carries the current index.
    #[must_use]
    pub const fn param(&self) -> &'static str {
        self.param
    }
}
