//! Slide carousel.
//!
//! Server-rendered: every slide is in the page and the active index comes from
//! the query string. Arrow and dot links carry the next index. Autoplay is
//! handed to the browser as data attributes.

/// Autoplay settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autoplay {
    pub delay_ms: u32,
    pub stop_on_interaction: bool,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self {
            delay_ms: 4000,
            stop_on_interaction: true,
        }
    }
}

/// Carousel behavior flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    pub loop_slides: bool,
    pub show_arrows: bool,
    pub show_dots: bool,
    pub autoplay: Option<Autoplay>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            loop_slides: true,
            show_arrows: true,
            show_dots: true,
            autoplay: Some(Autoplay::default()),
        }
    }
}

/// Active-slide bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    selected: usize,
    looping: bool,
}

impl CarouselState {
    #[must_use]
    pub const fn new(len: usize, looping: bool) -> Self {
        Self {
            len,
            selected: 0,
            looping,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump to a slide; out-of-range indices are ignored.
    pub const fn scroll_to(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    pub const fn scroll_next(&mut self) {
        self.selected = self.next_index();
    }

    pub const fn scroll_prev(&mut self) {
        self.selected = self.prev_index();
    }

    /// Index after the selected one (wraps when looping, clamps otherwise).
    #[must_use]
    pub const fn next_index(&self) -> usize {
        if self.len == 0 {
            0
        } else if self.selected + 1 < self.len {
            self.selected + 1
        } else if self.looping {
            0
        } else {
            self.selected
        }
    }

    /// Index before the selected one (wraps when looping, clamps otherwise).
    #[must_use]
    pub const fn prev_index(&self) -> usize {
        if self.len == 0 {
            0
        } else if self.selected > 0 {
            self.selected - 1
        } else if self.looping {
            self.len - 1
        } else {
            0
        }
    }

    #[must_use]
    pub const fn can_scroll_prev(&self) -> bool {
        self.len > 1 && (self.looping || self.selected > 0)
    }

    #[must_use]
    pub const fn can_scroll_next(&self) -> bool {
        self.len > 1 && (self.looping || self.selected + 1 < self.len)
    }
}

/// A navigation dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
    pub label: String,
    pub href: String,
}

/// A carousel over slides of type `T`.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    pub slides: Vec<T>,
    pub options: CarouselOptions,
    pub state: CarouselState,
    param: &'static str,
    base_href: String,
}

impl<T> Carousel<T> {
    /// Build a carousel; `param` is the query parameter holding the active index
    /// and `base_href` the page URL (with any other query already applied).
    #[must_use]
    pub fn new(
        slides: Vec<T>,
        options: CarouselOptions,
        param: &'static str,
        base_href: impl Into<String>,
    ) -> Self {
        let state = CarouselState::new(slides.len(), options.loop_slides);
        Self {
            slides,
            options,
            state,
            param,
            base_href: base_href.into(),
        }
    }

    /// Select the requested slide, if any and in range.
    #[must_use]
    pub fn select(mut self, requested: Option<usize>) -> Self {
        if let Some(index) = requested {
            self.state.scroll_to(index);
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Shown in place of the track when there are no slides.
    #[must_use]
    pub const fn empty_text(&self) -> &'static str {
        "No slides to display."
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.state.selected()
    }

    #[must_use]
    pub fn show_arrows(&self) -> bool {
        self.options.show_arrows && self.slides.len() > 1
    }

    #[must_use]
    pub fn show_dots(&self) -> bool {
        self.options.show_dots && self.slides.len() > 1
    }

    /// Link to the previous slide, or `None` when it is unreachable.
    #[must_use]
    pub fn prev_href(&self) -> Option<String> {
        self.state
            .can_scroll_prev()
            .then(|| self.href_for(self.state.prev_index()))
    }

    /// Link to the next slide, or `None` when it is unreachable.
    #[must_use]
    pub fn next_href(&self) -> Option<String> {
        self.state
            .can_scroll_next()
            .then(|| self.href_for(self.state.next_index()))
    }

    #[must_use]
    pub fn dots(&self) -> Vec<Dot> {
        (0..self.slides.len())
            .map(|index| Dot {
                index,
                active: index == self.state.selected(),
                label: format!("Go to slide {}", index + 1),
                href: self.href_for(index),
            })
            .collect()
    }

    /// Autoplay delay for the `data-autoplay` attribute (0 disables).
    #[must_use]
    pub fn autoplay_delay(&self) -> u32 {
        if self.slides.len() > 1 {
            self.options.autoplay.map_or(0, |a| a.delay_ms)
        } else {
            0
        }
    }

    #[must_use]
    pub fn stop_on_interaction(&self) -> bool {
        self.options.autoplay.is_some_and(|a| a.stop_on_interaction)
    }

    fn href_for(&self, index: usize) -> String {
        let separator = if self.base_href.contains('?') { '&' } else { '?' };
        format!("{}{separator}{}={index}", self.base_href, self.param)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_looping_wraps() {
        let mut state = CarouselState::new(3, true);
        state.scroll_prev();
        assert_eq!(state.selected(), 2);
        state.scroll_next();
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_non_looping_clamps() {
        let mut state = CarouselState::new(3, false);
        assert!(!state.can_scroll_prev());
        state.scroll_prev();
        assert_eq!(state.selected(), 0);
        state.scroll_to(2);
        assert!(!state.can_scroll_next());
        state.scroll_next();
        assert_eq!(state.selected(), 2);
    }

    #[test]
    fn test_scroll_to_out_of_range_is_ignored() {
        let mut state = CarouselState::new(2, true);
        state.scroll_to(1);
        state.scroll_to(5);
        assert_eq!(state.selected(), 1);
    }

    #[test]
    fn test_empty_carousel() {
        let carousel: Carousel<&str> =
            Carousel::new(Vec::new(), CarouselOptions::default(), "slide", "/");
        assert!(carousel.is_empty());
        assert_eq!(carousel.empty_text(), "No slides to display.");
        assert!(!carousel.show_arrows());
        assert!(!carousel.show_dots());
        assert!(carousel.prev_href().is_none());
        assert_eq!(carousel.autoplay_delay(), 0);
    }

    #[test]
    fn test_single_slide_hides_controls() {
        let carousel = Carousel::new(vec!["a"], CarouselOptions::default(), "slide", "/");
        assert!(!carousel.show_arrows());
        assert!(!carousel.show_dots());
        assert!(carousel.next_href().is_none());
    }

    #[test]
    fn test_links_and_dots() {
        let carousel = Carousel::new(
            vec!["a", "b", "c"],
            CarouselOptions::default(),
            "slide",
            "/products/p123?color=black",
        )
        .select(Some(1));

        assert_eq!(
            carousel.next_href().unwrap(),
            "/products/p123?color=black&slide=2"
        );
        assert_eq!(
            carousel.prev_href().unwrap(),
            "/products/p123?color=black&slide=0"
        );

        let dots = carousel.dots();
        assert_eq!(dots.len(), 3);
        assert!(dots.get(1).unwrap().active);
        assert_eq!(dots.first().unwrap().label, "Go to slide 1");
        assert_eq!(carousel.selected(), 1);
    }

    #[test]
    fn test_autoplay() {
        let options = CarouselOptions {
            autoplay: Some(Autoplay {
                delay_ms: 5000,
                stop_on_interaction: true,
            }),
            ..CarouselOptions::default()
        };
        let carousel = Carousel::new(vec![1, 2], options, "slide", "/");
        assert_eq!(carousel.autoplay_delay(), 5000);
        assert!(carousel.stop_on_interaction());
    }
}
