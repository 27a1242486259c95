//! Star rating display.

/// One rendered star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Full => "star star-full",
            Self::Half => "star star-half",
            Self::Empty => "star star-empty",
        }
    }

    /// Fill in half-star units.
    #[must_use]
    pub const fn units(self) -> u32 {
        match self {
            Self::Full => 2,
            Self::Half => 1,
            Self::Empty => 0,
        }
    }
}

/// A row of stars for a fractional rating.
#[derive(Debug, Clone)]
pub struct StarRating {
    pub rating: f64,
    pub max_rating: u32,
    /// Icon size in pixels.
    pub size: u32,
    pub show_label: bool,
    pub review_count: Option<u32>,
}

impl StarRating {
    #[must_use]
    pub const fn new(rating: f64) -> Self {
        Self {
            rating,
            max_rating: 5,
            size: 20,
            show_label: false,
            review_count: None,
        }
    }

    #[must_use]
    pub const fn max_rating(mut self, max_rating: u32) -> Self {
        self.max_rating = max_rating;
        self
    }

    #[must_use]
    pub const fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn with_label(mut self) -> Self {
        self.show_label = true;
        self
    }

    #[must_use]
    pub const fn with_review_count(mut self, count: u32) -> Self {
        self.review_count = Some(count);
        self
    }

    /// The stars, left to right.
    ///
    /// A fractional part of 0.75 or more rounds up to a full star; 0.25 up to
    /// 0.75 shows a half star after the full ones.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn stars(&self) -> Vec<Star> {
        let rating = if self.rating.is_finite() {
            self.rating.max(0.0)
        } else {
            0.0
        };
        let frac = rating.fract();
        let whole = rating.floor().min(f64::from(self.max_rating)) as u32;
        let full = whole + u32::from(frac >= 0.75);
        let has_half = (0.25..0.75).contains(&frac);

        (1..=self.max_rating)
            .map(|i| {
                if i <= full {
                    Star::Full
                } else if has_half && i == full + 1 {
                    Star::Half
                } else {
                    Star::Empty
                }
            })
            .collect()
    }

    /// Total fill in half-star units.
    #[must_use]
    pub fn filled_units(&self) -> u32 {
        self.stars().into_iter().map(Star::units).sum()
    }

    /// "4.7 stars" (singular only for exactly one).
    #[must_use]
    pub fn label(&self) -> String {
        let plural = if (self.rating - 1.0).abs() < f64::EPSILON {
            ""
        } else {
            "s"
        };
        format!("{:.1} star{plural}", self.rating)
    }

    /// "(152 reviews)".
    #[must_use]
    pub fn review_label(&self) -> Option<String> {
        self.review_count.map(|n| {
            let plural = if n == 1 { "" } else { "s" };
            format!("({n} review{plural})")
        })
    }

    /// Accessible description for the whole widget.
    #[must_use]
    pub fn aria_label(&self) -> String {
        format!("Rated {:.1} out of {}", self.rating, self.max_rating)
    }
}
