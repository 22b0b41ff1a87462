//! Render model
//!
//! Everything the view needs to draw a carousel, as a pure function of the
//! visible index, the image count and the label prefix.

/// Accessible label of the "previous" control
pub const PREVIOUS_LABEL: &str = "Previous image";
/// Accessible label of the "next" control
pub const NEXT_LABEL: &str = "Next image";
/// Fill of the active indicator dot
pub const ACTIVE_INDICATOR_COLOR: &str = "var(--accent-500)";

/// Image loading hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    Eager,
    Lazy,
}

impl Loading {
    pub fn as_str(self) -> &'static str {
        match self {
            Loading::Eager => "eager",
            Loading::Lazy => "lazy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub index: usize,
    /// "{prefix} {n}", 1-based
    pub alt: String,
    pub active: bool,
    pub loading: Loading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    /// "Go to slide {n}", 1-based
    pub label: String,
    pub active: bool,
    /// Accent fill for the active dot
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub slides: Vec<Slide>,
    pub indicators: Vec<Indicator>,
    pub previous_label: &'static str,
    pub next_label: &'static str,
}

impl CarouselView {
    pub fn active_slide(&self) -> Option<&Slide> {
        self.slides.iter().find(|s| s.active)
    }
}

pub fn render(index: usize, len: usize, label_prefix: &str) -> CarouselView {
    let slides = (0..len)
        .map(|i| {
            let active = i == index;
            Slide {
                index: i,
                alt: format!("{} {}", label_prefix, i + 1),
                active,
                loading: if active { Loading::Eager } else { Loading::Lazy },
            }
        })
        .collect();

    let indicators = (0..len)
        .map(|i| {
            let active = i == index;
            Indicator {
                index: i,
                label: format!("Go to slide {}", i + 1),
                active,
                color: active.then_some(ACTIVE_INDICATOR_COLOR),
            }
        })
        .collect();

    CarouselView {
        slides,
        indicators,
        previous_label: PREVIOUS_LABEL,
        next_label: NEXT_LABEL,
    }
}
