//! # Folio Carousel
//!
//! Image carousel state machine for the portfolio site.
//!
//! This library provides:
//! - Wraparound and direct-index navigation over a fixed image list
//! - Swipe recognition for pointer/touch input
//! - Scoped document-level keyboard listeners
//! - A render model (slide descriptions, indicator dots, control labels)

pub mod carousel;
pub mod gesture;
pub mod keyboard;
pub mod render;

pub use carousel::{Carousel, CarouselError, MountedCarousel, Navigation, DEFAULT_LABEL_PREFIX};
pub use gesture::{GestureConfig, PointerEvent, Swipe, SwipeRecognizer};
pub use keyboard::{Key, KeyboardBinding, KeyboardHub};
pub use render::{CarouselView, Indicator, Loading, Slide};
