//! Carousel engine
//!
//! A fixed, non-empty sequence of images and the index of the visible one.
//! `previous`/`next` wrap around; `goto` ignores out-of-range targets.
//! Keyboard and pointer input are translated into those three operations.
//!
//! [`MountedCarousel`] ties a carousel to a [`KeyboardHub`] for as long as
//! it is mounted, so arrow keys pressed anywhere on the page navigate it.

use crate::gesture::{GestureConfig, PointerEvent, Swipe, SwipeRecognizer};
use crate::keyboard::{Key, KeyboardBinding, KeyboardHub};
use crate::render::{self, CarouselView};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Label prefix used when the host does not supply one
pub const DEFAULT_LABEL_PREFIX: &str = "Image";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one image")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CarouselError>;

/// A navigation that was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    Goto(usize),
}

/// Carousel state
#[derive(Debug, Clone)]
pub struct Carousel<I> {
    images: Vec<I>,
    index: usize,
    label_prefix: String,
    gesture: SwipeRecognizer,
}

#[allow(clippy::len_without_is_empty)]
impl<I> Carousel<I> {
    pub fn new(images: Vec<I>) -> Result<Self> {
        Self::with_config(images, GestureConfig::default())
    }

    pub fn with_config(images: Vec<I>, config: GestureConfig) -> Result<Self> {
        if images.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            images,
            index: 0,
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            gesture: SwipeRecognizer::new(config),
        })
    }

    /// Prefix for per-slide descriptions ("{prefix} {n}")
    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    pub fn images(&self) -> &[I] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The visible image
    pub fn current(&self) -> &I {
        &self.images[self.index]
    }

    pub fn label_prefix(&self) -> &str {
        &self.label_prefix
    }

    /// Gesture tracking state (for tap-versus-swipe decisions)
    pub fn gesture(&self) -> &SwipeRecognizer {
        &self.gesture
    }

    pub fn previous(&mut self) {
        let len = self.images.len();
        self.index = (self.index + len - 1) % len;
        debug!(index = self.index, "carousel previous");
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
        debug!(index = self.index, "carousel next");
    }

    /// Jump to `index`; out-of-range targets are ignored
    pub fn goto(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.index = index;
        debug!(index, "carousel goto");
        true
    }

    /// Apply a navigation
    pub fn navigate(&mut self, nav: Navigation) -> bool {
        match nav {
            Navigation::Previous => {
                self.previous();
                true
            }
            Navigation::Next => {
                self.next();
                true
            }
            Navigation::Goto(index) => self.goto(index),
        }
    }

    /// Arrow keys step through the images; other keys are ignored
    pub fn handle_key(&mut self, key: Key) -> Option<Navigation> {
        let nav = match key {
            Key::ArrowLeft => Navigation::Previous,
            Key::ArrowRight => Navigation::Next,
            Key::Other => return None,
        };
        self.navigate(nav);
        Some(nav)
    }

    /// Feed a pointer/touch sample; a completed swipe navigates
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<Navigation> {
        let nav = match self.gesture.process(event)? {
            Swipe::Previous => Navigation::Previous,
            Swipe::Next => Navigation::Next,
        };
        self.navigate(nav);
        Some(nav)
    }

    /// Render model for the current state
    pub fn view(&self) -> CarouselView {
        render::render(self.index, self.images.len(), &self.label_prefix)
    }
}

/// A carousel attached to the page's keyboard for the duration of a mount
pub struct MountedCarousel<I: 'static> {
    state: Rc<RefCell<Carousel<I>>>,
    binding: KeyboardBinding,
}

#[allow(clippy::len_without_is_empty)]
impl<I: 'static> MountedCarousel<I> {
    /// Mount and start listening for arrow keys
    pub fn mount(carousel: Carousel<I>, hub: &KeyboardHub) -> Self {
        let state = Rc::new(RefCell::new(carousel));
        let binding = Self::bind(&state, hub);
        debug!(len = state.borrow().len(), "carousel mounted");
        Self { state, binding }
    }

    fn bind(state: &Rc<RefCell<Carousel<I>>>, hub: &KeyboardHub) -> KeyboardBinding {
        // Weak so the listener never keeps an unmounted carousel alive
        let weak = Rc::downgrade(state);
        hub.listen(move |key| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let Ok(mut carousel) = state.try_borrow_mut() else {
                return;
            };
            carousel.handle_key(key);
        })
    }

    /// Re-acquire the keyboard listener on `hub` (e.g. after the host
    /// replaced its event target). The old listener is released first.
    pub fn rebind(&mut self, hub: &KeyboardHub) {
        self.binding.release();
        self.binding = Self::bind(&self.state, hub);
    }

    /// Read-only access to the state
    pub fn with<R>(&self, f: impl FnOnce(&Carousel<I>) -> R) -> R {
        f(&*self.state.borrow())
    }

    pub fn index(&self) -> usize {
        self.state.borrow().index()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn previous(&self) {
        self.state.borrow_mut().previous();
    }

    pub fn next(&self) {
        self.state.borrow_mut().next();
    }

    pub fn goto(&self, index: usize) -> bool {
        self.state.borrow_mut().goto(index)
    }

    pub fn handle_pointer(&self, event: PointerEvent) -> Option<Navigation> {
        self.state.borrow_mut().handle_pointer(event)
    }

    pub fn view(&self) -> CarouselView {
        self.state.borrow().view()
    }

    pub fn is_listening(&self) -> bool {
        self.binding.is_active()
    }

    /// Unmount, releasing the keyboard listener and discarding the index
    pub fn unmount(self) {
        debug!("carousel unmounted");
    }
}
