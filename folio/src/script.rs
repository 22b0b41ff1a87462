//! Carousel event scripts
//!
//! A comma-separated list of input events replayed against a mounted
//! carousel: `left`, `right`, `goto:N`, `swipe:DX`, `tap`.

use folio_carousel::{Key, KeyboardHub, MountedCarousel, PointerEvent};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown event {0:?}")]
    UnknownEvent(String),
    #[error("invalid argument in {0:?}")]
    InvalidArgument(String),
}

/// One scripted input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptEvent {
    /// Left arrow pressed anywhere on the page
    Left,
    /// Right arrow pressed anywhere on the page
    Right,
    /// Indicator dot clicked
    Goto(usize),
    /// Touch dragged horizontally by `dx` and released
    Swipe(f32),
    /// Touch pressed and released in place
    Tap,
}

impl FromStr for ScriptEvent {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let invalid = || ScriptError::InvalidArgument(s.to_string());
        match (name, arg) {
            ("left", None) => Ok(ScriptEvent::Left),
            ("right", None) => Ok(ScriptEvent::Right),
            ("tap", None) => Ok(ScriptEvent::Tap),
            ("goto", Some(n)) => n.parse().map(ScriptEvent::Goto).map_err(|_| invalid()),
            ("swipe", Some(dx)) => dx.parse().map(ScriptEvent::Swipe).map_err(|_| invalid()),
            _ => Err(ScriptError::UnknownEvent(s.to_string())),
        }
    }
}

/// Parse a whole script; empty segments are skipped
pub fn parse(script: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    script
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Replay events, returning the index after each one
pub fn replay<I: 'static>(
    carousel: &MountedCarousel<I>,
    hub: &KeyboardHub,
    events: &[ScriptEvent],
) -> Vec<usize> {
    // Swipes start from the middle of a nominal 1000-unit wide viewport
    const ORIGIN_X: f32 = 500.0;

    events
        .iter()
        .map(|event| {
            match *event {
                ScriptEvent::Left => {
                    hub.dispatch(Key::ArrowLeft);
                }
                ScriptEvent::Right => {
                    hub.dispatch(Key::ArrowRight);
                }
                ScriptEvent::Goto(index) => {
                    if !carousel.goto(index) {
                        tracing::debug!(index, "goto ignored");
                    }
                }
                ScriptEvent::Swipe(dx) => {
                    carousel.handle_pointer(PointerEvent::Start { x: ORIGIN_X });
                    carousel.handle_pointer(PointerEvent::Move { x: ORIGIN_X + dx });
                    carousel.handle_pointer(PointerEvent::End { x: ORIGIN_X + dx });
                }
                ScriptEvent::Tap => {
                    carousel.handle_pointer(PointerEvent::Start { x: ORIGIN_X });
                    carousel.handle_pointer(PointerEvent::End { x: ORIGIN_X });
                }
            }
            carousel.index()
        })
        .collect()
}
