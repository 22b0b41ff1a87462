//! Swipe recognition: turns raw pointer/touch samples into navigation.
//!
//! # State Machine
//!
//! ```text
//!   Idle --start(x)--> Tracking{origin, moved=false}
//!   Tracking --move(x), |x-origin| > move_threshold--> Tracking{moved=true}
//!   Tracking --end(x)--> Idle  (emits a swipe when |dx| > swipe_threshold)
//!   Tracking --cancel--> Idle
//! ```
//!
//! # Invariants
//!
//! 1. `origin_x` is cleared at the end of every gesture, swipe or not.
//! 2. A drag to the right (`dx > 0`) reveals the previous item; a drag to
//!    the left reveals the next one.
//! 3. `has_moved` never influences navigation. Consumers use it to tell a
//!    tap from a swipe.
//! 4. Move and end samples without a preceding start are ignored.

use serde::{Deserialize, Serialize};

/// Thresholds in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Horizontal travel before a gesture counts as moved (default: 10)
    pub move_threshold: f32,
    /// Horizontal travel a release must exceed to navigate (default: 50)
    pub swipe_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            move_threshold: 10.0,
            swipe_threshold: 50.0,
        }
    }
}

/// A low-level pointer or touch sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Finger down / pointer pressed
    Start { x: f32 },
    /// Finger or pointer moved while down
    Move { x: f32 },
    /// Finger lifted / pointer released
    End { x: f32 },
    /// Touch cancelled by the host
    Cancel,
}

/// Direction of a recognized swipe, named by what it reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Previous,
    Next,
}

/// Stateful swipe recognizer
#[derive(Debug, Clone, Default)]
pub struct SwipeRecognizer {
    config: GestureConfig,
    origin_x: Option<f32>,
    has_moved: bool,
}

impl SwipeRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            origin_x: None,
            has_moved: false,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Where the current gesture started, if one is in progress
    pub fn origin_x(&self) -> Option<f32> {
        self.origin_x
    }

    /// Whether the current (or last) gesture travelled past the move threshold
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn is_tracking(&self) -> bool {
        self.origin_x.is_some()
    }

    /// Feed one sample
    pub fn process(&mut self, event: PointerEvent) -> Option<Swipe> {
        match event {
            PointerEvent::Start { x } => {
                self.start(x);
                None
            }
            PointerEvent::Move { x } => {
                self.move_to(x);
                None
            }
            PointerEvent::End { x } => self.end(x),
            PointerEvent::Cancel => {
                self.cancel();
                None
            }
        }
    }

    pub fn start(&mut self, x: f32) {
        self.origin_x = Some(x);
        self.has_moved = false;
    }

    pub fn move_to(&mut self, x: f32) {
        let Some(origin) = self.origin_x else {
            return;
        };
        if (x - origin).abs() > self.config.move_threshold {
            self.has_moved = true;
        }
    }

    pub fn end(&mut self, x: f32) -> Option<Swipe> {
        let origin = self.origin_x.take()?;
        let dx = x - origin;
        if dx.abs() > self.config.swipe_threshold {
            Some(if dx > 0.0 { Swipe::Previous } else { Swipe::Next })
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.origin_x = None;
    }
}
