//! Animation and transition systems
//!
//! - [`easing`]: Easing curves shared by all animations
//! - [`expand`]: Window expanding out of the search bar
//!
//! Animations take the current time as a parameter (milliseconds) so they
//! can be driven deterministically in tests.

pub mod easing;
mod expand;

pub use expand::{
    ExpandAnimation, ExpandFrame, ExpandFrames, ExpandStrategy, NoExpand, SearchBarZoom,
    EXPAND_DURATION_MS, EXPAND_START_SCALE,
};
