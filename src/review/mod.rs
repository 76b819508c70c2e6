//! Review sessions over deck snapshots
//!
//! This module provides:
//! - The review session state machine (reveal / rate / navigate / exit)
//! - Session statistics and completion summaries
//! - The gesture-to-rating policy shared by all frontends

pub mod gestures;
pub mod session;

pub use session::{
    DisplayState, RateOutcome, RateStatus, ReviewSession, SessionStats, SessionSummary,
};
