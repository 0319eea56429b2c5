//! Pure transform emitters.
//!
//! Each emitter maps sampled state to visual values and nothing else; side
//! effects live in the adapter's presenter. The coordinator decides when each
//! emitter runs (throttles, gates, frame skip).

pub mod badge;
pub mod header;
pub mod marquee;
pub mod parallax;
pub mod pointer;
pub mod sidenav;
pub mod wave;
