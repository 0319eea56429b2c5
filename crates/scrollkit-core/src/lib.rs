//! Scrollkit core (DOM-agnostic)
//!
//! Pure per-frame computation for scroll-driven page animation: parallax,
//! header chrome, side-nav labels, the wave marquee, and the gating/throttling
//! state that decides when each of those runs. Adapters (the wasm crate) read
//! the live document into [`FrameSample`] snapshots, call the [`Coordinator`],
//! and apply the resulting [`Outputs`] back to the host.

pub mod config;
pub mod coordinator;
pub mod emitters;
pub mod error;
pub mod gate;
pub mod ids;
pub mod outputs;
pub mod registry;
pub mod sample;
pub mod throttle;

// Re-exports for consumers (adapters)
pub use config::{
    BadgeConfig, Config, HeaderConfig, MarqueeConfig, ParallaxConfig, PointerConfig,
    SideNavConfig, ThrottleConfig, WaveConfig,
};
pub use coordinator::Coordinator;
pub use error::ConfigError;
pub use gate::{FrameGate, VisibilityGate};
pub use ids::{GateId, IdAllocator, TargetId};
pub use outputs::{Change, Event, Outputs, Visual};
pub use registry::{Registry, Role};
pub use sample::{CharSample, FrameSample, PointerSample, ViewportSample};
pub use throttle::Throttle;
