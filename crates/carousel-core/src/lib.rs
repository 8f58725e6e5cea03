pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod layout;
pub mod sink;
pub mod state;

pub use config::ScrollConfig;
pub use constants::*;
pub use engine::ScrollEngine;
pub use error::{CarouselError, Result};
pub use layout::{LayoutBounds, LayoutProvider, StaticLayout};
pub use sink::{FrameScheduler, ManualScheduler, RenderSink};
pub use state::*;
