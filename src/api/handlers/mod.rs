//! HTTP endpoint handlers

pub mod analytics;
pub mod goals;
pub mod rooms;
pub mod system;
pub mod timer;

pub use analytics::*;
pub use goals::*;
pub use rooms::*;
pub use system::*;
pub use timer::*;
