//! Visual theme for the studio site.

mod styles;

pub use styles::GLOBAL_STYLES;
