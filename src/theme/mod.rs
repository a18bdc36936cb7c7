//! Global styles for MySoothe.

mod styles;

pub use styles::{baseline_padding, global_styles};
