
mod det_box;
mod detection;
mod post_config;

pub use det_box::*;
pub use detection::*;
pub use post_config::*;
