mod decoder;
mod nms;
mod pipeline;

pub use decoder::decode;
pub use nms::{cross_class_nms, per_class_nms, suppress, Nms};
pub use pipeline::Postprocessor;
