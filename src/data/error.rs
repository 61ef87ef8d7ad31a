//! Error type for the postprocessing pipeline.
//!
//! Every variant is a caller contract violation (bad buffer shape, bad label
//! table); none of them is transient, so nothing here is ever retried.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostError {
    /// The output buffer length does not match the declared tensor shape.
    #[error("output buffer holds {got} values but shape {shape:?} requires {expected}")]
    ShapeMismatch {
        shape: [usize; 3],
        expected: usize,
        got: usize,
    },
    /// The declared tensor shape cannot be decoded at all.
    #[error("unsupported output shape {0:?}")]
    BadOutputShape([usize; 3]),
    /// The label table and the model's class count disagree.
    #[error("label table has {labels} names but the model predicts {classes} classes")]
    LabelCountMismatch { labels: usize, classes: usize },
    /// A class index escaped past the end of the label table.
    #[error("class id {class_id} is outside the label table ({len} names)")]
    LabelOutOfRange { class_id: usize, len: usize },
}
