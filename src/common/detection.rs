use serde::{Deserialize, Serialize};
use crate::common::DetBox;
use crate::postprocess::Nms;

/// A single decoded detection. `label` stays `None` until the final stage of
/// the pipeline resolves it from the label table.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub class_id: usize,
    pub bbox: DetBox,
    pub label: Option<String>,
    pub class_score: f32,
    pub confidence: f32,
}

impl Nms for Detection {
    /// Computes the intersection over union (IoU) between this detection's
    /// bounding box and another's.
    fn iou(&self, other: &Self) -> f32 {
        self.bbox.iou(&other.bbox)
    }

    /// Returns the objectness confidence of the detection.
    fn confidence(&self) -> f32 {
        self.confidence
    }
}

impl Detection {
    pub fn new(class_id: usize, bbox: DetBox, label: Option<String>, class_score: f32, confidence: f32) -> Self {
        Self {
            class_id,
            bbox,
            label,
            class_score,
            confidence,
        }
    }

    /// Sets the bounding box of the detection.
    ///
    /// # Arguments
    ///
    /// * `bbox` - The bounding box to be set.
    ///
    /// # Returns
    ///
    /// A `Detection` instance with updated bounding box.
    pub fn with_bbox(mut self, bbox: DetBox) -> Self {
        self.bbox = bbox;
        self
    }

    /// Sets the objectness confidence of the detection.
    ///
    /// # Arguments
    ///
    /// * `conf` - The confidence score to be set.
    ///
    /// # Returns
    ///
    /// A `Detection` instance with updated confidence score.
    pub fn with_confidence(mut self, conf: f32) -> Self {
        self.confidence = conf;
        self
    }

    /// Sets the class ID of the detection.
    ///
    /// # Arguments
    ///
    /// * `class_id` - The class ID to be set.
    ///
    /// # Returns
    ///
    /// A `Detection` instance with updated class ID.
    pub fn with_class_id(mut self, class_id: usize) -> Self {
        self.class_id = class_id;
        self
    }

    /// Sets the best-class score of the detection.
    ///
    /// # Arguments
    ///
    /// * `score` - The class score to be set.
    ///
    /// # Returns
    ///
    /// A `Detection` instance with updated class score.
    pub fn with_class_score(mut self, score: f32) -> Self {
        self.class_score = score;
        self
    }

    /// Sets the optional label name of the detection.
    ///
    /// # Arguments
    ///
    /// * `label` - The name to be set.
    ///
    /// # Returns
    ///
    /// A `Detection` instance with updated name.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn get_label(&self) -> String {
        self.label.clone().unwrap_or("Unknown".to_string())
    }
}
