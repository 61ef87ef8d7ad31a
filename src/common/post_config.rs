use crate::data::PostError;

/// Injected configuration for one postprocessing pipeline.
///
/// Quantization parameters, thread counts and delegate selection belong to
/// the inference engine; only the `is_quantized` flag is carried here so a
/// caller can wire the engine and the postprocessor consistently.
#[derive(Debug, Clone)]
pub struct PostConfig {
    pub labels_path: String,
    pub input_width: u32,
    pub input_height: u32,
    pub output_shape: [usize; 3],
    pub is_quantized: bool,
    pub detect_threshold: f32,
    pub iou_threshold: f32,
    pub class_dup_threshold: f32,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            labels_path: String::new(),
            input_width: 640,
            input_height: 640,
            output_shape: [1, 25200, 9],
            is_quantized: false,
            detect_threshold: 0.25,
            iou_threshold: 0.45,
            class_dup_threshold: 0.7,
        }
    }
}

impl PostConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_labels_path(mut self, labels_path: &str) -> Self {
        self.labels_path = labels_path.to_string();
        self
    }

    pub fn with_input_size(mut self, width: u32, height: u32) -> Self {
        self.input_width = width;
        self.input_height = height;
        self
    }

    pub fn with_output_shape(mut self, shape: [usize; 3]) -> Self {
        self.output_shape = shape;
        self
    }

    pub fn with_quantized(mut self, x: bool) -> Self {
        self.is_quantized = x;
        self
    }

    pub fn with_detect_threshold(mut self, x: f32) -> Self {
        self.detect_threshold = x;
        self
    }

    pub fn with_iou_threshold(mut self, x: f32) -> Self {
        self.iou_threshold = x;
        self
    }

    pub fn with_class_dup_threshold(mut self, x: f32) -> Self {
        self.class_dup_threshold = x;
        self
    }

    /// Number of anchor rows in the output tensor.
    pub fn num_anchors(&self) -> usize {
        self.output_shape[1]
    }

    /// Number of classes the model predicts. Each anchor row carries
    /// `[cx, cy, w, h, objectness]` before the per-class scores.
    pub fn num_classes(&self) -> usize {
        self.output_shape[2].saturating_sub(5)
    }

    /// Total number of float values the output buffer must hold.
    pub fn value_count(&self) -> usize {
        self.output_shape[0] * self.output_shape[1] * self.output_shape[2]
    }

    /// Rejects shapes the decoder cannot walk: the batch dimension must be 1,
    /// and each anchor row needs the 5 box/objectness values plus at least
    /// one class score.
    pub fn validate(&self) -> Result<(), PostError> {
        if self.output_shape[0] != 1 || self.output_shape[1] == 0 || self.output_shape[2] < 6 {
            return Err(PostError::BadOutputShape(self.output_shape));
        }
        Ok(())
    }

    pub fn to_string(&self) -> String {
        format!("Labels Path: {}\n\
        Model Input Resolution: {}x{}\n\
        Output Shape: {:?}\n\
        Quantized Output: {}\n\
        Detection Threshold: {}\n\
        NMS IoU Threshold: {}\n\
        Class Duplicate Threshold: {}",
                self.labels_path, self.input_width, self.input_height,
                self.output_shape, self.is_quantized, self.detect_threshold,
                self.iou_threshold, self.class_dup_threshold)
    }
}
