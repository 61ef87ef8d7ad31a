use std::time::Instant;

use crate::common::{Detection, PostConfig};
use crate::data::{Labels, PostError};
use crate::postprocess::{cross_class_nms, decode, per_class_nms};

/// One configured decode + NMS pipeline.
///
/// Immutable after construction; `process` holds no state across calls, so a
/// shared `Postprocessor` may serve multiple threads concurrently.
#[derive(Debug)]
pub struct Postprocessor {
    config: PostConfig,
    labels: Labels,
}

impl Postprocessor {
    /// Validates the output shape and that the label table covers exactly the
    /// model's class count. A mismatched table is a configuration error and
    /// refuses to construct rather than mislabeling detections later.
    pub fn new(config: PostConfig, labels: Labels) -> Result<Self, PostError> {
        config.validate()?;
        if labels.len() != config.num_classes() {
            return Err(PostError::LabelCountMismatch {
                labels: labels.len(),
                classes: config.num_classes(),
            });
        }
        Ok(Self { config, labels })
    }

    pub fn config(&self) -> &PostConfig {
        &self.config
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Runs one full pipeline pass over a raw output buffer:
    /// decode, per-class NMS, cross-class duplicate filter, label attachment.
    ///
    /// # Arguments
    ///
    /// * `output` - Flat output buffer of the configured shape.
    /// * `img_width` - Width in pixels of the image the boxes map onto.
    /// * `img_height` - Height in pixels of the image the boxes map onto.
    ///
    /// # Returns
    ///
    /// The final detections, ordered by NMS selection order across classes.
    pub fn process(
        &self,
        output: &[f32],
        img_width: u32,
        img_height: u32,
    ) -> Result<Vec<Detection>, PostError> {
        let now = Instant::now();

        let candidates = decode(output, &self.config, img_width, img_height)?;
        log::trace!("decoded {} candidates in {:?}", candidates.len(), now.elapsed());

        let survivors = per_class_nms(
            &candidates,
            self.config.num_classes(),
            self.config.detect_threshold,
            self.config.iou_threshold,
        );
        let mut detections = cross_class_nms(
            &survivors,
            self.config.detect_threshold,
            self.config.class_dup_threshold,
        );
        log::trace!(
            "nms kept {} of {} candidates in {:?}",
            detections.len(),
            candidates.len(),
            now.elapsed()
        );

        for detection in detections.iter_mut() {
            detection.label = Some(self.labels.name(detection.class_id)?.to_string());
        }

        Ok(detections)
    }
}
