use ndarray::{s, ArrayView3, Axis};

use crate::common::{DetBox, Detection, PostConfig};
use crate::data::PostError;

/// Transforms the flat output buffer into one candidate per anchor row.
///
/// Box geometry comes out in pixel coordinates of the `img_width` x
/// `img_height` image: centers and sizes are scaled up from their normalized
/// values, edges are clamped to the image and truncated to whole pixels.
/// Thresholding happens later, so every anchor emits a candidate.
///
/// Fails fast with [`PostError::ShapeMismatch`] when the buffer length does
/// not match the configured shape, before any candidate is produced.
pub fn decode(
    output: &[f32],
    config: &PostConfig,
    img_width: u32,
    img_height: u32,
) -> Result<Vec<Detection>, PostError> {
    config.validate()?;

    let [batch, anchors, values] = config.output_shape;
    let view = ArrayView3::from_shape((batch, anchors, values), output).map_err(|_| {
        PostError::ShapeMismatch {
            shape: config.output_shape,
            expected: config.value_count(),
            got: output.len(),
        }
    })?;
    let preds = view.index_axis(Axis(0), 0);

    let img_w = img_width as f32;
    let img_h = img_height as f32;

    let mut candidates = Vec::with_capacity(anchors);
    for row in preds.axis_iter(Axis(0)) {
        let x = row[0] * img_w;
        let y = row[1] * img_h;
        let w = row[2] * img_w;
        let h = row[3] * img_h;
        let xmin = (x - w / 2.).max(0.).trunc();
        let ymin = (y - h / 2.).max(0.).trunc();
        let xmax = (x + w / 2.).min(img_w).trunc();
        let ymax = (y + h / 2.).min(img_h).trunc();
        let confidence = row[4];

        // Strict `>` with a zero floor: all-non-positive class scores fall
        // through to class 0 with score 0, matching the shipped decoder.
        let mut class_id = 0;
        let mut class_score = 0f32;
        for (j, &score) in row.slice(s![5..]).iter().enumerate() {
            if score > class_score {
                class_score = score;
                class_id = j;
            }
        }

        candidates.push(
            Detection::default()
                .with_bbox(DetBox::new(xmin, ymin, xmax, ymax))
                .with_class_id(class_id)
                .with_class_score(class_score)
                .with_confidence(confidence),
        );
    }

    Ok(candidates)
}
