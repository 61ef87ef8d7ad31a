pub mod common;
pub mod data;
pub mod postprocess;

use std::time::Instant;

use crate::common::{Detection, PostConfig};
use crate::data::{Labels, PostError};
use crate::postprocess::Postprocessor;

pub type Result<T, E = PostError> = std::result::Result<T, E>;

pub fn init_postprocessor(config: PostConfig) -> anyhow::Result<Postprocessor> {
    let labels = Labels::from_file(&config.labels_path)?;
    log::info!("loaded {} labels from {}", labels.len(), config.labels_path);
    log::debug!("postprocessor configured:\n{}", config.to_string());

    if config.is_quantized {
        log::warn!("output tensor is quantized; dequantize it in the inference engine before postprocessing");
    }

    Ok(Postprocessor::new(config, labels)?)
}

pub fn run_postprocess(
    post: &Postprocessor,
    output: &[f32],
    img_width: u32,
    img_height: u32,
) -> Result<Vec<Detection>> {
    let now = Instant::now();

    let detections = post.process(output, img_width, img_height)?;

    log::debug!("postprocessing time: {:?}", now.elapsed());

    Ok(detections)
}
