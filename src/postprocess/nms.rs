use crate::common::Detection;

pub trait Nms {
    fn iou(&self, other: &Self) -> f32;
    fn confidence(&self) -> f32;
}

/// Greedy highest-confidence-first suppression, in place. The sort is stable,
/// so candidates with equal confidence keep their input order and repeated
/// runs pick the same winners. A candidate is dropped when its IoU with any
/// already-picked box reaches `iou_threshold`; strictly-below survives.
pub fn suppress<T: Nms>(boxes: &mut Vec<T>, iou_threshold: f32) {
    boxes.sort_by(|b1, b2| {
        b2.confidence()
            .partial_cmp(&b1.confidence())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut current_index = 0;
    for index in 0..boxes.len() {
        let mut drop = false;
        for prev_index in 0..current_index {
            let iou = boxes[prev_index].iou(&boxes[index]);
            if iou >= iou_threshold {
                drop = true;
                break;
            }
        }
        if !drop {
            boxes.swap(current_index, index);
            current_index += 1;
        }
    }
    boxes.truncate(current_index);
}

/// First suppression pass. Classes are filtered and suppressed independently
/// so a strong box of one class never shadows a box of another; the output is
/// the concatenation of the per-class survivors.
pub fn per_class_nms(
    candidates: &[Detection],
    num_classes: usize,
    detect_threshold: f32,
    iou_threshold: f32,
) -> Vec<Detection> {
    let mut keep = Vec::new();
    for class_id in 0..num_classes {
        let mut pool: Vec<Detection> = candidates
            .iter()
            .filter(|d| d.class_id == class_id && d.confidence > detect_threshold)
            .cloned()
            .collect();
        suppress(&mut pool, iou_threshold);
        keep.extend(pool);
    }
    keep
}

/// Second suppression pass, pooling every class together with a looser
/// threshold. Multi-class detectors tend to keep near-identical boxes under
/// different classes for the same physical object; this pass removes them.
pub fn cross_class_nms(
    survivors: &[Detection],
    detect_threshold: f32,
    dup_threshold: f32,
) -> Vec<Detection> {
    let mut pool: Vec<Detection> = survivors
        .iter()
        .filter(|d| d.confidence > detect_threshold)
        .cloned()
        .collect();
    suppress(&mut pool, dup_threshold);
    pool
}
