//! Spacing, alignment, and distribution math.
//!
//! Pure passes over a layer collection; callers (the engine for group
//! operations, the render bridge for overlays) decide what to do with
//! the results. Sorts are stable, so layers sharing a coordinate keep
//! their insertion (z-) order — the documented tie-break.

use uuid::Uuid;

use overtype_core::TextLayer;

/// Axis a group operation works along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Along x: horizontal gaps, horizontal distribution.
    Horizontal,
    /// Along y.
    Vertical,
}

/// One annotated gap between two adjacent layers on an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct GapAnnotation {
    pub from: Uuid,
    pub to: Uuid,
    /// Anchor-to-anchor distance on the axis (may be 0 for stacked layers).
    pub gap: f32,
    /// Midpoint anchor for drawing the annotation.
    pub mid_x: f32,
    pub mid_y: f32,
}

/// Horizontal and vertical gap annotations, computed together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpacingHints {
    pub horizontal: Vec<GapAnnotation>,
    pub vertical: Vec<GapAnnotation>,
}

/// Compute gap annotations for every layer with hints enabled.
///
/// Two independent passes: one sorted by x emitting horizontal gaps,
/// one sorted by y emitting vertical gaps.
pub fn spacing_hints(layers: &[TextLayer]) -> SpacingHints {
    let enabled: Vec<&TextLayer> = layers.iter().filter(|l| l.hint.enabled).collect();
    if enabled.len() < 2 {
        return SpacingHints::default();
    }

    SpacingHints {
        horizontal: gaps_along(&enabled, Axis::Horizontal),
        vertical: gaps_along(&enabled, Axis::Vertical),
    }
}

fn gaps_along(enabled: &[&TextLayer], axis: Axis) -> Vec<GapAnnotation> {
    let mut sorted = enabled.to_vec();
    sorted.sort_by(|a, b| coord(a, axis).total_cmp(&coord(b, axis)));

    sorted
        .windows(2)
        .map(|pair| GapAnnotation {
            from: pair[0].id,
            to: pair[1].id,
            gap: coord(pair[1], axis) - coord(pair[0], axis),
            mid_x: (pair[0].x + pair[1].x) / 2.0,
            mid_y: (pair[0].y + pair[1].y) / 2.0,
        })
        .collect()
}

/// Mean coordinate of the given layers along the axis — the target of a
/// center alignment. `None` below the 2-layer minimum.
pub fn alignment_target(layers: &[&TextLayer], axis: Axis) -> Option<f32> {
    if layers.len() < 2 {
        return None;
    }
    let sum: f32 = layers.iter().map(|l| coord(l, axis)).sum();
    Some(sum / layers.len() as f32)
}

/// Evenly distributed coordinates for the given layers along the axis.
///
/// Layers are sorted by their current coordinate (stable; ties keep
/// insertion order) and reassigned `first + i · (last − first)/(n−1)`.
/// `None` below the 3-layer minimum.
pub fn distribute_targets(layers: &[&TextLayer], axis: Axis) -> Option<Vec<(Uuid, f32)>> {
    if layers.len() < 3 {
        return None;
    }

    let mut sorted = layers.to_vec();
    sorted.sort_by(|a, b| coord(a, axis).total_cmp(&coord(b, axis)));

    let first = coord(sorted[0], axis);
    let last = coord(sorted[sorted.len() - 1], axis);
    let spacing = (last - first) / (sorted.len() - 1) as f32;

    Some(
        sorted
            .iter()
            .enumerate()
            .map(|(i, l)| (l.id, first + i as f32 * spacing))
            .collect(),
    )
}

#[inline]
fn coord(layer: &TextLayer, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => layer.x,
        Axis::Vertical => layer.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overtype_core::StyleTemplate;

    fn layer_at(x: f32, y: f32, hint: bool) -> TextLayer {
        let mut l = TextLayer::from_template(&StyleTemplate::default());
        l.x = x;
        l.y = y;
        l.hint.enabled = hint;
        l
    }

    #[test]
    fn test_hints_need_two_enabled_layers() {
        let layers = vec![layer_at(0.0, 0.0, true), layer_at(50.0, 0.0, false)];
        assert_eq!(spacing_hints(&layers), SpacingHints::default());
    }

    #[test]
    fn test_horizontal_gaps_sorted_by_x() {
        let a = layer_at(100.0, 0.0, true);
        let b = layer_at(0.0, 10.0, true);
        let c = layer_at(30.0, 20.0, true);
        let hints = spacing_hints(&[a.clone(), b.clone(), c.clone()]);

        assert_eq!(hints.horizontal.len(), 2);
        assert_eq!(hints.horizontal[0].from, b.id);
        assert_eq!(hints.horizontal[0].to, c.id);
        assert_eq!(hints.horizontal[0].gap, 30.0);
        assert_eq!(hints.horizontal[1].from, c.id);
        assert_eq!(hints.horizontal[1].to, a.id);
        assert_eq!(hints.horizontal[1].gap, 70.0);
        assert_eq!(hints.horizontal[0].mid_x, 15.0);
    }

    #[test]
    fn test_vertical_pass_is_independent() {
        let a = layer_at(100.0, 5.0, true);
        let b = layer_at(0.0, 50.0, true);
        let hints = spacing_hints(&[a.clone(), b.clone()]);

        assert_eq!(hints.vertical.len(), 1);
        assert_eq!(hints.vertical[0].from, a.id);
        assert_eq!(hints.vertical[0].to, b.id);
        assert_eq!(hints.vertical[0].gap, 45.0);
    }

    #[test]
    fn test_alignment_target_is_the_mean() {
        let layers = [layer_at(0.0, 10.0, false), layer_at(0.0, 20.0, false), layer_at(0.0, 30.0, false)];
        let refs: Vec<&TextLayer> = layers.iter().collect();
        assert_eq!(alignment_target(&refs, Axis::Vertical), Some(20.0));
        assert_eq!(alignment_target(&refs[..1], Axis::Vertical), None);
    }

    #[test]
    fn test_distribute_reassigns_by_sorted_index() {
        let layers = [
            layer_at(10.0, 0.0, false),
            layer_at(100.0, 0.0, false),
            layer_at(0.0, 0.0, false),
        ];
        let refs: Vec<&TextLayer> = layers.iter().collect();
        let targets = distribute_targets(&refs, Axis::Horizontal).unwrap();

        // Sorted order: x = 0, 10, 100 → targets 0, 50, 100.
        assert_eq!(targets[0], (layers[2].id, 0.0));
        assert_eq!(targets[1], (layers[0].id, 50.0));
        assert_eq!(targets[2], (layers[1].id, 100.0));
    }

    #[test]
    fn test_distribute_requires_three_layers() {
        let layers = [layer_at(0.0, 0.0, false), layer_at(10.0, 0.0, false)];
        let refs: Vec<&TextLayer> = layers.iter().collect();
        assert_eq!(distribute_targets(&refs, Axis::Horizontal), None);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let layers = [
            layer_at(5.0, 0.0, false),
            layer_at(5.0, 0.0, false),
            layer_at(20.0, 0.0, false),
        ];
        let refs: Vec<&TextLayer> = layers.iter().collect();
        let targets = distribute_targets(&refs, Axis::Horizontal).unwrap();
        assert_eq!(targets[0].0, layers[0].id);
        assert_eq!(targets[1].0, layers[1].id);
    }
}
