use crate::core::AxisTick;

/// Gap kept between neighbouring time labels.
const AXIS_LABEL_GAP_PX: f64 = 8.0;
/// Average glyph advance relative to font size for the default sans font.
const LABEL_CHAR_WIDTH_RATIO: f64 = 0.6;

pub(super) fn estimate_label_width_px(label: &str, font_size_px: f64) -> f64 {
    label.chars().count() as f64 * font_size_px * LABEL_CHAR_WIDTH_RATIO
}

/// Minimum center-to-center spacing so the widest label does not overlap.
pub(super) fn min_label_spacing_px(ticks: &[AxisTick], font_size_px: f64) -> f64 {
    ticks
        .iter()
        .map(|tick| estimate_label_width_px(&tick.label, font_size_px))
        .fold(0.0, f64::max)
        + AXIS_LABEL_GAP_PX
}

/// Drops ticks closer than `min_spacing_px`, preferring to keep the last one.
pub(super) fn select_ticks_with_min_spacing(
    mut ticks: Vec<AxisTick>,
    min_spacing_px: f64,
) -> Vec<AxisTick> {
    if ticks.is_empty() {
        return ticks;
    }

    ticks.sort_by(|left, right| left.position_px.total_cmp(&right.position_px));
    if ticks.len() == 1 || !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return ticks;
    }

    let last_tick = ticks[ticks.len() - 1].clone();
    let mut selected: Vec<AxisTick> = Vec::with_capacity(ticks.len());
    for tick in ticks {
        match selected.last() {
            Some(previous) if tick.position_px - previous.position_px < min_spacing_px => {}
            _ => selected.push(tick),
        }
    }

    let selected_len = selected.len();
    if selected[selected_len - 1] != last_tick {
        if selected_len == 1 {
            // On very narrow axes a single label is clearer than overlapping pairs.
            selected[0] = last_tick;
        } else if last_tick.position_px - selected[selected_len - 2].position_px >= min_spacing_px
        {
            selected[selected_len - 1] = last_tick;
        }
    }

    selected
}
