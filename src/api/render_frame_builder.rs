use crate::core::{AxisTick, time_axis_ticks, value_axis_ticks};
use crate::error::ChartResult;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::axis_ticks::{
    estimate_label_width_px, min_label_spacing_px, select_ticks_with_min_spacing,
};
use super::{ChartScales, LineChart};

const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
const TICK_SIZE_PX: f64 = 6.0;
const TICK_PADDING_PX: f64 = 3.0;
const TOOLTIP_OFFSET_PX: f64 = 12.0;
const TOOLTIP_PADDING_PX: f64 = 6.0;
const TOOLTIP_LINE_HEIGHT_RATIO: f64 = 1.4;
const TOOLTIP_CORNER_RADIUS_PX: f64 = 3.0;
const STATUS_FONT_SCALE: f64 = 1.4;
const NO_DATA_LABEL: &str = "No data";

impl<R: Renderer> LineChart<R> {
    /// Materializes the scene for the current state without rendering it.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.layout.viewport);

        let Some(scales) = self.scales else {
            self.append_no_data_status(&mut frame);
            return Ok(frame);
        };

        self.append_value_axis(&mut frame, scales);
        self.append_time_axis(&mut frame, scales)?;
        self.append_series(&mut frame);
        self.append_focus(&mut frame);
        self.append_overlay(&mut frame);
        self.append_tooltip(&mut frame)?;
        Ok(frame)
    }

    fn append_value_axis(&self, frame: &mut RenderFrame, scales: ChartScales) {
        let layout = self.layout;
        let color = self.config.axis_color;
        let axis_x = layout.plot_left();
        frame.push_line(
            CanvasLayerKind::YAxis,
            LinePrimitive::new(
                axis_x,
                layout.plot_top(),
                axis_x,
                layout.plot_bottom(),
                AXIS_STROKE_WIDTH_PX,
                color,
            ),
        );

        for tick in value_axis_ticks(scales.value, self.config.y_tick_count) {
            frame.push_line(
                CanvasLayerKind::YAxis,
                LinePrimitive::new(
                    axis_x - TICK_SIZE_PX,
                    tick.position_px,
                    axis_x,
                    tick.position_px,
                    AXIS_STROKE_WIDTH_PX,
                    color,
                ),
            );
            frame.push_text(
                CanvasLayerKind::YAxis,
                TextPrimitive::new(
                    tick.label,
                    axis_x - TICK_SIZE_PX - TICK_PADDING_PX,
                    tick.position_px + self.config.font_size_px / 3.0,
                    self.config.font_size_px,
                    color,
                    TextHAlign::Right,
                ),
            );
        }
    }

    fn append_time_axis(&self, frame: &mut RenderFrame, scales: ChartScales) -> ChartResult<()> {
        let layout = self.layout;
        let color = self.config.axis_color;
        let axis_y = layout.plot_bottom();
        frame.push_line(
            CanvasLayerKind::XAxis,
            LinePrimitive::new(
                layout.plot_left(),
                axis_y,
                layout.plot_right(),
                axis_y,
                AXIS_STROKE_WIDTH_PX,
                color,
            ),
        );

        let ticks: Vec<AxisTick> = time_axis_ticks(
            scales.time,
            self.config.x_tick_count,
            &self.config.x_tick_format,
        )?;
        let min_spacing = min_label_spacing_px(&ticks, self.config.font_size_px);
        for tick in select_ticks_with_min_spacing(ticks, min_spacing) {
            frame.push_line(
                CanvasLayerKind::XAxis,
                LinePrimitive::new(
                    tick.position_px,
                    axis_y,
                    tick.position_px,
                    axis_y + TICK_SIZE_PX,
                    AXIS_STROKE_WIDTH_PX,
                    color,
                ),
            );
            frame.push_text(
                CanvasLayerKind::XAxis,
                TextPrimitive::new(
                    tick.label,
                    tick.position_px,
                    axis_y + TICK_SIZE_PX + TICK_PADDING_PX + self.config.font_size_px,
                    self.config.font_size_px,
                    color,
                    TextHAlign::Center,
                ),
            );
        }
        Ok(())
    }

    fn append_series(&self, frame: &mut RenderFrame) {
        let commands = self.line_path();
        if commands.is_empty() {
            return;
        }
        frame.push_path(
            CanvasLayerKind::Series,
            PathPrimitive::new(
                commands,
                self.config.line_stroke_width_px,
                self.config.line_color,
            ),
        );
    }

    fn append_focus(&self, frame: &mut RenderFrame) {
        let focus = self.interaction.focus();
        if !focus.visible {
            return;
        }
        frame.push_circle(
            CanvasLayerKind::Focus,
            CirclePrimitive::new(
                focus.x,
                focus.y,
                self.config.focus_radius_px,
                self.config.focus_color,
            ),
        );
    }

    // Invisible hit area covering the whole container, as the pointer
    // handlers in the host are attached to it.
    fn append_overlay(&self, frame: &mut RenderFrame) {
        let viewport = self.layout.viewport;
        frame.push_rect(
            CanvasLayerKind::Overlay,
            RectPrimitive::new(
                0.0,
                0.0,
                f64::from(viewport.width),
                f64::from(viewport.height),
                None,
            ),
        );
    }

    fn append_tooltip(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        if !self.tooltip_attached {
            return Ok(());
        }
        let (Some((anchor_x, anchor_y)), Some(lines)) =
            (self.interaction.tooltip().anchor(), self.tooltip_lines()?)
        else {
            return Ok(());
        };

        let font_size = self.config.font_size_px;
        let line_height = font_size * TOOLTIP_LINE_HEIGHT_RATIO;
        let text_width = lines
            .iter()
            .map(|line| estimate_label_width_px(line, font_size))
            .fold(0.0, f64::max);
        let box_width = text_width + 2.0 * TOOLTIP_PADDING_PX;
        let box_height = line_height * lines.len() as f64 + 2.0 * TOOLTIP_PADDING_PX;

        let viewport_width = f64::from(self.layout.viewport.width);
        let viewport_height = f64::from(self.layout.viewport.height);
        let mut box_x = anchor_x + TOOLTIP_OFFSET_PX;
        if box_x + box_width > viewport_width {
            box_x = anchor_x - TOOLTIP_OFFSET_PX - box_width;
        }
        let box_x = box_x.max(0.0);
        let box_y = (anchor_y + TOOLTIP_OFFSET_PX)
            .min(viewport_height - box_height)
            .max(0.0);

        frame.push_rect(
            CanvasLayerKind::Tooltip,
            RectPrimitive::new(
                box_x,
                box_y,
                box_width,
                box_height,
                Some(self.config.tooltip_background_color),
            )
            .with_border(AXIS_STROKE_WIDTH_PX, Color::rgba(0.0, 0.0, 0.0, 0.25))
            .with_corner_radius(TOOLTIP_CORNER_RADIUS_PX),
        );
        for (row, line) in lines.into_iter().enumerate() {
            frame.push_text(
                CanvasLayerKind::Tooltip,
                TextPrimitive::new(
                    line,
                    box_x + TOOLTIP_PADDING_PX,
                    box_y + TOOLTIP_PADDING_PX + line_height * (row as f64 + 1.0)
                        - (line_height - font_size),
                    font_size,
                    self.config.axis_color,
                    TextHAlign::Left,
                ),
            );
        }
        Ok(())
    }

    fn append_no_data_status(&self, frame: &mut RenderFrame) {
        let layout = self.layout;
        frame.push_text(
            CanvasLayerKind::Status,
            TextPrimitive::new(
                NO_DATA_LABEL,
                layout.plot_left() + layout.plot_width() / 2.0,
                layout.plot_top() + layout.plot_height() / 2.0,
                self.config.font_size_px * STATUS_FONT_SCALE,
                self.config.axis_color,
                TextHAlign::Center,
            ),
        );
    }
}
