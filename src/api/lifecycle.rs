use tracing::{debug, trace, warn};

use crate::core::{DataPoint, DataRecord, Viewport, parse_records};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::{ChartLayout, ChartScales, DataOrdering, LineChart};

impl<R: Renderer> LineChart<R> {
    /// Attaches the chart to its host view: builds scales, creates the
    /// tooltip element and draws once.
    ///
    /// Mounting an already mounted chart redraws it.
    pub fn mount(&mut self) -> ChartResult<()> {
        self.rebuild_scales()?;
        self.mounted = true;
        self.tooltip_attached = true;
        debug!(
            width = self.layout.viewport.width,
            height = self.layout.viewport.height,
            points = self.points.len(),
            "mount line chart"
        );
        self.emit_plugin_event(ChartEvent::Mounted);
        self.render()
    }

    /// Detaches the chart and removes the tooltip element.
    ///
    /// Data and configuration are kept so the chart can be mounted again.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.tooltip_attached = false;
        self.interaction.reset();
        debug!("unmount line chart");
        self.emit_plugin_event(ChartEvent::Unmounted);
    }

    /// Replaces the dataset and redraws when mounted.
    ///
    /// An empty dataset is accepted and renders the "No data" state.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        self.replace_series(points, Vec::new())
    }

    /// Parses raw records and replaces the dataset.
    ///
    /// On an invalid date the previous dataset stays in place. The record
    /// date strings are kept for the tooltip.
    pub fn set_records(&mut self, records: &[DataRecord]) -> ChartResult<()> {
        let points = parse_records(records)?;
        let source_dates = records.iter().map(|record| record.date.clone()).collect();
        self.replace_series(points, source_dates)
    }

    fn replace_series(
        &mut self,
        points: Vec<DataPoint>,
        source_dates: Vec<String>,
    ) -> ChartResult<()> {
        let original_count = points.len();
        let (points, source_dates) = self.order_series(points, source_dates);
        let scales = if points.is_empty() {
            None
        } else {
            Some(ChartScales::build(&points, self.layout)?)
        };

        debug!(count = original_count, "set data points");
        self.points = points;
        self.source_dates = source_dates;
        self.scales = scales;
        self.interaction.reset();
        self.emit_plugin_event(ChartEvent::DataUpdated {
            points_len: self.points.len(),
        });
        self.render_if_mounted()
    }

    /// Applies a new container size.
    ///
    /// Scale domains and the dataset are untouched; only pixel ranges, the
    /// line path and pointer-derived positions are recomputed.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        let layout = ChartLayout::new(viewport, self.config.margins)?;
        let scales = match self.scales {
            Some(scales) => Some(scales.relayout(layout)?),
            None => None,
        };

        self.layout = layout;
        self.config.width = viewport.width;
        self.config.height = viewport.height;
        self.scales = scales;
        self.refresh_snap_positions();
        debug!(
            width = viewport.width,
            height = viewport.height,
            "resize line chart"
        );
        self.emit_plugin_event(ChartEvent::Resized {
            width: viewport.width,
            height: viewport.height,
        });
        self.render_if_mounted()
    }

    /// Convenience for hosts that only re-measure the container width.
    pub fn resize_width(&mut self, width: u32) -> ChartResult<()> {
        self.resize(Viewport::new(width, self.layout.viewport.height))
    }

    pub fn pointer_enter(&mut self) -> ChartResult<()> {
        if !self.mounted {
            return Ok(());
        }
        self.interaction.on_pointer_enter();
        Ok(())
    }

    /// Moves tooltip and focus marker to the sample nearest `x`.
    ///
    /// Ignored before mount, without data, or outside the overlay.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        if !self.mounted || self.scales.is_none() || !self.layout.contains(x, y) {
            trace!(x, y, "ignoring pointer move");
            return Ok(());
        }

        self.interaction.on_pointer_enter();
        let snap = self.nearest_point_at_x(x);
        self.interaction.apply_snap(snap);
        self.emit_plugin_event(ChartEvent::PointerMoved { x, y });
        if let Some(snap) = snap {
            self.emit_plugin_event(ChartEvent::TooltipShown { index: snap.index });
        }
        self.render()
    }

    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        if !self.mounted {
            return Ok(());
        }
        self.interaction.on_pointer_leave();
        self.emit_plugin_event(ChartEvent::PointerLeft);
        self.render()
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        if !self.mounted {
            return Err(ChartError::NotMounted);
        }
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(ChartEvent::Rendered);
        Ok(())
    }

    fn render_if_mounted(&mut self) -> ChartResult<()> {
        if self.mounted { self.render() } else { Ok(()) }
    }

    fn rebuild_scales(&mut self) -> ChartResult<()> {
        self.scales = if self.points.is_empty() {
            None
        } else {
            Some(ChartScales::build(&self.points, self.layout)?)
        };
        Ok(())
    }

    fn refresh_snap_positions(&mut self) {
        let (Some(scales), Some(snap)) = (self.scales, self.interaction.tooltip().snap) else {
            return;
        };
        if let Some(refreshed) = self.snap_for_index(scales, snap.index) {
            self.interaction.reposition(refreshed);
        }
    }

    fn order_series(
        &self,
        points: Vec<DataPoint>,
        source_dates: Vec<String>,
    ) -> (Vec<DataPoint>, Vec<String>) {
        match self.config.data_ordering {
            DataOrdering::SortAscending => {
                let mut order: Vec<usize> = (0..points.len()).collect();
                order.sort_by_key(|&index| points[index].time);
                let sorted_dates = if source_dates.len() == points.len() {
                    order.iter().map(|&index| source_dates[index].clone()).collect()
                } else {
                    Vec::new()
                };
                let sorted_points = order.iter().map(|&index| points[index]).collect();
                (sorted_points, sorted_dates)
            }
            DataOrdering::AsProvided => {
                if let Some(position) = points.windows(2).position(|pair| pair[1].time < pair[0].time)
                {
                    warn!(
                        index = position + 1,
                        "data points are not sorted by date; nearest-point lookup may be wrong"
                    );
                }
                (points, source_dates)
            }
        }
    }
}
