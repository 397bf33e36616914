use crate::error::ChartResult;
use crate::render::{CanvasLayerKind, RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so tests catch invalid geometry without
/// a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    /// Primitive count of one layer in the last rendered frame.
    #[must_use]
    pub fn last_layer_primitive_count(&self, kind: CanvasLayerKind) -> usize {
        self.last_frame
            .as_ref()
            .map_or(0, |frame| frame.layer(kind).primitive_count())
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_path_count = frame.layers().map(|(_, layer)| layer.paths.len()).sum();
        self.last_text_count = frame.layers().map(|(_, layer)| layer.texts.len()).sum();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
