use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartEvent, ChartPlugin, PluginContext};
use crate::render::Renderer;

use super::LineChart;

impl<R: Renderer> LineChart<R> {
    /// Registers a plugin under its id.
    ///
    /// Registering an id again replaces the earlier plugin in place, so
    /// repeated setup never stacks duplicate observers. Returns `true` when
    /// a plugin was replaced.
    pub fn register_plugin(&mut self, plugin: Box<dyn ChartPlugin>) -> ChartResult<bool> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        Ok(self.plugins.insert(plugin_id, plugin).is_some())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.plugins.shift_remove(plugin_id).is_some()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.contains_key(plugin_id)
    }

    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.layout.viewport,
            mounted: self.mounted,
            points_len: self.points.len(),
            x_range: self.scales.map(|scales| scales.time.range()),
            interaction_mode: self.interaction.mode(),
            focus: self.interaction.focus(),
            tooltip: self.interaction.tooltip(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: ChartEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }
}
