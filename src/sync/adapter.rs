//! Normalize on input and write the result back through exactly one channel.

use crate::normalizer::{ConfigError, NormalizationConfig, Normalizer};

use super::control::{ControlBinding, InputHandle, SetValueOptions, Unbound};

/// Which channel, if any, received the normalized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Value was already normalized; nothing written.
    Unchanged,
    /// Written to the bound control with change notification suppressed.
    Control,
    /// Written to the input handle.
    Target,
}

/// Input-event handler holding the config and an optional bound control.
#[derive(Debug)]
pub struct SyncAdapter<B = Unbound> {
    config: NormalizationConfig,
    /// Compiled from `config`; cleared whenever the config is borrowed mutably.
    normalizer: Option<Normalizer>,
    binding: B,
}

impl SyncAdapter<Unbound> {
    pub fn new(config: NormalizationConfig) -> Self {
        Self::with_binding(config, Unbound)
    }
}

impl<B: ControlBinding> SyncAdapter<B> {
    pub fn with_binding(config: NormalizationConfig, binding: B) -> Self {
        Self {
            config,
            normalizer: None,
            binding,
        }
    }

    pub fn config(&self) -> &NormalizationConfig {
        &self.config
    }

    /// Options may be changed between events; they are recompiled on the next one.
    pub fn config_mut(&mut self) -> &mut NormalizationConfig {
        self.normalizer = None;
        &mut self.config
    }

    /// Compile the current config now so errors surface before the first event.
    pub fn prepare(&mut self) -> Result<(), ConfigError> {
        if self.normalizer.is_none() {
            self.normalizer = Some(Normalizer::new(&self.config)?);
        }
        Ok(())
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    /// Handle one input event from `target`.
    pub fn on_input<H>(&mut self, target: &mut H) -> Result<SyncOutcome, ConfigError>
    where
        H: InputHandle + ?Sized,
    {
        let normalizer = match self.normalizer.take() {
            Some(n) => n,
            None => Normalizer::new(&self.config)?,
        };
        let normalized = normalizer.transform(target.value());
        self.normalizer = Some(normalizer);
        if normalized == target.value() {
            tracing::trace!(value = %normalized, "input already normalized");
            return Ok(SyncOutcome::Unchanged);
        }

        if let Some(control) = self.binding.control_mut() {
            tracing::debug!(value = %normalized, channel = "control", "normalized input");
            control.set_value(&normalized, SetValueOptions { emit_event: false });
            return Ok(SyncOutcome::Control);
        }

        tracing::debug!(value = %normalized, channel = "target", "normalized input");
        target.set_value(normalized);
        Ok(SyncOutcome::Target)
    }
}
