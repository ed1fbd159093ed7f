//! Serializable binding sets and their configuration-time validation.
//!
//! A loader deserializes a [`BindingConfig`] from whatever format it likes,
//! then calls [`BindingConfig::build`]. Every check happens here, once, so
//! resolution never has to re-validate.

use keystone_core::constants::{COMBO_MAX, COMBO_MIN};
use keystone_core::{ActionId, Actuator, Error, OutputRange, Result, Source};
use serde::{Deserialize, Serialize};

use crate::remapper::{Binding, Remapper};

/// Identity of an actuator inside a binding description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorRef {
    pub source: Source,
    pub code: u16,
}

impl ActuatorRef {
    #[must_use]
    pub const fn new(source: Source, code: u16) -> Self {
        Self { source, code }
    }
}

impl From<ActuatorRef> for Actuator {
    fn from(actuator: ActuatorRef) -> Self {
        Self::new(actuator.source, actuator.code, 0)
    }
}

impl From<Actuator> for ActuatorRef {
    fn from(actuator: Actuator) -> Self {
        Self::new(actuator.source, actuator.code)
    }
}

/// One binding in a binding set.
///
/// `action` is the raw action id. When `range` is omitted a direct binding
/// uses the actuator's native range and a combo uses `[-32767, 32767]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingEntry {
    Direct {
        action: u16,
        actuator: ActuatorRef,
        #[serde(default)]
        range: Option<OutputRange>,
    },
    Combo {
        action: u16,
        min: ActuatorRef,
        max: ActuatorRef,
        #[serde(default)]
        range: Option<OutputRange>,
    },
}

impl BindingEntry {
    /// Validate and convert into a binding.
    pub fn to_binding(&self) -> Result<Binding> {
        match *self {
            Self::Direct {
                action,
                actuator,
                range,
            } => {
                let action = ActionId::from_raw(action)?;
                let actuator = Actuator::from(actuator);
                let range = range.unwrap_or_else(|| OutputRange::native(actuator));
                check_range(action, range)?;
                Ok(Binding::direct(action, actuator, range))
            }
            Self::Combo {
                action,
                min,
                max,
                range,
            } => {
                let action = ActionId::from_raw(action)?;
                if min == max {
                    return Err(Error::InvalidBinding(format!(
                        "combo for {action} uses {:?} {} for both ends",
                        min.source, min.code
                    )));
                }
                let range = range.unwrap_or(OutputRange::new(COMBO_MIN, COMBO_MAX));
                check_range(action, range)?;
                Ok(Binding::combo(action, min.into(), max.into(), range))
            }
        }
    }
}

fn check_range(action: ActionId, range: OutputRange) -> Result<()> {
    if range.is_degenerate() {
        return Err(Error::InvalidBinding(format!(
            "range for {action} collapses to {}",
            range.min
        )));
    }
    Ok(())
}

/// A named set of bindings, e.g. "gameplay" or "menu".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    pub name: String,
    pub bindings: Vec<BindingEntry>,
}

impl BindingConfig {
    /// Create an empty binding set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: Vec::new(),
        }
    }

    /// Add a direct binding entry.
    #[must_use]
    pub fn with_direct(
        mut self,
        action: ActionId,
        actuator: Actuator,
        range: Option<OutputRange>,
    ) -> Self {
        self.bindings.push(BindingEntry::Direct {
            action: action.raw(),
            actuator: actuator.into(),
            range,
        });
        self
    }

    /// Add a combo binding entry.
    #[must_use]
    pub fn with_combo(
        mut self,
        action: ActionId,
        min: Actuator,
        max: Actuator,
        range: Option<OutputRange>,
    ) -> Self {
        self.bindings.push(BindingEntry::Combo {
            action: action.raw(),
            min: min.into(),
            max: max.into(),
            range,
        });
        self
    }

    /// Validate every entry without building anything.
    pub fn validate(&self) -> Result<()> {
        self.to_bindings().map(|_| ())
    }

    fn to_bindings(&self) -> Result<Vec<Binding>> {
        self.bindings
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                entry.to_binding().inspect_err(|err| {
                    tracing::warn!(set = %self.name, entry = i, %err, "binding rejected");
                })
            })
            .collect()
    }

    /// Append every binding to `remapper`.
    ///
    /// All entries are validated first; on error `remapper` is untouched.
    pub fn apply_to(&self, remapper: &mut Remapper) -> Result<usize> {
        let bindings = self.to_bindings()?;
        let count = bindings.len();
        for binding in bindings {
            remapper.push(binding);
        }
        tracing::debug!(set = %self.name, count, "binding set loaded");
        Ok(count)
    }

    /// Build a fresh remapper from this set.
    pub fn build(&self) -> Result<Remapper> {
        let mut remapper = Remapper::new();
        self.apply_to(&mut remapper)?;
        Ok(remapper)
    }
}
