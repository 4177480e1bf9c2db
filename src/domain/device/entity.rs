//! Device Context - Entity

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DeviceState;

/// Device entity
///
/// Invariants:
/// - `id` and `created_at` are assigned once at creation and never change
/// - `state` is always one of the enumerated values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub state: DeviceState,
    pub created_at: DateTime<Utc>,
}

impl Device {
    /// New device with a fresh id, `available` state and the current time
    ///
    /// `created_at` is kept at microsecond precision, the resolution storage
    /// round-trips.
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            brand: brand.into(),
            state: DeviceState::default(),
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    pub fn is_in_use(&self) -> bool {
        self.state == DeviceState::InUse
    }

    /// Applies the non-empty fields of a patch.
    ///
    /// Assumes the patch already passed validation; an unparseable state is ignored.
    pub fn apply(&mut self, patch: &DevicePatch) {
        if let Some(name) = patch.name() {
            self.name = name.to_string();
        }
        if let Some(brand) = patch.brand() {
            self.brand = brand.to_string();
        }
        if let Some(state) = patch.state().and_then(DeviceState::parse) {
            self.state = state;
        }
    }
}

/// Partial update of a device
///
/// Absent and empty values both mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DevicePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl DevicePatch {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn brand(&self) -> Option<&str> {
        non_empty(&self.brand)
    }

    pub fn state(&self) -> Option<&str> {
        non_empty(&self.state)
    }

    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.brand().is_none() && self.state().is_none()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
