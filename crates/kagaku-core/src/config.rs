//! Per-entity configuration
//!
//! Everything the collaborator layer decides at creation time: kind,
//! substance, physical attributes, default state and the gating
//! thresholds. Specs are plain serde data so scenario files can carry
//! them.

use serde::{Deserialize, Serialize};

use kagaku_chemistry::{Attributes, State, Substance};

use crate::simulation::ResetPolicy;

/// Whether a participant has physical substance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Carries and propagates a state, no substance of its own
    #[default]
    Element,
    /// Has substance; its elemental aspect is driven by elements
    Material,
}

/// Threshold configuration for one gated transition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSpec {
    /// Contact seconds that must accumulate before the transition fires
    pub time: f32,
    /// Grace period after contact loss before the reset policy applies
    pub reset_delay: f32,
    pub reset_policy: ResetPolicy,
}

impl Default for ThresholdSpec {
    fn default() -> Self {
        Self {
            time: 2.0,
            reset_delay: 0.5,
            reset_policy: ResetPolicy::ZeroReset,
        }
    }
}

impl ThresholdSpec {
    pub fn new(time: f32) -> Self {
        Self {
            time,
            ..Default::default()
        }
    }
}

/// Creation-time configuration for one chemistry participant
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntitySpec {
    /// Display name, used in logs and notifications only
    pub name: String,
    pub kind: EntityKind,
    /// Required for materials, ignored for elements
    pub substance: Option<Substance>,

    pub combustible: bool,
    pub freezable: bool,
    pub conductor: bool,
    pub liquid: bool,

    /// State applied at registration (subject to the attribute veto)
    pub default_state: State,

    /// Undefined → Fire by fire contact
    pub ignition: ThresholdSpec,
    /// Fire → Undefined by wind contact
    pub burn_out_by_wind: ThresholdSpec,
    /// Ice → Undefined by fire contact
    pub melting: ThresholdSpec,
}

impl Default for EntitySpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: EntityKind::Element,
            substance: None,
            combustible: false,
            freezable: false,
            conductor: false,
            liquid: false,
            default_state: State::Undefined,
            ignition: ThresholdSpec::new(2.0),
            burn_out_by_wind: ThresholdSpec::new(3.0),
            melting: ThresholdSpec::new(2.5),
        }
    }
}

impl EntitySpec {
    pub fn attributes(&self) -> Attributes {
        Attributes {
            combustible: self.combustible,
            freezable: self.freezable,
            conductor: self.conductor,
            liquid: self.liquid,
        }
    }

    // Common archetypes, mirroring the stock prefab set.

    pub fn fire_element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            combustible: true,
            default_state: State::Fire,
            ..Default::default()
        }
    }

    pub fn water_element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            liquid: true,
            freezable: true,
            conductor: true,
            default_state: State::Water,
            ..Default::default()
        }
    }

    pub fn ice_element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            freezable: true,
            default_state: State::Ice,
            ..Default::default()
        }
    }

    pub fn wind_element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_state: State::Wind,
            ..Default::default()
        }
    }

    pub fn electricity_element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conductor: true,
            default_state: State::Electricity,
            ..Default::default()
        }
    }

    pub fn combustible_material(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Material,
            substance: Some(Substance::Combustible),
            combustible: true,
            ..Default::default()
        }
    }

    pub fn non_combustible_material(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Material,
            substance: Some(Substance::NonCombustible),
            freezable: true,
            ..Default::default()
        }
    }

    pub fn metal_material(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Material,
            substance: Some(Substance::Metal),
            conductor: true,
            ..Default::default()
        }
    }

    pub fn liquid_material(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Material,
            substance: Some(Substance::Liquid),
            liquid: true,
            freezable: true,
            conductor: true,
            ..Default::default()
        }
    }
}
