//! Upgrade levels
//!
//! Only the numeric effect on [`LaunchParams`] is modelled here. Prices and
//! purchasing belong to the shop UI.

use serde::{Deserialize, Serialize};

use crate::sim::LaunchParams;

/// Highest level any upgrade can reach
pub const MAX_UPGRADE_LEVEL: u8 = 5;

/// Restitution never goes above this, however many bounce upgrades
const MAX_RESTITUTION: f32 = 0.9;

/// Upgrade tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeKind {
    LaunchPower,
    Weight,
    PullBack,
    Bounce,
    Impulse,
    Booster,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 6] = [
        UpgradeKind::LaunchPower,
        UpgradeKind::Weight,
        UpgradeKind::PullBack,
        UpgradeKind::Bounce,
        UpgradeKind::Impulse,
        UpgradeKind::Booster,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeKind::LaunchPower => "launch_power",
            UpgradeKind::Weight => "weight",
            UpgradeKind::PullBack => "pull_back",
            UpgradeKind::Bounce => "bounce",
            UpgradeKind::Impulse => "impulse",
            UpgradeKind::Booster => "booster",
        }
    }
}

/// Current level of each upgrade track
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Upgrades {
    /// +2 launch power per level
    pub launch_power: u8,
    /// Gravity multiplier x0.9 per level
    pub weight: u8,
    /// +10 max pull-back per level
    pub pull_back: u8,
    /// +0.05 restitution per level
    pub bounce: u8,
    /// One mid-flight impulse per level
    pub impulse: u8,
    /// +0.25 key launch boost per level
    pub booster: u8,
}

impl Upgrades {
    pub fn level(&self, kind: UpgradeKind) -> u8 {
        match kind {
            UpgradeKind::LaunchPower => self.launch_power,
            UpgradeKind::Weight => self.weight,
            UpgradeKind::PullBack => self.pull_back,
            UpgradeKind::Bounce => self.bounce,
            UpgradeKind::Impulse => self.impulse,
            UpgradeKind::Booster => self.booster,
        }
    }

    fn level_mut(&mut self, kind: UpgradeKind) -> &mut u8 {
        match kind {
            UpgradeKind::LaunchPower => &mut self.launch_power,
            UpgradeKind::Weight => &mut self.weight,
            UpgradeKind::PullBack => &mut self.pull_back,
            UpgradeKind::Bounce => &mut self.bounce,
            UpgradeKind::Impulse => &mut self.impulse,
            UpgradeKind::Booster => &mut self.booster,
        }
    }

    /// Raise one track by a level. Returns false if already maxed.
    pub fn raise(&mut self, kind: UpgradeKind) -> bool {
        let level = self.level_mut(kind);
        if *level >= MAX_UPGRADE_LEVEL {
            return false;
        }
        *level += 1;
        true
    }

    /// Levels above the cap (e.g. from a hand-edited config) are treated as the cap
    fn capped(&self, kind: UpgradeKind) -> u8 {
        self.level(kind).min(MAX_UPGRADE_LEVEL)
    }

    /// Combined boost from equipped gear, used by key launches
    pub fn key_launch_boost(&self) -> f32 {
        1.0 + 0.25 * self.capped(UpgradeKind::Booster) as f32
    }

    /// Parameters for the next run with these upgrades applied on top of `base`
    pub fn apply(&self, base: &LaunchParams) -> LaunchParams {
        let mut params = base.clone();
        params.launch_power += 2.0 * self.capped(UpgradeKind::LaunchPower) as f32;
        params.weight *= 0.9_f32.powi(self.capped(UpgradeKind::Weight) as i32);
        params.max_pull_back += 10.0 * self.capped(UpgradeKind::PullBack) as f32;
        let bounce = 0.05 * self.capped(UpgradeKind::Bounce) as f32;
        // Never lowers a base restitution that already sits above the cap
        let restitution_cap = MAX_RESTITUTION.max(base.restitution);
        params.restitution = (params.restitution + bounce).min(restitution_cap);
        params.impulse_allowance += self.capped(UpgradeKind::Impulse) as u32;
        params.key_launch_boost *= self.key_launch_boost();
        params
    }
}
