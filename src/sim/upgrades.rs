use super::producers::ProducerKind;
use super::run::RunState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    BetterOvens,
    IndustrialWheat,
    RobotBakers,
    SecretFamilyRecipe,
    AssemblyLine,
}

pub const ALL_UPGRADES: [UpgradeId; 5] = [
    UpgradeId::BetterOvens,
    UpgradeId::IndustrialWheat,
    UpgradeId::RobotBakers,
    UpgradeId::SecretFamilyRecipe,
    UpgradeId::AssemblyLine,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpgradeEffect {
    MultiplyOutput { target: ProducerKind, factor: f64 },
    AddMultiplier { target: ProducerKind, delta: f64 },
}

impl UpgradeEffect {
    pub fn target(self) -> ProducerKind {
        match self {
            UpgradeEffect::MultiplyOutput { target, .. } => target,
            UpgradeEffect::AddMultiplier { target, .. } => target,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UpgradeSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub prerequisite: Option<UpgradeId>,
    pub effect: UpgradeEffect,
}

const UPGRADE_TABLE: [UpgradeSpec; 5] = [
    UpgradeSpec {
        name: "Better Ovens",
        description: "Grandmas bake twice as fast.",
        cost: 500,
        prerequisite: None,
        effect: UpgradeEffect::MultiplyOutput {
            target: ProducerKind::Grandma,
            factor: 2.0,
        },
    },
    UpgradeSpec {
        name: "Industrial Wheat",
        description: "Bakeries triple their output.",
        cost: 1_000,
        prerequisite: None,
        effect: UpgradeEffect::MultiplyOutput {
            target: ProducerKind::Bakery,
            factor: 3.0,
        },
    },
    UpgradeSpec {
        name: "Robot Bakers",
        description: "Factories run four times the line speed.",
        cost: 5_000,
        prerequisite: None,
        effect: UpgradeEffect::MultiplyOutput {
            target: ProducerKind::Factory,
            factor: 4.0,
        },
    },
    UpgradeSpec {
        name: "Secret Family Recipe",
        description: "Grandmas gain another +1.0 multiplier.",
        cost: 2_500,
        prerequisite: Some(UpgradeId::BetterOvens),
        effect: UpgradeEffect::AddMultiplier {
            target: ProducerKind::Grandma,
            delta: 1.0,
        },
    },
    UpgradeSpec {
        name: "Assembly Line",
        description: "Factories gain another +2.0 multiplier.",
        cost: 20_000,
        prerequisite: Some(UpgradeId::RobotBakers),
        effect: UpgradeEffect::AddMultiplier {
            target: ProducerKind::Factory,
            delta: 2.0,
        },
    },
];

impl UpgradeId {
    pub fn index(self) -> usize {
        match self {
            UpgradeId::BetterOvens => 0,
            UpgradeId::IndustrialWheat => 1,
            UpgradeId::RobotBakers => 2,
            UpgradeId::SecretFamilyRecipe => 3,
            UpgradeId::AssemblyLine => 4,
        }
    }

    pub fn spec(self) -> &'static UpgradeSpec {
        &UPGRADE_TABLE[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Upgrades are bought with the digit keys `1`..=`5` in table order.
    pub fn from_digit(digit: char) -> Option<Self> {
        let slot = digit.to_digit(10)? as usize;
        slot.checked_sub(1)
            .and_then(|index| ALL_UPGRADES.get(index).copied())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upgrade {
    pub id: UpgradeId,
    pub purchased: bool,
    #[serde(default)]
    pub visible: bool,
}

impl Upgrade {
    pub fn new(id: UpgradeId) -> Self {
        Self {
            id,
            purchased: false,
            visible: false,
        }
    }
}

pub fn apply(effect: UpgradeEffect, run: &mut RunState) {
    let producer = run.producer_mut(effect.target());
    match effect {
        UpgradeEffect::MultiplyOutput { factor, .. } => producer.multiplier *= factor,
        UpgradeEffect::AddMultiplier { delta, .. } => producer.multiplier += delta,
    }
}

/// Marks the upgrade purchased and applies its effect. Returns false, leaving
/// the run untouched, when the upgrade was already applied.
pub fn apply_once(run: &mut RunState, id: UpgradeId) -> bool {
    let upgrade = run.upgrade_mut(id);
    if upgrade.purchased {
        return false;
    }
    upgrade.purchased = true;
    apply(id.spec().effect, run);
    true
}
