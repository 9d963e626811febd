use super::accumulator::FractionalAccumulator;
use super::producers::{ALL_PRODUCERS, Producer, ProducerKind};
use super::upgrades::{ALL_UPGRADES, Upgrade, UpgradeId};
use serde::{Deserialize, Serialize};

/// Everything a prestige reset throws away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub pies: u64,
    pub baked_this_run: u64,
    #[serde(default = "default_producers")]
    pub producers: Vec<Producer>,
    #[serde(default = "default_upgrades")]
    pub upgrades: Vec<Upgrade>,
    #[serde(default)]
    pub production: FractionalAccumulator,
    #[serde(default)]
    pub pest_drain: FractionalAccumulator,
    /// Flat pies per second on top of the producers. Only set when a plain
    /// save recorded more production than its producer counts explain.
    #[serde(default)]
    pub carried_rate: u64,
}

fn default_producers() -> Vec<Producer> {
    ALL_PRODUCERS.into_iter().map(Producer::new).collect()
}

fn default_upgrades() -> Vec<Upgrade> {
    ALL_UPGRADES.into_iter().map(Upgrade::new).collect()
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            pies: 0,
            baked_this_run: 0,
            producers: default_producers(),
            upgrades: default_upgrades(),
            production: FractionalAccumulator::new(),
            pest_drain: FractionalAccumulator::new(),
            carried_rate: 0,
        }
    }
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the producer and upgrade tables in canonical order, keeping
    /// whatever a loaded save knew about each entry.
    pub fn normalize(&mut self) {
        let mut producers = default_producers();
        for loaded in self.producers.drain(..) {
            let slot = &mut producers[loaded.kind.index()];
            if slot.count == 0 && !slot.visible {
                *slot = loaded;
            }
        }
        for producer in &mut producers {
            if !producer.multiplier.is_finite() || producer.multiplier <= 0.0 {
                producer.multiplier = 1.0;
            }
            if producer.count > 0 {
                producer.visible = true;
            }
        }
        self.producers = producers;

        let mut upgrades = default_upgrades();
        for loaded in self.upgrades.drain(..) {
            let slot = &mut upgrades[loaded.id.index()];
            slot.purchased |= loaded.purchased;
            slot.visible |= loaded.visible;
        }
        self.upgrades = upgrades;
    }

    pub fn producer(&self, kind: ProducerKind) -> &Producer {
        &self.producers[kind.index()]
    }

    pub fn producer_mut(&mut self, kind: ProducerKind) -> &mut Producer {
        &mut self.producers[kind.index()]
    }

    pub fn upgrade(&self, id: UpgradeId) -> &Upgrade {
        &self.upgrades[id.index()]
    }

    pub fn upgrade_mut(&mut self, id: UpgradeId) -> &mut Upgrade {
        &mut self.upgrades[id.index()]
    }

    pub fn is_purchased(&self, id: UpgradeId) -> bool {
        self.upgrade(id).purchased
    }

    /// Adds freshly baked pies to both the wallet and the run total.
    pub fn credit(&mut self, amount: u64) {
        self.pies = self.pies.saturating_add(amount);
        self.baked_this_run = self.baked_this_run.saturating_add(amount);
    }

    /// Removes pies, clamping at zero. Returns how many were actually taken.
    pub fn debit(&mut self, amount: u64) -> u64 {
        let taken = amount.min(self.pies);
        self.pies -= taken;
        taken
    }
}
