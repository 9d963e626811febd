use super::run::RunState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PRESTIGE_THRESHOLD: u64 = 1_000;
const BOOST_PER_PURCHASE: u32 = 10;

/// Progress that survives a prestige reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrestigeState {
    /// Spendable stars.
    pub stars: f64,
    /// Every star ever earned; never goes down.
    #[serde(default)]
    pub lifetime_stars: f64,
    #[serde(default)]
    pub resets: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default = "default_shop_purchases")]
    pub shop_purchases: Vec<u32>,
}

fn default_shop_purchases() -> Vec<u32> {
    vec![0; PRESTIGE_ITEMS.len()]
}

impl Default for PrestigeState {
    fn default() -> Self {
        Self {
            stars: 0.0,
            lifetime_stars: 0.0,
            resets: 0,
            wins: 0,
            shop_purchases: default_shop_purchases(),
        }
    }
}

/// Stars a run of `baked` pies is worth.
pub fn stars_for(baked: u64) -> f64 {
    (baked as f64 / PRESTIGE_THRESHOLD as f64).sqrt()
}

/// Stars shown on the reset prompt before the player commits.
pub fn stars_preview(baked: u64) -> f64 {
    stars_for(baked.max(PRESTIGE_THRESHOLD))
}

/// Converts the run into stars and starts a new run. Refused below the
/// threshold, in which case nothing changes.
pub fn prestige(run: &mut RunState, state: &mut PrestigeState) -> Result<f64, PrestigeError> {
    if run.baked_this_run < PRESTIGE_THRESHOLD {
        return Err(PrestigeError::BelowThreshold {
            baked: run.baked_this_run,
            required: PRESTIGE_THRESHOLD,
        });
    }
    let gained = stars_for(run.baked_this_run);
    state.stars += gained;
    state.lifetime_stars += gained;
    state.resets += 1;
    *run = RunState::new();
    Ok(gained)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrestigeAction {
    GlobalBoost,
    AdoptCat,
    PestControl,
    GoldenCrust,
}

#[derive(Debug, Clone, Copy)]
pub struct PrestigeItem {
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: f64,
    pub cost_step: f64,
    pub action: PrestigeAction,
    pub max_purchases: Option<u32>,
}

pub const PRESTIGE_ITEMS: [PrestigeItem; 4] = [
    PrestigeItem {
        name: "Golden Rolling Pins",
        description: "+10% to every bake and every producer, forever.",
        base_cost: 1.0,
        cost_step: 1.0,
        action: PrestigeAction::GlobalBoost,
        max_purchases: None,
    },
    PrestigeItem {
        name: "Cat Adoption",
        description: "Adopt a cat. Cats eat rats before they reach the pies.",
        base_cost: 2.0,
        cost_step: 1.0,
        action: PrestigeAction::AdoptCat,
        max_purchases: None,
    },
    PrestigeItem {
        name: "Pest Control Training",
        description: "Each cat eats five more rats.",
        base_cost: 3.0,
        cost_step: 2.0,
        action: PrestigeAction::PestControl,
        max_purchases: Some(5),
    },
    PrestigeItem {
        name: "Golden Crust",
        description: "Your pie gets a shiny golden crust. Purely for show.",
        base_cost: 5.0,
        cost_step: 0.0,
        action: PrestigeAction::GoldenCrust,
        max_purchases: Some(1),
    },
];

#[derive(Debug, Error, PartialEq)]
pub enum PrestigeError {
    #[error("bake {required} pies this run first (baked {baked})")]
    BelowThreshold { baked: u64, required: u64 },
    #[error("not enough stars (requires {cost:.2}, have {available:.2})")]
    NotEnoughStars { cost: f64, available: f64 },
    #[error("unknown prestige item")]
    InvalidItem,
    #[error("{item} is sold out")]
    SoldOut { item: &'static str },
}

impl PrestigeState {
    pub fn normalize(&mut self) {
        if self.shop_purchases.len() < PRESTIGE_ITEMS.len() {
            self.shop_purchases.resize(PRESTIGE_ITEMS.len(), 0);
        }
        if !self.stars.is_finite() || self.stars < 0.0 {
            self.stars = 0.0;
        }
        if !self.lifetime_stars.is_finite() || self.lifetime_stars < self.stars {
            self.lifetime_stars = self.stars;
        }
    }

    pub fn items(&self) -> &'static [PrestigeItem] {
        &PRESTIGE_ITEMS
    }

    pub fn purchases(&self, index: usize) -> u32 {
        self.shop_purchases.get(index).copied().unwrap_or(0)
    }

    /// Cost of the next purchase, or `None` when the item is sold out.
    pub fn item_cost(&self, index: usize) -> Option<f64> {
        let item = PRESTIGE_ITEMS.get(index)?;
        let owned = self.purchases(index);
        if let Some(max) = item.max_purchases {
            if owned >= max {
                return None;
            }
        }
        Some(item.base_cost + item.cost_step * f64::from(owned))
    }

    pub fn purchase_item(&mut self, index: usize) -> Result<&'static PrestigeItem, PrestigeError> {
        let item = PRESTIGE_ITEMS.get(index).ok_or(PrestigeError::InvalidItem)?;
        let cost = self
            .item_cost(index)
            .ok_or(PrestigeError::SoldOut { item: item.name })?;
        if self.stars < cost {
            return Err(PrestigeError::NotEnoughStars {
                cost,
                available: self.stars,
            });
        }
        self.stars -= cost;
        if self.shop_purchases.len() <= index {
            self.shop_purchases.resize(PRESTIGE_ITEMS.len(), 0);
        }
        self.shop_purchases[index] += 1;
        Ok(item)
    }

    fn owned(&self, action: PrestigeAction) -> u32 {
        PRESTIGE_ITEMS
            .iter()
            .enumerate()
            .filter(|(_, item)| item.action == action)
            .map(|(index, _)| self.purchases(index))
            .sum()
    }

    pub fn boost_percent(&self) -> u32 {
        self.owned(PrestigeAction::GlobalBoost)
            .saturating_mul(BOOST_PER_PURCHASE)
    }

    pub fn cats(&self) -> u32 {
        self.owned(PrestigeAction::AdoptCat)
    }

    pub fn suppression_level(&self) -> u32 {
        self.owned(PrestigeAction::PestControl)
    }

    pub fn golden_crust(&self) -> bool {
        self.owned(PrestigeAction::GoldenCrust) > 0
    }
}
