use super::economy::{self, Applied, PurchaseError, ShopItem};
use super::pests::{self, PestReport};
use super::prestige::{self, PRESTIGE_THRESHOLD, PrestigeError, PrestigeState};
use super::run::RunState;
use super::upgrades::ALL_UPGRADES;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info, warn};

const MAX_MESSAGES: usize = 8;
const ANNOUNCEMENT_DURATION: Duration = Duration::from_secs(3);
const BAKE_FLASH: Duration = Duration::from_millis(250);
const IDLE_FRAME_PERIOD: Duration = Duration::from_millis(500);
pub const GOAL_PIES: u64 = 1_000_000;
pub const DEBUG_GRANT: u64 = 10_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    pub run: RunState,
    #[serde(default)]
    pub prestige: PrestigeState,
}

impl GameState {
    pub fn production_rate(&self) -> u64 {
        economy::total_production_rate(&self.run, self.prestige.boost_percent())
    }
}

#[derive(Debug, Clone)]
pub struct Announcement {
    pub text: String,
    pub remaining: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiePose {
    Idle(usize),
    Pressed,
}

pub struct Game {
    pub state: GameState,
    pests: PestReport,
    announcement: Option<Announcement>,
    messages: VecDeque<String>,
    bake_flash: Duration,
    idle_timer: Duration,
    idle_frame: usize,
    goal_reached: bool,
}

impl Game {
    pub fn fresh() -> Self {
        Self::from_state(GameState::default())
    }

    pub fn from_state(mut state: GameState) -> Self {
        state.run.normalize();
        state.prestige.normalize();
        let mut game = Self {
            state,
            pests: PestReport::default(),
            announcement: None,
            messages: VecDeque::with_capacity(MAX_MESSAGES),
            bake_flash: Duration::ZERO,
            idle_timer: Duration::ZERO,
            idle_frame: 0,
            goal_reached: false,
        };
        // Unlocks already earned by a loaded save are restored silently.
        let _ = game.refresh_unlocks();
        game.pests = game.assess_pests();
        game.goal_reached = game.state.run.pies >= GOAL_PIES;
        game
    }

    /// Advances production, pests and timers by one tick.
    pub fn update(&mut self, delta: Duration) {
        let rate = self.production_rate();
        let baked = self.state.run.production.advance(rate as f64, delta);
        self.state.run.credit(baked);

        let was_infested = self.pests.rats > 0;
        self.pests = self.assess_pests();
        let eaten = pests::drain_tick(
            &mut self.state.run.pest_drain,
            &self.pests,
            delta,
            self.state.run.pies,
        );
        self.state.run.debit(eaten);
        if !was_infested && self.pests.rats > 0 {
            warn!(rats = self.pests.rats, "rats reached the pantry");
            self.push_message("Rats have found the pantry! Adopt cats in the prestige shop.".to_string());
        }

        for message in self.refresh_unlocks() {
            self.push_message(message);
        }

        if !self.goal_reached && self.state.run.pies >= GOAL_PIES {
            self.goal_reached = true;
            info!(pies = self.state.run.pies, "goal reached");
            self.push_message("You baked 1,000,000 pies!".to_string());
        }

        self.advance_timers(delta);
    }

    /// Ticks only the cosmetic timers; used while the simulation is paused.
    pub fn advance_timers(&mut self, delta: Duration) {
        if let Some(announcement) = &mut self.announcement {
            announcement.remaining = announcement.remaining.saturating_sub(delta);
            if announcement.remaining.is_zero() {
                self.announcement = None;
            }
        }
        self.bake_flash = self.bake_flash.saturating_sub(delta);
        self.idle_timer += delta;
        while self.idle_timer >= IDLE_FRAME_PERIOD {
            self.idle_timer -= IDLE_FRAME_PERIOD;
            self.idle_frame = 1 - self.idle_frame;
        }
    }

    pub fn bake(&mut self) -> u64 {
        let delta = economy::bake(&mut self.state.run, self.state.prestige.boost_percent());
        self.bake_flash = BAKE_FLASH;
        delta
    }

    pub fn purchase(&mut self, item: ShopItem) -> Result<Applied, PurchaseError> {
        if !self.is_unlocked(item) {
            return Err(PurchaseError::Locked { name: item.name() });
        }
        let applied = economy::purchase(&mut self.state.run, item)?;
        info!(item = item.name(), cost = applied.cost, "purchase");
        self.push_message(format!("Purchased {} (-{} pies)", item.name(), applied.cost));
        Ok(applied)
    }

    pub fn prestige(&mut self) -> Result<f64, PrestigeError> {
        let baked = self.state.run.baked_this_run;
        let gained = prestige::prestige(&mut self.state.run, &mut self.state.prestige)?;
        self.goal_reached = false;
        self.pests = self.assess_pests();
        info!(
            baked,
            gained,
            stars = self.state.prestige.stars,
            "prestige reset"
        );
        self.push_message(format!("Reset for {gained:.2} prestige stars!"));
        Ok(gained)
    }

    pub fn buy_prestige_item(&mut self, index: usize) -> Result<(), PrestigeError> {
        let item = self.state.prestige.purchase_item(index)?;
        info!(
            item = item.name,
            stars = self.state.prestige.stars,
            "prestige purchase"
        );
        self.push_message(format!("{} acquired.", item.name));
        self.pests = self.assess_pests();
        Ok(())
    }

    pub fn grant_pies(&mut self, amount: u64) {
        self.state.run.credit(amount);
        debug!(amount, "debug grant");
        self.push_message(format!("A mysterious benefactor drops off {amount} pies."));
    }

    /// Starts a new run after the goal screen while keeping prestige progress.
    pub fn restart_after_win(&mut self) {
        self.state.run = RunState::new();
        self.state.prestige.wins += 1;
        self.goal_reached = false;
        self.pests = self.assess_pests();
        info!(wins = self.state.prestige.wins, "restarting after win");
        self.push_message("A fresh kitchen awaits. Keep baking!".to_string());
    }

    pub fn production_rate(&self) -> u64 {
        self.state.production_rate()
    }

    pub fn pests(&self) -> &PestReport {
        &self.pests
    }

    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    pub fn prestige_available(&self) -> bool {
        self.state.run.baked_this_run >= PRESTIGE_THRESHOLD
    }

    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_ref().map(|a| a.text.as_str())
    }

    pub fn pie_pose(&self) -> PiePose {
        if self.bake_flash.is_zero() {
            PiePose::Idle(self.idle_frame)
        } else {
            PiePose::Pressed
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = &String> {
        self.messages.iter()
    }

    pub fn add_message<S: Into<String>>(&mut self, message: S) {
        self.push_message(message.into());
    }

    fn is_unlocked(&self, item: ShopItem) -> bool {
        match item {
            ShopItem::Producer(kind) => self.state.run.producer(kind).visible,
            ShopItem::Upgrade(id) => {
                let upgrade = self.state.run.upgrade(id);
                upgrade.visible || upgrade.purchased
            }
        }
    }

    fn assess_pests(&self) -> PestReport {
        pests::assess(
            self.state.run.pies,
            self.production_rate(),
            self.state.prestige.cats(),
            self.state.prestige.suppression_level(),
        )
    }

    /// Reveals producers and upgrades the pantry can now see; visibility
    /// sticks for the rest of the run.
    fn refresh_unlocks(&mut self) -> Vec<String> {
        let pies = self.state.run.pies;
        let mut unlocked = Vec::new();
        for producer in &mut self.state.run.producers {
            if !producer.visible && pies >= producer.spec().unlock_at {
                producer.visible = true;
                unlocked.push(producer.spec().unlock_message.to_string());
            }
        }
        for id in ALL_UPGRADES {
            let spec = id.spec();
            let upgrade = self.state.run.upgrade(id);
            if upgrade.visible || upgrade.purchased {
                continue;
            }
            let prerequisite_met = spec
                .prerequisite
                .is_none_or(|required| self.state.run.is_purchased(required));
            if prerequisite_met && pies >= spec.cost / 2 {
                self.state.run.upgrade_mut(id).visible = true;
                unlocked.push(format!("New upgrade available: {}", spec.name));
            }
        }
        unlocked
    }

    fn push_message(&mut self, message: String) {
        debug!(%message, "announcement");
        if self.messages.len() == MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(message.clone());
        self.announcement = Some(Announcement {
            text: message,
            remaining: ANNOUNCEMENT_DURATION,
        });
    }
}
