use crate::input::Command;
use crate::sim::game::{DEBUG_GRANT, Game};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Intro,
    Playing,
    PrestigeShop,
    Celebration,
}

/// What the main loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Redraw,
    Quit,
}

#[derive(Debug, Default)]
pub struct App {
    mode: Mode,
    pub selected_shop_item: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: Mode::Intro,
            selected_shop_item: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Only the main screen advances the bakery; the other modes pause it.
    pub fn simulating(&self) -> bool {
        self.mode == Mode::Playing
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "mode change");
            self.mode = mode;
        }
    }

    /// Switches to the goal screen once the game reports the goal reached.
    pub fn observe(&mut self, game: &Game) {
        if self.mode == Mode::Playing && game.goal_reached() {
            self.set_mode(Mode::Celebration);
        }
    }

    pub fn clamp_shop_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_shop_item = 0;
        } else if self.selected_shop_item >= len {
            self.selected_shop_item = len - 1;
        }
    }

    pub fn dispatch(&mut self, command: Command, game: &mut Game) -> Flow {
        match command {
            Command::Begin => self.set_mode(Mode::Playing),
            Command::Bake => {
                game.bake();
            }
            Command::Buy(item) => {
                if let Err(err) = game.purchase(item) {
                    game.add_message(format!("Purchase failed: {err}"));
                }
            }
            Command::Prestige => {
                if let Err(err) = game.prestige() {
                    game.add_message(format!("Prestige refused: {err}"));
                }
            }
            Command::OpenPrestigeShop => {
                self.selected_shop_item = 0;
                self.set_mode(Mode::PrestigeShop);
            }
            Command::ClosePrestigeShop => self.set_mode(Mode::Playing),
            Command::ShopUp => {
                self.selected_shop_item = self.selected_shop_item.saturating_sub(1);
            }
            Command::ShopDown => {
                self.selected_shop_item += 1;
                self.clamp_shop_selection(game.state.prestige.items().len());
            }
            Command::ShopConfirm => self.buy_prestige_item(self.selected_shop_item, game),
            Command::BuyPrestigeItem(index) => {
                if index < game.state.prestige.items().len() {
                    self.selected_shop_item = index;
                    self.buy_prestige_item(index, game);
                }
            }
            Command::DebugGrant => game.grant_pies(DEBUG_GRANT),
            Command::Redraw => return Flow::Redraw,
            Command::KeepBaking => {
                game.restart_after_win();
                self.set_mode(Mode::Playing);
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn buy_prestige_item(&mut self, index: usize, game: &mut Game) {
        if let Err(err) = game.buy_prestige_item(index) {
            game.add_message(format!("Purchase failed: {err}"));
        }
    }
}
