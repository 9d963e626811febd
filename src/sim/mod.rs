pub mod accumulator;
pub mod economy;
pub mod game;
pub mod pests;
pub mod prestige;
pub mod producers;
pub mod run;
pub mod upgrades;
