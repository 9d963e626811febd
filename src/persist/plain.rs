//! The plain text save: six numbers on six lines, in this order:
//! pies, pies per second, grandmas, bakeries, factories, prestige stars.
//!
//! The file carries no upgrades or prestige purchases, so on load any
//! production the producer counts cannot explain is kept as a flat carried
//! rate. Saving the loaded state writes the same six values back.

use crate::sim::game::GameState;
use crate::sim::producers::ProducerKind;
use std::str::{FromStr, Lines};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct PlainSave {
    pub pies: u64,
    pub pies_per_second: u64,
    pub grandmas: u32,
    pub bakeries: u32,
    pub factories: u32,
    pub stars: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlainSaveError {
    #[error("save file is missing the {0} line")]
    MissingField(&'static str),
    #[error("invalid {field} value {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

impl PlainSave {
    pub fn from_state(state: &GameState) -> Self {
        let run = &state.run;
        Self {
            pies: run.pies,
            pies_per_second: state.production_rate(),
            grandmas: run.producer(ProducerKind::Grandma).count,
            bakeries: run.producer(ProducerKind::Bakery).count,
            factories: run.producer(ProducerKind::Factory).count,
            stars: state.prestige.stars,
        }
    }

    pub fn into_state(self) -> GameState {
        let mut state = GameState::default();
        state.run.pies = self.pies;
        for (kind, count) in [
            (ProducerKind::Grandma, self.grandmas),
            (ProducerKind::Bakery, self.bakeries),
            (ProducerKind::Factory, self.factories),
        ] {
            let producer = state.run.producer_mut(kind);
            producer.count = count;
            producer.visible = count > 0;
        }
        state.prestige.stars = self.stars;
        state.prestige.lifetime_stars = self.stars;
        state.run.carried_rate = self.pies_per_second.saturating_sub(state.production_rate());
        state
    }

    pub fn to_text(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}\n{}\n",
            self.pies,
            self.pies_per_second,
            self.grandmas,
            self.bakeries,
            self.factories,
            self.stars
        )
    }

    pub fn from_text(text: &str) -> Result<Self, PlainSaveError> {
        let mut lines = text.lines();
        let save = Self {
            pies: field(&mut lines, "pies")?,
            pies_per_second: field(&mut lines, "pies per second")?,
            grandmas: field(&mut lines, "grandmas")?,
            bakeries: field(&mut lines, "bakeries")?,
            factories: field(&mut lines, "factories")?,
            stars: field(&mut lines, "prestige stars")?,
        };
        if !save.stars.is_finite() || save.stars < 0.0 {
            return Err(PlainSaveError::InvalidValue {
                field: "prestige stars",
                value: save.stars.to_string(),
            });
        }
        Ok(save)
    }
}

fn field<T: FromStr>(lines: &mut Lines<'_>, name: &'static str) -> Result<T, PlainSaveError> {
    let raw = lines.next().ok_or(PlainSaveError::MissingField(name))?;
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| PlainSaveError::InvalidValue {
        field: name,
        value: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::upgrades::{self, UpgradeId};

    #[test]
    fn reads_the_six_lines_in_order() {
        let save = PlainSave::from_text("120\n6\n1\n1\n0\n1.4142135\n").unwrap();
        assert_eq!(
            save,
            PlainSave {
                pies: 120,
                pies_per_second: 6,
                grandmas: 1,
                bakeries: 1,
                factories: 0,
                stars: 1.4142135,
            }
        );
    }

    #[test]
    fn tolerates_windows_line_endings_and_padding() {
        let save = PlainSave::from_text(" 5\r\n0\r\n0\r\n0\r\n0\r\n0\r\n").unwrap();
        assert_eq!(save.pies, 5);
        assert_eq!(save.stars, 0.0);
    }

    #[test]
    fn reports_the_first_missing_field() {
        assert_eq!(
            PlainSave::from_text("1\n2\n3\n"),
            Err(PlainSaveError::MissingField("bakeries"))
        );
        assert_eq!(
            PlainSave::from_text(""),
            Err(PlainSaveError::MissingField("pies"))
        );
    }

    #[test]
    fn rejects_negative_or_garbage_numbers() {
        assert_eq!(
            PlainSave::from_text("-3\n0\n0\n0\n0\n0\n"),
            Err(PlainSaveError::InvalidValue {
                field: "pies",
                value: "-3".to_string()
            })
        );
        assert!(matches!(
            PlainSave::from_text("0\n0\n0\n0\n0\nNaN\n"),
            Err(PlainSaveError::InvalidValue { field: "prestige stars", .. })
        ));
    }

    #[test]
    fn loaded_state_keeps_the_stored_rate() {
        let state = PlainSave::from_text("10\n999\n2\n1\n0\n0\n")
            .unwrap()
            .into_state();
        assert_eq!(state.production_rate(), 999);
        assert_eq!(state.run.carried_rate, 992);
        assert!(state.run.producer(ProducerKind::Bakery).visible);
        assert!(!state.run.producer(ProducerKind::Factory).visible);
    }

    #[test]
    fn rate_below_the_producers_is_not_carried() {
        let state = PlainSave::from_text("0\n1\n3\n0\n0\n0\n")
            .unwrap()
            .into_state();
        assert_eq!(state.run.carried_rate, 0);
        assert_eq!(state.production_rate(), 3);
    }

    #[test]
    fn upgraded_run_survives_a_text_round_trip() {
        let mut state = GameState::default();
        state.run.producer_mut(ProducerKind::Grandma).count = 3;
        upgrades::apply_once(&mut state.run, UpgradeId::BetterOvens);
        state.prestige.shop_purchases[0] = 2;
        let before = PlainSave::from_state(&state);
        assert_eq!(before.pies_per_second, 7);

        let text = before.to_text();
        let loaded = PlainSave::from_text(&text).unwrap().into_state();
        assert_eq!(loaded.production_rate(), 7);
        assert_eq!(PlainSave::from_state(&loaded).to_text(), text);
    }
}
