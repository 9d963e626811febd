//! Builds the main bakery screen as fixed-width text. `compose` only reads
//! its snapshot, so the same snapshot always yields the same frame.

use super::art;
use crate::sim::game::{GOAL_PIES, Game, PiePose};
use crate::sim::pests::PestReport;
use crate::sim::prestige;
use crate::sim::producers::Producer;
use crate::sim::upgrades::Upgrade;

pub const FRAME_WIDTH: usize = 80;
pub const FRAME_HEIGHT: usize = 30;

const PEST_ROW: usize = 5;
const PRODUCER_ROW: usize = 8;
const UPGRADE_ROW: usize = 12;
const UPGRADE_ROWS: usize = 5;
const PRESTIGE_ROW: usize = 18;
const ANNOUNCEMENT_ROW: usize = 20;
const PIE_ROW: usize = 22;

#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub pies: u64,
    pub production_rate: u64,
    pub stars: f64,
    pub boost_percent: u32,
    pub producers: &'a [Producer],
    pub upgrades: &'a [Upgrade],
    pub pests: PestReport,
    pub prestige_preview: Option<f64>,
    pub announcement: Option<&'a str>,
    pub pose: PiePose,
    pub golden: bool,
}

impl<'a> Snapshot<'a> {
    pub fn of(game: &'a Game) -> Self {
        let state = &game.state;
        let prestige_preview = game
            .prestige_available()
            .then(|| prestige::stars_preview(state.run.baked_this_run));
        Self {
            pies: state.run.pies,
            production_rate: game.production_rate(),
            stars: state.prestige.stars,
            boost_percent: state.prestige.boost_percent(),
            producers: &state.run.producers,
            upgrades: &state.run.upgrades,
            pests: *game.pests(),
            prestige_preview,
            announcement: game.announcement(),
            pose: game.pie_pose(),
            golden: state.prestige.golden_crust(),
        }
    }
}

pub fn compose(snapshot: &Snapshot<'_>) -> Vec<String> {
    let mut rows = vec![String::new(); FRAME_HEIGHT];

    rows[0] = "=== PIE MAKER IDLE ===".to_string();
    rows[1] = format!("Goal: Bake {} pies!", group_digits(GOAL_PIES));
    rows[2] = format!("Pies: {}", group_digits(snapshot.pies));
    rows[3] = format!("Per second: {}", group_digits(snapshot.production_rate));
    rows[4] = if snapshot.boost_percent > 0 {
        format!(
            "Prestige Stars: {:.2}  (+{}% boost)",
            snapshot.stars, snapshot.boost_percent
        )
    } else {
        format!("Prestige Stars: {:.2}", snapshot.stars)
    };
    if snapshot.pests.is_active() {
        rows[PEST_ROW] = pest_line(&snapshot.pests);
    }
    rows[6] = "[SPACE] Bake a pie!".to_string();

    for producer in snapshot.producers.iter().filter(|p| p.visible) {
        let spec = producer.spec();
        rows[PRODUCER_ROW + producer.kind.index()] = format!(
            "[{}] {}: {} (Cost: {})",
            spec.hotkey,
            spec.plural,
            producer.count,
            group_digits(producer.next_cost())
        );
    }

    let offered = snapshot
        .upgrades
        .iter()
        .filter(|u| u.visible && !u.purchased)
        .take(UPGRADE_ROWS);
    for (row, upgrade) in (UPGRADE_ROW..).zip(offered) {
        let spec = upgrade.id.spec();
        rows[row] = format!(
            "[{}] {} ({} pies) - {}",
            upgrade.id.index() + 1,
            spec.name,
            group_digits(spec.cost),
            spec.description
        );
    }

    if let Some(stars) = snapshot.prestige_preview {
        rows[PRESTIGE_ROW] = format!("[R] RESET for {stars:.2} prestige stars!  [S] Star shop");
    }

    if let Some(text) = snapshot.announcement {
        rows[ANNOUNCEMENT_ROW] = text.to_string();
    }

    for (row, line) in (PIE_ROW..).zip(art::pie(snapshot.pose, snapshot.golden)) {
        rows[row] = (*line).to_string();
    }

    rows.into_iter().map(fit).collect()
}

fn pest_line(pests: &PestReport) -> String {
    let mut line = format!("Rats: {}", group_digits(pests.rats));
    if pests.cats > 0 {
        line.push_str(&format!(
            "  Cats: {} (ate {})",
            pests.cats,
            group_digits(pests.rats_eaten)
        ));
    }
    if pests.drain_per_second > 0 {
        line.push_str(&format!(
            "  -{} pies/s",
            group_digits(pests.drain_per_second)
        ));
    }
    line
}

/// Pads or truncates a line to exactly `FRAME_WIDTH` characters.
fn fit(line: String) -> String {
    let mut fitted: String = line.chars().take(FRAME_WIDTH).collect();
    let width = fitted.chars().count();
    fitted.extend(std::iter::repeat_n(' ', FRAME_WIDTH - width));
    fitted
}

pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::economy::ShopItem;
    use crate::sim::producers::ProducerKind;
    use crate::sim::upgrades::UpgradeId;
    use std::time::Duration;

    fn frame(game: &Game) -> Vec<String> {
        compose(&Snapshot::of(game))
    }

    fn row(frame: &[String], index: usize) -> &str {
        frame[index].trim_end()
    }

    #[test]
    fn every_line_is_exactly_eighty_columns() {
        let mut game = Game::fresh();
        game.add_message("x".repeat(200));
        let frame = frame(&game);
        assert_eq!(frame.len(), FRAME_HEIGHT);
        assert!(frame.iter().all(|line| line.chars().count() == FRAME_WIDTH));
    }

    #[test]
    fn fresh_game_shows_only_the_basics() {
        let game = Game::fresh();
        let frame = frame(&game);
        assert_eq!(row(&frame, 0), "=== PIE MAKER IDLE ===");
        assert_eq!(row(&frame, 1), "Goal: Bake 1,000,000 pies!");
        assert_eq!(row(&frame, 2), "Pies: 0");
        assert_eq!(row(&frame, 3), "Per second: 0");
        assert_eq!(row(&frame, PRODUCER_ROW), "");
        assert_eq!(row(&frame, PRESTIGE_ROW), "");
        assert_eq!(row(&frame, PIE_ROW + 2), "   .-''''''-.");
    }

    #[test]
    fn unlocked_producers_and_upgrades_are_listed() {
        let mut game = Game::fresh();
        game.state.run.pies = 600;
        game.update(Duration::ZERO);
        game.purchase(ShopItem::Producer(ProducerKind::Grandma))
            .unwrap();
        let frame = frame(&game);
        assert_eq!(row(&frame, PRODUCER_ROW), "[G] Grandmas: 1 (Cost: 15)");
        assert_eq!(row(&frame, PRODUCER_ROW + 1), "[B] Bakeries: 0 (Cost: 50)");
        assert_eq!(row(&frame, PRODUCER_ROW + 2), "[F] Factories: 0 (Cost: 200)");
        assert_eq!(
            row(&frame, UPGRADE_ROW),
            "[1] Better Ovens (500 pies) - Grandmas bake twice as fast."
        );
        assert_eq!(
            row(&frame, UPGRADE_ROW + 1),
            "[2] Industrial Wheat (1,000 pies) - Bakeries triple their output."
        );
    }

    #[test]
    fn purchased_upgrades_drop_out_and_the_rest_close_ranks() {
        let mut game = Game::fresh();
        game.state.run.pies = 10_000;
        game.update(Duration::ZERO);
        game.purchase(ShopItem::Upgrade(UpgradeId::BetterOvens))
            .unwrap();
        let frame = frame(&game);
        assert_eq!(
            row(&frame, UPGRADE_ROW),
            "[2] Industrial Wheat (1,000 pies) - Bakeries triple their output."
        );
        assert_eq!(
            row(&frame, UPGRADE_ROW + 1),
            "[3] Robot Bakers (5,000 pies) - Factories run four times the line speed."
        );
    }

    #[test]
    fn longest_upgrade_row_fits_with_its_description() {
        let mut game = Game::fresh();
        game.state.run.pies = 100_000;
        game.update(Duration::ZERO);
        game.purchase(ShopItem::Upgrade(UpgradeId::BetterOvens))
            .unwrap();
        game.update(Duration::ZERO);
        let frame = frame(&game);
        assert!(frame.iter().any(|line| {
            line.trim_end()
                == "[4] Secret Family Recipe (2,500 pies) - Grandmas gain another +1.0 multiplier."
        }));
    }

    #[test]
    fn prestige_offer_appears_after_a_thousand_baked() {
        let mut game = Game::fresh();
        game.state.run.credit(999);
        assert_eq!(row(&frame(&game), PRESTIGE_ROW), "");
        game.state.run.credit(3_001);
        assert_eq!(
            row(&frame(&game), PRESTIGE_ROW),
            "[R] RESET for 2.00 prestige stars!  [S] Star shop"
        );
    }

    #[test]
    fn pests_and_boost_are_reported() {
        let mut game = Game::fresh();
        game.state.prestige.stars = 10.0;
        game.buy_prestige_item(0).unwrap();
        game.buy_prestige_item(1).unwrap();
        game.state.run.pies = 200_000;
        game.update(Duration::ZERO);
        let frame = frame(&game);
        assert_eq!(row(&frame, 4), "Prestige Stars: 7.00  (+10% boost)");
        assert_eq!(row(&frame, PEST_ROW), "Rats: 7  Cats: 1 (ate 5)");
    }

    #[test]
    fn pressed_pie_follows_a_bake() {
        let mut game = Game::fresh();
        game.bake();
        assert_eq!(row(&frame(&game), PIE_ROW + 3), "  /   O  O   \\");
    }

    #[test]
    fn compose_is_deterministic() {
        let mut game = Game::fresh();
        game.state.run.pies = 123_456;
        game.update(Duration::from_millis(10));
        let snapshot = Snapshot::of(&game);
        assert_eq!(compose(&snapshot), compose(&snapshot));
    }

    #[test]
    fn digits_are_grouped_in_thousands() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
        assert_eq!(group_digits(u64::MAX), "18,446,744,073,709,551,615");
    }
}
