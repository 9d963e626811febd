use super::producers::{ALL_PRODUCERS, ProducerKind};
use super::run::RunState;
use super::upgrades::{self, UpgradeId};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopItem {
    Producer(ProducerKind),
    Upgrade(UpgradeId),
}

impl ShopItem {
    pub fn name(self) -> &'static str {
        match self {
            ShopItem::Producer(kind) => kind.name(),
            ShopItem::Upgrade(id) => id.name(),
        }
    }

    pub fn cost(self, run: &RunState) -> u64 {
        match self {
            ShopItem::Producer(kind) => run.producer(kind).next_cost(),
            ShopItem::Upgrade(id) => id.spec().cost,
        }
    }
}

/// Receipt for a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub item: ShopItem,
    pub cost: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("not enough pies (requires {cost}, have {available})")]
    InsufficientFunds { cost: u64, available: u64 },
    #[error("{name} already purchased")]
    AlreadyPurchased { name: &'static str },
    #[error("{name} requires {requires} first")]
    MissingPrerequisite {
        name: &'static str,
        requires: &'static str,
    },
    #[error("{name} is not unlocked yet")]
    Locked { name: &'static str },
}

/// Pies added by one press of the bake key.
pub fn bake_yield(boost_percent: u32) -> u64 {
    1 + u64::from(boost_percent) / 100
}

pub fn bake(run: &mut RunState, boost_percent: u32) -> u64 {
    let delta = bake_yield(boost_percent);
    run.credit(delta);
    delta
}

/// Debits the cost and applies the item's effect, or leaves the run
/// untouched when the purchase is refused.
pub fn purchase(run: &mut RunState, item: ShopItem) -> Result<Applied, PurchaseError> {
    if let ShopItem::Upgrade(id) = item {
        if run.is_purchased(id) {
            return Err(PurchaseError::AlreadyPurchased { name: id.name() });
        }
        if let Some(required) = id.spec().prerequisite {
            if !run.is_purchased(required) {
                return Err(PurchaseError::MissingPrerequisite {
                    name: id.name(),
                    requires: required.name(),
                });
            }
        }
    }

    let cost = item.cost(run);
    if run.pies < cost {
        return Err(PurchaseError::InsufficientFunds {
            cost,
            available: run.pies,
        });
    }

    run.pies -= cost;
    match item {
        ShopItem::Producer(kind) => {
            let producer = run.producer_mut(kind);
            producer.count += 1;
            producer.visible = true;
        }
        ShopItem::Upgrade(id) => {
            upgrades::apply_once(run, id);
        }
    }
    Ok(Applied { item, cost })
}

pub fn total_production_rate(run: &RunState, boost_percent: u32) -> u64 {
    ALL_PRODUCERS
        .into_iter()
        .map(|kind| run.producer(kind).output(boost_percent))
        .fold(run.carried_rate, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(pies: u64) -> RunState {
        let mut run = RunState::new();
        run.pies = pies;
        run
    }

    #[test]
    fn bake_adds_one_plus_whole_boost() {
        let mut run = RunState::new();
        assert_eq!(bake(&mut run, 0), 1);
        assert_eq!(bake(&mut run, 99), 1);
        assert_eq!(bake(&mut run, 150), 2);
        assert_eq!(run.pies, 4);
        assert_eq!(run.baked_this_run, 4);
    }

    #[test]
    fn buying_a_grandma_debits_cost_and_adds_production() {
        let mut run = run_with(15);
        let applied = purchase(&mut run, ShopItem::Producer(ProducerKind::Grandma))
            .expect("grandma should be affordable");
        assert_eq!(applied.cost, 10);
        assert_eq!(run.pies, 5);
        assert_eq!(run.producer(ProducerKind::Grandma).count, 1);
        assert_eq!(total_production_rate(&run, 0), 1);
        assert_eq!(ShopItem::Producer(ProducerKind::Grandma).cost(&run), 15);
    }

    #[test]
    fn refused_purchase_leaves_state_unchanged() {
        let mut run = run_with(9);
        let err = purchase(&mut run, ShopItem::Producer(ProducerKind::Grandma)).unwrap_err();
        assert_eq!(
            err,
            PurchaseError::InsufficientFunds {
                cost: 10,
                available: 9
            }
        );
        assert_eq!(run.pies, 9);
        assert_eq!(run.producer(ProducerKind::Grandma).count, 0);
    }

    #[test]
    fn upgrade_applies_exactly_once() {
        let mut run = run_with(10_000);
        run.producer_mut(ProducerKind::Grandma).count = 2;
        purchase(&mut run, ShopItem::Upgrade(UpgradeId::BetterOvens))
            .expect("first purchase succeeds");
        assert_eq!(run.pies, 9_500);
        assert_eq!(total_production_rate(&run, 0), 4);

        for _ in 0..3 {
            assert_eq!(
                purchase(&mut run, ShopItem::Upgrade(UpgradeId::BetterOvens)),
                Err(PurchaseError::AlreadyPurchased {
                    name: "Better Ovens"
                })
            );
        }
        assert_eq!(run.pies, 9_500);
        assert_eq!(run.producer(ProducerKind::Grandma).multiplier, 2.0);
    }

    #[test]
    fn prerequisite_is_enforced() {
        let mut run = run_with(100_000);
        assert!(matches!(
            purchase(&mut run, ShopItem::Upgrade(UpgradeId::AssemblyLine)),
            Err(PurchaseError::MissingPrerequisite { .. })
        ));
        purchase(&mut run, ShopItem::Upgrade(UpgradeId::RobotBakers)).unwrap();
        purchase(&mut run, ShopItem::Upgrade(UpgradeId::AssemblyLine)).unwrap();
        assert_eq!(run.pies, 100_000 - 5_000 - 20_000);
    }

    #[test]
    fn production_rate_sums_every_producer_with_boost() {
        let mut run = RunState::new();
        run.producer_mut(ProducerKind::Grandma).count = 3;
        run.producer_mut(ProducerKind::Bakery).count = 2;
        run.producer_mut(ProducerKind::Factory).count = 1;
        assert_eq!(total_production_rate(&run, 0), 3 + 10 + 20);
        assert_eq!(total_production_rate(&run, 50), 4 + 15 + 30);
    }

    #[test]
    fn carried_rate_is_added_without_boost() {
        let mut run = RunState::new();
        run.producer_mut(ProducerKind::Grandma).count = 2;
        run.carried_rate = 7;
        assert_eq!(total_production_rate(&run, 0), 9);
        assert_eq!(total_production_rate(&run, 100), 11);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_item() -> impl Strategy<Value = ShopItem> {
        prop_oneof![
            Just(ShopItem::Producer(ProducerKind::Grandma)),
            Just(ShopItem::Producer(ProducerKind::Bakery)),
            Just(ShopItem::Producer(ProducerKind::Factory)),
            Just(ShopItem::Upgrade(UpgradeId::BetterOvens)),
            Just(ShopItem::Upgrade(UpgradeId::IndustrialWheat)),
            Just(ShopItem::Upgrade(UpgradeId::RobotBakers)),
            Just(ShopItem::Upgrade(UpgradeId::SecretFamilyRecipe)),
            Just(ShopItem::Upgrade(UpgradeId::AssemblyLine)),
        ]
    }

    proptest! {
        #[test]
        fn prop_purchases_never_overdraw_or_double_apply(
            start in 0u64..200_000,
            items in proptest::collection::vec(arb_item(), 0..60),
        ) {
            let mut run = RunState::new();
            run.pies = start;
            let mut spent = 0u64;
            for item in items {
                let before = run.pies;
                match purchase(&mut run, item) {
                    Ok(applied) => {
                        prop_assert!(applied.cost <= before);
                        prop_assert_eq!(run.pies, before - applied.cost);
                        spent += applied.cost;
                    }
                    Err(_) => prop_assert_eq!(run.pies, before),
                }
            }
            prop_assert_eq!(run.pies + spent, start);

            let grandma = run.producer(ProducerKind::Grandma).multiplier;
            let expected_grandma = match (
                run.is_purchased(UpgradeId::BetterOvens),
                run.is_purchased(UpgradeId::SecretFamilyRecipe),
            ) {
                (true, true) => 3.0,
                (true, false) => 2.0,
                _ => 1.0,
            };
            prop_assert_eq!(grandma, expected_grandma);
        }
    }
}
