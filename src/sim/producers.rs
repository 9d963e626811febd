use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProducerKind {
    Grandma,
    Bakery,
    Factory,
}

pub const ALL_PRODUCERS: [ProducerKind; 3] = [
    ProducerKind::Grandma,
    ProducerKind::Bakery,
    ProducerKind::Factory,
];

/// Static balance data for one producer. Cost of the next unit is
/// `base_cost + cost_step * owned`.
#[derive(Debug, Clone, Copy)]
pub struct ProducerSpec {
    pub name: &'static str,
    pub plural: &'static str,
    pub hotkey: char,
    pub base_cost: u64,
    pub cost_step: u64,
    pub base_output: f64,
    pub unlock_at: u64,
    pub unlock_message: &'static str,
}

const PRODUCER_TABLE: [ProducerSpec; 3] = [
    ProducerSpec {
        name: "Grandma",
        plural: "Grandmas",
        hotkey: 'G',
        base_cost: 10,
        cost_step: 5,
        base_output: 1.0,
        unlock_at: 10,
        unlock_message: "A million sounds like a lot... here's a Grandma to help!",
    },
    ProducerSpec {
        name: "Bakery",
        plural: "Bakeries",
        hotkey: 'B',
        base_cost: 50,
        cost_step: 25,
        base_output: 5.0,
        unlock_at: 100,
        unlock_message: "Bakeries unlocked! These can produce more pies!",
    },
    ProducerSpec {
        name: "Factory",
        plural: "Factories",
        hotkey: 'F',
        base_cost: 200,
        cost_step: 100,
        base_output: 20.0,
        unlock_at: 500,
        unlock_message: "Factories now available - mass production time!",
    },
];

impl ProducerKind {
    pub fn index(self) -> usize {
        match self {
            ProducerKind::Grandma => 0,
            ProducerKind::Bakery => 1,
            ProducerKind::Factory => 2,
        }
    }

    pub fn spec(self) -> &'static ProducerSpec {
        &PRODUCER_TABLE[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn from_hotkey(key: char) -> Option<Self> {
        let key = key.to_ascii_uppercase();
        ALL_PRODUCERS
            .into_iter()
            .find(|kind| kind.spec().hotkey == key)
    }
}

impl ProducerSpec {
    pub fn cost(&self, owned: u32) -> u64 {
        self.base_cost
            .saturating_add(self.cost_step.saturating_mul(u64::from(owned)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producer {
    pub kind: ProducerKind,
    pub count: u32,
    pub multiplier: f64,
    #[serde(default)]
    pub visible: bool,
}

impl Producer {
    pub fn new(kind: ProducerKind) -> Self {
        Self {
            kind,
            count: 0,
            multiplier: 1.0,
            visible: false,
        }
    }

    pub fn spec(&self) -> &'static ProducerSpec {
        self.kind.spec()
    }

    pub fn next_cost(&self) -> u64 {
        self.spec().cost(self.count)
    }

    /// Whole pies per second contributed by every owned unit of this producer.
    pub fn output(&self, boost_percent: u32) -> u64 {
        let boost = 1.0 + f64::from(boost_percent) / 100.0;
        let raw = self.spec().base_output * f64::from(self.count) * self.multiplier * boost;
        if raw.is_finite() && raw > 0.0 {
            raw.floor() as u64
        } else {
            0
        }
    }
}
