use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::sample::{week_of, DataSet};
use crate::types::{ForecastEntry, Place};

/// Source of the seven-day sequence shown for a place
pub trait ForecastProvider {
    /// Produce the sequence to display. `place` may be ignored by implementations.
    fn forecasts_for(&mut self, place: Option<&Place>) -> Vec<ForecastEntry>;
}

/// Which provider the screen is backed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ForecastVariant {
    Fixed,
    #[default]
    Shuffled,
}

/// Returns the same dated sequence on every call, whatever the place.
#[derive(Debug, Clone)]
pub struct FixedForecasts {
    week: Vec<ForecastEntry>,
}

impl FixedForecasts {
    pub fn new(today: NaiveDate, data_set: DataSet) -> Self {
        Self::from_entries(week_of(today, data_set.payloads()))
    }

    pub fn from_entries(week: Vec<ForecastEntry>) -> Self {
        Self { week }
    }
}

impl ForecastProvider for FixedForecasts {
    fn forecasts_for(&mut self, _place: Option<&Place>) -> Vec<ForecastEntry> {
        self.week.clone()
    }
}

/// Keeps the base dates in order and re-deals the payloads across them on
/// every call.
///
/// The place argument does not influence the result; a new place just means a
/// new deal.
#[derive(Debug, Clone)]
pub struct ShuffledForecasts<R = StdRng> {
    base: Vec<ForecastEntry>,
    rng: R,
}

impl<R: Rng> ShuffledForecasts<R> {
    pub fn new(base: Vec<ForecastEntry>, rng: R) -> Self {
        Self { base, rng }
    }

    pub fn base(&self) -> &[ForecastEntry] {
        &self.base
    }
}

impl ShuffledForecasts<StdRng> {
    /// Reproducible deals for a given seed
    pub fn with_seed(today: NaiveDate, data_set: DataSet, seed: u64) -> Self {
        Self::new(
            week_of(today, data_set.payloads()),
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn from_entropy(today: NaiveDate, data_set: DataSet) -> Self {
        Self::new(week_of(today, data_set.payloads()), StdRng::from_entropy())
    }
}

impl<R: Rng> ForecastProvider for ShuffledForecasts<R> {
    fn forecasts_for(&mut self, place: Option<&Place>) -> Vec<ForecastEntry> {
        let mut order: Vec<usize> = (0..self.base.len()).collect();
        order.shuffle(&mut self.rng);

        tracing::debug!(
            "Dealt forecast payloads {:?} for {}",
            order,
            place.map_or("no place", |p| p.display_name.as_str())
        );

        self.base
            .iter()
            .zip(order)
            .map(|(slot, pick)| ForecastEntry::new(slot.date, self.base[pick].conditions.clone()))
            .collect()
    }
}

/// Build the provider selected by configuration.
///
/// A seed only applies to the shuffled variant.
pub fn build_provider(
    variant: ForecastVariant,
    data_set: DataSet,
    today: NaiveDate,
    seed: Option<u64>,
) -> Box<dyn ForecastProvider> {
    match (variant, seed) {
        (ForecastVariant::Fixed, _) => Box::new(FixedForecasts::new(today, data_set)),
        (ForecastVariant::Shuffled, Some(seed)) => {
            Box::new(ShuffledForecasts::with_seed(today, data_set, seed))
        }
        (ForecastVariant::Shuffled, None) => {
            Box::new(ShuffledForecasts::from_entropy(today, data_set))
        }
    }
}
