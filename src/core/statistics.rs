use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::quantity::UsdPerHour;

/// One spot price quote: an availability zone and its current price.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct PricePoint {
    pub availability_zone: String,
    pub price: UsdPerHour,
}

impl PricePoint {
    pub fn new(availability_zone: impl Into<String>, price: UsdPerHour) -> Self {
        Self { availability_zone: availability_zone.into(), price }
    }
}

/// Descriptive statistics over one region's quotes.
///
/// The fields are all-or-nothing: a region either produced at least one
/// quote, or it is [`RegionStatistics::Unavailable`].
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub enum RegionStatistics {
    Available {
        n_zones: usize,
        min: UsdPerHour,
        max: UsdPerHour,
        mean: UsdPerHour,

        /// Population variance of the prices, in squared dollars per hour.
        variance: f64,
    },

    /// The provider answered but reported no offers for the region.
    Unavailable,
}

impl RegionStatistics {
    /// Aggregate the quotes of one region.
    ///
    /// Pure and order-independent: min, max, mean, and population variance
    /// do not depend on the input order.
    pub fn from_points(points: &[PricePoint]) -> Self {
        let prices = || points.iter().map(|point| point.price);
        let Some((min, max)) = prices().minmax().into_option() else {
            return Self::Unavailable;
        };

        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        let mean = prices().sum::<UsdPerHour>() / n;
        let variance = prices().map(|price| (price.0 - mean.0).powi(2)).sum::<f64>() / n;

        Self::Available { n_zones: points.len(), min, max, mean, variance }
    }

    /// Sort key for the final table: the cheapest availability zone wins,
    /// unavailable regions sort after any finite price.
    pub fn rank(&self) -> OrderedFloat<f64> {
        match self {
            Self::Available { min, .. } => OrderedFloat(min.0),
            Self::Unavailable => OrderedFloat(f64::INFINITY),
        }
    }
}
