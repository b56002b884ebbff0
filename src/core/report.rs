use chrono::Local;

use crate::{
    api::SpotPriceProvider,
    core::statistics::{PricePoint, RegionStatistics},
    prelude::*,
    progress::Progress,
};

/// What one region's provider call produced.
#[must_use]
pub enum RegionOutcome {
    /// The provider answered, possibly with zero offers.
    Offers(Vec<PricePoint>),

    /// The call itself was rejected or never reached the provider.
    Failed(Error),
}

#[must_use]
pub struct ReportRow {
    pub region: &'static str,
    pub statistics: RegionStatistics,
}

/// Query every region in order, one blocking round-trip at a time.
///
/// Rejected calls are recorded as [`RegionOutcome::Failed`]; a broken
/// response aborts the whole survey.
pub async fn survey(
    provider: &dyn SpotPriceProvider,
    instance_type: &str,
    regions: &[&'static str],
    progress: &Progress,
) -> Result<Vec<(&'static str, RegionOutcome)>> {
    let mut outcomes = Vec::with_capacity(regions.len());
    for &region in regions {
        let displayed = progress.enter(region);
        let outcome = provider.spot_prices(region, instance_type, Local::now()).await?;
        outcomes.push((region, outcome));
        displayed.leave().await;
    }
    Ok(outcomes)
}

/// Turn the outcomes into table rows, cheapest region first.
///
/// The drop policy lives here: a failed region is warned about and
/// produces no row at all, while a region with zero offers still shows up
/// as unavailable. The sort is stable, so ties keep their survey order.
pub fn build_rows(outcomes: Vec<(&'static str, RegionOutcome)>) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = outcomes
        .into_iter()
        .filter_map(|(region, outcome)| match outcome {
            RegionOutcome::Offers(points) => {
                Some(ReportRow { region, statistics: RegionStatistics::from_points(&points) })
            }
            RegionOutcome::Failed(error) => {
                warn!(region, "dropping the region from the report: {error:#}");
                None
            }
        })
        .collect();
    rows.sort_by_key(|row| row.statistics.rank());
    rows
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{DateTime, Local};

    use super::*;
    use crate::quantity::UsdPerHour;

    struct FakeProvider;

    #[async_trait]
    impl SpotPriceProvider for FakeProvider {
        async fn spot_prices(
            &self,
            region: &str,
            _instance_type: &str,
            _start_time: DateTime<Local>,
        ) -> Result<RegionOutcome> {
            Ok(match region {
                "no-offers" => RegionOutcome::Offers(Vec::new()),
                "rejecting" => RegionOutcome::Failed(Error::msg("AuthFailure")),
                _ => RegionOutcome::Offers(vec![PricePoint::new(
                    format!("{region}a"),
                    UsdPerHour(0.01),
                )]),
            })
        }
    }

    #[tokio::test]
    async fn test_rejected_region_has_no_row() -> Result {
        let regions = ["cheap", "rejecting", "no-offers"];
        let outcomes =
            survey(&FakeProvider, "t2.micro", &regions, &Progress::hidden()).await?;
        assert_eq!(outcomes.len(), regions.len());

        let rows = build_rows(outcomes);
        assert_eq!(rows.len(), regions.len() - 1);
        assert!(rows.iter().all(|row| row.region != "rejecting"));
        Ok(())
    }

    #[tokio::test]
    async fn test_unavailable_sorts_after_available() -> Result {
        let outcomes =
            survey(&FakeProvider, "t2.micro", &["no-offers", "cheap"], &Progress::hidden())
                .await?;
        let rows = build_rows(outcomes);
        assert_eq!(rows[0].region, "cheap");
        assert_eq!(rows[1].region, "no-offers");
        assert_eq!(rows[1].statistics, RegionStatistics::Unavailable);
        Ok(())
    }

    #[test]
    fn test_sort_is_stable_on_equal_minimums() {
        let tied = |zone: &str| {
            RegionOutcome::Offers(vec![
                PricePoint::new(zone.to_owned(), UsdPerHour(0.01)),
                PricePoint::new(zone.to_owned(), UsdPerHour(0.02)),
            ])
        };
        let rows = build_rows(vec![("first", tied("a")), ("second", tied("b"))]);
        assert_eq!(rows[0].region, "first");
        assert_eq!(rows[1].region, "second");
    }
}
