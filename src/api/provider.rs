use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::{core::report::RegionOutcome, prelude::*};

#[async_trait]
pub trait SpotPriceProvider: Sync {
    /// Query the current spot prices of one instance type in one region.
    ///
    /// A rejected or unreachable call comes back as `Ok` with
    /// [`RegionOutcome::Failed`] so the caller can keep surveying; `Err`
    /// is reserved for responses the program cannot interpret.
    async fn spot_prices(
        &self,
        region: &str,
        instance_type: &str,
        start_time: DateTime<Local>,
    ) -> Result<RegionOutcome>;
}
