//! EC2 [`DescribeSpotPriceHistory`][1] client.
//!
//! [1]: https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeSpotPriceHistory.html

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_ec2::{
    Client,
    config::Region,
    error::SdkError,
    primitives::DateTime as AwsDateTime,
    types::InstanceType,
};
use chrono::{DateTime, Local};

use crate::{
    api::provider::SpotPriceProvider,
    core::{report::RegionOutcome, statistics::PricePoint},
    prelude::*,
};

/// Offer types the survey is scoped to.
const PRODUCT_DESCRIPTIONS: [&str; 2] = ["Linux/UNIX", "Linux/UNIX (Amazon VPC)"];

pub struct Api {
    shared_config: SdkConfig,
}

impl Api {
    /// Load the shared AWS configuration once. Credentials are resolved by
    /// the SDK's own chain (environment, profile, instance metadata).
    pub async fn load() -> Self {
        Self { shared_config: aws_config::defaults(BehaviorVersion::latest()).load().await }
    }

    fn regional_client(&self, region: &str) -> Client {
        let config = aws_sdk_ec2::config::Builder::from(&self.shared_config)
            .region(Region::new(region.to_owned()))
            .build();
        Client::from_conf(config)
    }
}

#[async_trait]
impl SpotPriceProvider for Api {
    #[instrument(skip_all, fields(region = region))]
    async fn spot_prices(
        &self,
        region: &str,
        instance_type: &str,
        start_time: DateTime<Local>,
    ) -> Result<RegionOutcome> {
        let response = self
            .regional_client(region)
            .describe_spot_price_history()
            .instance_types(InstanceType::from(instance_type))
            .set_product_descriptions(Some(PRODUCT_DESCRIPTIONS.map(str::to_owned).into()))
            .start_time(AwsDateTime::from_millis(start_time.timestamp_millis()))
            .send()
            .await;

        let history = match response {
            Ok(response) => response.spot_price_history.unwrap_or_default(),
            // Authorization failures, not-opted-in regions, and unreachable
            // endpoints leave the region out of the survey.
            Err(
                error @ (SdkError::ServiceError(_)
                | SdkError::DispatchFailure(_)
                | SdkError::TimeoutError(_)),
            ) => {
                return Ok(RegionOutcome::Failed(Error::new(error)));
            }
            Err(error) => {
                return Err(Error::new(error).context("spot price query failed"));
            }
        };

        let points = history
            .into_iter()
            .map(|offer| {
                let availability_zone =
                    offer.availability_zone.context("the offer is missing its availability zone")?;
                let price = offer
                    .spot_price
                    .with_context(|| format!("no price quoted in {availability_zone}"))?
                    .parse()
                    .with_context(|| format!("unreadable price in {availability_zone}"))?;
                Ok(PricePoint { availability_zone, price })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(n_points = points.len(), "fetched");
        Ok(RegionOutcome::Offers(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "makes the API request"]
    async fn test_spot_prices_ok() -> Result {
        let outcome =
            Api::load().await.spot_prices("eu-west-1", "t2.micro", Local::now()).await?;
        let RegionOutcome::Offers(points) = outcome else {
            bail!("the call should succeed with valid credentials");
        };
        assert!(points.iter().all(|point| point.availability_zone.starts_with("eu-west-1")));
        Ok(())
    }
}
