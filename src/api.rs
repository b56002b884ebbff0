mod ec2;
mod provider;

pub use self::{ec2::Api as Ec2, provider::SpotPriceProvider};
