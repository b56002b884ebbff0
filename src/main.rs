mod api;
mod cli;
mod core;
mod prelude;
mod progress;
mod quantity;
mod regions;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    api::Ec2,
    cli::Args,
    core::report::{build_rows, survey},
    prelude::*,
    progress::{MIN_REGION_DISPLAY, Progress},
    regions::REGION_CONSIDERATION_SET,
    tables::build_price_table,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();

    let args = Args::parse();
    info!(version = crate_version!(), instance_type = args.instance_type.as_str(), "starting…");

    let provider = Ec2::load().await;
    #[allow(clippy::cast_possible_truncation)]
    let progress = Progress::try_new(REGION_CONSIDERATION_SET.len() as u64, MIN_REGION_DISPLAY)?;
    let outcomes = survey(&provider, &args.instance_type, &REGION_CONSIDERATION_SET, &progress).await?;
    progress.finish();

    println!("{} prices", args.instance_type);
    println!("{}", build_price_table(&build_rows(outcomes)));

    info!("done!");
    Ok(())
}
