/// Regions surveyed on every run, North America first, then Europe.
///
/// Iteration order only affects progress display — the final table is
/// re-sorted by the cheapest availability zone.
pub const REGION_CONSIDERATION_SET: [&str; 11] = [
    "ca-central-1",
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "eu-central-1",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-north-1",
    "eu-south-1",
];
