use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Instance type to survey.
    #[clap(long = "instance-type", default_value = "t2.micro")]
    pub instance_type: String,
}
