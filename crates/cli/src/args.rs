//! Command-line arguments.

use clap::{Parser, Subcommand};
use pointwise::Point;

#[derive(Parser, Debug)]
#[command(name = "pointwise")]
#[command(about = "Interactive transformations over a set of 2D points")]
#[command(version)]
pub struct Cmd {
    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Defaults to `session`
    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Action {
    /// Interactive menu on stdin/stdout
    Session,
    /// Run the functional demo on the given points and print a JSON report
    Demo {
        /// Point as `x,y`; repeat for more points
        #[arg(long = "point", value_name = "X,Y", required = true, allow_hyphen_values = true)]
        points: Vec<Point>,
    },
}
