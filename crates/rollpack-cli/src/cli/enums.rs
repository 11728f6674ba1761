use clap::ValueEnum;
use rollpack_config::Target;

/// Environment the transpile stage targets
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum TargetArg {
    /// Last two browser versions plus IE 10, with JSX support
    #[value(name = "browser")]
    Browser,

    /// Node.js 6
    #[value(name = "node")]
    Node,
}

impl From<TargetArg> for Target {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Browser => Target::Browser,
            TargetArg::Node => Target::Node,
        }
    }
}
