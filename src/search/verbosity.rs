/// How much the binaries log to stderr. The trace of the search itself is
/// always recorded in the result regardless of this setting.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[clap(help = "Errors only.")]
    Silent,
    #[clap(help = "Search start, finish and summary statistics.")]
    #[default]
    Normal,
    #[clap(help = "Also log each IDA* bound and every engine decision.")]
    Verbose,
    #[clap(help = "Also log every node expansion.")]
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
