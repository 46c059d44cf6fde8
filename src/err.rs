use clap::error::ErrorKind;

/// Command line could not be turned into fuse settings.
#[derive(Debug)]
pub enum CliError {
    MissingArgument(clap::Error),
    Usage(clap::Error),
}

impl CliError {
    /// Prints clap's usage message and exits, with status 0 for `--help`
    /// and `--version` and 2 otherwise.
    pub fn exit(&self) -> ! {
        match self {
            Self::MissingArgument(err) | Self::Usage(err) => err.exit(),
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument(err) | Self::Usage(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingArgument(err) | Self::Usage(err) => Some(err),
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(value: clap::Error) -> Self {
        match value.kind() {
            ErrorKind::MissingRequiredArgument => Self::MissingArgument(value),
            _ => Self::Usage(value),
        }
    }
}
