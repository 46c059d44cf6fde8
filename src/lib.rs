#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod err;
mod utils;

pub use avrfuse::{Destination, Error, FuseParams, FuseWriter};
pub use err::CliError;
pub use utils::{parse, FuseArgs};
