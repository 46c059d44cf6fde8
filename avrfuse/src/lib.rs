mod err;
mod params;
mod test_mocks;
mod writer;

pub use err::Error;
pub use params::FuseParams;
pub use writer::{Destination, FuseWriter};
