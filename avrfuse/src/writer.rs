use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info, instrument};

use crate::err::Error;
use crate::params::FuseParams;

/// Where the fuse line goes. `-` on the command line means standard output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Destination {
    #[default]
    Stdout,
    Path(PathBuf),
}

impl FromStr for Destination {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "-" => Self::Stdout,
            path => Self::Path(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("-"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Destination {
    /// Writes the rendered line. A file is created or truncated, and closed
    /// before returning on every path. Standard output is flushed but left open.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the destination cannot be opened or written.
    #[instrument(skip(params))]
    pub fn write(&self, params: &FuseParams) -> Result<(), Error> {
        match self {
            Self::Stdout => FuseWriter::stdout().write(params),
            Self::Path(path) => {
                let mut writer = FuseWriter::from_path(path)?;
                writer.write(params).map_err(|err| match err {
                    Error::Io(source) => Error::DestinationUnwritable {
                        path: path.clone(),
                        source,
                    },
                    err @ Error::DestinationUnwritable { .. } => err,
                })?;
                info!(path = %path.display(), "Wrote fuse settings");
                Ok(())
            }
        }
    }
}

pub struct FuseWriter<W: Write> {
    writer: W,
}

impl FuseWriter<File> {
    /// # Errors
    ///
    /// Will return `Err` if the path cannot be created.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::DestinationUnwritable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl FuseWriter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> FuseWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// # Errors
    ///
    /// Will return `Err` if the underlying writer fails.
    pub fn write(&mut self, params: &FuseParams) -> Result<(), Error> {
        let line = params.render();
        debug!(line = line.trim_end(), "Rendered");
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::test_mocks::{FailingWriter, SharedBuf};

    fn params() -> FuseParams {
        FuseParams::new("atmega328p", "0xFF", "0xDE").with_efuse("0xFD")
    }

    #[test]
    fn dash_is_stdout() {
        assert_eq!("-".parse::<Destination>(), Ok(Destination::Stdout));
        assert_eq!(
            "fuses.txt".parse::<Destination>(),
            Ok(Destination::Path(PathBuf::from("fuses.txt")))
        );
        assert_eq!(Destination::default(), Destination::Stdout);
    }

    #[test]
    fn display_round_trips_the_argument() {
        assert_eq!(Destination::Stdout.to_string(), "-");
        assert_eq!(
            Destination::Path(PathBuf::from("out/fuses")).to_string(),
            "out/fuses"
        );
    }

    #[test]
    fn writes_line_verbatim() {
        let mut buf = Vec::new();
        FuseWriter::new(&mut buf).write(&params()).unwrap();
        assert_eq!(
            buf,
            b"-p atmega328p -B 100 -U lfuse:w:0xFF:m -U hfuse:w:0xDE:m -U efuse:w:0xFD:m \n"
        );
    }

    #[test]
    fn flushes_after_write() {
        let buf = SharedBuf::default();
        FuseWriter::new(buf.clone()).write(&params()).unwrap();
        assert_eq!(buf.flushes(), 1);
        assert_eq!(buf.contents(), params().render());
    }

    #[test]
    fn write_failure_is_io_error() {
        let err = FuseWriter::new(FailingWriter).write(&params()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fuses");
        std::fs::write(&path, "stale content that is much longer than the fuse line ".repeat(4))
            .unwrap();

        let params = FuseParams::new("attiny85", "0x62", "0xDF");
        Destination::Path(path.clone()).write(&params).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), params.render());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_write_after_open_is_unwritable() {
        let path = PathBuf::from("/dev/full");
        let err = Destination::Path(path.clone()).write(&params()).unwrap_err();
        match &err {
            Error::DestinationUnwritable { path: failed, .. } => assert_eq!(failed, &path),
            Error::Io(_) => panic!("expected DestinationUnwritable, got {err:?}"),
        }
        assert!(err.source().is_some());
    }

    #[test]
    fn missing_directory_is_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("fuses");
        let err = Destination::Path(path.clone()).write(&params()).unwrap_err();
        match &err {
            Error::DestinationUnwritable { path: failed, .. } => assert_eq!(failed, &path),
            Error::Io(_) => panic!("expected DestinationUnwritable, got {err:?}"),
        }
        assert!(err.source().is_some());
        assert!(err.to_string().contains("nested"));
    }
}
