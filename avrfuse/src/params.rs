use std::fmt;

/// Bit clock period passed to the programmer with `-B`, slow enough for
/// parts still running from their factory clock.
pub(crate) const BITCLOCK: &str = "100";

/// Fuse settings for one part.
///
/// Values are opaque text handed to the programmer unchanged. An empty
/// extended fuse means the part has none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FuseParams {
    pub cpu: String,
    pub lfuse: String,
    pub hfuse: String,
    pub efuse: Option<String>,
}

impl FuseParams {
    pub fn new(
        cpu: impl Into<String>,
        lfuse: impl Into<String>,
        hfuse: impl Into<String>,
    ) -> Self {
        Self {
            cpu: cpu.into(),
            lfuse: lfuse.into(),
            hfuse: hfuse.into(),
            efuse: None,
        }
    }

    #[must_use]
    pub fn with_efuse(mut self, efuse: impl Into<String>) -> Self {
        let efuse = efuse.into();
        self.efuse = (!efuse.is_empty()).then_some(efuse);
        self
    }

    /// Programmer arguments, one entry per argv slot.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-p".to_string(),
            self.cpu.clone(),
            "-B".to_string(),
            BITCLOCK.to_string(),
            "-U".to_string(),
            memop("lfuse", &self.lfuse),
            "-U".to_string(),
            memop("hfuse", &self.hfuse),
        ];
        if let Some(efuse) = &self.efuse {
            args.push("-U".to_string());
            args.push(memop("efuse", efuse));
        }
        args
    }

    /// The full output line, newline included.
    pub fn render(&self) -> String {
        format!("{self}\n")
    }
}

fn memop(memory: &str, value: &str) -> String {
    format!("{memory}:w:{value}:m")
}

// Every token is followed by a space, including the last one.
impl fmt::Display for FuseParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for arg in self.args() {
            write!(f, "{arg} ")?;
        }
        Ok(())
    }
}
