//! Recording duration value object

use std::fmt;

/// How long a single `record` call should run.
///
/// `NoLimit` omits arecord's `-d` flag entirely, so the process runs until
/// it is killed. arecord itself also treats `-d 0` as infinity, so
/// `Secs(0)` is accepted and equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDuration {
    /// Interrupt the recording after this many seconds
    Secs(u64),
    /// Record until the process is killed
    NoLimit,
}

impl RecordDuration {
    pub const fn from_secs(secs: u64) -> Self {
        Self::Secs(secs)
    }

    /// The value emitted after `-d`, or `None` when the flag is omitted
    pub fn flag_value(&self) -> Option<String> {
        match self {
            Self::Secs(secs) => Some(secs.to_string()),
            Self::NoLimit => None,
        }
    }
}

impl fmt::Display for RecordDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secs(secs) => write!(f, "{}s", secs),
            Self::NoLimit => write!(f, "until interrupted"),
        }
    }
}

impl From<Option<u64>> for RecordDuration {
    fn from(secs: Option<u64>) -> Self {
        match secs {
            Some(secs) => Self::Secs(secs),
            None => Self::NoLimit,
        }
    }
}
