use std::fmt::Debug;

use crate::{ProcessorId, RawIdentifiers, Result};

/// A platform that may or may not be able to report the identifying registers of a processor.
///
/// Implementations must scope every query to exactly the requested processor.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Whether this platform issues hardware probe queries at all.
    fn is_probe_supported(&self) -> bool;

    /// Reads the identifying registers of one processor.
    ///
    /// Registers the operating system does not report are returned as zero.
    fn read_identifiers(&self, processor: ProcessorId) -> Result<RawIdentifiers>;
}
