use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

use crate::ProcessorId;

/// Errors that can occur when identifying a processor.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The affinity mask that scopes the hardware probe query to a single processor
    /// could not be allocated.
    #[error("failed to allocate affinity mask for processor {processor}")]
    AffinityAllocation {
        /// The processor the mask was being built for.
        processor: ProcessorId,

        /// The underlying allocation failure.
        #[source]
        source: TryReserveError,
    },

    /// The operating system rejected the hardware probe query.
    #[error("hardware probe query for processor {processor} failed: {source}")]
    ProbeQuery {
        /// The processor the query was scoped to.
        processor: ProcessorId,

        /// The error reported by the operating system.
        #[source]
        source: io::Error,
    },

    /// The hardware probe facility does not exist on the platform the build is targeting.
    #[error("hardware probe facility is not available on this platform")]
    Unsupported,
}

impl Error {
    /// The numeric operating system error code, if the error originated from the operating system.
    #[must_use]
    pub fn os_error_code(&self) -> Option<i32> {
        match self {
            Self::ProbeQuery { source, .. } => source.raw_os_error(),
            Self::AffinityAllocation { .. } | Self::Unsupported => None,
        }
    }
}

/// A specialized `Result` type for identification operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    // EINVAL on Linux.
    const EINVAL: i32 = 22;

    #[test]
    fn probe_query_exposes_os_code() {
        let error = Error::ProbeQuery {
            processor: 5,
            source: io::Error::from_raw_os_error(EINVAL),
        };

        assert_eq!(error.os_error_code(), Some(EINVAL));

        let message = error.to_string();
        assert!(message.contains("processor 5"));
    }

    #[test]
    fn allocation_failure_has_no_os_code() {
        let source = Vec::<u64>::new()
            .try_reserve_exact(usize::MAX)
            .unwrap_err();

        let error = Error::AffinityAllocation {
            processor: 9,
            source,
        };

        assert_eq!(error.os_error_code(), None);
        assert!(error.to_string().contains("processor 9"));
    }

    #[test]
    fn unsupported_has_no_os_code() {
        assert_eq!(Error::Unsupported.os_error_code(), None);
    }
}
