use tracing::trace;

use crate::pal::Platform;
use crate::{Error, ProcessorId, RawIdentifiers, Result};

/// Fallback platform implementation for build targets without the hardware probe.
///
/// Every query is answered with [`Error::Unsupported`] without allocating anything or calling
/// into the operating system, so callers can identify processors unconditionally on any target.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    fn is_probe_supported(&self) -> bool {
        false
    }

    fn read_identifiers(&self, processor: ProcessorId) -> Result<RawIdentifiers> {
        trace!(processor, "hardware probe not available on this build target");

        Err(Error::Unsupported)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn never_supports_probe() {
        assert!(!BUILD_TARGET_PLATFORM.is_probe_supported());
    }

    #[test]
    fn every_processor_is_unsupported() {
        for processor in [0, 1, 3, 63, 64, 1023, ProcessorId::MAX] {
            let result = BUILD_TARGET_PLATFORM.read_identifiers(processor);

            assert!(matches!(result, Err(Error::Unsupported)));
        }
    }
}
