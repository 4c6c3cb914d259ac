use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockPlatform;
#[cfg(test)]
use crate::pal::fallback::{
    BUILD_TARGET_PLATFORM as FALLBACK_PLATFORM, BuildTargetPlatform as FallbackPlatform,
};
#[cfg(test)]
use crate::pal::linux::BuildTargetPlatform as LinuxPlatform;
use crate::pal::{BUILD_TARGET_PLATFORM, BuildTargetPlatform, Platform};
use crate::{ProcessorId, RawIdentifiers, Result};

/// Enum to hide the probe-capable/fallback/mock choice behind a single wrapper type.
///
/// The choice is made once, when the facade is created, and never changes afterwards.
#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Target(&'static BuildTargetPlatform),

    #[cfg(test)]
    Fallback(&'static FallbackPlatform),

    // The Linux platform on top of mock bindings, available on every host in tests.
    #[cfg(test)]
    Linux(Arc<LinuxPlatform>),

    #[cfg(test)]
    Mock(Arc<MockPlatform>),
}

impl PlatformFacade {
    pub(crate) fn target() -> Self {
        Self::Target(&BUILD_TARGET_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn fallback() -> Self {
        Self::Fallback(&FALLBACK_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn from_linux(platform: LinuxPlatform) -> Self {
        Self::Linux(Arc::new(platform))
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockPlatform) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

impl Platform for PlatformFacade {
    fn is_probe_supported(&self) -> bool {
        match self {
            Self::Target(p) => p.is_probe_supported(),
            #[cfg(test)]
            Self::Fallback(p) => p.is_probe_supported(),
            #[cfg(test)]
            Self::Linux(p) => p.is_probe_supported(),
            #[cfg(test)]
            Self::Mock(p) => p.is_probe_supported(),
        }
    }

    fn read_identifiers(&self, processor: ProcessorId) -> Result<RawIdentifiers> {
        match self {
            Self::Target(p) => p.read_identifiers(processor),
            #[cfg(test)]
            Self::Fallback(p) => p.read_identifiers(processor),
            #[cfg(test)]
            Self::Linux(p) => p.read_identifiers(processor),
            #[cfg(test)]
            Self::Mock(p) => p.read_identifiers(processor),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Fallback(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Linux(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Mock(inner) => inner.fmt(f),
        }
    }
}
