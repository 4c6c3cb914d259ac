#![cfg_attr(coverage_nightly, coverage(off))]

use std::collections::TryReserveError;
use std::fmt::Debug;
use std::io;
#[cfg(test)]
use std::sync::Arc;

use crate::ProcessorId;
#[cfg(test)]
use crate::pal::linux::MockBindings;
#[cfg(all(target_os = "linux", target_arch = "riscv64"))]
use crate::pal::linux::BuildTargetBindings;
use crate::pal::linux::{AffinityDescriptor, Bindings, HwProbePair};

/// Enum to hide the real/mock choice behind a single wrapper type.
#[derive(Clone)]
pub(crate) enum BindingsFacade {
    #[cfg(all(target_os = "linux", target_arch = "riscv64"))]
    Target(&'static BuildTargetBindings),

    #[cfg(test)]
    Mock(Arc<MockBindings>),
}

impl BindingsFacade {
    #[cfg(all(target_os = "linux", target_arch = "riscv64"))]
    pub(crate) const fn target() -> Self {
        Self::Target(&BuildTargetBindings)
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockBindings) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

impl Bindings for BindingsFacade {
    fn alloc_cpu_set(
        &self,
        processor: ProcessorId,
    ) -> Result<AffinityDescriptor, TryReserveError> {
        match self {
            #[cfg(all(target_os = "linux", target_arch = "riscv64"))]
            Self::Target(bindings) => bindings.alloc_cpu_set(processor),
            #[cfg(test)]
            Self::Mock(mock) => mock.alloc_cpu_set(processor),
        }
    }

    fn riscv_hwprobe(
        &self,
        pairs: &mut [HwProbePair],
        cpus: &mut AffinityDescriptor,
        flags: u32,
    ) -> Result<(), io::Error> {
        match self {
            #[cfg(all(target_os = "linux", target_arch = "riscv64"))]
            Self::Target(bindings) => bindings.riscv_hwprobe(pairs, cpus, flags),
            #[cfg(test)]
            Self::Mock(mock) => mock.riscv_hwprobe(pairs, cpus, flags),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for BindingsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(all(target_os = "linux", target_arch = "riscv64"))]
            Self::Target(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Mock(inner) => inner.fmt(f),
        }
    }
}
