use std::collections::TryReserveError;
use std::fmt::Debug;
use std::io;

use crate::ProcessorId;
use crate::pal::linux::{AffinityDescriptor, HwProbePair};

/// Bindings for FFI calls into the operating system and the kernel-facing allocations they take.
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    // CPU_ALLOC() + CPU_ZERO_S() + CPU_SET_S() for a single processor
    fn alloc_cpu_set(&self, processor: ProcessorId)
    -> Result<AffinityDescriptor, TryReserveError>;

    // riscv_hwprobe() syscall, scoped to the processors flagged in `cpus`
    fn riscv_hwprobe(
        &self,
        pairs: &mut [HwProbePair],
        cpus: &mut AffinityDescriptor,
        flags: u32,
    ) -> Result<(), io::Error>;
}
