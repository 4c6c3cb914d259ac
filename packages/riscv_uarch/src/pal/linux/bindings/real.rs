use std::collections::TryReserveError;
use std::fmt::Debug;
use std::io;

use libc::{c_long, size_t};

use crate::ProcessorId;
use crate::pal::linux::{AffinityDescriptor, Bindings, HwProbePair};

// __NR_riscv_hwprobe (__NR_arch_specific_syscall + 14), available since Linux 6.4.
const SYS_RISCV_HWPROBE: c_long = 258;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

// Real OS bindings are excluded from coverage measurement because:
// 1. They can only be exercised on actual RISC-V hardware running Linux 6.4 or newer.
// 2. Error paths require kernel-level failures that are impractical to trigger in tests.
#[cfg_attr(coverage_nightly, coverage(off))]
impl Bindings for BuildTargetBindings {
    fn alloc_cpu_set(
        &self,
        processor: ProcessorId,
    ) -> Result<AffinityDescriptor, TryReserveError> {
        AffinityDescriptor::for_processor(processor)
    }

    fn riscv_hwprobe(
        &self,
        pairs: &mut [HwProbePair],
        cpus: &mut AffinityDescriptor,
        flags: u32,
    ) -> Result<(), io::Error> {
        let pair_count: size_t = pairs.len();
        let cpu_set_size: size_t = cpus.size_in_bytes();

        // SAFETY: `pairs` is a valid buffer of `pair_count` elements laid out as
        // `struct riscv_hwprobe`, and `cpus` points to `cpu_set_size` bytes of CPU mask. Both
        // outlive the call, which does not retain either pointer.
        let result = unsafe {
            libc::syscall(
                SYS_RISCV_HWPROBE,
                pairs.as_mut_ptr(),
                pair_count,
                cpu_set_size,
                cpus.as_mut_ptr(),
                flags,
            )
        };

        if result < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}
