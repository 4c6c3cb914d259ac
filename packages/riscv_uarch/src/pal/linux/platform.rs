use tracing::debug;

use crate::pal::Platform;
use crate::pal::linux::{
    Bindings, BindingsFacade, extract_identifiers, identification_request, response_entries,
};
use crate::{Error, ProcessorId, RawIdentifiers, Result};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
#[cfg(all(target_os = "linux", target_arch = "riscv64"))]
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(BindingsFacade::target());

// No flags: the query is answered for the flagged processor only, we are not asking
// which processors share a set of values.
const HWPROBE_FLAGS: u32 = 0;

/// Identifies processors with the `riscv_hwprobe` system call.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    bindings: BindingsFacade,
}

impl BuildTargetPlatform {
    pub(crate) const fn new(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }
}

impl Platform for BuildTargetPlatform {
    fn is_probe_supported(&self) -> bool {
        true
    }

    fn read_identifiers(&self, processor: ProcessorId) -> Result<RawIdentifiers> {
        // Dropped on every path out of this function, success or not.
        let mut cpus = self
            .bindings
            .alloc_cpu_set(processor)
            .map_err(|source| Error::AffinityAllocation { processor, source })?;

        let mut pairs = identification_request();

        self.bindings
            .riscv_hwprobe(&mut pairs, &mut cpus, HWPROBE_FLAGS)
            .map_err(|source| Error::ProbeQuery { processor, source })?;

        // The kernel may not have answered every key. Whatever it did not answer stays zero.
        let identifiers = extract_identifiers(response_entries(&pairs));

        debug!(
            processor,
            vendor_id = identifiers.vendor_id(),
            arch_id = identifiers.arch_id(),
            imp_id = identifiers.imp_id(),
            "read processor identifiers"
        );

        Ok(identifiers)
    }
}
