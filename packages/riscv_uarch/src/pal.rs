//! Platform Abstraction Layer (PAL). This is private API.
//!
//! The hardware probe exists only on Linux targeting `riscv64`. Every other build target gets the
//! fallback platform, which never touches the operating system.

mod abstractions;
pub(crate) use abstractions::*;

mod facade;
pub(crate) use facade::*;

// The Linux module is compiled in test mode on all platforms so its logic can be exercised with
// mock bindings. Only the real bindings are restricted to the build target that has the syscall.
#[cfg(any(test, all(target_os = "linux", target_arch = "riscv64", not(miri))))]
pub(crate) mod linux;
#[cfg(all(target_os = "linux", target_arch = "riscv64", not(miri)))]
pub(crate) use linux::*;

// The fallback module is compiled in test mode on all platforms, under Miri, and as the primary
// implementation on targets without the hardware probe. We only glob-import it when it is the
// primary implementation; in test mode on supported targets, it must be accessed via the explicit
// path `fallback::` to avoid ambiguity with the Linux implementation.
#[cfg(any(
    test,
    miri,
    not(all(target_os = "linux", target_arch = "riscv64"))
))]
pub(crate) mod fallback;

#[cfg(any(miri, not(all(target_os = "linux", target_arch = "riscv64"))))]
pub(crate) use fallback::*;
