mod abstractions;
pub(crate) use abstractions::*;

mod facade;
pub(crate) use facade::*;

#[cfg(all(target_os = "linux", target_arch = "riscv64"))]
mod real;
#[cfg(all(target_os = "linux", target_arch = "riscv64"))]
pub(crate) use real::*;
