mod affinity;
pub(crate) use affinity::*;

mod bindings;
pub(crate) use bindings::*;

mod platform;
pub(crate) use platform::*;

mod probe;
pub(crate) use probe::*;

#[cfg(test)]
pub(crate) mod mocks;
