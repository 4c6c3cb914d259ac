/// Identifies a specific processor.
///
/// This will match the numeric identifier used by standard tooling of the operating system
/// (e.g. the `processor` field in `/proc/cpuinfo` and the bit position in affinity masks).
pub type ProcessorId = u32;
