use derive_more::derive::Display;

/// The manufacturer of a processor core.
///
/// Determined from the JEDEC manufacturer ID the core reports in its `mvendorid` register.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Vendor {
    /// The vendor could not be determined.
    #[default]
    #[display("unknown")]
    Unknown,

    /// Andes Technology.
    #[display("Andes")]
    Andes,

    /// SiFive.
    #[display("SiFive")]
    SiFive,

    /// T-Head, the processor design division of Alibaba.
    #[display("T-Head")]
    THead,
}

/// The design family of a processor core.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Microarchitecture {
    /// The microarchitecture could not be determined.
    #[default]
    #[display("unknown")]
    Unknown,

    /// SiFive U7 series (U74 and derivatives).
    #[display("SiFive U7")]
    SiFiveU7,
}

/// The identifying machine register values of a processor, as reported by the hardware probe.
///
/// Each value is zero if the operating system did not report it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RawIdentifiers {
    vendor_id: u64,
    arch_id: u64,
    imp_id: u64,
}

impl RawIdentifiers {
    /// Creates a set of raw identifiers from the `mvendorid`, `marchid` and `mimpid` values.
    #[must_use]
    pub const fn new(vendor_id: u64, arch_id: u64, imp_id: u64) -> Self {
        Self {
            vendor_id,
            arch_id,
            imp_id,
        }
    }

    /// The JEDEC manufacturer ID of the core (`mvendorid`).
    #[must_use]
    pub const fn vendor_id(&self) -> u64 {
        self.vendor_id
    }

    /// The base microarchitecture ID of the core (`marchid`).
    #[must_use]
    pub const fn arch_id(&self) -> u64 {
        self.arch_id
    }

    /// The implementation (revision) ID of the core (`mimpid`).
    #[must_use]
    pub const fn imp_id(&self) -> u64 {
        self.imp_id
    }
}
