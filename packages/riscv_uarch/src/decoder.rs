use std::fmt::Debug;

use tracing::warn;

use crate::{Microarchitecture, RawIdentifiers, Vendor};

/// Translates raw machine register values into a symbolic vendor and microarchitecture.
///
/// Implementations must not have side effects that depend on being called a particular number of
/// times, as the same processor may be identified any number of times.
#[cfg_attr(test, mockall::automock)]
pub trait Decoder: Debug + Send + Sync {
    /// Decodes the raw identifiers of one processor.
    fn decode(&self, identifiers: RawIdentifiers) -> (Vendor, Microarchitecture);
}

// JEDEC manufacturer IDs, in the `mvendorid` encoding (bank number above the 7-bit offset).
const VENDOR_ID_ANDES: u64 = 0x31e;
const VENDOR_ID_SIFIVE: u64 = 0x489;
const VENDOR_ID_THEAD: u64 = 0x5b7;

// Commercial (non open source) cores set the top bit of `marchid`.
const SIFIVE_ARCH_ID_U7: u64 = 0x8000_0000_0000_0007;

/// Decodes the vendors and microarchitectures this package knows about.
///
/// The vendor ID alone determines the vendor. The microarchitecture is only reported for cores
/// whose architecture ID unambiguously identifies a design family; everything else is
/// [`Microarchitecture::Unknown`].
///
/// # Example
///
/// ```
/// use riscv_uarch::{Decoder, KnownVendorDecoder, Microarchitecture, RawIdentifiers, Vendor};
///
/// let (vendor, uarch) = KnownVendorDecoder.decode(RawIdentifiers::new(0x5b7, 0, 0));
///
/// assert_eq!(vendor, Vendor::THead);
/// assert_eq!(uarch, Microarchitecture::Unknown);
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[expect(
    clippy::exhaustive_structs,
    reason = "stateless marker type, constructed by name"
)]
pub struct KnownVendorDecoder;

impl Decoder for KnownVendorDecoder {
    fn decode(&self, identifiers: RawIdentifiers) -> (Vendor, Microarchitecture) {
        let vendor = match identifiers.vendor_id() {
            VENDOR_ID_ANDES => Vendor::Andes,
            VENDOR_ID_SIFIVE => Vendor::SiFive,
            VENDOR_ID_THEAD => Vendor::THead,
            vendor_id => {
                warn!(vendor_id, "unknown vendor ID");
                Vendor::Unknown
            }
        };

        let uarch = match (vendor, identifiers.arch_id()) {
            (Vendor::SiFive, SIFIVE_ARCH_ID_U7) => Microarchitecture::SiFiveU7,
            _ => Microarchitecture::Unknown,
        };

        (vendor, uarch)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;
    use testing::capture_warnings;

    use super::*;

    assert_impl_all!(KnownVendorDecoder: Decoder, Send, Sync);

    #[test]
    fn known_vendors() {
        let decoder = KnownVendorDecoder;

        assert_eq!(
            decoder.decode(RawIdentifiers::new(0x489, 0, 0)).0,
            Vendor::SiFive
        );
        assert_eq!(
            decoder.decode(RawIdentifiers::new(0x5b7, 0, 0)).0,
            Vendor::THead
        );
        assert_eq!(
            decoder.decode(RawIdentifiers::new(0x31e, 0, 0)).0,
            Vendor::Andes
        );
    }

    #[test]
    fn sifive_u7_by_arch_id() {
        let (vendor, uarch) =
            KnownVendorDecoder.decode(RawIdentifiers::new(0x489, 0x8000_0000_0000_0007, 0x421_0427));

        assert_eq!(vendor, Vendor::SiFive);
        assert_eq!(uarch, Microarchitecture::SiFiveU7);
    }

    #[test]
    fn arch_id_only_counts_for_matching_vendor() {
        // Same architecture ID under a different vendor means something else entirely.
        let (vendor, uarch) =
            KnownVendorDecoder.decode(RawIdentifiers::new(0x5b7, 0x8000_0000_0000_0007, 0));

        assert_eq!(vendor, Vendor::THead);
        assert_eq!(uarch, Microarchitecture::Unknown);
    }

    #[test]
    fn unknown_vendor_warns() {
        let ((vendor, uarch), warnings) =
            capture_warnings(|| KnownVendorDecoder.decode(RawIdentifiers::new(0x123, 5, 6)));

        assert_eq!(vendor, Vendor::Unknown);
        assert_eq!(uarch, Microarchitecture::Unknown);

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message(), "unknown vendor ID");
        assert_eq!(warnings[0].field("vendor_id"), Some("291"));
    }

    #[test]
    fn all_zero_identifiers_are_unknown() {
        let (vendor, uarch) = KnownVendorDecoder.decode(RawIdentifiers::default());

        assert_eq!(vendor, Vendor::Unknown);
        assert_eq!(uarch, Microarchitecture::Unknown);
    }
}
