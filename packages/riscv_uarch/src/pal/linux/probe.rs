use tracing::debug;

use crate::RawIdentifiers;

/// One key/value pair as exchanged with the kernel (`struct riscv_hwprobe`).
///
/// The kernel overwrites `key` with -1 if it does not recognize the requested key.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct HwProbePair {
    pub(crate) key: i64,
    pub(crate) value: u64,
}

pub(crate) const KEY_UNSUPPORTED: i64 = -1;

/// The identifying keys we ask the kernel about.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ProbeKey {
    /// `RISCV_HWPROBE_KEY_MVENDORID`
    VendorId,

    /// `RISCV_HWPROBE_KEY_MARCHID`
    ArchId,

    /// `RISCV_HWPROBE_KEY_MIMPID`
    ImpId,
}

impl ProbeKey {
    /// Every identification query asks for exactly these keys, in this order.
    pub(crate) const IDENTIFYING: [Self; 3] = [Self::VendorId, Self::ArchId, Self::ImpId];

    pub(crate) const fn raw(self) -> i64 {
        match self {
            Self::VendorId => 0,
            Self::ArchId => 1,
            Self::ImpId => 2,
        }
    }

    pub(crate) fn from_raw(raw: i64) -> Option<Self> {
        Self::IDENTIFYING.into_iter().find(|key| key.raw() == raw)
    }
}

/// The request buffer handed to the kernel, pre-filled with the identifying keys.
pub(crate) fn identification_request() -> [HwProbePair; 3] {
    ProbeKey::IDENTIFYING.map(|key| HwProbePair {
        key: key.raw(),
        value: 0,
    })
}

/// One pair of the kernel's response, interpreted by its own key.
///
/// The kernel answers in the order the keys were requested, but nothing here relies on that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ProbeEntry {
    /// The kernel reported a value for an identifying key.
    Answered { key: ProbeKey, value: u64 },

    /// The kernel did not recognize the key that was requested in this slot.
    Unsupported,

    /// A key that is not one of the identifying keys.
    Unrecognized { key: i64 },
}

impl From<HwProbePair> for ProbeEntry {
    fn from(pair: HwProbePair) -> Self {
        match (pair.key, ProbeKey::from_raw(pair.key)) {
            (_, Some(key)) => Self::Answered {
                key,
                value: pair.value,
            },
            (KEY_UNSUPPORTED, None) => Self::Unsupported,
            (key, None) => Self::Unrecognized { key },
        }
    }
}

/// Interprets every pair of the kernel's response.
pub(crate) fn response_entries(
    response: &[HwProbePair],
) -> impl Iterator<Item = ProbeEntry> + '_ {
    response.iter().copied().map(ProbeEntry::from)
}

/// Collects the answered entries into raw identifiers. Unanswered keys stay at zero.
pub(crate) fn extract_identifiers(entries: impl IntoIterator<Item = ProbeEntry>) -> RawIdentifiers {
    let mut vendor_id = 0;
    let mut arch_id = 0;
    let mut imp_id = 0;

    for entry in entries {
        match entry {
            ProbeEntry::Answered { key, value } => match key {
                ProbeKey::VendorId => vendor_id = value,
                ProbeKey::ArchId => arch_id = value,
                ProbeKey::ImpId => imp_id = value,
            },
            ProbeEntry::Unsupported => {}
            ProbeEntry::Unrecognized { key } => {
                // Not something the kernel is documented to do. We do not know what the value
                // means, so we do not use it.
                debug!(key, "hardware probe answered with an unrecognized key");
            }
        }
    }

    RawIdentifiers::new(vendor_id, arch_id, imp_id)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::mem::offset_of;

    use static_assertions::const_assert_eq;

    use super::*;

    // Must match the kernel's struct riscv_hwprobe exactly.
    const_assert_eq!(size_of::<HwProbePair>(), 16);
    const_assert_eq!(offset_of!(HwProbePair, key), 0);
    const_assert_eq!(offset_of!(HwProbePair, value), 8);

    fn answered(key: ProbeKey, value: u64) -> HwProbePair {
        HwProbePair {
            key: key.raw(),
            value,
        }
    }

    fn unsupported() -> HwProbePair {
        HwProbePair {
            key: KEY_UNSUPPORTED,
            value: 0,
        }
    }

    #[test]
    fn request_has_identifying_keys_in_order() {
        let request = identification_request();

        let keys = request.iter().map(|pair| pair.key).collect::<Vec<_>>();
        assert_eq!(keys, vec![0, 1, 2]);
        assert!(request.iter().all(|pair| pair.value == 0));
    }

    #[test]
    fn all_keys_answered() {
        let response = [
            answered(ProbeKey::VendorId, 0x489),
            answered(ProbeKey::ArchId, 0x8000_0000_0000_0007),
            answered(ProbeKey::ImpId, 0x421_0427),
        ];

        let identifiers = extract_identifiers(response_entries(&response));

        assert_eq!(
            identifiers,
            RawIdentifiers::new(0x489, 0x8000_0000_0000_0007, 0x421_0427)
        );
    }

    #[test]
    fn unsupported_keys_default_to_zero() {
        let response = [
            answered(ProbeKey::VendorId, 0x5b7),
            unsupported(),
            answered(ProbeKey::ImpId, 0),
        ];

        let entries = response_entries(&response).collect::<Vec<_>>();
        assert_eq!(
            entries,
            vec![
                ProbeEntry::Answered {
                    key: ProbeKey::VendorId,
                    value: 0x5b7
                },
                ProbeEntry::Unsupported,
                ProbeEntry::Answered {
                    key: ProbeKey::ImpId,
                    value: 0
                },
            ]
        );

        assert_eq!(
            extract_identifiers(entries),
            RawIdentifiers::new(0x5b7, 0, 0)
        );
    }

    #[test]
    fn nothing_answered() {
        let response = [unsupported(), unsupported(), unsupported()];

        assert_eq!(
            extract_identifiers(response_entries(&response)),
            RawIdentifiers::default()
        );
    }

    #[test]
    fn unrecognized_key_is_ignored() {
        // Slot for the vendor ID came back with some other key.
        let response = [
            HwProbePair {
                key: 42,
                value: 0xdead,
            },
            answered(ProbeKey::ArchId, 9),
            answered(ProbeKey::ImpId, 10),
        ];

        assert_eq!(
            extract_identifiers(response_entries(&response)),
            RawIdentifiers::new(0, 9, 10)
        );
    }

    #[test]
    fn answers_matched_by_key_not_slot() {
        // The implementation ID came back in the slot where the vendor ID was requested.
        let response = [
            answered(ProbeKey::ImpId, 77),
            answered(ProbeKey::ArchId, 5),
            unsupported(),
        ];

        assert_eq!(
            extract_identifiers(response_entries(&response)),
            RawIdentifiers::new(0, 5, 77)
        );
    }

    #[test]
    fn entries_classified_by_returned_key() {
        let response = [
            answered(ProbeKey::ArchId, 5),
            unsupported(),
            HwProbePair { key: 42, value: 1 },
        ];

        assert_eq!(
            response_entries(&response).collect::<Vec<_>>(),
            vec![
                ProbeEntry::Answered {
                    key: ProbeKey::ArchId,
                    value: 5
                },
                ProbeEntry::Unsupported,
                ProbeEntry::Unrecognized { key: 42 },
            ]
        );
    }

    #[test]
    fn raw_key_round_trip() {
        for key in ProbeKey::IDENTIFYING {
            assert_eq!(ProbeKey::from_raw(key.raw()), Some(key));
        }

        assert_eq!(ProbeKey::from_raw(KEY_UNSUPPORTED), None);
        assert_eq!(ProbeKey::from_raw(3), None);
    }
}
