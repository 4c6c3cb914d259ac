use tracing::{trace, warn};

use crate::pal::{Platform, PlatformFacade};
use crate::{
    Decoder, Error, KnownVendorDecoder, Microarchitecture, ProcessorId, RawIdentifiers, Result,
    Vendor,
};

/// Identifies the vendor and microarchitecture of individual processors.
///
/// Whether the hardware probe is used at all is decided by the build target: on Linux targeting
/// `riscv64` the kernel is queried, everywhere else every identification is a no-op. Use
/// [`is_probe_supported()`][Self::is_probe_supported] to find out which one you got.
///
/// Every call is independent: nothing is cached and no state is shared between calls, so the
/// same identifier can be used from any number of threads at the same time.
///
/// # Example
///
/// ```
/// use riscv_uarch::{Identifier, Microarchitecture, Vendor};
///
/// let identifier = Identifier::current();
///
/// let mut vendor = Vendor::Unknown;
/// let mut uarch = Microarchitecture::Unknown;
/// identifier.identify(0, &mut vendor, &mut uarch);
///
/// if !identifier.is_probe_supported() {
///     // Nothing was touched.
///     assert_eq!(vendor, Vendor::Unknown);
///     assert_eq!(uarch, Microarchitecture::Unknown);
/// }
/// ```
#[derive(Debug)]
pub struct Identifier<D = KnownVendorDecoder> {
    platform: PlatformFacade,
    decoder: D,
}

impl Identifier {
    /// Creates an identifier for the current build target, using the default decoder.
    #[cfg_attr(test, mutants::skip)] // Trivial layer, we only test the underlying logic.
    #[must_use]
    pub fn current() -> Self {
        Self::with_decoder(KnownVendorDecoder)
    }
}

impl Default for Identifier {
    #[cfg_attr(test, mutants::skip)] // Trivial layer, we only test the underlying logic.
    fn default() -> Self {
        Self::current()
    }
}

impl<D: Decoder> Identifier<D> {
    /// Creates an identifier for the current build target that decodes raw identifiers with
    /// a custom decoder.
    #[must_use]
    pub fn with_decoder(decoder: D) -> Self {
        Self::new(PlatformFacade::target(), decoder)
    }

    pub(crate) fn new(platform: PlatformFacade, decoder: D) -> Self {
        Self { platform, decoder }
    }

    /// Whether identification queries the operating system at all on this build target.
    ///
    /// If this returns `false`, [`identify()`][Self::identify] never changes its outputs.
    #[must_use]
    pub fn is_probe_supported(&self) -> bool {
        self.platform.is_probe_supported()
    }

    /// Identifies one processor, overwriting `vendor` and `uarch` only if the operating system
    /// answered the query.
    ///
    /// This never fails. If the query could not be made or was rejected, a warning is logged and
    /// both outputs keep the values the caller put there. On build targets without the hardware
    /// probe, the outputs are left untouched without any logging.
    ///
    /// Keys the operating system declined to report are decoded as zero, so a partial answer
    /// still overwrites both outputs.
    pub fn identify(
        &self,
        processor: ProcessorId,
        vendor: &mut Vendor,
        uarch: &mut Microarchitecture,
    ) {
        match self.try_identify(processor) {
            Ok((decoded_vendor, decoded_uarch)) => {
                *vendor = decoded_vendor;
                *uarch = decoded_uarch;
            }
            Err(Error::Unsupported) => {
                trace!(processor, "processor identification skipped");
            }
            Err(error) => {
                warn!(
                    processor,
                    code = error.os_error_code(),
                    %error,
                    "failed to identify processor"
                );
            }
        }
    }

    /// Identifies one processor, returning the reason if identification did not happen.
    ///
    /// # Errors
    ///
    /// * [`Error::Unsupported`] on build targets without the hardware probe.
    /// * [`Error::AffinityAllocation`] if the affinity mask for the query could not be allocated.
    /// * [`Error::ProbeQuery`] if the operating system rejected the query.
    pub fn try_identify(&self, processor: ProcessorId) -> Result<(Vendor, Microarchitecture)> {
        let identifiers = self.raw_identifiers(processor)?;

        Ok(self.decoder.decode(identifiers))
    }

    /// Reads the raw identifying registers of one processor without decoding them.
    ///
    /// Registers the operating system did not report are zero.
    ///
    /// # Errors
    ///
    /// Same as [`try_identify()`][Self::try_identify].
    pub fn raw_identifiers(&self, processor: ProcessorId) -> Result<RawIdentifiers> {
        self.platform.read_identifiers(processor)
    }
}

/// Identifies one processor using the default decoder, overwriting `vendor` and `uarch` only if
/// the operating system answered the query.
///
/// This is a shorthand for [`Identifier::current()`] followed by [`Identifier::identify()`].
///
/// # Example
///
/// ```
/// use riscv_uarch::{Microarchitecture, Vendor, identify};
///
/// let mut vendor = Vendor::Unknown;
/// let mut uarch = Microarchitecture::Unknown;
///
/// identify(0, &mut vendor, &mut uarch);
/// ```
#[cfg_attr(test, mutants::skip)] // Trivial layer, we only test the underlying logic.
pub fn identify(processor: ProcessorId, vendor: &mut Vendor, uarch: &mut Microarchitecture) {
    Identifier::current().identify(processor, vendor, uarch);
}
