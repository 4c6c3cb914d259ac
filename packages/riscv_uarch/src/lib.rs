#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Identifies the vendor and microarchitecture of individual RISC-V processors.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! On Linux 6.4 and newer, the kernel exposes the `riscv_hwprobe` system call, which reports the
//! `mvendorid`, `marchid` and `mimpid` machine registers of any processor in the system. This
//! package issues that query for one processor at a time and decodes the returned numbers into a
//! [`Vendor`] and a [`Microarchitecture`].
//!
//! # Best-effort identification
//!
//! Identification never fails from the caller's point of view. The caller initializes the outputs
//! (typically to the `Unknown` variants) and [`identify()`] overwrites them only if the kernel
//! answered the query. Allocation failures and kernel errors are reported as `tracing` warnings
//! and leave the outputs untouched.
//!
//! ```rust
//! use riscv_uarch::{Microarchitecture, Vendor, identify};
//!
//! let mut vendor = Vendor::Unknown;
//! let mut uarch = Microarchitecture::Unknown;
//!
//! identify(0, &mut vendor, &mut uarch);
//!
//! println!("Processor 0 is made by {vendor} with microarchitecture {uarch}");
//! ```
//!
//! On build targets other than Linux on `riscv64`, the probe facility does not exist and the
//! operation is a no-op, so the call above is safe to make unconditionally.
//!
//! # Inspecting failures
//!
//! If you need to know why identification did not happen, use [`Identifier::try_identify()`],
//! which returns an [`Error`] instead of logging it:
//!
//! ```rust
//! use riscv_uarch::{Error, Identifier};
//!
//! let identifier = Identifier::current();
//!
//! match identifier.try_identify(0) {
//!     Ok((vendor, uarch)) => println!("{vendor} / {uarch}"),
//!     Err(Error::Unsupported) => println!("hardware probe not available on this platform"),
//!     Err(e) => println!("identification failed: {e}"),
//! }
//! ```
//!
//! # Custom decoding
//!
//! The mapping from raw identifiers to symbolic values is pluggable via the [`Decoder`] trait.
//! The default [`KnownVendorDecoder`] recognizes the vendors this package knows about.

mod decoder;
mod error;
mod identifier;
mod identity;
mod pal;
mod primitive_types;

pub use decoder::*;
pub use error::*;
pub use identifier::*;
pub use identity::*;
pub use primitive_types::*;
