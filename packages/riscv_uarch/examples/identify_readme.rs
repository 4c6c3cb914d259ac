//! Best-effort identification of the processor the example starts on, as shown in the README.

use riscv_uarch::{Microarchitecture, Vendor, identify};

fn main() {
    let mut vendor = Vendor::Unknown;
    let mut uarch = Microarchitecture::Unknown;

    // Leaves both values untouched if the processor could not be identified.
    identify(0, &mut vendor, &mut uarch);

    println!("Processor 0: vendor {vendor}, microarchitecture {uarch}");
}
