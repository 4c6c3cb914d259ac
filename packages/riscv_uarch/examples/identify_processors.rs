//! Identify the vendor and microarchitecture of the given processors, printing one line each.
//!
//! Set `RUST_LOG=riscv_uarch=debug` to see the raw identifiers reported by the kernel.

use argh::FromArgs;
use riscv_uarch::{Decoder, Identifier, KnownVendorDecoder, ProcessorId};
use tracing_subscriber::EnvFilter;

/// Identify RISC-V processors via the Linux hardware probe.
#[derive(FromArgs)]
struct Args {
    /// processor to identify; may be repeated (defaults to processor 0)
    #[argh(option, short = 'p')]
    processor: Vec<ProcessorId>,

    /// also print the raw mvendorid/marchid/mimpid values
    #[argh(switch)]
    raw: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Args = argh::from_env();

    let processors = if args.processor.is_empty() {
        vec![0]
    } else {
        args.processor
    };

    let identifier = Identifier::current();

    if !identifier.is_probe_supported() {
        println!("The hardware probe is not available on this build target");
        return;
    }

    for processor in processors {
        // One query per processor; the raw values and the decoded names come from the same answer.
        match identifier.raw_identifiers(processor) {
            Ok(ids) => {
                let (vendor, uarch) = KnownVendorDecoder.decode(ids);
                println!("Processor {processor}: {vendor} / {uarch}");

                if args.raw {
                    println!(
                        "  mvendorid {:#x}, marchid {:#x}, mimpid {:#x}",
                        ids.vendor_id(),
                        ids.arch_id(),
                        ids.imp_id()
                    );
                }
            }
            Err(e) => println!("Processor {processor}: identification failed: {e}"),
        }
    }
}
