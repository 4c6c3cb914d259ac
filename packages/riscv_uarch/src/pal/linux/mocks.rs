//! Canned kernel behaviors for tests that exercise the Linux platform on top of mock bindings.

use std::collections::TryReserveError;
use std::io;

use crate::pal::linux::{AffinityDescriptor, HwProbePair, KEY_UNSUPPORTED, MockBindings};

/// The kernel answers every query. `None` marks a key as unsupported, the way the kernel does it.
pub(crate) fn kernel_answering(answers: [Option<u64>; 3]) -> MockBindings {
    let mut bindings = MockBindings::new();

    bindings
        .expect_alloc_cpu_set()
        .returning(AffinityDescriptor::for_processor);

    bindings
        .expect_riscv_hwprobe()
        .returning(move |pairs, _, _| {
            answer(pairs, answers);
            Ok(())
        });

    bindings
}

/// The kernel rejects every query with the given OS error code.
pub(crate) fn kernel_failing(code: i32) -> MockBindings {
    let mut bindings = MockBindings::new();

    bindings
        .expect_alloc_cpu_set()
        .returning(AffinityDescriptor::for_processor);

    bindings
        .expect_riscv_hwprobe()
        .returning(move |_, _, _| Err(io::Error::from_raw_os_error(code)));

    bindings
}

/// The affinity mask can never be allocated. The kernel must not be called.
pub(crate) fn allocation_failing() -> MockBindings {
    let mut bindings = MockBindings::new();

    bindings
        .expect_alloc_cpu_set()
        .returning(|_| Err(capacity_overflow()));

    bindings.expect_riscv_hwprobe().never();

    bindings
}

/// Fills in the kernel's side of the pairs.
pub(crate) fn answer(pairs: &mut [HwProbePair], answers: [Option<u64>; 3]) {
    for (pair, answer) in pairs.iter_mut().zip(answers) {
        match answer {
            Some(value) => pair.value = value,
            None => {
                pair.key = KEY_UNSUPPORTED;
                pair.value = 0;
            }
        }
    }
}

pub(crate) fn capacity_overflow() -> TryReserveError {
    Vec::<u64>::new()
        .try_reserve_exact(usize::MAX)
        .expect_err("reserving usize::MAX elements of u64 always overflows")
}
