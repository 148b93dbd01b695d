use crate::cpu::{MAX_PROGRAM_ADDRESS, MIN_PROGRAM_ADDRESS};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MemoryUsage {
    Read,
    Write,
    Execute,
}

/// Checks that `[base_address, base_address + size_in_bytes)` is addressable for `usage`.
///
/// - reads may target the whole address space, font table included
/// - writes and execution are restricted to program space
pub fn is_valid_memory_range(base_address: u16, size_in_bytes: u16, usage: MemoryUsage) -> bool {
    if size_in_bytes == 0 {
        return false;
    }

    let Some(end_address) = base_address.checked_add(size_in_bytes - 1) else {
        return false;
    };

    match usage {
        MemoryUsage::Read => end_address <= MAX_PROGRAM_ADDRESS,
        MemoryUsage::Write | MemoryUsage::Execute => {
            base_address >= MIN_PROGRAM_ADDRESS && end_address <= MAX_PROGRAM_ADDRESS
        }
    }
}
