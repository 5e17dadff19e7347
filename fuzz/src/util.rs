use std::mem;

/// Reinterprets the fuzzer input as `i32` values, ignoring trailing bytes.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(mem::size_of::<i32>())
        .map(|bytes| i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect()
}
