// Math utilities for frame and grid arithmetic

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp a frame index into a sequence of `len` frames.
///
/// Returns 0 for an empty sequence.
pub fn clamp_frame(index: usize, len: usize) -> usize {
    clamp(index, 0, len.saturating_sub(1))
}

/// Number of whole cells of size `cell` that fit in `extent`
pub fn whole_cells(extent: u32, cell: u32) -> u32 {
    if cell == 0 {
        0
    } else {
        extent / cell
    }
}
