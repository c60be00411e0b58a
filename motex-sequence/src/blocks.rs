use motex_core::Preset::{self, *};

/// The four canonical 11-trial block orders used by the operator panel.
/// Each opens with the no-cue `A` trial followed by ten cue-bearing trials.
pub const BLOCK_1: [Preset; 11] = [A, B1, C1, B2, B2, C1, B1, C2, C2, C1, B2];
pub const BLOCK_2: [Preset; 11] = [A, B1, B1, B2, C1, C1, B2, B2, C1, C2, C1];
pub const BLOCK_3: [Preset; 11] = [A, C1, B2, C1, B2, C2, C1, B1, B1, B2, C2];
pub const BLOCK_4: [Preset; 11] = [A, C2, C1, B1, B1, B2, C2, C1, B1, C2, B2];

/// Looks up a standard block by its 1-based number.
pub fn standard(number: usize) -> Option<&'static [Preset]> {
    match number {
        1 => Some(&BLOCK_1),
        2 => Some(&BLOCK_2),
        3 => Some(&BLOCK_3),
        4 => Some(&BLOCK_4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_blocks_shape() {
        for n in 1..=4 {
            let block = standard(n).unwrap();
            assert_eq!(block.len(), 11);
            assert_eq!(block[0], A);
            assert!(block[1..].iter().all(|p| p.descriptor().cue_bearing));
        }
        assert!(standard(0).is_none());
        assert!(standard(5).is_none());
    }
}
