/// Alternates the audible peak between the 2nd and 3rd OUT-peak across all
/// cue-bearing trials. The toggle is global across run history: block
/// boundaries and stops never reset it, only process restart does.
#[derive(Debug, Clone, Default)]
pub struct PeakAlternator {
    use_third: bool,
}

impl PeakAlternator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the toggle and returns the cue slot for the next trial.
    pub fn next(&mut self) -> u8 {
        self.use_third = !self.use_third;
        if self.use_third { 3 } else { 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_alternates() {
        let mut alt = PeakAlternator::new();
        let slots: Vec<u8> = (0..6).map(|_| alt.next()).collect();
        assert_eq!(slots, vec![3, 2, 3, 2, 3, 2]);
    }
}
