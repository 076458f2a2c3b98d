//! Draw sources for weighted-random branching.

/// Source of uniform draws for `Random` nodes.
///
/// Sessions take this as an injected dependency, so hosts can seed
/// reproducible playthroughs and tests can script exact draws.
pub trait Roll {
    /// Draw a value uniformly from `[0, upper)`.
    ///
    /// `upper` is never 0: the engine stalls zero-weight nodes before
    /// rolling.
    fn roll(&mut self, upper: u32) -> u32;
}

/// Default draw source: a SplitMix64 stream reduced modulo the bound.
///
/// Not a crypto generator; branch selection only needs cheap, seedable
/// uniformity.
#[derive(Debug, Clone)]
pub struct SplitMix {
    state: u64,
}

impl SplitMix {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl Default for SplitMix {
    fn default() -> Self {
        Self::new(0x5eed)
    }
}

impl Roll for SplitMix {
    fn roll(&mut self, upper: u32) -> u32 {
        (self.next_u64() % upper as u64) as u32
    }
}
