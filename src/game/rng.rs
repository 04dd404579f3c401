//! xorshift32 PRNG used for word selection.
//!
//! Seeded once at start-up (from the hardware RNG on target) and then
//! drawn from repeatedly.

#[derive(Clone, Debug)]
pub struct WordRng {
    state: u32,
}

impl WordRng {
    /// A zero seed would lock xorshift at zero, so it is replaced by 1.
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Value in `0..bound`; returns 0 when `bound` is 0.
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u32() % bound as u32) as usize
    }
}
