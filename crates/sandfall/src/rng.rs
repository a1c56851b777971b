//! Random source abstraction for tie-breaks in element rules.
//!
//! Production code passes a seeded `rand` generator; tests pass a scripted
//! source so diagonal choices can be asserted exactly.

/// Random source consulted by element update functions.
pub trait CellRng {
    /// Fair coin, drawn fresh for every call.
    fn coin_flip(&mut self) -> bool;
}

impl<T: ?Sized + rand::Rng> CellRng for T {
    fn coin_flip(&mut self) -> bool {
        self.random()
    }
}

/// Replays a fixed sequence of flips, then repeats the last one.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct ScriptedRng {
    flips: Vec<bool>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(flips: &[bool]) -> Self {
        assert!(!flips.is_empty(), "script needs at least one flip");
        Self {
            flips: flips.to_vec(),
            next: 0,
        }
    }

    pub(crate) fn always(flip: bool) -> Self {
        Self::new(&[flip])
    }

    pub(crate) fn draws(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
impl CellRng for ScriptedRng {
    fn coin_flip(&mut self) -> bool {
        let flip = self.flips[self.next.min(self.flips.len() - 1)];
        self.next += 1;
        flip
    }
}
