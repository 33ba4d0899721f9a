use super::source::RandomSource;

/// RandomSource that replays a fixed script of draws, cycling when it
/// runs out. pins the exact split and merge choices of a shuffle so that
/// a known output can be reproduced without any particular generator.
#[derive(Debug, Clone)]
pub struct Scripted {
    draws: Vec<usize>,
    index: usize,
}

impl From<Vec<usize>> for Scripted {
    fn from(draws: Vec<usize>) -> Self {
        assert!(!draws.is_empty(), "script needs at least one draw");
        Self { draws, index: 0 }
    }
}

impl Scripted {
    /// how many draws have been consumed so far
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl RandomSource for Scripted {
    fn next_uniform_int(&mut self, low: usize, high: usize) -> usize {
        let draw = self.draws[self.index % self.draws.len()];
        self.index += 1;
        assert!(
            (low..high).contains(&draw),
            "scripted draw {} outside {}..{}",
            draw,
            low,
            high
        );
        draw
    }
}
