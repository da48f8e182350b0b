//! Replayable level source.

use tapline_gesture::InputSource;

/// Plays back a recorded level sequence, one sample per detection tick.
///
/// Once the recording is exhausted the source keeps reporting an inactive
/// level, the same way a released physical button would read.
#[derive(Debug, Clone)]
pub struct Replay {
    levels: Vec<bool>,
    position: usize,
}

impl Replay {
    #[must_use]
    pub fn new(levels: &[bool]) -> Self {
        Self {
            levels: levels.to_vec(),
            position: 0,
        }
    }

    /// Parse a compact script of `0` and `1` characters, one per tick.
    /// Whitespace is ignored so scripts can be grouped by gesture.
    ///
    /// # Panics
    ///
    /// Panics on any other character.
    #[must_use]
    pub fn from_script(script: &str) -> Self {
        let levels = script
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '0' => false,
                '1' => true,
                other => panic!("unsupported level in script: {other:?}"),
            })
            .collect();
        Self {
            levels,
            position: 0,
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.levels.len()
    }
}

impl InputSource for Replay {
    fn is_active(&mut self) -> bool {
        let level = self.levels.get(self.position).copied().unwrap_or(false);
        self.position += 1;
        level
    }
}
