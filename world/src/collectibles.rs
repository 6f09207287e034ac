//! Collectible field and score tracking owned by the world.

use maze_chase_core::Position;

/// A single collectible placed on the maze pathway.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Collectible {
    position: Position,
    consumed: bool,
}

impl Collectible {
    /// Position the collectible occupies.
    pub(crate) const fn position(&self) -> Position {
        self.position
    }

    /// Whether the collectible has been consumed since the last restart.
    pub(crate) const fn consumed(&self) -> bool {
        self.consumed
    }
}

/// Ordered set of collectibles with consumed state.
///
/// The spawn sequence is fixed at construction; `consume_nearest` flips the
/// consumed flag monotonically and only a full reset reverts it.
#[derive(Clone, Debug)]
pub(crate) struct CollectibleField {
    entries: Vec<Collectible>,
}

impl CollectibleField {
    pub(crate) fn new(points: &[Position]) -> Self {
        Self {
            entries: points
                .iter()
                .map(|&position| Collectible {
                    position,
                    consumed: false,
                })
                .collect(),
        }
    }

    /// Marks the nearest unconsumed collectible within `radius` of `point`
    /// as consumed and returns its position.
    ///
    /// Ties resolve to the earliest entry in spawn order so consumption is
    /// deterministic.
    pub(crate) fn consume_nearest(&mut self, point: Position, radius: f32) -> Option<Position> {
        let mut best: Option<(usize, f32)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.consumed {
                continue;
            }

            let distance = entry.position.distance_to(point);
            if distance > radius {
                continue;
            }

            best = Some(match best {
                None => (index, distance),
                Some(existing) if distance < existing.1 => (index, distance),
                Some(existing) => existing,
            });
        }

        let (index, _) = best?;
        self.entries[index].consumed = true;
        Some(self.entries[index].position)
    }

    /// Count of collectibles that remain unconsumed.
    pub(crate) fn remaining(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.consumed).count()
    }

    /// Restores every collectible to its unconsumed state.
    pub(crate) fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.consumed = false;
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Collectible> {
        self.entries.iter()
    }
}

/// Monotonic score counter driven by collection events.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ScoreTracker {
    value: u32,
}

impl ScoreTracker {
    /// Adds one point and returns the new total.
    pub(crate) fn increment(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    /// Current score total.
    pub(crate) const fn value(&self) -> u32 {
        self.value
    }

    /// Resets the score to zero.
    pub(crate) fn reset(&mut self) {
        self.value = 0;
    }
}
