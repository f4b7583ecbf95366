use crate::forces::PointerProximity;

/// Result of one detection pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightChange {
    Unchanged,
    Changed {
        previous: Option<usize>,
        current: Option<usize>,
    },
}

/// Tracks the single highlighted card, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveHighlight {
    index: Option<usize>,
}

impl ActiveHighlight {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Selects the nearest card when it lies strictly inside `radius`.
    /// Re-selecting the current card reports `Unchanged`.
    pub fn update(&mut self, proximity: &PointerProximity, radius: f32) -> HighlightChange {
        let next = proximity
            .nearest()
            .and_then(|(i, dist)| (dist < radius).then_some(i));
        if next == self.index {
            return HighlightChange::Unchanged;
        }
        let previous = std::mem::replace(&mut self.index, next);
        HighlightChange::Changed {
            previous,
            current: next,
        }
    }

    /// Drops the highlight without a detection pass (used on teardown).
    pub fn clear(&mut self) -> HighlightChange {
        match self.index.take() {
            None => HighlightChange::Unchanged,
            previous => HighlightChange::Changed {
                previous,
                current: None,
            },
        }
    }
}
