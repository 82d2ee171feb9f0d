// src/presentation/drag.rs

use crate::circuits::Gate;
use crate::widgets::AppDomain;

/// Something the learner can pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragItem {
    /// A gate from the circuit palette.
    Gate(Gate),
    /// An application card from the matching game.
    Application(AppDomain),
}

/// The item being dragged in the current gesture.
///
/// Only valid between drag start and drag end of one gesture; drops read it
/// without consuming it and [`end`](DragSession::end) always clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    current: Option<DragItem>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a gesture, replacing any stale item.
    pub fn start(&mut self, item: DragItem) {
        self.current = Some(item);
    }

    pub fn current(&self) -> Option<DragItem> {
        self.current
    }

    /// The dragged gate, if a gate is being dragged.
    pub fn gate(&self) -> Option<Gate> {
        match self.current {
            Some(DragItem::Gate(gate)) => Some(gate),
            _ => None,
        }
    }

    /// The dragged application card, if one is being dragged.
    pub fn application(&self) -> Option<AppDomain> {
        match self.current {
            Some(DragItem::Application(domain)) => Some(domain),
            _ => None,
        }
    }

    pub fn end(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_specific_accessors() {
        let mut drag = DragSession::new();
        drag.start(DragItem::Gate(Gate::H));
        assert_eq!(drag.gate(), Some(Gate::H));
        assert_eq!(drag.application(), None);

        drag.start(DragItem::Application(AppDomain::Optimization));
        assert_eq!(drag.gate(), None);
        assert_eq!(drag.application(), Some(AppDomain::Optimization));

        drag.end();
        assert_eq!(drag.current(), None);
    }
}
