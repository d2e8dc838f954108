//! Prev/next affordances and pagination dots as plain data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordance {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub current: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub previous: Affordance,
    pub next: Affordance,
    pub indicators: Vec<Indicator>,
}

pub const PREVIOUS_LABEL: &str = "previous card";
pub const NEXT_LABEL: &str = "next card";

/// Builds the controls for `(current, total, transitioning)`.
///
/// The buttons stop at the ends even though keyboard and swipe navigation
/// wrap around. Dots are omitted when there is nothing to paginate.
pub fn controls(current: usize, total: usize, transitioning: bool) -> Controls {
    let previous = Affordance {
        enabled: current != 0 && !transitioning,
    };
    let next = Affordance {
        enabled: current.saturating_add(1) != total && total > 0 && !transitioning,
    };
    let indicators = if total > 1 {
        (0..total)
            .map(|index| Indicator {
                index,
                current: index == current,
                enabled: !transitioning,
            })
            .collect()
    } else {
        Vec::new()
    };

    Controls {
        previous,
        next,
        indicators,
    }
}
