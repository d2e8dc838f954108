use cards_core::LayoutDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    Previous,
    Next,
}

/// Screen side of an affordance or arrow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualSide {
    Left,
    Right,
}

impl SwipeIntent {
    /// Maps a visual side to reading order: in RTL the left side leads forward.
    pub fn from_side(side: VisualSide, direction: LayoutDirection) -> Self {
        match (side, direction) {
            (VisualSide::Left, LayoutDirection::Rtl) => SwipeIntent::Next,
            (VisualSide::Right, LayoutDirection::Rtl) => SwipeIntent::Previous,
            (VisualSide::Left, LayoutDirection::Ltr) => SwipeIntent::Previous,
            (VisualSide::Right, LayoutDirection::Ltr) => SwipeIntent::Next,
        }
    }

    pub fn side(self, direction: LayoutDirection) -> VisualSide {
        match (self, direction) {
            (SwipeIntent::Next, LayoutDirection::Rtl) => VisualSide::Left,
            (SwipeIntent::Previous, LayoutDirection::Rtl) => VisualSide::Right,
            (SwipeIntent::Previous, LayoutDirection::Ltr) => VisualSide::Left,
            (SwipeIntent::Next, LayoutDirection::Ltr) => VisualSide::Right,
        }
    }
}

/// `delta` is `start - end`; positive means the pointer moved leftwards.
pub fn resolve_swipe(
    delta: i32,
    direction: LayoutDirection,
    threshold: u32,
) -> Option<SwipeIntent> {
    if delta.unsigned_abs() <= threshold {
        return None;
    }
    let leftwards = delta > 0;
    Some(match (direction, leftwards) {
        (LayoutDirection::Rtl, false) => SwipeIntent::Next,
        (LayoutDirection::Rtl, true) => SwipeIntent::Previous,
        (LayoutDirection::Ltr, true) => SwipeIntent::Next,
        (LayoutDirection::Ltr, false) => SwipeIntent::Previous,
    })
}

/// Horizontal coordinates of one press-drag-release sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeTracker {
    start: Option<i32>,
    end: Option<i32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: i32) {
        self.end = None;
        self.start = Some(x);
    }

    pub fn update(&mut self, x: i32) {
        if self.start.is_some() {
            self.end = Some(x);
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    pub fn start(&self) -> Option<i32> {
        self.start
    }

    pub fn end(&self) -> Option<i32> {
        self.end
    }

    pub fn finish(&mut self, direction: LayoutDirection, threshold: u32) -> Option<SwipeIntent> {
        let start = self.start.take();
        let end = self.end.take();
        let (start, end) = (start?, end?);
        resolve_swipe(start.saturating_sub(end), direction, threshold)
    }
}
