/// Direction of a Tab key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    pub fn from_shift(shift: bool) -> Self {
        if shift {
            TabDirection::Backward
        } else {
            TabDirection::Forward
        }
    }
}

/// Keyboard focus containment over a fixed number of focusable controls,
/// collected when the surface is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    len: usize,
}

impl FocusRing {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index to move focus to when the press must wrap around, `None` when
    /// the browser's native tab order applies.
    pub fn wrap(&self, current: Option<usize>, direction: TabDirection) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let last = self.len - 1;
        match (current, direction) {
            (Some(i), TabDirection::Forward) if i >= last => Some(0),
            (Some(0), TabDirection::Backward) => Some(last),
            (None, TabDirection::Forward) => Some(0),
            (None, TabDirection::Backward) => Some(last),
            _ => None,
        }
    }
}
