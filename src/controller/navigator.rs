//! Slide navigation state machine
//!
//! States are pane indices `0..count`. Every transition goes through
//! [`SlideNavigator::go_to`], which clamps its argument, so out-of-range
//! requests land on the nearest valid pane.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideNavigator {
    count: usize,
    current: usize,
}

impl SlideNavigator {
    pub fn new(count: usize) -> Self {
        SlideNavigator { count, current: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Nearest valid pane to `index`, or `None` when there are no panes
    pub fn clamp(&self, index: i64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let last = (self.count - 1) as i64;
        Some(index.clamp(0, last) as usize)
    }

    /// Whether `index` names an existing pane without clamping
    pub fn in_range(&self, index: i64) -> bool {
        index >= 0 && (index as u64) < self.count as u64
    }

    /// Move to the clamped pane and return it
    pub fn go_to(&mut self, index: i64) -> Option<usize> {
        let target = self.clamp(index)?;
        self.current = target;
        Some(target)
    }

    pub fn next_index(&self) -> i64 {
        self.current as i64 + 1
    }

    pub fn prev_index(&self) -> i64 {
        self.current as i64 - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamps_both_ends() {
        let mut nav = SlideNavigator::new(4);
        assert_eq!(nav.go_to(-3), Some(0));
        assert_eq!(nav.go_to(2), Some(2));
        assert_eq!(nav.go_to(99), Some(3));
        assert_eq!(nav.current(), 3);
        assert_eq!(nav.next_index(), 4);
        assert_eq!(nav.go_to(nav.next_index()), Some(3));
    }

    #[test]
    fn test_no_panes() {
        let mut nav = SlideNavigator::new(0);
        assert_eq!(nav.go_to(0), None);
        assert!(!nav.in_range(0));
        assert_eq!(nav.current(), 0);
    }

    proptest! {
        #[test]
        fn go_to_always_lands_in_range(count in 1usize..20, index in any::<i64>()) {
            let mut nav = SlideNavigator::new(count);
            let landed = nav.go_to(index).unwrap();
            prop_assert!(landed < count);
            if index < 0 {
                prop_assert_eq!(landed, 0);
            } else if index as u64 >= count as u64 {
                prop_assert_eq!(landed, count - 1);
            } else {
                prop_assert_eq!(landed as i64, index);
            }
        }
    }
}
