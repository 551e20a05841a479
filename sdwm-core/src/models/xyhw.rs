//! Window and monitor rectangles.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};
use std::cmp;

/// Position and size of a rectangle. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Copy)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, h, w }
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }
    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }

    pub fn set_x(&mut self, value: i32) {
        self.x = value;
    }
    pub fn set_y(&mut self, value: i32) {
        self.y = value;
    }
    pub fn set_h(&mut self, value: i32) {
        self.h = value;
    }
    pub fn set_w(&mut self, value: i32) {
        self.w = value;
    }

    /// First column to the right of the rectangle.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// First row below the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[must_use]
    pub const fn area(&self) -> i32 {
        self.w * self.h
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.right() && self.y <= y && y < self.bottom()
    }

    /// Area shared by both rectangles, zero when they do not overlap.
    #[must_use]
    pub fn intersection_area(&self, other: &Self) -> i32 {
        let width = cmp::min(self.right(), other.right()) - cmp::max(self.x, other.x);
        let height = cmp::min(self.bottom(), other.bottom()) - cmp::max(self.y, other.y);
        cmp::max(0, width) * cmp::max(0, height)
    }

    /// Returns true when the two rectangles share any area.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.intersection_area(other) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_of_disjoint_rectangles_is_empty() {
        let a = Xyhw::new(0, 0, 100, 100);
        let b = Xyhw::new(100, 0, 100, 100);
        assert_eq!(a.intersection_area(&b), 0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn intersection_of_partially_covered_rectangle() {
        let a = Xyhw::new(0, 0, 100, 100);
        let b = Xyhw::new(50, 25, 100, 100);
        assert_eq!(a.intersection_area(&b), 50 * 75);
    }

    #[test]
    fn contains_point_excludes_far_edges() {
        let a = Xyhw::new(10, 10, 10, 10);
        assert!(a.contains_point(10, 10));
        assert!(a.contains_point(19, 19));
        assert!(!a.contains_point(20, 15));
    }
}
