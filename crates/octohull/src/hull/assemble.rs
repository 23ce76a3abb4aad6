//! Final stack scan over the stairs sequence.
//!
//! The input is already in counter-clockwise order, so a single left-turn-only
//! pass removes the stragglers the stairs filter kept. Each step pops at most one
//! point; a rejected step retries the same candidate against the new top.

use super::orient::left_turn;
use super::point::{Coord, Point};

/// Scan `stairs` (at least 3 points, not all collinear) into a counter-clockwise hull.
///
/// The first point is appended again as a sentinel so the closing edge is checked
/// like any other step; the sentinel is trimmed before returning.
pub fn assemble<T: Coord>(mut stairs: Vec<Point<T>>) -> Vec<Point<T>> {
    debug_assert!(stairs.len() >= 3);
    let Some(&s0) = stairs.first() else {
        return stairs;
    };
    stairs.push(s0);

    let mut stack: Vec<Point<T>> = Vec::with_capacity(stairs.len());
    stack.push(s0);
    let mut i = 1;
    while i < stairs.len() {
        let current = stairs[i];
        let top = stack[stack.len() - 1];
        if current == top {
            i += 1;
        } else if stack.len() == 1 {
            stack.push(current);
            i += 1;
        } else {
            stack.pop();
            let second = stack[stack.len() - 1];
            if left_turn(&second, &top, &current) {
                stack.push(top);
                stack.push(current);
                i += 1;
            }
        }
    }
    // sentinel copy of s0
    stack.pop();
    stack
}
