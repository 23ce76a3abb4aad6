//! Extreme octagon and per-quadrant stairs.
//!
//! Purpose
//! - Reduce the input to a short candidate sequence, already in counter-clockwise
//!   order, that contains every hull vertex plus a few stragglers.
//!
//! Model
//! - One linear pass finds eight extreme points (left/right/top/bottom, each with
//!   a lower/upper or left/right tie-break). They span an octagon.
//! - Points strictly outside one of the octagon's diagonal edges fall into one of
//!   four quadrant buckets; everything else is interior and dropped.
//! - Each bucket is sorted along its quadrant and filtered greedily into a
//!   monotone staircase between the two anchors of that edge.
//!
//! Code cross-refs: `orient::left_turn`, `assemble::assemble`.

use std::cmp::Ordering;

use super::orient::left_turn;
use super::point::{coord_cmp, Coord, Point};

/// The eight extreme points of a non-empty point set.
///
/// Pairs collapse to the same point when the extreme coordinate is not tied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremes<T: Coord> {
    pub left_upper: Point<T>,
    pub left_lower: Point<T>,
    pub right_upper: Point<T>,
    pub right_lower: Point<T>,
    pub top_left: Point<T>,
    pub top_right: Point<T>,
    pub bottom_left: Point<T>,
    pub bottom_right: Point<T>,
}

impl<T: Coord> Extremes<T> {
    /// Single pass over `points`. Returns `None` for an empty slice.
    pub fn scan(points: &[Point<T>]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut e = Extremes {
            left_upper: first,
            left_lower: first,
            right_upper: first,
            right_lower: first,
            top_left: first,
            top_right: first,
            bottom_left: first,
            bottom_right: first,
        };
        for &p in rest {
            // min x; ties split on y
            if p.x < e.left_lower.x {
                e.left_lower = p;
                e.left_upper = p;
            } else if p.x == e.left_lower.x {
                if p.y < e.left_lower.y {
                    e.left_lower = p;
                }
                if p.y > e.left_upper.y {
                    e.left_upper = p;
                }
            }
            // max x
            if p.x > e.right_lower.x {
                e.right_lower = p;
                e.right_upper = p;
            } else if p.x == e.right_lower.x {
                if p.y < e.right_lower.y {
                    e.right_lower = p;
                }
                if p.y > e.right_upper.y {
                    e.right_upper = p;
                }
            }
            // max y; ties split on x
            if p.y > e.top_left.y {
                e.top_left = p;
                e.top_right = p;
            } else if p.y == e.top_left.y {
                if p.x < e.top_left.x {
                    e.top_left = p;
                }
                if p.x > e.top_right.x {
                    e.top_right = p;
                }
            }
            // min y
            if p.y < e.bottom_left.y {
                e.bottom_left = p;
                e.bottom_right = p;
            } else if p.y == e.bottom_left.y {
                if p.x < e.bottom_left.x {
                    e.bottom_left = p;
                }
                if p.x > e.bottom_right.x {
                    e.bottom_right = p;
                }
            }
        }
        Some(e)
    }

    /// Whether `p` coincides with one of the eight extremes.
    pub fn contains(&self, p: &Point<T>) -> bool {
        [
            &self.left_upper,
            &self.left_lower,
            &self.right_upper,
            &self.right_lower,
            &self.top_left,
            &self.top_right,
            &self.bottom_left,
            &self.bottom_right,
        ]
        .into_iter()
        .any(|e| e == p)
    }
}

/// Open regions outside the octagon's four diagonal edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    SouthWest,
    SouthEast,
    NorthEast,
    NorthWest,
}

impl Quadrant {
    /// Counter-clockwise traversal order, starting below the left edge.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::SouthWest,
        Quadrant::SouthEast,
        Quadrant::NorthEast,
        Quadrant::NorthWest,
    ];

    /// Whether `p` lies in this quadrant's open box beyond the octagon.
    pub fn in_box<T: Coord>(self, e: &Extremes<T>, p: &Point<T>) -> bool {
        match self {
            Quadrant::SouthEast => p.x > e.bottom_right.x && p.y < e.right_lower.y,
            Quadrant::SouthWest => p.x < e.bottom_left.x && p.y < e.left_lower.y,
            Quadrant::NorthEast => p.x > e.top_right.x && p.y > e.right_upper.y,
            Quadrant::NorthWest => p.x < e.top_left.x && p.y > e.left_upper.y,
        }
    }

    /// Bucket for `p`: the first quadrant, checked SE, SW, NE, NW, whose box holds
    /// `p` and whose anchor edge `p` lies strictly outside of.
    ///
    /// Boxes of opposite quadrants can overlap on skewed inputs, so the box alone
    /// does not decide; a point in the wrong box would be dropped by that
    /// quadrant's edge test.
    pub fn classify<T: Coord>(e: &Extremes<T>, p: &Point<T>) -> Option<Quadrant> {
        const CHECK_ORDER: [Quadrant; 4] = [
            Quadrant::SouthEast,
            Quadrant::SouthWest,
            Quadrant::NorthEast,
            Quadrant::NorthWest,
        ];
        CHECK_ORDER.into_iter().find(|q| {
            let (start, end) = q.anchors(e);
            q.in_box(e, p) && left_turn(&start, p, &end)
        })
    }

    /// `(start, end)` anchors of the octagon edge this quadrant lies beyond.
    pub fn anchors<T: Coord>(self, e: &Extremes<T>) -> (Point<T>, Point<T>) {
        match self {
            Quadrant::SouthWest => (e.left_lower, e.bottom_left),
            Quadrant::SouthEast => (e.bottom_right, e.right_lower),
            Quadrant::NorthEast => (e.right_upper, e.top_right),
            Quadrant::NorthWest => (e.top_left, e.left_upper),
        }
    }

    /// Sort key: SW by ascending x, SE ascending y, NE descending x, NW descending y.
    pub fn order<T: Coord>(self, a: &Point<T>, b: &Point<T>) -> Ordering {
        match self {
            Quadrant::SouthWest => coord_cmp(a.x, b.x),
            Quadrant::SouthEast => coord_cmp(a.y, b.y),
            Quadrant::NorthEast => coord_cmp(b.x, a.x),
            Quadrant::NorthWest => coord_cmp(b.y, a.y),
        }
    }

    /// Whether `candidate` strictly moves past `last` towards the end anchor.
    pub fn improves<T: Coord>(self, last: &Point<T>, candidate: &Point<T>) -> bool {
        match self {
            Quadrant::SouthWest => candidate.y < last.y,
            Quadrant::SouthEast => candidate.x > last.x,
            Quadrant::NorthEast => candidate.y > last.y,
            Quadrant::NorthWest => candidate.x < last.x,
        }
    }

    /// Greedy one-pass staircase over an unsorted bucket.
    ///
    /// Keeps a candidate when it improves on the last kept point and lies strictly
    /// outside the anchor edge. Over-approximates: a kept point is never revisited.
    pub fn stairs<T: Coord>(self, e: &Extremes<T>, mut bucket: Vec<Point<T>>) -> Vec<Point<T>> {
        // stable, so equal keys keep input order
        bucket.sort_by(|a, b| self.order(a, b));
        let (start, end) = self.anchors(e);
        let mut last = start;
        bucket.retain(|p| {
            let keep = self.improves(&last, p) && left_turn(&start, p, &end);
            if keep {
                last = *p;
            }
            keep
        });
        bucket
    }
}

#[inline]
fn push_distinct<T: Coord>(seq: &mut Vec<Point<T>>, p: Point<T>) {
    if seq.last() != Some(&p) {
        seq.push(p);
    }
}

/// Candidate sequence for the hull assembler, counter-clockwise from `left_upper`.
///
/// Layout: left edge, SW stairs, bottom edge, SE stairs, right edge, NE stairs,
/// top edge, NW stairs. An anchor equal to the point emitted just before it is
/// skipped, and a closing duplicate of the first point is dropped.
pub fn build_stairs<T: Coord>(points: &[Point<T>]) -> Vec<Point<T>> {
    let Some(e) = Extremes::scan(points) else {
        return Vec::new();
    };

    let mut buckets: [Vec<Point<T>>; 4] = Default::default();
    for p in points {
        if e.contains(p) {
            continue;
        }
        if let Some(q) = Quadrant::classify(&e, p) {
            buckets[q as usize].push(*p);
        }
    }

    let edges = [
        (e.left_upper, e.left_lower),
        (e.bottom_left, e.bottom_right),
        (e.right_lower, e.right_upper),
        (e.top_right, e.top_left),
    ];
    let mut seq = Vec::with_capacity(8 + buckets.iter().map(Vec::len).sum::<usize>());
    seq.push(e.left_upper);
    for ((q, bucket), (a, b)) in Quadrant::ALL.into_iter().zip(buckets).zip(edges) {
        push_distinct(&mut seq, a);
        push_distinct(&mut seq, b);
        if !bucket.is_empty() {
            seq.extend(q.stairs(&e, bucket));
        }
    }
    if seq.len() > 1 && seq.first() == seq.last() {
        seq.pop();
    }
    seq
}
