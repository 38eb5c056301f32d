//! 2D coordinate values used as node identities in the editing graph.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::{PnError, PnResult};

/// Node values that carry geometry the graph can edit.
///
/// `split_edge` needs a midpoint and `move_node` needs a translation;
/// rather than silently generalizing those operations, they only exist
/// for node types that implement this trait.
pub trait Coordinate: Sized {
    /// Arithmetic midpoint between `self` and `other`.
    fn midpoint(&self, other: &Self) -> Self;

    /// `self` translated component-wise by `offset`.
    fn translated(&self, offset: &Self) -> Self;
}

/// A 2D point used as a node identity.
///
/// Equality and hashing are **bitwise** over the `f64` components
/// (`to_bits`), so `Point` is a lawful `HashMap`/`HashSet` key even when
/// a coordinate is NaN. Consequence: `-0.0` and `0.0` are distinct
/// identities. Use [`Point::checked`] to reject non-finite coordinates
/// at the boundary instead.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from raw coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point, rejecting non-finite coordinates.
    pub fn checked(x: f64, y: f64) -> PnResult<Self> {
        ensure_finite(x, "Point.x")?;
        ensure_finite(y, "Point.y")?;
        Ok(Self { x, y })
    }
}

fn ensure_finite(v: f64, what: &'static str) -> PnResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PnError::NonFinite { what, value: v })
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coordinate for Point {
    fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }

    fn translated(&self, offset: &Self) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn midpoint_is_commutative(ax in -1e6_f64..1e6, ay in -1e6_f64..1e6,
                                   bx in -1e6_f64..1e6, by in -1e6_f64..1e6) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!(a.midpoint(&b), b.midpoint(&a));
        }

        #[test]
        fn translation_round_trips(x in -1e6_f64..1e6, y in -1e6_f64..1e6,
                                   dx in -1e3_f64..1e3, dy in -1e3_f64..1e3) {
            let p = Point::new(x, y);
            let offset = Point::new(dx, dy);
            let back = Point::new(-dx, -dy);
            let moved = p.translated(&offset).translated(&back);
            // Not exact in general, but must stay within float tolerance.
            prop_assert!((moved.x - p.x).abs() <= 1e-9 * p.x.abs().max(1.0));
            prop_assert!((moved.y - p.y).abs() <= 1e-9 * p.y.abs().max(1.0));
        }
    }
}
