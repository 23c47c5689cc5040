// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding boxes over active pointer positions.

use kurbo::{Point, Rect};

use crate::error::PanZoomError;

/// Computes the axis-aligned bounding box of a set of pointer positions.
///
/// The result is in the same (pixel) space as the inputs. `width()` and
/// `height()` of the returned rect are never negative; a single pointer yields
/// a zero-sized box at its position.
///
/// # Errors
///
/// Returns [`PanZoomError::EmptyPointerSet`] if `points` is empty.
///
/// ```rust
/// use kurbo::Point;
/// use understory_pan_zoom::calc_bbox;
///
/// let bbox = calc_bbox([Point::new(-10.0, 0.0), Point::new(-1.0, 5.0)]).unwrap();
/// assert_eq!(bbox.width(), 9.0);
/// assert_eq!(bbox.height(), 5.0);
/// ```
pub fn calc_bbox<I>(points: I) -> Result<Rect, PanZoomError>
where
    I: IntoIterator<Item = Point>,
{
    let mut points = points.into_iter();
    let first = points.next().ok_or(PanZoomError::EmptyPointerSet)?;
    Ok(points.fold(Rect::from_points(first, first), |bbox, pt| {
        Rect::new(
            bbox.x0.min(pt.x),
            bbox.y0.min(pt.y),
            bbox.x1.max(pt.x),
            bbox.y1.max(pt.y),
        )
    }))
}

/// Pads the shorter side of `bbox` symmetrically so that it becomes square.
///
/// Used when the aspect ratio of the plot must be preserved: a square box
/// yields the same scale factor on both axes.
#[must_use]
pub fn squareify(bbox: Rect) -> Rect {
    let side = bbox.width().max(bbox.height());
    Rect::from_center_size(bbox.center(), (side, side))
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{calc_bbox, squareify};
    use crate::error::PanZoomError;

    #[test]
    fn bbox_over_three_pointers() {
        let bbox = calc_bbox([
            Point::new(-10.0, 0.0),
            Point::new(-1.0, 5.0),
            Point::new(-5.0, 1.0),
        ])
        .unwrap();
        assert_eq!(bbox.x0, -10.0);
        assert_eq!(bbox.x1, -1.0);
        assert_eq!(bbox.width(), 9.0);
        assert_eq!(bbox.y0, 0.0);
        assert_eq!(bbox.y1, 5.0);
        assert_eq!(bbox.height(), 5.0);
    }

    #[test]
    fn single_pointer_is_zero_sized() {
        let bbox = calc_bbox([Point::new(3.0, 4.0)]).unwrap();
        assert_eq!(bbox, Rect::new(3.0, 4.0, 3.0, 4.0));
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
    }

    #[test]
    fn empty_pointer_set_is_an_error() {
        assert_eq!(
            calc_bbox(core::iter::empty()),
            Err(PanZoomError::EmptyPointerSet)
        );
    }

    #[test]
    fn squareify_pads_the_short_side() {
        let sq = squareify(Rect::new(0.0, 10.0, 100.0, 30.0));
        assert_eq!(sq.width(), 100.0);
        assert_eq!(sq.height(), 100.0);
        assert_eq!(sq.center(), Point::new(50.0, 20.0));

        let tall = squareify(Rect::new(0.0, 0.0, 10.0, 40.0));
        assert_eq!(tall, Rect::new(-15.0, 0.0, 25.0, 40.0));
    }
}
