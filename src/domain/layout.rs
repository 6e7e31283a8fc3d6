//! Overlay layout calculator
//!
//! Computes the two screen regions surrounding the overlay band once at
//! startup, and the pure placement math used when repositioning a window
//! into one of them.
//!
//! CRITICAL: window managers report a window rectangle that includes
//! invisible border/shadow padding. Placement always works from the
//! difference between the raw rectangle and the visible frame bounds so
//! that the *visible* edges land exactly on region boundaries.

use crate::domain::core::Rect;
use thiserror::Error;

/// Errors produced while computing the overlay layout
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("work area {w}x{h} is degenerate")]
    DegenerateWorkArea { w: i32, h: i32 },
    #[error("overlay band of {band_height}px does not fit in a work area {work_height}px tall")]
    BandDoesNotFit { band_height: i32, work_height: i32 },
}

/// The two screen regions around the overlay band
///
/// Immutable for the lifetime of the overlay. All values are vertical
/// coordinates within the usable desktop area, except `available_width`
/// which is its full width. Invariant:
/// `0 <= above_end_y <= below_start_y <= below_end_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegions {
    /// Full usable desktop width; target windows always span it
    pub available_width: i32,
    /// Bottom edge of the region above the overlay band
    pub above_end_y: i32,
    /// Top edge of the region below the overlay band
    pub below_start_y: i32,
    /// Bottom edge of the region below the overlay band
    pub below_end_y: i32,
}

impl ScreenRegions {
    /// Computes the regions for an overlay band centered vertically in the
    /// work area.
    pub fn compute(work_area: Rect, band_height: i32) -> Result<Self, LayoutError> {
        if work_area.w <= 0 || work_area.h <= 0 {
            return Err(LayoutError::DegenerateWorkArea {
                w: work_area.w,
                h: work_area.h,
            });
        }
        if band_height <= 0 || band_height > work_area.h {
            return Err(LayoutError::BandDoesNotFit {
                band_height,
                work_height: work_area.h,
            });
        }

        let above_end_y = work_area.h / 2 - band_height / 2;
        Ok(Self {
            available_width: work_area.w,
            above_end_y,
            below_start_y: above_end_y + band_height,
            below_end_y: work_area.h,
        })
    }

    /// Height of the region above the overlay band
    pub fn above_height(&self) -> i32 {
        self.above_end_y
    }

    /// Height of the region below the overlay band
    pub fn below_height(&self) -> i32 {
        self.below_end_y - self.below_start_y
    }
}

/// Computes where a window's raw rectangle must be placed so that its
/// *visible* frame fills the above or below region exactly.
///
/// `raw` is the OS-reported bounding rectangle, `visible` the extended
/// frame bounds excluding shadow padding. The per-side difference between
/// the two is re-applied to the target region so the visible edges align
/// with the region boundaries.
pub fn placement(raw: Rect, visible: Rect, above: bool, regions: &ScreenRegions) -> Rect {
    let dx = raw.x - visible.x;
    let dy = raw.y - visible.y;
    let dw = raw.w - visible.w;
    let dh = raw.h - visible.h;

    let target_y = if above { 0 } else { regions.below_start_y };
    let target_h = if above {
        regions.above_height()
    } else {
        regions.below_height()
    };

    Rect::new(
        dx,
        target_y + dy,
        regions.available_width + dw,
        target_h + dh,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions_1080p() -> ScreenRegions {
        // 1920x1040 work area (40px taskbar), 320px overlay band
        ScreenRegions::compute(Rect::new(0, 0, 1920, 1040), 320).unwrap()
    }

    #[test]
    fn regions_invariant_holds() {
        let regions = regions_1080p();
        assert!(0 <= regions.above_end_y);
        assert!(regions.above_end_y <= regions.below_start_y);
        assert!(regions.below_start_y <= regions.below_end_y);
        assert_eq!(regions.below_start_y - regions.above_end_y, 320);
        assert_eq!(regions.available_width, 1920);
        assert_eq!(regions.below_end_y, 1040);
    }

    #[test]
    fn regions_reject_degenerate_inputs() {
        assert_eq!(
            ScreenRegions::compute(Rect::new(0, 0, 0, 1040), 320),
            Err(LayoutError::DegenerateWorkArea { w: 0, h: 1040 })
        );
        assert_eq!(
            ScreenRegions::compute(Rect::new(0, 0, 1920, 1040), 2000),
            Err(LayoutError::BandDoesNotFit {
                band_height: 2000,
                work_height: 1040
            })
        );
        assert_eq!(
            ScreenRegions::compute(Rect::new(0, 0, 1920, 1040), 0),
            Err(LayoutError::BandDoesNotFit {
                band_height: 0,
                work_height: 1040
            })
        );
    }

    #[test]
    fn placement_compensates_visible_frame_inset() {
        let regions = regions_1080p();

        // Raw rectangle extends 10px past the visible frame on the left,
        // right and bottom (typical drop-shadow border).
        let raw = Rect::new(90, 100, 820, 610);
        let visible = Rect::new(100, 100, 800, 600);

        let target = placement(raw, visible, true, &regions);

        // Visible left edge = raw.x - dx lands at 0, visible width spans
        // the full available width, visible bottom edge lands on the
        // above-region boundary.
        assert_eq!(target.x - (raw.x - visible.x), 0);
        assert_eq!(target.w - (raw.w - visible.w), regions.available_width);
        assert_eq!(target.y, 0);
        assert_eq!(
            target.bottom() - ((raw.h - visible.h) + (raw.y - visible.y)),
            regions.above_end_y
        );
    }

    #[test]
    fn placement_without_inset_fills_region_exactly() {
        let regions = regions_1080p();
        let rect = Rect::new(300, 300, 640, 480);

        let above = placement(rect, rect, true, &regions);
        assert_eq!(above, Rect::new(0, 0, 1920, regions.above_height()));

        let below = placement(rect, rect, false, &regions);
        assert_eq!(
            below,
            Rect::new(0, regions.below_start_y, 1920, regions.below_height())
        );
    }

    #[test]
    fn above_and_below_placements_leave_band_uncovered() {
        let regions = regions_1080p();
        let rect = Rect::new(0, 0, 500, 500);

        let above = placement(rect, rect, true, &regions);
        let below = placement(rect, rect, false, &regions);
        let band = Rect::new(
            0,
            regions.above_end_y,
            regions.available_width,
            regions.below_start_y - regions.above_end_y,
        );

        assert!(above.intersection(&band).is_none());
        assert!(below.intersection(&band).is_none());
        assert!(above.intersection(&below).is_none());
    }
}
