// Spritesheet layout and slicing into per-direction frame sequences

use super::{Direction, FrameMapping};
use crate::core::math::whole_cells;
use crate::engine::assets::{RasterImage, TextureRegion};

/// Errors produced while slicing a spritesheet
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SliceError {
    #[error("Frame size must be non-zero, got {width}x{height}")]
    ZeroFrameSize { width: u32, height: u32 },
}

/// Geometry of a directional spritesheet
///
/// Each row holds one direction, each column one frame. Row `r` belongs to
/// `directions[r]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// Width of each frame in pixels
    pub frame_width: u32,
    /// Height of each frame in pixels
    pub frame_height: u32,
    /// Direction label of each row, top to bottom
    pub directions: Vec<Direction>,
}

impl SheetLayout {
    /// Create a layout using the standard row order (up, left, down, right)
    pub fn new(frame_width: u32, frame_height: u32) -> Self {
        Self {
            frame_width,
            frame_height,
            directions: Direction::ALL.to_vec(),
        }
    }

    /// Override the row order
    pub fn with_directions(mut self, directions: impl Into<Vec<Direction>>) -> Self {
        self.directions = directions.into();
        self
    }

    /// Slice an image with this layout
    pub fn slice(&self, image: &RasterImage) -> Result<SlicedSheet, SliceError> {
        slice_spritesheet(image, self.frame_width, self.frame_height, &self.directions)
    }
}

impl Default for SheetLayout {
    /// 64x64 frames, the usual size for directional character sheets
    fn default() -> Self {
        Self::new(64, 64)
    }
}

/// Result of slicing one spritesheet
#[derive(Debug, Clone, PartialEq)]
pub struct SlicedSheet {
    pub frames: FrameMapping,
    /// Frames per row; zero means the sheet holds no usable animation
    pub frame_count: usize,
}

impl SlicedSheet {
    pub fn is_empty(&self) -> bool {
        self.frame_count == 0 || self.frames.is_empty()
    }
}

/// Slice a spritesheet into per-direction frame sequences
///
/// Pixels beyond the last whole frame are not covered, and rows without a
/// matching label are dropped. A sheet smaller than one frame yields an
/// empty result rather than an error.
pub fn slice_spritesheet(
    image: &RasterImage,
    frame_width: u32,
    frame_height: u32,
    directions: &[Direction],
) -> Result<SlicedSheet, SliceError> {
    if frame_width == 0 || frame_height == 0 {
        return Err(SliceError::ZeroFrameSize {
            width: frame_width,
            height: frame_height,
        });
    }

    let (width, height) = (image.width(), image.height());
    let frame_count = whole_cells(width, frame_width);
    let row_count = whole_cells(height, frame_height);

    if row_count as usize > directions.len() {
        log::debug!(
            "Sheet has {} rows but only {} direction labels, extra rows ignored",
            row_count,
            directions.len()
        );
    }

    let mut frames = FrameMapping::new();
    for (row, &direction) in (0..row_count).zip(directions) {
        let sequence = (0..frame_count)
            .map(|column| {
                TextureRegion::new(
                    image.handle(),
                    column * frame_width,
                    row * frame_height,
                    frame_width,
                    frame_height,
                    width,
                    height,
                )
            })
            .collect();
        frames.insert(direction, sequence);
    }

    Ok(SlicedSheet {
        frames,
        frame_count: frame_count as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(width: u32, height: u32) -> RasterImage {
        RasterImage::from_color(width, height, [0, 0, 0, 255], "sheet.png")
    }

    #[test]
    fn test_exact_sheet() {
        let image = sheet(64 * 6, 64 * 4);
        let sliced = slice_spritesheet(&image, 64, 64, &Direction::ALL).unwrap();

        assert_eq!(sliced.frame_count, 6);
        assert_eq!(sliced.frames.len(), 4);
        for (row, direction) in Direction::ALL.iter().enumerate() {
            let frames = sliced.frames.get(*direction).unwrap();
            assert_eq!(frames.len(), 6);
            for (column, region) in frames.iter().enumerate() {
                assert_eq!(region.x, column as u32 * 64);
                assert_eq!(region.y, row as u32 * 64);
                assert_eq!((region.width, region.height), (64, 64));
            }
        }
    }

    #[test]
    fn test_partial_frames_are_ignored() {
        let image = sheet(200, 150);
        let sliced = slice_spritesheet(&image, 64, 64, &Direction::ALL).unwrap();

        // floor(200 / 64) = 3 columns, floor(150 / 64) = 2 rows
        assert_eq!(sliced.frame_count, 3);
        assert_eq!(
            sliced.frames.directions().collect::<Vec<_>>(),
            vec![Direction::Up, Direction::Left]
        );
        for (_, frames) in sliced.frames.iter() {
            for region in frames.iter() {
                assert!(region.fits_within(200, 150));
            }
        }
    }

    #[test]
    fn test_regions_always_in_bounds() {
        for (width, height, fw, fh) in [(100, 100, 7, 13), (64, 64, 64, 64), (65, 129, 32, 64)] {
            let image = sheet(width, height);
            let sliced = slice_spritesheet(&image, fw, fh, &Direction::ALL).unwrap();

            assert_eq!(sliced.frame_count, (width / fw) as usize);
            for (_, frames) in sliced.frames.iter() {
                assert!(frames.iter().all(|r| r.fits_within(width, height)));
            }
        }
    }

    #[test]
    fn test_extra_rows_are_dropped() {
        let image = sheet(32, 32 * 4);
        let sliced = slice_spritesheet(&image, 32, 32, &[Direction::Down]).unwrap();

        assert_eq!(sliced.frames.len(), 1);
        assert_eq!(sliced.frames.get(Direction::Down).unwrap()[0].y, 0);
    }

    #[test]
    fn test_custom_row_order() {
        let image = sheet(32, 64);
        let layout = SheetLayout::new(32, 32).with_directions([Direction::Right, Direction::Left]);
        let sliced = layout.slice(&image).unwrap();

        assert_eq!(sliced.frames.get(Direction::Right).unwrap()[0].y, 0);
        assert_eq!(sliced.frames.get(Direction::Left).unwrap()[0].y, 32);
    }

    #[test]
    fn test_degenerate_sheet_is_empty() {
        let image = sheet(32, 32);
        let sliced = slice_spritesheet(&image, 64, 64, &Direction::ALL).unwrap();

        assert_eq!(sliced.frame_count, 0);
        assert!(sliced.frames.is_empty());
        assert!(sliced.is_empty());
    }

    #[test]
    fn test_narrow_sheet_stores_no_empty_directions() {
        // Tall enough for rows but too narrow for a single column
        let image = sheet(16, 256);
        let sliced = slice_spritesheet(&image, 64, 64, &Direction::ALL).unwrap();

        assert_eq!(sliced.frame_count, 0);
        assert!(sliced.frames.is_empty());
    }

    #[test]
    fn test_zero_frame_size_is_rejected() {
        let image = sheet(64, 64);
        let result = slice_spritesheet(&image, 0, 64, &Direction::ALL);
        assert_eq!(
            result,
            Err(SliceError::ZeroFrameSize {
                width: 0,
                height: 64
            })
        );
    }

    #[test]
    fn test_regions_share_source_texture() {
        let image = sheet(128, 64);
        let sliced = SheetLayout::default().slice(&image).unwrap();
        let frames = sliced.frames.get(Direction::Up).unwrap();

        assert!(frames.iter().all(|r| r.texture == image.handle()));
        assert_eq!(frames[1].uv_min.x, 0.5);
    }
}
