//! Small hand-drawn grids for tests
//!
//! Fixtures are written as rows of characters so the geometry under test
//! is visible in the test source. In binary fixtures `.` is background and
//! `1`, `x`, or `#` is foreground. In label fixtures `.` is 0 and the
//! digits `1`-`9` are labels.

use crate::error::{TestError, TestResult};
use neurograph_core::{Pix, PixelDepth};

fn parse_grid(
    rows: &[&str],
    depth: PixelDepth,
    value_of: impl Fn(char) -> Option<u32>,
) -> TestResult<Pix> {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut data = Vec::with_capacity(width * height);

    for (row, line) in rows.iter().enumerate() {
        let n = line.chars().count();
        if n != width {
            return Err(TestError::RaggedRows {
                row,
                expected: width,
                actual: n,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            let v = value_of(ch).ok_or(TestError::BadCharacter { ch, row, col })?;
            data.push(v);
        }
    }

    Ok(Pix::from_data(width as u32, height as u32, depth, data)?)
}

/// Build a 1-bpp mask from ASCII rows.
///
/// # Errors
///
/// Returns error on ragged rows, unknown characters, or an empty grid.
pub fn pix_from_ascii(rows: &[&str]) -> TestResult<Pix> {
    parse_grid(rows, PixelDepth::Bit1, |ch| match ch {
        '.' | '0' => Some(0),
        '1' | 'x' | '#' => Some(1),
        _ => None,
    })
}

/// Build a 32-bpp label image from ASCII rows.
///
/// # Errors
///
/// Returns error on ragged rows, unknown characters, or an empty grid.
pub fn labels_from_ascii(rows: &[&str]) -> TestResult<Pix> {
    parse_grid(rows, PixelDepth::Bit32, |ch| match ch {
        '.' => Some(0),
        _ => ch.to_digit(10),
    })
}

/// Render a grid back to ASCII rows (`.` for zero, the digit otherwise,
/// `+` for values above 9).
pub fn pix_to_ascii(pix: &Pix) -> Vec<String> {
    (0..pix.height())
        .map(|y| {
            pix.row_data(y)
                .iter()
                .map(|&v| match v {
                    0 => '.',
                    1..=9 => char::from_digit(v, 10).unwrap_or('+'),
                    _ => '+',
                })
                .collect()
        })
        .collect()
}

/// Build a mask of the given size with the listed `(x, y)` pixels set.
///
/// # Errors
///
/// Returns error if the size is invalid or a point lies outside it.
pub fn mask_from_points(width: u32, height: u32, points: &[(u32, u32)]) -> TestResult<Pix> {
    let mut pm = Pix::new(width, height, PixelDepth::Bit1)?.into_mut();
    for &(x, y) in points {
        pm.set_pixel(x, y, 1)?;
    }
    Ok(pm.into())
}

/// Build a label image of the given size with the listed `(x, y, label)` pixels.
///
/// # Errors
///
/// Returns error if the size is invalid or a point lies outside it.
pub fn labels_from_points(width: u32, height: u32, points: &[(u32, u32, u32)]) -> TestResult<Pix> {
    let mut pm = Pix::new(width, height, PixelDepth::Bit32)?.into_mut();
    for &(x, y, label) in points {
        pm.set_pixel(x, y, label)?;
    }
    Ok(pm.into())
}

/// A skeleton grid and its seed labels
pub struct Scene {
    pub skeleton: Pix,
    pub seeds: Pix,
}

/// A single seed pixel at (3, 4) with a straight process along row 4
/// from x = 5 to x = 15 in a 20 x 9 grid.
pub fn line_scene() -> TestResult<Scene> {
    let points: Vec<(u32, u32)> = (5..=15).map(|x| (x, 4)).collect();
    Ok(Scene {
        skeleton: mask_from_points(20, 9, &points)?,
        seeds: labels_from_points(20, 9, &[(3, 4, 1)])?,
    })
}

/// A single seed pixel at (2, 5) with a process along row 5 that forks at
/// (10, 5) into two diagonal arms ending at (14, 1) and (14, 9), in a
/// 16 x 11 grid.
pub fn fork_scene() -> TestResult<Scene> {
    let mut points: Vec<(u32, u32)> = (4..=10).map(|x| (x, 5)).collect();
    for k in 1..=4 {
        points.push((10 + k, 5 - k));
        points.push((10 + k, 5 + k));
    }
    Ok(Scene {
        skeleton: mask_from_points(16, 11, &points)?,
        seeds: labels_from_points(16, 11, &[(2, 5, 1)])?,
    })
}
