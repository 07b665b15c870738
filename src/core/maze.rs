//! Maze layout: parsing the character grid and classifying cells.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Edge length of one tile in logical (unscaled) pixels.
pub const TILE_SIZE: f32 = 32.0;

/// Layout of level 1, shipped inside the binary so the game can start even
/// when `assets/levels/level1.txt` is missing.
pub const BUNDLED_LEVEL: &str = include_str!("../../assets/levels/level1.txt");

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Floor,
    Sign,
    Exit,
}

impl TileKind {
    fn from_char(ch: char) -> Self {
        match ch {
            'W' => TileKind::Wall,
            'S' => TileKind::Sign,
            'E' => TileKind::Exit,
            _ => TileKind::Floor,
        }
    }
}

/// Immutable tile layout of one level. Row 0 / column 0 is the top-left cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    tiles: Vec<TileKind>,
}

impl TileGrid {
    /// Builds a grid from its text form: one line per row, `W` wall, `S` sign,
    /// `E` exit, anything else floor. Blank lines are skipped. Short rows are
    /// padded with walls up to the widest row.
    pub fn parse(src: &str) -> Self {
        let mut grid: Vec<Vec<TileKind>> = Vec::new();
        for line in src.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            grid.push(line.chars().map(TileKind::from_char).collect());
        }

        let cols = grid.iter().map(|r| r.len()).max().unwrap_or(0);
        let rows = grid.len();
        let mut tiles = Vec::with_capacity(rows * cols);
        for (r, row) in grid.iter_mut().enumerate() {
            if row.len() < cols {
                log::warn!(
                    "maze row {} has {} cells, expected {}; padding with walls",
                    r,
                    row.len(),
                    cols
                );
                row.resize(cols, TileKind::Wall);
            }
            tiles.extend_from_slice(row);
        }

        Self { rows, cols, tiles }
    }

    /// Tile at `(row, col)`. Anything outside the grid is a wall, which seals
    /// the perimeter without needing border rows in the layout.
    pub fn classify(&self, row: i32, col: i32) -> TileKind {
        if row < 0 || col < 0 {
            return TileKind::Wall;
        }
        let (r, c) = (row as usize, col as usize);
        if r >= self.rows || c >= self.cols {
            return TileKind::Wall;
        }
        self.tiles[r * self.cols + c]
    }

    /// `(rows, cols)`
    pub fn extent(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cells holding `kind`, in row-major order.
    pub fn find(&self, kind: TileKind) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cols = self.cols;
        self.tiles
            .iter()
            .enumerate()
            .filter(move |(_, t)| **t == kind)
            .map(move |(i, _)| ((i / cols) as i32, (i % cols) as i32))
    }
}

/// Reads a level layout from disk.
pub fn load_level(path: impl AsRef<Path>) -> anyhow::Result<TileGrid> {
    let path = path.as_ref();
    let src = fs::read_to_string(path)
        .with_context(|| format!("reading maze layout {}", path.display()))?;
    let grid = TileGrid::parse(&src);
    if grid.extent().0 == 0 {
        anyhow::bail!("maze layout {} is empty", path.display());
    }
    if grid.find(TileKind::Exit).next().is_none() {
        anyhow::bail!("maze layout {} has no exit", path.display());
    }
    Ok(grid)
}

/// `levels_dir/level{n}.txt`
pub fn level_path(levels_dir: impl AsRef<Path>, level: u32) -> PathBuf {
    levels_dir.as_ref().join(format!("level{}.txt", level))
}

/// Whether `level` can be played: it is level 1, or its layout file loads
/// and has an exit.
pub fn level_available(levels_dir: impl AsRef<Path>, level: u32) -> bool {
    level == 1 || level_layout(levels_dir, level).is_some()
}

/// Layout for `level` from `levels_dir/level{n}.txt`. Level 1 falls back to
/// the bundled layout; other levels without a file are unavailable.
pub fn level_layout(levels_dir: impl AsRef<Path>, level: u32) -> Option<TileGrid> {
    match load_level(level_path(levels_dir, level)) {
        Ok(grid) => Some(grid),
        Err(err) if level == 1 => {
            log::warn!("{:#}; using bundled layout", err);
            Some(TileGrid::parse(BUNDLED_LEVEL))
        }
        Err(err) => {
            log::debug!("level {} unavailable: {:#}", level, err);
            None
        }
    }
}

/// Maps a logical coordinate on one axis to a cell index on that axis.
/// The coordinate is rounded first so collision and the avatar's occupied
/// cell always agree.
#[inline]
pub fn world_to_cell(v: f32) -> i32 {
    (v.round() as i32).div_euclid(TILE_SIZE as i32)
}
