//! Monochrome noise tile for dithering.

use rand::Rng;

/// Tile edge length in pixels. Small enough to stay cache-resident, large
/// enough that the repeat is invisible at wallpaper sizes.
pub(crate) const TILE_SIZE: u32 = 128;

/// A square grayscale tile of uniform random values, repeated across the
/// surface by [`value`].
///
/// Generated once per renderer and reused for every subsequent pass, so a
/// renderer's output is stable across renders of the same description.
///
/// [`value`]: NoiseTile::value
#[derive(Debug, Clone)]
pub(crate) struct NoiseTile {
    values: Vec<u8>,
}

impl NoiseTile {
    pub(crate) fn generate(rng: &mut impl Rng) -> Self {
        let values = (0..TILE_SIZE * TILE_SIZE).map(|_| rng.r#gen::<u8>()).collect();
        Self { values }
    }

    /// Gray level at surface coordinates, tiling in both directions.
    #[inline]
    pub(crate) fn value(&self, x: u32, y: u32) -> u8 {
        self.values[((y % TILE_SIZE) * TILE_SIZE + (x % TILE_SIZE)) as usize]
    }
}
