use crate::error::SnapshotError;
use crate::models::{Star, BIG, BIG_PALETTE, BRIGHT, DIM, SMALL, SMALL_PALETTE};
use crate::random::{RandomSource, RngSource};

/// Builds randomized stars.
pub struct StarFactory<R = RngSource> {
    random: R,
}

impl Default for StarFactory<RngSource> {
    fn default() -> Self {
        Self::new(RngSource::thread())
    }
}

impl<R: RandomSource> StarFactory<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Build a "B" star with a color from the big palette.
    pub fn create_big_star(&mut self) -> Star {
        self.create_star(BIG, &BIG_PALETTE)
    }

    /// Build an "S" star with a color from the small palette.
    pub fn create_small_star(&mut self) -> Star {
        self.create_star(SMALL, &SMALL_PALETTE)
    }

    // Color is drawn before brightness.
    fn create_star(&mut self, size: &str, palette: &[&'static str; 3]) -> Star {
        let color = pick(palette, self.random.next_int(palette.len() as u32));
        let brightness = brightness(self.random.next_int(2));
        Star::new(size, color, brightness)
    }
}

/// Palette lookup, total over every index.
fn pick(palette: &[&'static str; 3], index: u32) -> &'static str {
    palette[index as usize % palette.len()]
}

fn brightness(index: u32) -> &'static str {
    if index == 0 {
        BRIGHT
    } else {
        DIM
    }
}

/// Decode a snapshot into stars, preserving order.
///
/// The snapshot must be a JSON array of objects, each carrying string
/// `size`, `color` and `brightness` fields. Extra fields are ignored.
pub fn stars_from_snapshot(snapshot: &str) -> Result<Vec<Star>, SnapshotError> {
    serde_json::from_str(snapshot).map_err(SnapshotError::Malformed)
}

/// Encode stars as a compact JSON array snapshot.
pub fn to_snapshot(stars: &[Star]) -> Result<String, SnapshotError> {
    serde_json::to_string(stars).map_err(SnapshotError::Encode)
}
