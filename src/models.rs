use serde::{Deserialize, Serialize};

/// Size tag of a generated big star.
pub const BIG: &str = "B";
/// Size tag of a generated small star.
pub const SMALL: &str = "S";

/// Brightness of a star drawn with index 0.
pub const BRIGHT: &str = "Bright";
/// Brightness of every other star.
pub const DIM: &str = "Not so much";

/// Colors available to big stars, indexed by the random draw.
pub const BIG_PALETTE: [&str; 3] = ["Yellow", "Purple", "Gray"];
/// Colors available to small stars, indexed by the random draw.
pub const SMALL_PALETTE: [&str; 3] = ["Red", "Blue", "Green"];

/// Message shown when an add is refused because the sky is at capacity.
pub const SKY_FULL_MESSAGE: &str = "Sky is full.";

/// A star in the sky (immutable once built).
///
/// Generated stars use the tags and palettes above. Stars decoded from a
/// snapshot keep whatever strings the snapshot carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub size: String,
    pub color: String,
    pub brightness: String,
}

impl Star {
    pub fn new(
        size: impl Into<String>,
        color: impl Into<String>,
        brightness: impl Into<String>,
    ) -> Self {
        Self {
            size: size.into(),
            color: color.into(),
            brightness: brightness.into(),
        }
    }

    pub fn is_bright(&self) -> bool {
        self.brightness == BRIGHT
    }
}

/// Bright and total star counts of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarSummary {
    pub bright: usize,
    pub total: usize,
}

impl StarSummary {
    pub fn of(stars: &[Star]) -> Self {
        Self {
            bright: stars.iter().filter(|s| s.is_bright()).count(),
            total: stars.len(),
        }
    }
}

impl std::fmt::Display for StarSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bright stars count: {}, total stars count: {}",
            self.bright, self.total
        )
    }
}

/// What one run of the change-notification sequence produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    pub snapshot: String,
    pub summary: StarSummary,
}

/// Result of asking the sky to take one more star.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The star was appended and the notifier informed.
    Added(ChangeReport),
    /// The sky was at capacity; nothing changed and nobody was notified.
    SkyFull,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }

    /// User-facing message for a refused add.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            AddOutcome::Added(_) => None,
            AddOutcome::SkyFull => Some(SKY_FULL_MESSAGE),
        }
    }
}

/// Host status line for a given star count.
pub fn status_text(count: usize) -> String {
    if count > 0 {
        format!("There are {} stars at the moment.", count)
    } else {
        "No stars are added at the moment.".to_string()
    }
}
