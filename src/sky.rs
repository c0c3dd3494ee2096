use crate::config::Config;
use crate::error::StarError;
use crate::factory::{stars_from_snapshot, to_snapshot, StarFactory};
use crate::models::{AddOutcome, ChangeReport, Star, StarSummary, SKY_FULL_MESSAGE};
use crate::notifier::ChangeNotifier;
use crate::random::{RandomSource, RngSource};

/// Number of stars a sky holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// The bounded, ordered star collection and everything that mutates it.
///
/// Every successful mutation serializes the whole collection, logs it,
/// hands the snapshot to the attached [`ChangeNotifier`] and logs the
/// bright/total summary. Mutations fail with [`StarError::MissingNotifier`]
/// before touching the collection if no notifier is attached.
pub struct Sky<R = RngSource> {
    stars: Vec<Star>,
    capacity: usize,
    factory: StarFactory<R>,
    notifier: Option<Box<dyn ChangeNotifier>>,
}

impl Sky<RngSource> {
    /// Empty sky with the default capacity and thread randomness.
    pub fn new(notifier: impl ChangeNotifier + 'static) -> Self {
        Self::detached().with_notifier(notifier)
    }

    /// Empty sky with no notifier attached yet.
    pub fn detached() -> Self {
        Self::with_factory(StarFactory::default(), DEFAULT_CAPACITY)
    }

    pub fn from_config(config: &Config, notifier: impl ChangeNotifier + 'static) -> Self {
        Self::with_factory(StarFactory::default(), config.capacity).with_notifier(notifier)
    }
}

impl<R: RandomSource> Sky<R> {
    pub fn with_factory(factory: StarFactory<R>, capacity: usize) -> Self {
        Self {
            stars: Vec::new(),
            capacity,
            factory,
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: impl ChangeNotifier + 'static) -> Self {
        self.attach_notifier(notifier);
        self
    }

    /// Attach a notifier, replacing any previous one.
    pub fn attach_notifier(&mut self, notifier: impl ChangeNotifier + 'static) {
        self.notifier = Some(Box::new(notifier));
    }

    /// Remove and return the current notifier.
    pub fn detach_notifier(&mut self) -> Option<Box<dyn ChangeNotifier>> {
        self.notifier.take()
    }

    pub fn has_notifier(&self) -> bool {
        self.notifier.is_some()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.stars.len() >= self.capacity
    }

    pub fn summary(&self) -> StarSummary {
        StarSummary::of(&self.stars)
    }

    pub fn add_big_star(&mut self) -> Result<AddOutcome, StarError> {
        let star = self.factory.create_big_star();
        self.add_star(star)
    }

    pub fn add_small_star(&mut self) -> Result<AddOutcome, StarError> {
        let star = self.factory.create_small_star();
        self.add_star(star)
    }

    /// Append a star unless the sky is at capacity.
    pub fn add_star(&mut self, star: Star) -> Result<AddOutcome, StarError> {
        if self.is_full() {
            tracing::warn!("{}", SKY_FULL_MESSAGE);
            return Ok(AddOutcome::SkyFull);
        }
        self.ensure_notifier()?;

        self.stars.push(star);
        self.notify().map(AddOutcome::Added)
    }

    /// Remove every star.
    pub fn reset(&mut self) -> Result<ChangeReport, StarError> {
        self.ensure_notifier()?;

        self.stars.clear();
        self.notify()
    }

    /// Replace the collection with the stars decoded from `snapshot`.
    /// The collection is untouched if decoding fails.
    pub fn initialize_stars(&mut self, snapshot: &str) -> Result<ChangeReport, StarError> {
        self.ensure_notifier()?;

        let stars = stars_from_snapshot(snapshot)?;
        if stars.len() > self.capacity {
            tracing::warn!(
                "Snapshot holds {} stars, above capacity {}",
                stars.len(),
                self.capacity
            );
        }
        self.stars = stars;
        self.notify()
    }

    /// Initialize from a previously saved snapshot, if there is one.
    pub fn restore(&mut self, saved: &str) -> Result<Option<ChangeReport>, StarError> {
        if saved.trim().is_empty() {
            return Ok(None);
        }
        self.initialize_stars(saved).map(Some)
    }

    fn ensure_notifier(&self) -> Result<(), StarError> {
        if self.notifier.is_none() {
            return Err(StarError::MissingNotifier);
        }
        Ok(())
    }

    fn notify(&self) -> Result<ChangeReport, StarError> {
        let notifier = self.notifier.as_deref().ok_or(StarError::MissingNotifier)?;

        let snapshot = to_snapshot(&self.stars)?;
        tracing::info!("{}", snapshot);

        notifier.on_stars_changed(&snapshot);

        let summary = self.summary();
        tracing::info!("{}", summary);

        Ok(ChangeReport { snapshot, summary })
    }
}
