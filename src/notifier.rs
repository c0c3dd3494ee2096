use std::cell::RefCell;
use std::rc::Rc;

/// Collaborator told about every change to the sky.
///
/// The call is one-way: nothing is returned and failures stay inside the
/// implementation.
pub trait ChangeNotifier {
    fn on_stars_changed(&self, snapshot: &str);
}

impl<F> ChangeNotifier for F
where
    F: Fn(&str),
{
    fn on_stars_changed(&self, snapshot: &str) {
        self(snapshot)
    }
}

/// In-memory holder of the last snapshot a sky reported.
///
/// Clones share the same slot, so a host can keep one handle while the sky
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCache {
    data: Rc<RefCell<String>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recorded snapshot, or an empty string.
    pub fn snapshot(&self) -> String {
        self.data.borrow().clone()
    }

    pub fn save(&self, snapshot: &str) {
        let mut data = self.data.borrow_mut();
        data.clear();
        data.push_str(snapshot);
    }

    pub fn clear(&self) {
        self.data.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.data.borrow().is_empty()
    }

    /// Number of stars in the recorded snapshot.
    /// Returns 0 if nothing is recorded or the data is not a JSON array.
    pub fn star_count(&self) -> usize {
        let data = self.data.borrow();
        if data.is_empty() {
            return 0;
        }
        match serde_json::from_str::<Vec<serde_json::Value>>(&data) {
            Ok(items) => items.len(),
            Err(e) => {
                tracing::warn!("Failed to parse cached snapshot {}: {}", data, e);
                0
            }
        }
    }
}

impl ChangeNotifier for SnapshotCache {
    fn on_stars_changed(&self, snapshot: &str) {
        tracing::debug!("onStarsChanged: {}", snapshot);
        self.save(snapshot);
    }
}
