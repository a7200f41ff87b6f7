//! Index page handler

use crate::GoalServer;
use crate::error::Result;
use crate::formatting;
use crate::storage::MetadataStore;

impl<S: MetadataStore> GoalServer<S> {
    /// Reconciles metadata with the goal list and renders the selected category.
    pub fn handle_index(&self, category: Option<&str>) -> Result<String> {
        let overview = self.tracker.overview(category)?;
        Ok(formatting::render_index(&overview))
    }
}
