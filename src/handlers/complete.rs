//! Completion toggle handler

use crate::GoalServer;
use crate::error::Result;
use crate::formatting;
use crate::storage::MetadataStore;

impl<S: MetadataStore> GoalServer<S> {
    /// Toggles `goal` and returns where to redirect the browser.
    ///
    /// A request without a goal goes back to `/` and drops the category.
    /// An unknown goal still redirects to the listing.
    pub fn handle_complete(&self, goal: Option<&str>, category: Option<&str>) -> Result<String> {
        let Some(goal) = goal else {
            return Ok(formatting::index_location(None));
        };
        self.tracker.toggle_completion(goal)?;
        Ok(formatting::index_location(category))
    }
}
