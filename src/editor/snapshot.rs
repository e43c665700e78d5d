use tracing::debug;

use crate::catalog::TemplateCatalog;
use crate::error::{PersistenceError, Result};
use crate::model::StoreLayout;
use crate::operations::fixture::check_facings;

use super::EditorStore;

impl<C: TemplateCatalog> EditorStore<C> {
    /// Serializes the saved-layout collection. The open layout is not part
    /// of the snapshot unless it has been saved.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_saved_layouts(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.saved).map_err(PersistenceError::from)?;
        Ok(json)
    }

    /// Replaces the saved-layout collection from a snapshot produced by
    /// [`export_saved_layouts`](Self::export_saved_layouts). The open layout
    /// is left untouched. Returns the number of restored layouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot is malformed or holds a shelf slot
    /// with zero facings; the collection is then left unchanged.
    pub fn import_saved_layouts(&mut self, json: &str) -> Result<usize> {
        let layouts: Vec<StoreLayout> =
            serde_json::from_str(json).map_err(PersistenceError::from)?;
        for layout in &layouts {
            for fixture in &layout.fixtures {
                if let Some(contents) = &fixture.contents {
                    check_facings(contents).inspect_err(|err| {
                        let (layout, fixture) = (&layout.id, &fixture.id);
                        debug!(%layout, %fixture, %err, "import rejected");
                    })?;
                }
            }
        }
        debug!(count = layouts.len(), "restored saved layouts");
        self.saved = layouts;
        Ok(self.saved.len())
    }
}
