use log::trace;
use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

use importfix_core::{ExportRecord, exports_in, read_source, resolve};

/// Exported names per target file, computed once per run.
#[derive(Default)]
pub(crate) struct ExportIndex {
    cache: HashMap<PathBuf, HashSet<String>>,
}

impl ExportIndex {
    pub(crate) fn exports_of(&mut self, target: &Path) -> HashSet<String> {
        let mut visiting = HashSet::new();
        // Every cycle cut below leads back to a file on the stack, whose own
        // names are already part of this set, so the outermost result is whole.
        let (names, _) = self.collect(target, &mut visiting);
        self.cache.insert(target.to_path_buf(), names.clone());
        names
    }

    /// Returns the names `target` exports and whether the set is complete.
    ///
    /// A set is incomplete when an `export *` cycle was cut while computing
    /// it; such sets are never cached.
    fn collect(
        &mut self,
        target: &Path,
        visiting: &mut HashSet<PathBuf>,
    ) -> (HashSet<String>, bool) {
        if let Some(cached) = self.cache.get(target) {
            trace!("Cache hit for exports: {}", target.display());
            return (cached.clone(), true);
        }

        if !visiting.insert(target.to_path_buf()) {
            trace!("Re-export cycle at: {}", target.display());
            return (HashSet::new(), false);
        }

        let text = read_source(target);
        let mut names = HashSet::new();
        let mut complete = true;
        for record in exports_in(&text) {
            names.extend(record.exported_names());

            if let ExportRecord::Star { alias: None, from } = &record
                && let Some(next) = resolve(target, from)
            {
                trace!("Following export * from {} to {}", target.display(), next.display());
                let (forwarded, forwarded_complete) = self.collect(&next, visiting);
                complete &= forwarded_complete;
                names.extend(forwarded.into_iter().filter(|n| n != "default"));
            }
        }

        visiting.remove(target);
        trace!("{} exports {} names (complete: {})", target.display(), names.len(), complete);
        if complete {
            self.cache.insert(target.to_path_buf(), names.clone());
        }
        (names, complete)
    }
}
