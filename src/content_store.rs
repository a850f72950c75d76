use std::path::Path;

use glyphsea_content::{ContentRecord, load_records};
use hashbrown::HashMap;
use rand::Rng;

use crate::assets;
use crate::creature::Domain;

/// In-memory view of the per-domain collection files. Collections load
/// best-effort: a missing or malformed file logs and yields nothing.
#[derive(Default)]
pub struct ContentLibrary {
    collections: HashMap<Domain, Vec<ContentRecord>>,
}

impl ContentLibrary {
    pub fn load_all(root: &Path) -> Self {
        let mut lib = Self::default();
        lib.reload(root);
        lib
    }

    /// Re-reads every collection file. Returns the domains whose record
    /// count changed, so the caller can emit `ContentArrived` events.
    pub fn reload(&mut self, root: &Path) -> Vec<(Domain, usize)> {
        let mut changed = Vec::new();
        for domain in Domain::ALL {
            let Some(file) = domain.collection_file() else {
                continue;
            };
            let path = assets::content_path(root, file);
            let records = match load_records(&path) {
                Ok(r) => r,
                Err(e) => {
                    log::warn!(target: "content", "failed to load {}: {}", path.display(), e);
                    Vec::new()
                }
            };
            let records: Vec<ContentRecord> =
                records.into_iter().filter(|r| r.has_text()).collect();
            let prev = self.collections.get(&domain).map(|v| v.len()).unwrap_or(0);
            if records.len() != prev {
                changed.push((domain, records.len()));
            }
            if !records.is_empty() || prev != 0 {
                self.collections.insert(domain, records);
            }
        }
        changed
    }

    /// Random record for a creature that is still recordless.
    pub fn pick<R: Rng>(&self, domain: Domain, rng: &mut R) -> Option<ContentRecord> {
        let records = self.collections.get(&domain)?;
        if records.is_empty() {
            return None;
        }
        Some(records[rng.gen_range(0..records.len())].clone())
    }
}
