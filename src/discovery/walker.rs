// src/discovery/walker.rs

use crate::config::Config;
use crate::filtering::is_pruned;
use ignore::WalkBuilder;
use log::debug;

/// Configures and builds the `ignore::Walk` for `config.root`.
///
/// Every entry is visited: hidden files, `.gitignore` and the other standard
/// filters are disabled. Symlinks are not followed and siblings come in file
/// name order. Excluded directories are pruned so nothing below them is
/// ever yielded.
pub(super) fn build_walker(config: &Config) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(&config.root);
    walker_builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    debug!(
        "Configuring WalkBuilder for {}: standard filters off, links not followed.",
        config.root.display()
    );

    let options = config.options.clone();
    walker_builder.filter_entry(move |entry| {
        if is_pruned(entry, &options) {
            debug!("Pruning excluded directory: {}", entry.path().display());
            return false;
        }
        true
    });

    walker_builder.build()
}
