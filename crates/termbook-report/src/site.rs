//! Static site output.
//!
//! The rendered pages in an output directory act as the response cache: a
//! term submission invalidates them and the next `render_all` rebuilds them
//! from the data files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use termbook_core::statistics::compute_stats;
use termbook_core::traits::ResponseCache;
use termbook_core::{quiz, texts, StoreError, TermStore, TermbookConfig};

use crate::html;

/// Pages written by [`RenderedSite::render_all`].
pub const PAGES: &[&str] = &[
    "index.html",
    "terms.html",
    "texts.html",
    "stats.html",
    "quiz.html",
    "add-term.html",
];

/// A directory of pre-rendered pages.
#[derive(Debug, Clone)]
pub struct RenderedSite {
    dir: PathBuf,
}

impl RenderedSite {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths of the pages currently on disk.
    pub fn cached_pages(&self) -> Vec<PathBuf> {
        PAGES
            .iter()
            .map(|p| self.dir.join(p))
            .filter(|p| p.exists())
            .collect()
    }

    /// Render every page from the data files named in `config`.
    pub fn render_all(&self, config: &TermbookConfig) -> Result<Vec<PathBuf>> {
        let terms = TermStore::new(config.terms_path())
            .load_terms()
            .context("failed to load terms")?;
        let texts = texts::load_texts(&config.texts_path()).context("failed to load texts")?;
        let questions =
            quiz::load_questions(&config.quiz_path()).context("failed to load quiz")?;
        let stats = match compute_stats(&config.terms_path()) {
            Ok(stats) => Some(stats),
            Err(StoreError::EmptyDataset { .. }) => None,
            Err(e) => return Err(e).context("failed to compute statistics"),
        };

        let pages = [
            ("index.html", html::render_index()),
            ("terms.html", html::render_terms(&terms)),
            ("texts.html", html::render_texts(&texts)),
            ("stats.html", html::render_stats(stats.as_ref())),
            ("quiz.html", html::render_quiz_questions(&questions)),
            ("add-term.html", html::render_add_term_help()),
        ];

        let mut written = Vec::with_capacity(pages.len());
        for (name, page) in pages {
            let path = self.dir.join(name);
            html::write_page(&page, &path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            written.push(path);
        }
        tracing::info!("rendered {} pages to {}", written.len(), self.dir.display());
        Ok(written)
    }
}

impl ResponseCache for RenderedSite {
    fn invalidate_all(&self) -> Result<()> {
        let pages = self.cached_pages();
        for page in &pages {
            std::fs::remove_file(page)
                .with_context(|| format!("failed to remove {}", page.display()))?;
        }
        tracing::info!(
            "invalidated {} cached pages in {}",
            pages.len(),
            self.dir.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_data(dir: &Path) -> TermbookConfig {
        let data = dir.join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(
            data.join("terms.csv"),
            "term;definition;source\nmorpheme;smallest unit of meaning;db\n",
        )
        .unwrap();
        std::fs::write(
            data.join("texts.csv"),
            "text;translation;source\nGood morning;Buenos días;db\n",
        )
        .unwrap();
        std::fs::write(data.join("tests.csv"), "text;country\nBonjour;France\n").unwrap();
        TermbookConfig::with_data_dir(data)
    }

    #[test]
    fn render_all_writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = seed_data(dir.path());
        let site = RenderedSite::new(dir.path().join("site"));

        let written = site.render_all(&config).unwrap();
        assert_eq!(written.len(), PAGES.len());
        assert_eq!(site.cached_pages().len(), PAGES.len());

        let terms = std::fs::read_to_string(site.dir().join("terms.html")).unwrap();
        assert!(terms.contains("morpheme"));
    }

    #[test]
    fn empty_glossary_still_renders_stats() {
        let dir = tempfile::tempdir().unwrap();
        let config = seed_data(dir.path());
        std::fs::write(config.terms_path(), "term;definition;source\n").unwrap();
        let site = RenderedSite::new(dir.path().join("site"));

        site.render_all(&config).unwrap();
        let stats = std::fs::read_to_string(site.dir().join("stats.html")).unwrap();
        assert!(stats.contains("No terms yet"));
    }

    #[test]
    fn malformed_terms_fail_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let config = seed_data(dir.path());
        std::fs::write(config.terms_path(), "term;definition;source\nbad\n").unwrap();
        let site = RenderedSite::new(dir.path().join("site"));
        assert!(site.render_all(&config).is_err());
    }

    #[test]
    fn invalidate_removes_rendered_pages_only() {
        let dir = tempfile::tempdir().unwrap();
        let config = seed_data(dir.path());
        let site = RenderedSite::new(dir.path().join("site"));
        site.render_all(&config).unwrap();
        std::fs::write(site.dir().join("robots.txt"), "").unwrap();

        site.invalidate_all().unwrap();
        assert!(site.cached_pages().is_empty());
        assert!(site.dir().join("robots.txt").exists());

        // Nothing left to remove.
        site.invalidate_all().unwrap();
    }

    #[test]
    fn submission_through_store_invalidates_site() {
        let dir = tempfile::tempdir().unwrap();
        let config = seed_data(dir.path());
        let site = RenderedSite::new(dir.path().join("site"));
        site.render_all(&config).unwrap();

        let store = TermStore::new(config.terms_path());
        let submission = termbook_core::model::TermSubmission {
            name: None,
            term: "affix".into(),
            definition: "a bound morpheme".into(),
        };
        assert!(store.submit(&submission, &site).unwrap().is_added());
        assert!(site.cached_pages().is_empty());

        site.render_all(&config).unwrap();
        let terms = std::fs::read_to_string(site.dir().join("terms.html")).unwrap();
        assert!(terms.contains("affix"));
    }
}
