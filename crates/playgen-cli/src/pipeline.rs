use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use playgen_core::{
    keys, identity::UNKNOWN_NAME, ConfigStore, IdentitySource, Materializer, SeedFetcher,
    TemplateContext,
};

use crate::questions::{self, PLAY_APP, REACTIVE_PLAY_APP};
use crate::prompt::UserPrompt;
use crate::ui;

/// Where the fetched seed lands before materialization. Removed again in
/// the finalizing stage.
pub const STAGING_DIR: &str = ".playgen-seed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Initializing,
    Prompting,
    Configuring,
    Writing,
    Installing,
    Finalizing,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Initializing => "Initializing",
            Stage::Prompting => "Prompting",
            Stage::Configuring => "Configuring",
            Stage::Writing => "Writing",
            Stage::Installing => "Installing",
            Stage::Finalizing => "Finalizing",
        }
    }
}

/// Values taken from the command line before any question is asked.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub app_name: Option<String>,
    pub app: bool,
    pub reactive: bool,
    pub strict: bool,
}

/// The scaffolding pipeline. Stages run strictly in order; each stage is a
/// blocking call whose return gates the next one. There is no cancellation
/// and no rollback of files already written when a later stage fails.
pub struct Pipeline<'a, P: UserPrompt, F: SeedFetcher, I: IdentitySource> {
    dest: PathBuf,
    opts: RunOptions,
    prompt: &'a P,
    fetcher: &'a F,
    identity: &'a I,
}

impl<'a, P: UserPrompt, F: SeedFetcher, I: IdentitySource> Pipeline<'a, P, F, I> {
    pub fn new(
        dest: impl Into<PathBuf>,
        opts: RunOptions,
        prompt: &'a P,
        fetcher: &'a F,
        identity: &'a I,
    ) -> Self {
        Self {
            dest: dest.into(),
            opts,
            prompt,
            fetcher,
            identity,
        }
    }

    pub fn run(&self) -> Result<()> {
        ui::banner(&self.dest);

        let mut store = ConfigStore::load_or_default(&self.dest)
            .with_context(|| format!("loading {} in {}", ConfigStore::FILE_NAME, self.dest.display()))?;

        self.stage(Stage::Initializing, || self.initializing(&mut store))?;
        self.stage(Stage::Prompting, || self.prompting(&mut store))?;
        self.stage(Stage::Configuring, || self.configuring(&store))?;
        self.stage(Stage::Writing, || self.writing(&store))?;
        // Install stage disabled: the seed's own package manifest drives
        // dependency installation through its postinstall hook.
        ui::stage_skipped(Stage::Installing.label());
        self.stage(Stage::Finalizing, || self.finalizing())?;

        Ok(())
    }

    fn stage(&self, stage: Stage, body: impl FnOnce() -> Result<()>) -> Result<()> {
        ui::stage_begin(stage.label());
        body().with_context(|| format!("{} stage failed", stage.label()))?;
        ui::stage_done(stage.label());
        Ok(())
    }

    fn staging_dir(&self) -> PathBuf {
        self.dest.join(STAGING_DIR)
    }

    /// Applies flags and the positional argument, then stores the git
    /// identity. `--reactive` is evaluated after `--app` and wins when both
    /// are given.
    fn initializing(&self, store: &mut ConfigStore) -> Result<()> {
        if self.opts.app {
            store.set(keys::APP_TYPE, PLAY_APP);
        }
        if self.opts.reactive {
            store.set(keys::APP_TYPE, REACTIVE_PLAY_APP);
        }
        if let Some(name) = &self.opts.app_name {
            store.set(keys::APP_NAME, questions::kebab(name));
        }

        let identity = self.identity.lookup();
        if identity.name == UNKNOWN_NAME {
            ui::warn("git identity not found; using placeholder author");
        }
        store.set(keys::GITHUB_NAME, identity.name.clone());
        store.set(keys::GITHUB_EMAIL, identity.email.clone());
        store.set(keys::GITHUB_NAME_AND_EMAIL, identity.name_and_email());

        store.save()?;
        Ok(())
    }

    /// Asks whatever the config does not answer yet, in display order.
    fn prompting(&self, store: &mut ConfigStore) -> Result<()> {
        let author = store.require(keys::GITHUB_NAME_AND_EMAIL)?.to_string();
        ui::note(&format!("Current GitHub user: {author}"));
        if let Some(app_type) = store.get(keys::APP_TYPE) {
            ui::note(&format!("Project type: {app_type}"));
        }
        if let Some(app_name) = store.get(keys::APP_NAME) {
            ui::note(&format!("Project name: {app_name}"));
        }

        let dest_name = self
            .dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "app".to_string());
        let table = questions::question_table(&dest_name, &author);
        let remaining = questions::unanswered(table, store);
        questions::collect(&remaining, self.prompt, store)?;

        store.save()?;
        Ok(())
    }

    /// Fetches the seed into staging, copies it wholesale into the
    /// destination, and patches the two metadata manifests. Patch failures
    /// are reported and skipped unless `--strict` is set.
    fn configuring(&self, store: &ConfigStore) -> Result<()> {
        let staging = self.staging_dir();
        if staging.exists() {
            // stale staging from an interrupted run
            fs::remove_dir_all(&staging)
                .with_context(|| format!("clearing {}", staging.display()))?;
        }
        self.fetcher.fetch(&staging).context("fetching the seed repository")?;

        let materializer = self.materializer(&staging);
        materializer.copy_seed().context("copying the seed into the destination")?;

        let report = materializer.patch_manifests(
            store.require(keys::APP_NAME)?,
            store.require(keys::APP_DESCRIPTION)?,
            store.require(keys::GITHUB_NAME_AND_EMAIL)?,
        )?;
        report_failures(&report);
        Ok(())
    }

    /// Snapshots the template context and applies the writing manifest.
    fn writing(&self, store: &ConfigStore) -> Result<()> {
        let ctx = TemplateContext::from_store(store)?;
        let report = self.materializer(&self.staging_dir()).write(&ctx)?;
        report_failures(&report);
        Ok(())
    }

    /// Removes the staging clone and says good bye.
    fn finalizing(&self) -> Result<()> {
        let staging = self.staging_dir();
        if staging.exists() {
            if let Err(e) = fs::remove_dir_all(&staging) {
                ui::warn(&format!("could not remove {}: {e}", staging.display()));
            }
        }
        ui::outro();
        Ok(())
    }

    fn materializer(&self, staging: &Path) -> Materializer {
        Materializer::new(staging, &self.dest).strict(self.opts.strict)
    }
}

fn report_failures(report: &playgen_core::Report) {
    for failure in &report.failures {
        ui::warn(&format!("skipped {}: {}", failure.op, failure.error));
    }
}
