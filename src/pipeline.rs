//! The scaffold pipeline: an ordered sequence of independently failable
//! steps that turns a starter-kit source into a populated theme directory.
//! The first failing step halts the run; already-mirrored files stay in
//! place.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::archive::ExtractorFactory;
use crate::constants::{PACK_DIR, RECIPE_DIR};
use crate::error::{Error, Result};
use crate::fetch::fetch_artifact;
use crate::generator::Generator;
use crate::ignore::load_ignore_patterns;
use crate::mirror::{collapse_top_level, mirror};
use crate::naming::machine_name;
use crate::source::SourceLocation;

/// One scaffold invocation, created from user input. Immutable; the
/// destination is fixed before the pipeline runs and never recomputed.
#[derive(Debug)]
pub struct ScaffoldRequest {
    /// Human-readable theme label as the user typed it
    pub label: String,
    /// Identifier-safe slug derived from the label
    pub machine_name: String,
    /// Where the starter kit comes from
    pub source: SourceLocation,
    /// Directory the generated theme lands in
    pub destination: PathBuf,
}

impl ScaffoldRequest {
    pub fn new(label: String, source: SourceLocation, destination: PathBuf) -> Self {
        let machine_name = machine_name(&label);
        Self { label, machine_name, source, destination }
    }

    /// The rendering context shared by destination patterns and token values.
    pub fn context(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.label,
            "machine_name": self.machine_name,
        })
    }
}

/// Scratch state owned by the pipeline for the duration of one invocation.
pub struct ScaffoldState {
    /// Per-invocation temporary workspace, never reused
    pub workspace: PathBuf,
    /// Packed artifact path, set by the fetch step
    pub packed_artifact: Option<PathBuf>,
    /// Directory holding the template content to mirror
    pub source_dir: Option<PathBuf>,
    /// Constant copy of the request's destination
    pub destination: PathBuf,
}

/// A unit of work over the pipeline state.
pub trait Step {
    fn name(&self) -> &'static str;
    fn run(&self, state: &mut ScaffoldState) -> Result<()>;
}

/// Runs the scaffold pipeline for one request.
///
/// The temporary workspace is deleted on every exit path, including early
/// step failure, when the `TempDir` guard drops.
pub fn scaffold(
    request: &ScaffoldRequest,
    factory: &dyn ExtractorFactory,
    generator: &Generator<'_>,
) -> Result<()> {
    let workspace = tempfile::tempdir().map_err(Error::Io)?;
    let mut state = ScaffoldState {
        workspace: workspace.path().to_path_buf(),
        packed_artifact: None,
        source_dir: None,
        destination: request.destination.clone(),
    };

    for step in plan(request, factory, generator) {
        debug!("Running step '{}'.", step.name());
        step.run(&mut state)?;
    }

    Ok(())
}

/// Orders the steps for a request. Remote archives and local packed files
/// pass through fetch-and-extract and collapse; git repositories are cloned;
/// local directories go straight to the mirror.
fn plan<'a>(
    request: &'a ScaffoldRequest,
    factory: &'a dyn ExtractorFactory,
    generator: &'a Generator<'a>,
) -> Vec<Box<dyn Step + 'a>> {
    let mut steps: Vec<Box<dyn Step + 'a>> = Vec::new();

    match &request.source {
        SourceLocation::Archive(_) => {
            steps.push(Box::new(FetchAndExtract { source: &request.source, factory }));
            steps.push(Box::new(Collapse));
        }
        SourceLocation::Git(repo) => {
            steps.push(Box::new(GitClone { repo }));
        }
        SourceLocation::Local(path) if path.is_file() => {
            steps.push(Box::new(FetchAndExtract { source: &request.source, factory }));
            steps.push(Box::new(Collapse));
        }
        SourceLocation::Local(path) => {
            steps.push(Box::new(UseLocal { path }));
        }
    }

    steps.push(Box::new(Mirror));
    steps.push(Box::new(Finalize { generator, context: request.context() }));

    steps
}

struct FetchAndExtract<'a> {
    source: &'a SourceLocation,
    factory: &'a dyn ExtractorFactory,
}

impl Step for FetchAndExtract<'_> {
    fn name(&self) -> &'static str {
        "fetch-and-extract"
    }

    fn run(&self, state: &mut ScaffoldState) -> Result<()> {
        let pack_dir = state.workspace.join(PACK_DIR);
        fs::create_dir_all(&pack_dir).map_err(Error::Io)?;

        let artifact = fetch_artifact(self.source, &pack_dir)?;
        debug!("Packed starter kit at '{}'.", artifact.display());
        state.packed_artifact = Some(artifact.clone());

        let recipe_dir = state.workspace.join(RECIPE_DIR);
        fs::create_dir_all(&recipe_dir).map_err(Error::Io)?;

        let extractor = self.factory.for_file(&artifact)?;
        extractor.extract_to(&recipe_dir)?;
        state.source_dir = Some(recipe_dir);

        Ok(())
    }
}

struct GitClone<'a> {
    repo: &'a str,
}

impl Step for GitClone<'_> {
    fn name(&self) -> &'static str {
        "git-clone"
    }

    fn run(&self, state: &mut ScaffoldState) -> Result<()> {
        let clone_path = state.workspace.join(RECIPE_DIR);
        debug!("Cloning repository '{}'.", self.repo);

        // Set up authentication callbacks
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, _allowed_types| {
            let home = std::env::var("HOME").unwrap_or_default();
            git2::Cred::ssh_key(
                username_from_url.unwrap_or("git"),
                None,
                Path::new(&format!("{}/.ssh/id_rsa", home)),
                None,
            )
        });

        // Configure fetch options with callbacks
        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);
        builder.clone(self.repo, &clone_path)?;

        state.source_dir = Some(clone_path);
        Ok(())
    }
}

struct UseLocal<'a> {
    path: &'a Path,
}

impl Step for UseLocal<'_> {
    fn name(&self) -> &'static str {
        "resolve-local"
    }

    fn run(&self, state: &mut ScaffoldState) -> Result<()> {
        if !self.path.is_dir() {
            return Err(Error::Fetch(format!(
                "starter kit directory '{}' does not exist",
                self.path.display()
            )));
        }
        state.source_dir = Some(self.path.to_path_buf());
        Ok(())
    }
}

struct Collapse;

impl Step for Collapse {
    fn name(&self) -> &'static str {
        "collapse"
    }

    fn run(&self, state: &mut ScaffoldState) -> Result<()> {
        let extracted = state
            .source_dir
            .clone()
            .ok_or_else(|| Error::Extract("no extraction output to inspect".to_string()))?;
        state.source_dir = Some(collapse_top_level(&extracted)?);
        Ok(())
    }
}

struct Mirror;

impl Step for Mirror {
    fn name(&self) -> &'static str {
        "mirror"
    }

    fn run(&self, state: &mut ScaffoldState) -> Result<()> {
        let source = state
            .source_dir
            .clone()
            .ok_or_else(|| Error::Mirror("no resolved source directory".to_string()))?;
        let ignored = load_ignore_patterns(&source)?;
        let copied = mirror(&source, &state.destination, &ignored)?;
        debug!("Mirrored {} files into '{}'.", copied, state.destination.display());
        Ok(())
    }
}

struct Finalize<'a> {
    generator: &'a Generator<'a>,
    context: serde_json::Value,
}

impl Step for Finalize<'_> {
    fn name(&self) -> &'static str {
        "finalize"
    }

    fn run(&self, state: &mut ScaffoldState) -> Result<()> {
        let changed = self.generator.generate(&state.destination, &self.context)?;
        debug!(
            "Substituted tokens in {} entries under '{}'.",
            changed,
            state.destination.display()
        );
        Ok(())
    }
}
