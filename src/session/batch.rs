use crate::encode::sink::ImageSink;
use crate::encode::tga::TGA_EXTENSION;
use crate::foundation::core::Resolution;
use crate::foundation::error::{SidleError, SidleResult};
use crate::foundation::paths::normalize_lexically;
use crate::render::cpu::render_image;
use crate::scene::model::Manifest;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Options controlling how a [`BatchSession`] renders.
#[derive(Clone, Debug, Default)]
pub struct BatchOpts {
    /// Render jobs on a dedicated rayon thread pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Write under this directory instead of the manifest's `outputPath`.
    pub output_root: Option<PathBuf>,
}

/// One (resolution, image) pair and where its file goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderJob {
    pub resolution: Resolution,
    pub image_index: usize,
    pub path: PathBuf,
}

/// Result of one written image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedOutput {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
    pub sha256: String,
}

/// Batch statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub images_written: u64,
    pub pixels_written: u64,
}

/// Everything a finished batch produced, in manifest order.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub outputs: Vec<RenderedOutput>,
    pub stats: BatchStats,
}

/// Renders every image of a manifest at every declared resolution.
///
/// Output layout is `<root>/res{W}x{H}/<name>.tga`, with resolutions as the outer loop and
/// images as the inner loop, both in declaration order.
pub struct BatchSession<'a> {
    manifest: &'a Manifest,
    root: PathBuf,
    opts: BatchOpts,
}

impl<'a> BatchSession<'a> {
    /// Validate the manifest and resolve the output root.
    pub fn new(manifest: &'a Manifest, opts: BatchOpts) -> SidleResult<Self> {
        manifest.validate()?;
        if opts.threads == Some(0) {
            return Err(SidleError::validation("'threads' must be >= 1 when set"));
        }
        let root = match &opts.output_root {
            Some(p) => normalize_lexically(p),
            None => manifest.normalized_output_path(),
        };
        Ok(Self {
            manifest,
            root,
            opts,
        })
    }

    pub fn output_root(&self) -> &Path {
        &self.root
    }

    /// Enumerate jobs in output order without touching the filesystem.
    pub fn plan(&self) -> Vec<RenderJob> {
        let count = self.manifest.resolutions.len() * self.manifest.images.len();
        let mut jobs = Vec::with_capacity(count);
        for &resolution in &self.manifest.resolutions {
            let dir = self.root.join(resolution.dir_name());
            for (image_index, image) in self.manifest.images.iter().enumerate() {
                jobs.push(RenderJob {
                    resolution,
                    image_index,
                    path: dir.join(format!("{}.{TGA_EXTENSION}", image.name)),
                });
            }
        }
        jobs
    }

    /// Create output directories, render every job, and hand each frame to `sink`.
    ///
    /// Stops at the first error. Files already written stay on disk.
    #[tracing::instrument(skip(self, sink), fields(root = %self.root.display()))]
    pub fn run(&self, sink: &dyn ImageSink) -> SidleResult<BatchReport> {
        for &resolution in &self.manifest.resolutions {
            ensure_dir(&self.root.join(resolution.dir_name()))?;
        }

        let jobs = self.plan();
        let outputs = if self.opts.parallel {
            let pool = build_thread_pool(self.opts.threads)?;
            pool.install(|| {
                jobs.par_iter()
                    .map(|job| self.run_job(job, sink))
                    .collect::<SidleResult<Vec<_>>>()
            })?
        } else {
            jobs.iter()
                .map(|job| self.run_job(job, sink))
                .collect::<SidleResult<Vec<_>>>()?
        };

        let stats = BatchStats {
            images_written: outputs.len() as u64,
            pixels_written: outputs
                .iter()
                .map(|o| u64::from(o.width) * u64::from(o.height))
                .sum(),
        };
        tracing::info!(
            images = stats.images_written,
            pixels = stats.pixels_written,
            "batch complete"
        );
        Ok(BatchReport { outputs, stats })
    }

    fn run_job(&self, job: &RenderJob, sink: &dyn ImageSink) -> SidleResult<RenderedOutput> {
        let image = &self.manifest.images[job.image_index];
        let frame = render_image(image, job.resolution)?;
        let receipt = sink.write_image(&job.path, &frame)?;
        Ok(RenderedOutput {
            path: job.path.clone(),
            width: frame.width,
            height: frame.height,
            bytes: receipt.bytes,
            sha256: receipt.sha256,
        })
    }
}

/// Create `dir` and its parents; an existing directory is fine, anything else is not.
fn ensure_dir(dir: &Path) -> SidleResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        SidleError::filesystem(format!(
            "could not create output folder '{}': {e}",
            dir.display()
        ))
    })?;
    if !dir.is_dir() {
        return Err(SidleError::filesystem(format!(
            "could not create output folder '{}'",
            dir.display()
        )));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> SidleResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SidleError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/batch.rs"]
mod tests;
