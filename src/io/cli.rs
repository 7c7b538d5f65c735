//! Command-line interface for generating one or more path illustrations

use crate::algorithm::executor::{SketchConfig, SketchExecutor};
use crate::io::configuration::{DEFAULT_OUTPUT, DEFAULT_SEED, SEED_SEPARATOR};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::{ProgressManager, Stage};
use crate::render::canvas::RasterCanvas;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "mazepaper")]
#[command(
    author,
    version,
    about = "Draw maze-like treasure paths on procedurally textured paper"
)]
/// Command-line arguments for the illustration generator
pub struct Cli {
    /// Output PNG file (batch runs insert the seed before the extension)
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of images to generate, with consecutive seeds
    #[arg(short, long, default_value_t = 1)]
    pub count: u64,

    /// Maximum number of paths to extract (defaults to canvas size / 50)
    #[arg(short = 'i', long)]
    pub paths: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate images even if the output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for the chosen verbosity
    pub const fn log_level(&self) -> &'static str {
        if self.quiet { "error" } else { "info" }
    }

    /// Layout configuration with any command-line overrides applied
    pub fn sketch_config(&self) -> SketchConfig {
        let mut config = SketchConfig::default();
        if let Some(paths) = self.paths {
            config.path_budget = paths;
        }
        config
    }

    /// Check arguments that clap cannot validate on its own
    ///
    /// # Errors
    ///
    /// Returns an error if the output is not a PNG path, the count is zero, or
    /// the layout configuration is invalid
    pub fn validate(&self) -> Result<()> {
        let is_png = self
            .output
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            return Err(invalid_parameter(
                "output",
                &self.output.display(),
                &"must be a .png file",
            ));
        }
        if self.count == 0 {
            return Err(invalid_parameter("count", &self.count, &"must be at least 1"));
        }
        self.sketch_config().validate()
    }
}

/// One image to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Seed driving every random choice for this image
    pub seed: u64,
    /// Destination file
    pub output: PathBuf,
}

/// Orchestrates generation of every requested image with progress tracking
pub struct BatchRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate images according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, generation or export fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;
        let jobs = self.collect_jobs();

        if jobs.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        for (index, job) in jobs.iter().enumerate() {
            self.run_job(job, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Images still to generate, skipping existing outputs unless told otherwise
    pub fn collect_jobs(&self) -> Vec<Job> {
        (0..self.cli.count)
            .map(|k| {
                let seed = self.cli.seed.wrapping_add(k);
                Job {
                    seed,
                    output: Self::output_path(&self.cli.output, seed, self.cli.count),
                }
            })
            .filter(|job| self.should_generate(job))
            .collect()
    }

    fn should_generate(&self, job: &Job) -> bool {
        if !self.cli.skip_existing() || !job.output.exists() {
            return true;
        }
        log::warn!("Skipping: {} (output exists)", job.output.display());
        false
    }

    fn run_job(&mut self, job: &Job, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let name = job
            .output
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_image(index, &name);
        }
        let config = self.cli.sketch_config();
        let mut executor = SketchExecutor::new(config, job.seed)?;

        self.advance(index, Stage::Depletion);
        executor.deplete();

        self.advance(index, Stage::Rendering);
        let mut canvas = RasterCanvas::new(config.canvas_size, executor.noise_seed());
        executor.render(&mut canvas);

        self.advance(index, Stage::Export);
        export_png(canvas.image(), &job.output)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_image(index);
        }
        log::info!(
            "seed {} finished in {:.2?}",
            job.seed,
            start_time.elapsed()
        );

        Ok(())
    }

    fn advance(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index, stage);
        }
    }

    /// Destination for an image: the output itself for single runs, otherwise
    /// `<stem>_<seed>.<ext>` next to it
    pub fn output_path(output: &Path, seed: u64, count: u64) -> PathBuf {
        if count <= 1 {
            return output.to_path_buf();
        }

        let stem = output.file_stem().unwrap_or_default();
        let extension = output.extension().unwrap_or_default();
        let name = format!(
            "{}{}{}.{}",
            stem.to_string_lossy(),
            SEED_SEPARATOR,
            seed,
            extension.to_string_lossy()
        );

        if let Some(parent) = output.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
