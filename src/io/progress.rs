//! Multi-image progress tracking with automatic batching for large runs

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Pipeline stages reported for each image, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Scattering points and building the graph
    Layout,
    /// Extracting and depleting paths
    Depletion,
    /// Painting paper, arrows and glyphs
    Rendering,
    /// Writing the PNG
    Export,
    /// Image finished
    Done,
}

impl Stage {
    /// Number of stages before completion
    pub const COUNT: usize = 4;

    /// Stages completed once this stage is reached
    pub const fn position(self) -> usize {
        self as usize
    }

    /// Short label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Depletion => "paths",
            Self::Rendering => "render",
            Self::Export => "export",
            Self::Done => "done",
        }
    }
}

/// Coordinates progress display for batch generation
///
/// Automatically switches between individual progress bars (for small batches)
/// and an additional batch progress bar (for large batches) based on image count
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    image_bars: Vec<ProgressBar>,
    image_count: usize,
    /// Stores (`name`, `stage`) for rolling window display
    image_states: Vec<(String, Stage)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg:>6}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            image_bars: Vec::new(),
            image_count: 0,
            image_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on image count
    pub fn initialize(&mut self, image_count: usize) {
        self.image_count = image_count;

        // Switch to batch mode for large runs to avoid terminal spam
        if image_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(image_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = image_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(Stage::COUNT as u64);
            pb.set_style(PROGRESS_STYLE.clone());
            self.image_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of images this manager was initialized for
    pub const fn image_count(&self) -> usize {
        self.image_count
    }

    /// Begin tracking an image
    pub fn start_image(&mut self, index: usize, name: &str) {
        if index >= self.image_states.len() {
            self.image_states
                .resize(index + 1, (String::new(), Stage::Layout));
        }
        if let Some(state) = self.image_states.get_mut(index) {
            *state = (name.to_string(), Stage::Layout);
        }
        self.update_bars();
    }

    /// Report that an image entered a new stage
    pub fn advance(&mut self, index: usize, stage: Stage) {
        if let Some(state) = self.image_states.get_mut(index) {
            state.1 = stage;
        }
        self.update_bars();
    }

    /// Mark image as completed and update batch progress
    pub fn complete_image(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.image_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = Stage::Done;
        }
        self.update_bars();
    }

    /// Current stage of an image, if it has been started
    pub fn stage(&self, index: usize) -> Option<Stage> {
        self.image_states
            .get(index)
            .filter(|(name, _)| !name.is_empty())
            .map(|&(_, stage)| stage)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active images
    fn update_bars(&self) {
        let active: Vec<&(String, Stage)> = self
            .image_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, stage)) in visible.iter().copied().enumerate() {
            if let Some(bar) = self.image_bars.get(bar_idx) {
                bar.set_length(Stage::COUNT as u64);
                bar.set_position(stage.position() as u64);
                bar.set_message(stage.label());
                bar.set_prefix(name.clone());
            }
        }

        // Clear any unused bars
        for bar in self.image_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
