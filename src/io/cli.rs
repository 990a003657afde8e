//! Command-line interface and scene orchestration

use crate::generator::{Momentum, PathConfig, RadialConfig, RadialPattern, RibbonPath};
use crate::geometry::{ObstacleSet, Point};
use crate::io::configuration::{
    DEFAULT_FRAME_COUNT, DEFAULT_HEIGHT, DEFAULT_PATH_COUNT, DEFAULT_RADIAL_ITERATIONS,
    DEFAULT_SEED, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS, MAX_FRONTIER_PRIMITIVES, PATH_COLOR,
    PATH_SPEED, RADIAL_SEED_RADIUS_RATIO, VIDEO_DRIFT_PER_FRAME,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_canvas_as_png;
use crate::io::progress::ProgressManager;
use crate::io::video::export_frames_as_gif;
use crate::render::{Canvas, Color, CompositeOp};
use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;

/// Which generator family a run drives, and to what output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Breadth-first radial subdivision, still PNG
    Radial,
    /// Branching ribbon paths, still PNG
    Paths,
    /// Radial subdivision with per-frame drift, animated GIF
    Video,
}

#[derive(Parser)]
#[command(name = "filigree")]
#[command(
    author,
    version,
    about = "Generate recursive branching patterns and ribbon paths"
)]
/// Command-line arguments for the generation tool
pub struct Cli {
    /// Output file (.png for still scenes, .gif for video)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneKind::Radial)]
    pub scene: SceneKind,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Subdivision iterations for the radial and video scenes
    #[arg(short, long, default_value_t = DEFAULT_RADIAL_ITERATIONS)]
    pub iterations: usize,

    /// Number of seed paths for the paths scene
    #[arg(short, long, default_value_t = DEFAULT_PATH_COUNT)]
    pub paths: usize,

    /// Frame count for the video scene
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
    pub frames: usize,

    /// Per-iteration angular drift for the radial scene, in radians
    #[arg(short, long, default_value_t = 0.0)]
    pub drift: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Render one radial frame: black background, difference compositing,
/// a single seed disc at the canvas center
pub fn compose_radial_frame(
    width: u32,
    height: u32,
    d_angle: f64,
    iterations: usize,
    seed: u64,
) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    canvas.fill(Color::BLACK);
    canvas.set_operator(CompositeOp::Difference);

    let center = Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
    let radius = f64::from(height) * RADIAL_SEED_RADIUS_RATIO;
    let config = RadialConfig {
        d_angle,
        ..RadialConfig::default()
    };
    let mut pattern = RadialPattern::new(center, radius, Color::BLACK, config, seed);
    for _ in 0..iterations {
        pattern.iterate(Some(&mut canvas));
    }
    canvas
}

/// Render the paths scene: seed paths at random positions, grown
/// sequentially against a shared obstacle registry
///
/// `on_path` is invoked after each seed path finishes, for progress
/// reporting. Returns the canvas together with the final registry so
/// callers can inspect what was actually registered.
pub fn compose_paths(
    width: u32,
    height: u32,
    count: usize,
    seed: u64,
    mut on_path: impl FnMut(),
) -> (Canvas, ObstacleSet) {
    let mut canvas = Canvas::new(width, height);
    canvas.fill(Color::BLACK);

    let mut obstacles = ObstacleSet::with_border(f64::from(width), f64::from(height));
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..count {
        let start = Point::new(
            rng.random::<f64>() * f64::from(width),
            rng.random::<f64>() * f64::from(height),
        );
        let momentum = Momentum::seeded(&mut rng);
        let path = RibbonPath::new(start, momentum, PATH_SPEED, PATH_COLOR, PathConfig::default());
        path.draw(&mut canvas, &mut obstacles, &mut rng);
        on_path();
    }
    (canvas, obstacles)
}

/// Orchestrates a single scene render with progress tracking
pub struct SceneProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl SceneProcessor {
    /// Create a processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Validate parameters and render the requested scene
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation or output export fails
    pub fn process(&mut self) -> Result<()> {
        self.validate()?;
        match self.cli.scene {
            SceneKind::Radial => self.render_radial(),
            SceneKind::Paths => self.render_paths(),
            SceneKind::Video => self.render_video(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.cli.width == 0 {
            return Err(invalid_parameter("width", &self.cli.width, &"must be positive"));
        }
        if self.cli.height == 0 {
            return Err(invalid_parameter(
                "height",
                &self.cli.height,
                &"must be positive",
            ));
        }

        // The frontier triples per iteration; bound it before allocating
        let frontier_size = 3_usize
            .checked_pow(self.cli.iterations as u32)
            .filter(|size| *size <= MAX_FRONTIER_PRIMITIVES);
        if frontier_size.is_none() {
            return Err(invalid_parameter(
                "iterations",
                &self.cli.iterations,
                &"frontier would exceed the primitive limit",
            ));
        }

        if self.cli.scene == SceneKind::Video {
            if self.cli.frames == 0 {
                return Err(invalid_parameter("frames", &self.cli.frames, &"must be positive"));
            }
            let extension = self.cli.output.extension().and_then(|e| e.to_str());
            if extension != Some("gif") {
                return Err(invalid_parameter(
                    "output",
                    &self.cli.output.display(),
                    &"video output must be a .gif file",
                ));
            }
        }
        Ok(())
    }

    fn render_radial(&mut self) -> Result<()> {
        let canvas = compose_radial_frame(
            self.cli.width,
            self.cli.height,
            self.cli.drift,
            self.cli.iterations,
            self.cli.seed,
        );
        export_canvas_as_png(&canvas, &self.cli.output)
    }

    fn render_paths(&mut self) -> Result<()> {
        if let Some(progress) = &mut self.progress {
            progress.start("Growing paths", self.cli.paths);
        }

        let progress = &self.progress;
        let (canvas, _obstacles) = compose_paths(
            self.cli.width,
            self.cli.height,
            self.cli.paths,
            self.cli.seed,
            || {
                if let Some(progress) = progress {
                    progress.advance();
                }
            },
        );
        if let Some(progress) = &mut self.progress {
            progress.finish();
        }

        export_canvas_as_png(&canvas, &self.cli.output)
    }

    fn render_video(&mut self) -> Result<()> {
        if let Some(progress) = &mut self.progress {
            progress.start("Rendering frames", self.cli.frames);
        }

        let mut frames = Vec::with_capacity(self.cli.frames);
        for frame_index in 0..self.cli.frames {
            let d_angle = frame_index as f64 * VIDEO_DRIFT_PER_FRAME;
            let canvas = compose_radial_frame(
                self.cli.width,
                self.cli.height,
                d_angle,
                self.cli.iterations,
                self.cli.seed,
            );
            frames.push(canvas.into_image());
            if let Some(progress) = &self.progress {
                progress.advance();
            }
        }
        if let Some(progress) = &mut self.progress {
            progress.finish();
        }

        export_frames_as_gif(frames, &self.cli.output, GIF_FRAME_DELAY_MS)
    }
}
