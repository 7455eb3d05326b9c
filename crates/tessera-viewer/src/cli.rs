use clap::Parser;
use tessera_engine::geometry::PyramidParams;

/// Opens a window and draws one vertex-colored pyramid.
#[derive(Parser, Debug, Clone)]
#[command(name = "tessera-viewer")]
#[command(about = "Procedural pyramid viewer", long_about = None)]
pub struct Cli {
    /// Apex height above the base plane
    #[arg(long, default_value_t = 40.0, allow_negative_numbers = true)]
    pub height: f32,

    /// Base center, X
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_x: f32,

    /// Base center, Y
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_y: f32,

    /// Base center, Z
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_z: f32,

    /// Base width along X (defaults to the height)
    #[arg(long, allow_negative_numbers = true)]
    pub width_x: Option<f32>,

    /// Base width along Y (defaults to the height)
    #[arg(long, allow_negative_numbers = true)]
    pub width_y: Option<f32>,

    /// Window title
    #[arg(long, default_value = "tessera")]
    pub title: String,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,
}

impl Cli {
    pub fn pyramid_params(&self) -> PyramidParams {
        PyramidParams::new(
            self.height,
            self.center_x,
            self.center_y,
            self.center_z,
            self.width_x.unwrap_or(self.height),
            self.width_y.unwrap_or(self.height),
        )
    }
}
