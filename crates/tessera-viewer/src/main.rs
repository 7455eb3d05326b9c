mod cli;

use anyhow::Result;
use clap::Parser;

use tessera_engine::core::{App, AppControl, FrameCtx};
use tessera_engine::device::GpuInit;
use tessera_engine::geometry::PyramidParams;
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::paint::Color;
use tessera_engine::render::gpu::{GpuBackend, ShapePipeline};
use tessera_engine::render::shapes::Pyramid;
use tessera_engine::render::{Camera, Drawable};
use tessera_engine::window::{Runtime, RuntimeConfig};

use cli::Cli;

const CLEAR: Color = Color::rgb(0.08, 0.08, 0.1);

/// Draws one pyramid per frame. GPU resources are created on the first frame,
/// when a device exists.
struct Viewer {
    params: PyramidParams,
    camera: Camera,
    pipeline: ShapePipeline,
    pyramid: Option<Pyramid<GpuBackend>>,
}

impl Viewer {
    fn new(params: PyramidParams) -> Self {
        Self {
            params,
            camera: Camera::framing(&params),
            pipeline: ShapePipeline::new(),
            pyramid: None,
        }
    }
}

impl App for Viewer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Self { params, camera, pipeline, pyramid } = self;

        ctx.render(CLEAR, |rctx, target| {
            let pyramid = pyramid.get_or_insert_with(|| Pyramid::new(rctx, *params));
            let Some(mut pass) = pipeline.begin(rctx, target, camera) else {
                return;
            };
            pyramid.draw(&mut pass);
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..Default::default()
    });

    let params = cli.pyramid_params();
    log::info!("tessera-viewer: {params:?}");

    let config = RuntimeConfig {
        title: cli.title.clone(),
        ..Default::default()
    };

    Runtime::run(config, GpuInit::default(), Viewer::new(params))
}
