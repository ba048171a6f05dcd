use macroquad::prelude::*;
use plankton::simulation::ecosystem::Ecosystem;
use plankton::simulation::error::ConfigError;
use plankton::simulation::params::Params;
use plankton::simulation::random::Random;
use tracing::{error, info};

mod graphics;

fn window_conf() -> Conf {
    Conf {
        window_title: "Plankton".to_owned(),
        window_width: 480,
        window_height: 480,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_params() -> Result<Params, ConfigError> {
    let path = std::env::args().nth(1);
    let params = Params::load_or_default(path.as_deref())?;
    if let Some(path) = path {
        info!(path = %path, "loaded parameters");
    }
    Ok(params)
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let params = match load_params() {
        Ok(params) => params,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    let random = params.seed.map_or_else(Random::from_os_rng, Random::seeded);

    let mut canvas = graphics::Canvas::default();
    let mut ecosystem = Ecosystem::new(&params, random, &mut canvas);
    let mut show_stats = false;

    info!(
        width = params.canvas_width,
        height = params.canvas_height,
        "starting plankton simulation"
    );

    loop {
        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = graphics::to_canvas(mouse_position(), &params);
            ecosystem.attract(&params, x, y);
        }
        if is_key_pressed(KeyCode::S) {
            show_stats = !show_stats;
        }
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        ecosystem.step(&params, &mut canvas);

        graphics::draw_background();
        graphics::draw_plankton(&ecosystem, &params);
        if show_stats {
            graphics::draw_stats(&ecosystem);
        }

        next_frame().await;
    }

    info!(
        created = canvas.created,
        destroyed = canvas.destroyed,
        ticks = ecosystem.stats.ticks,
        "simulation stopped"
    );
}
