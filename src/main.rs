use clap::Parser;
use tagged_arena::{
    arena::Arena,
    config::{ArenaConfig, Cli},
    main_loop::MainLoop,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match ArenaConfig::try_from(&cli)
        .inspect_err(|e| log::error!("Invalid configuration, msg = {e}"))
    {
        Ok(config) => config,
        Err(_) => std::process::exit(1),
    };

    let mut arena = Arena::new(&config);

    let main_loop = MainLoop::new(config.fps).with_frame_limit(config.frame_limit);
    let mut frame_count = 0usize;
    for delta_time_in_secs in main_loop.iter() {
        arena.tick(delta_time_in_secs);
        frame_count += 1;
    }

    let stats = arena.stats();
    log::info!(
        "Finished after {} frames, active enemies = {}, active projectiles = {}",
        frame_count,
        stats.active_enemies,
        stats.active_projectiles
    );
}
