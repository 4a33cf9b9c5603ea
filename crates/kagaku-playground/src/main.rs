//! Kagaku Playground - headless chemistry scenario demo

mod scenario;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Kagaku Playground");

    scenario::run()
}
