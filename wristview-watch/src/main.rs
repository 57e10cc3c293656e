//! Watch UI entry point.

use tracing_subscriber::EnvFilter;
use wristview::Application;
use wristview_watch::app::build_router;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they can be redirected away from the display:
    // `RUST_LOG=debug wristview-watch 2>watch.log`.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app = Application::new();
    app.run(|cx| Ok(build_router(cx)))
}
