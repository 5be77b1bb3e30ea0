use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use gridpad::cli::CliArgs;

mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    gridpad::tracing::init();

    let config = args.into_config();
    tracing::debug!(?config, "starting");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(1200, 720, config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
