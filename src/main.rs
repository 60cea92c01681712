use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use proctop::app::{App, Command, Viewport};
use proctop::config::Settings;
use proctop::event::{EventHandler, request_sample, schedule_tick};
use proctop::logging;
use proctop::system::source::{HostSource, MetricsSource};
use proctop::ui;
use proctop::ui::theme::{Styles, detect_color_support};

#[derive(Parser)]
#[command(
    name = "proctop",
    version,
    about = "Live system monitor with a sortable process table"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    Cli::parse();
    logging::init_from_env()?;

    let settings = Settings::default();
    let styles = Styles::new(detect_color_support());
    let source: Arc<dyn MetricsSource> = Arc::new(HostSource::new());

    let mut terminal = ratatui::try_init()?;
    let result = run(&mut terminal, settings, &styles, source).await;
    ratatui::restore();

    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    settings: Settings,
    styles: &Styles,
    source: Arc<dyn MetricsSource>,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(
        settings,
        Viewport::new(size.width, size.height),
        source.cpu_count(),
    );
    let mut events = EventHandler::attached();
    let tx = events.sender();

    let execute = |commands: Vec<Command>| -> Result<bool> {
        for command in commands {
            match command {
                Command::ScheduleTick(period) => schedule_tick(tx.clone(), period),
                Command::Sample => request_sample(tx.clone(), Arc::clone(&source)),
                Command::Quit => return Ok(false),
                Command::Fail(reason) => return Err(eyre!(reason)),
            }
        }
        Ok(true)
    };

    execute(app.init())?;
    terminal.draw(|frame| ui::draw(frame, &app.render_request(), styles))?;

    while let Some(message) = events.next().await {
        if !execute(app.update(message))? {
            break;
        }
        terminal.draw(|frame| ui::draw(frame, &app.render_request(), styles))?;
    }

    tracing::debug!("event loop finished");
    Ok(())
}
