use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use picture_vocab::{
    draw, load_first, loaders_from_config, logger, App, Config, Silent, Speak, Speaker, VocabError,
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Input poll interval while no timer is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<(), VocabError> {
    let config = Config::new();
    if let Err(e) = logger::init(&config) {
        eprintln!("warning: {}", e);
    }
    tracing::info!("starting picture-vocab");

    let runtime = tokio::runtime::Runtime::new()?;
    let loaders = loaders_from_config(&config);
    let dataset = runtime.block_on(load_first(&loaders));
    drop(runtime);

    if let Err(e) = &dataset {
        tracing::error!(error = %e, "failed to load vocabulary");
    }

    let speaker = build_speaker(&config);
    let mut app = App::new(dataset, config, speaker);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting picture-vocab");
    result.map_err(VocabError::from)
}

fn build_speaker(config: &Config) -> Box<dyn Speak> {
    if !config.speech.enabled {
        return Box::new(Silent);
    }
    match Speaker::spawn(config.speech.clone()) {
        Ok(speaker) => Box::new(speaker),
        Err(e) => {
            tracing::warn!(error = %e, "speech worker unavailable");
            Box::new(Silent)
        }
    }
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.tick(Instant::now());
    }
}
