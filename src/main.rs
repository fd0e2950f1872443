use anyhow::Result;
use crossterm::{
    event::{self as crossterm_event, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{io, sync::Arc, time::{Duration, Instant}};
use tokio::sync::{mpsc, Mutex};
use tracing::{error, info};

mod app;
mod config;
mod constants;
mod error;
mod host;
mod journal;
mod logging;
mod notice;
mod prompts;
mod storage;
mod tip;
mod ui;
mod utils;
mod wallet;

use app::App;
use config::Config;
use constants::TICK_MILLIS;
use host::{EnvProbe, HostProbe};
use journal::Journal;
use prompts::PromptDeck;
use storage::{FileStore, KeyValueStore};
use tip::{Erc8021, TipController};
use wallet::{RpcWallet, WalletProvider};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    config.validate()?;
    logging::init(&config.data_dir, &config.log_filter)?;
    info!(data_dir = %config.data_dir.display(), "starting {}", constants::APP_NAME);

    let app = Arc::new(Mutex::new(build_app(&config).await?));

    // 設置終端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, Arc::clone(&app)).await;

    // 恢復終端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!("{:?}", err);
        println!("{:?}", err);
    }

    Ok(())
}

async fn build_app(config: &Config) -> Result<App> {
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.data_dir)?);
    let journal = Journal::load(store);
    info!(entries = journal.len(), "journal loaded");

    let provider: Option<Arc<dyn WalletProvider>> = config
        .wallet_rpc_url
        .clone()
        .map(|url| Arc::new(RpcWallet::new(url, config.wallet_timeout)) as Arc<dyn WalletProvider>);
    if provider.is_none() {
        info!("no wallet endpoint configured; tipping will report a missing wallet");
    }

    let (notice_tx, notice_rx) = mpsc::unbounded_channel();
    let tips = TipController::new(provider, Arc::new(Erc8021), config.tip.clone(), notice_tx);

    let probe = EnvProbe;
    let host_env = host::detect(Some(&probe as &dyn HostProbe), config.host_timeout).await;
    info!(env = host_env.label(), "host detected");

    Ok(App::new(journal, PromptDeck::today(), tips, notice_rx, host_env))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> Result<()> {
    loop {
        {
            let mut app_guard = app.lock().await;
            app_guard.tick(Instant::now());
            terminal.draw(|f| ui::draw(f, &mut app_guard))?;
        }

        if crossterm_event::poll(Duration::from_millis(TICK_MILLIS))? {
            if let Event::Key(key) = crossterm_event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !handle_key(Arc::clone(&app), key).await {
                    return Ok(());
                }
            }
        }
    }
}

/// Returns `false` when the app should quit.
async fn handle_key(app: Arc<Mutex<App>>, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return false;
    }

    let tip_open = app.lock().await.is_tip_open;
    if tip_open {
        // tip sheet keys
        match key.code {
            KeyCode::Esc => app.lock().await.close_tip(),
            KeyCode::Enter => {
                // the flow reports through notices; the handle is not awaited
                let _ = App::handle_send_tip(Arc::clone(&app)).await;
            }
            KeyCode::Left => app.lock().await.cycle_preset(-1),
            KeyCode::Right => app.lock().await.cycle_preset(1),
            KeyCode::Backspace => app.lock().await.custom_amount_backspace(),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                let mut app_guard = app.lock().await;
                if !app_guard.tip_state().is_busy() {
                    app_guard.custom_amount_char(c);
                }
            }
            _ => {}
        }
        return true;
    }

    let mut app_guard = app.lock().await;
    match key.code {
        KeyCode::Esc => return false,
        KeyCode::Char('t') if ctrl => app_guard.open_tip(),
        KeyCode::Char('p') if ctrl => app_guard.new_prompt(),
        KeyCode::Char('l') if ctrl => app_guard.clear_inputs(),
        KeyCode::Char('n') if ctrl => app_guard.newline(),
        KeyCode::Char(c) if !ctrl => app_guard.input_char(c),
        KeyCode::Tab | KeyCode::BackTab => app_guard.toggle_focus(),
        KeyCode::Backspace => app_guard.backspace(),
        KeyCode::Enter => app_guard.tear_clip(),
        KeyCode::Up => app_guard.previous_item(),
        KeyCode::Down => app_guard.next_item(),
        _ => {}
    }
    true
}
