mod api;
mod cli;
mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::api::{HttpVoltageApi, VoltageApi};
use crate::cli::Cli;
use crate::config::Config;
use crate::ui::{Action, App, render};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("加载配置失败: {}", config_path.display()))?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(log_file) = &cli.log_file {
        config.log_file = Some(log_file.clone());
    }
    config.validate()?;

    let log_path = config.log_path()?;
    logging::init_file_logger(&log_path)
        .with_context(|| format!("无法打开日志文件: {}", log_path.display()))?;

    let scope = cli.scope();
    log::info!("starting against {} with scope {:?}", config.base_url, scope);

    let api = HttpVoltageApi::from_config(&config)?;
    let mut app = App::new(scope, config.page_size);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app, &api);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    log::info!("exited");
    Ok(())
}

fn run_app<A: VoltageApi>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: &A,
) -> io::Result<()> {
    // 首次加载第一页
    ui::drive(app, api, Action::Mount, |app| {
        terminal.draw(|f| render(f, app)).map(drop)
    })?;

    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                let quit = ui::handle_key_event(app, api, key.code, |app| {
                    terminal.draw(|f| render(f, app)).map(drop)
                })?;
                if quit {
                    break;
                }
            }
        }
    }
    Ok(())
}
