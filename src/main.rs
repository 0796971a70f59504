use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tokio::sync::mpsc;
use tokio::time::sleep_until;

use codepane::app::action::Action;
use codepane::app::effect::Effect;
use codepane::app::effect_runner::EffectRunner;
use codepane::app::reducer::reduce;
use codepane::app::render_schedule::next_animation_deadline;
use codepane::app::state::AppState;
use codepane::error;
use codepane::infra::adapters::SimulatedExecutor;
use codepane::infra::config::load_config;
use codepane::infra::dataset::load_problem_set;
use codepane::infra::logging::{default_log_path, init_logging};
use codepane::ui::adapters::TuiRenderer;
use codepane::ui::event::handler::handle_event;
use codepane::ui::tui::TuiRunner;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Problem number to open (defaults to the first in the dataset)
    #[arg(short, long)]
    problem: Option<u32>,

    /// JSON problem dataset replacing the bundled one
    #[arg(long, value_name = "PATH")]
    problems: Option<PathBuf>,

    /// Config file (defaults to ~/.config/codepane/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    if let Some(path) = default_log_path() {
        init_logging(&path)?;
    }

    let config = load_config(args.config.as_deref())?;
    let problems = load_problem_set(args.problems.as_deref())?;
    let problem = match args.problem {
        Some(number) => problems
            .by_number(number)
            .ok_or_else(|| eyre!("problem {number} is not in the dataset"))?,
        None => problems
            .problems()
            .first()
            .ok_or_else(|| eyre!("problem dataset is empty"))?,
    }
    .clone();
    tracing::info!(
        problem = problem.number,
        total = problems.len(),
        "starting workspace"
    );

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);
    let executor = Arc::new(SimulatedExecutor::from_config(&config.execution));
    let mut effect_runner = EffectRunner::new(executor, action_tx.clone());

    let mut state = AppState::new(
        problems,
        problem,
        config.layout.workspace(),
        Instant::now(),
    );

    let mut tui = TuiRunner::new()?.mouse_capture(config.ui.mouse_capture);
    tui.enter()?;

    let initial_size = tui.terminal().size()?;
    state.ui.terminal_width = initial_size.width;
    state.ui.terminal_height = initial_size.height;

    loop {
        let now = Instant::now();
        let deadline = next_animation_deadline(&state, now);

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, &state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(&mut state, action, now);

                if state.render_dirty {
                    state.clear_expired_timers(now);
                    effects.push(Effect::Render);
                }

                let mut renderer = TuiRenderer::new(&mut tui);
                effect_runner.run(effects, &mut renderer, &mut state)?;
                state.clear_dirty();
            }
            // Animation deadline reached (spinner, timer, cursor blink, message timeout)
            () = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let now = Instant::now();
                let effects = reduce(&mut state, Action::Render, now);
                let mut renderer = TuiRenderer::new(&mut tui);
                effect_runner.run(effects, &mut renderer, &mut state)?;
                state.clear_dirty();
            }
        }

        if state.should_quit {
            break;
        }
    }

    tui.exit()?;
    tracing::info!("workspace closed");
    Ok(())
}
