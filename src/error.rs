use std::io::stdout;
use std::panic;

use color_eyre::eyre::Result;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture},
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

pub fn install_hooks() -> Result<()> {
    let hook_builder = color_eyre::config::HookBuilder::default().display_env_section(false);
    let (panic_hook, eyre_hook) = hook_builder.into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        tracing::error!(panic = %panic_info, "panicked");
        #[allow(clippy::print_stderr, reason = "terminal is restored; report goes to the user")]
        {
            eprintln!("{}", panic_hook.panic_report(panic_info));
        }
    }));

    Ok(())
}

/// Leaves the alternate screen and releases mouse capture so a crash never
/// strands the shell in raw mode.
pub fn restore_terminal() -> Result<()> {
    if crossterm::terminal::is_raw_mode_enabled()? {
        execute!(
            stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;
        disable_raw_mode()?;
    }
    Ok(())
}
