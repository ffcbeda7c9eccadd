// Entrypoint for the harness.
// - Fails before the menu is shown when the API key is missing; the error
//   is returned from `main`, so the process exits with a non-zero status.
// - Everything else lives in the library; `main` only wires it together.

use sharpapi_cli::{api::SharpApiClient, config::Settings, ui::main_menu, ui::TerminalPrompter};
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::from_env()?;
    let api = SharpApiClient::new(&settings)?;

    let mut prompter = TerminalPrompter;
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    main_menu(&api, &settings, &mut prompter, &mut out, &mut err)?;
    Ok(())
}
