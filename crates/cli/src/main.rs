use std::io;

use dresscalc_cli::{Shell, ShellConfig};

fn main() -> anyhow::Result<()> {
    dresscalc_observability::init();

    let config = ShellConfig::from_env()?;
    tracing::info!(title = %config.export.title, "starting dresscalc");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(config);
    shell.run(stdin.lock(), stdout.lock())?;

    tracing::info!("dresscalc finished");
    Ok(())
}
