use anyhow::Context as _;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rcalc::{Calculator, Config, LoggingObserver};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().context("invalid calculator configuration")?;
    let mut calc = Calculator::new(config);
    calc.add_observer(Box::new(LoggingObserver));

    // Pick up history from a previous session; a missing file is fine.
    if let Err(err) = calc.load() {
        tracing::debug!(%err, "starting with empty history");
    }

    rcalc::repl::run(&mut calc)
}
