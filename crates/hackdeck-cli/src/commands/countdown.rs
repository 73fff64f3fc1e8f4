use clap::Subcommand;
use hackdeck_core::{Countdown, Event, EventConfig, SystemClock};

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Print the current countdown state as JSON
    Status,
    /// Sample once per second, printing each published change as JSON
    Watch {
        /// Exit once the deadline has been reached
        #[arg(long)]
        until_reached: bool,
    },
}

pub fn run(action: CountdownAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = EventConfig::load_or_default();
    let clock = SystemClock;
    let mut countdown = Countdown::new(config.countdown_target()?);
    countdown.start();

    match action {
        CountdownAction::Status => {
            let snapshot = countdown.snapshot(&clock);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        CountdownAction::Watch { until_reached } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async {
                let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
                loop {
                    interval.tick().await;
                    if let Some(event) = countdown.tick(&clock) {
                        println!("{}", serde_json::to_string(&event)?);
                        if until_reached && matches!(event, Event::CountdownReached { .. }) {
                            break;
                        }
                    }
                }
                Ok::<(), Box<dyn std::error::Error>>(())
            })?;
        }
    }
    Ok(())
}
