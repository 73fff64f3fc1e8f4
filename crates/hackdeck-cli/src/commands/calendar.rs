use clap::Subcommand;
use hackdeck_core::{google_calendar_link, outlook_calendar_link, EventConfig};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Google Calendar event-template link
    Google,
    /// Outlook Live compose link
    Outlook,
}

pub fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = EventConfig::load_or_default();
    let window = config.event_window()?;
    let link = match action {
        CalendarAction::Google => google_calendar_link(
            &window,
            &config.event.name,
            &config.event.details,
            &config.event.location,
        ),
        CalendarAction::Outlook => outlook_calendar_link(
            &window,
            &config.event.name,
            &config.event.blurb,
            &config.event.location,
        ),
    };
    println!("{link}");
    Ok(())
}
