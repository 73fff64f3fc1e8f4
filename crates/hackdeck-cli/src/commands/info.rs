use clap::Subcommand;
use hackdeck_core::content;

#[derive(Subcommand)]
pub enum InfoAction {
    /// Event timeline milestones
    Timeline,
    /// Problem statements
    Problems,
    /// Prize tiers
    Prizes,
    /// Rules and eligibility
    Rules,
    /// Frequently asked questions
    Faqs,
}

pub fn run(action: InfoAction) -> Result<(), Box<dyn std::error::Error>> {
    let json = match action {
        InfoAction::Timeline => serde_json::to_string_pretty(&content::milestones())?,
        InfoAction::Problems => serde_json::to_string_pretty(&content::problems())?,
        InfoAction::Prizes => serde_json::to_string_pretty(&content::prizes())?,
        InfoAction::Rules => serde_json::to_string_pretty(&content::rules())?,
        InfoAction::Faqs => serde_json::to_string_pretty(&content::faqs())?,
    };
    println!("{json}");
    Ok(())
}
