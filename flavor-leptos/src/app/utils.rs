use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ExternalUrl {
    DiscordChannel,
    StakeForm,
    FireBreathingEmbed,
}

impl Display for ExternalUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ExternalUrl::DiscordChannel =>
                    "https://discord.com/channels/933057635790491768/933076807157182514",
                ExternalUrl::StakeForm => "https://airtable.com/shr4PJoVfeBvGm2yZ",
                ExternalUrl::FireBreathingEmbed => "https://www.kapwing.com/e/6216f880e8513f007fc21173",
            }
        )
    }
}

impl ExternalUrl {
    pub fn url_discord() -> String {
        ExternalUrl::DiscordChannel.to_string()
    }

    pub fn url_stake() -> String {
        ExternalUrl::StakeForm.to_string()
    }

    pub fn url_fire_embed() -> String {
        ExternalUrl::FireBreathingEmbed.to_string()
    }
}
