use clap::ValueEnum;
use std::fmt;

/// Prebuilt voices offered by the speech service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Voice {
    #[default]
    Kore,
    Puck,
    Charon,
    Fenrir,
    Zephyr,
}

impl Voice {
    pub const ALL: [Voice; 5] = [
        Voice::Kore,
        Voice::Puck,
        Voice::Charon,
        Voice::Fenrir,
        Voice::Zephyr,
    ];

    /// Identifier sent to the service.
    pub const fn id(&self) -> &'static str {
        match self {
            Voice::Kore => "Kore",
            Voice::Puck => "Puck",
            Voice::Charon => "Charon",
            Voice::Fenrir => "Fenrir",
            Voice::Zephyr => "Zephyr",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Voice::Kore => "Kore",
            Voice::Puck => "Arman",
            Voice::Charon => "Laleh",
            Voice::Fenrir => "Nima",
            Voice::Zephyr => "Zephyr",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Voice::Kore => "female",
            Voice::Puck => "male",
            Voice::Charon => "soft female",
            Voice::Fenrir => "formal male",
            Voice::Zephyr => "calm male",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.description())
    }
}
