//! Static registry of the festival form types

use crate::error::ProvisionError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the three festival participation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormType {
    Stands,
    Ateliers,
    Conferences,
}

impl FormType {
    /// All form types, in provisioning order
    pub const ALL: [FormType; 3] = [Self::Stands, Self::Ateliers, Self::Conferences];

    /// Identifier used on the command line and in logs
    pub fn id(&self) -> &'static str {
        match self {
            Self::Stands => "stands",
            Self::Ateliers => "ateliers",
            Self::Conferences => "conferences",
        }
    }

    /// Display configuration for this form type
    pub fn config(&self) -> &'static FormTypeConfig {
        match self {
            Self::Stands => &STANDS,
            Self::Ateliers => &ATELIERS,
            Self::Conferences => &CONFERENCES,
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FormType {
    type Err = ProvisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|form_type| form_type.id() == s)
            .ok_or_else(|| ProvisionError::UnknownFormType(s.to_string()))
    }
}

/// Banner shown at the top of the public form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerImage {
    pub mimetype: &'static str,
    pub path: &'static str,
    pub size: u64,
    pub title: &'static str,
    pub url: &'static str,
}

/// Titles of the two form sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTitles {
    pub about_you: &'static str,
    pub about_proposal: &'static str,
}

/// Everything NocoDB needs to know to present a form type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTypeConfig {
    pub table_name: &'static str,
    pub title: &'static str,
    pub form_title: &'static str,
    pub description: &'static str,
    pub help_text: &'static str,
    pub sections: SectionTitles,
    pub banner_image: BannerImage,
}

const BANNER_MIMETYPE: &str = "image/png";
const BANNER_PATH: &str = "download/noco/banner/festival-banner.png";
const BANNER_SIZE: u64 = 48128;
const BANNER_URL: &str =
    "https://static.wixstatic.com/media/e57c2b_aeaad596d9cb4ebcbe690b7b61109fcd~mv2.png";
const ABOUT_YOU: &str = "À propos de vous:";

static STANDS: FormTypeConfig = FormTypeConfig {
    table_name: "Stands_Festival",
    title: "Stands Festival",
    form_title: "Proposez un stand",
    description: "Les inscriptions en tant qu'exposant pour l'édition de 2025 sont ouvertes. \
N'hésitez pas à nous contacter afin de connaitre les conditions: alexia@festivalootb.com .\n\n\
Merci de décrire votre stand ci-dessous afin que notre équipe puisse l'intégrer au programme du Festival.",
    help_text: "Les organisateurs vous communiqueront les infos rapidement.",
    sections: SectionTitles {
        about_you: ABOUT_YOU,
        about_proposal: "Décrivez votre stand:",
    },
    banner_image: BannerImage {
        mimetype: BANNER_MIMETYPE,
        path: BANNER_PATH,
        size: BANNER_SIZE,
        title: "Festival Out of the Books - Stands",
        url: BANNER_URL,
    },
};

static ATELIERS: FormTypeConfig = FormTypeConfig {
    table_name: "Ateliers_Festival",
    title: "Ateliers Festival",
    form_title: "Proposez un atelier ou une animation",
    description: "Merci de décrire votre animation ci-dessous afin que notre équipe puisse \
l'intégrer au programme du Festival.",
    help_text: "Les organisateurs vous communiqueront les horaires rapidement.",
    sections: SectionTitles {
        about_you: ABOUT_YOU,
        about_proposal: "Décrivez votre animation:",
    },
    banner_image: BannerImage {
        mimetype: BANNER_MIMETYPE,
        path: BANNER_PATH,
        size: BANNER_SIZE,
        title: "Festival Out of the Books - Ateliers",
        url: BANNER_URL,
    },
};

static CONFERENCES: FormTypeConfig = FormTypeConfig {
    table_name: "Conferences_Festival",
    title: "Conférences Festival",
    form_title: "Proposez une conférence",
    description: "Merci de décrire votre conférence ci-dessous afin que notre équipe puisse \
l'intégrer au programme du Festival.",
    help_text: "Les organisateurs vous communiqueront les horaires rapidement.",
    sections: SectionTitles {
        about_you: ABOUT_YOU,
        about_proposal: "Décrivez votre conférence:",
    },
    banner_image: BannerImage {
        mimetype: BANNER_MIMETYPE,
        path: BANNER_PATH,
        size: BANNER_SIZE,
        title: "Festival Out of the Books - Conférences",
        url: BANNER_URL,
    },
};
