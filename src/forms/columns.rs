//! Column schemas for each form type

use super::column::{ColumnSpec, ColumnType};
use super::form_type::FormType;

/// Names of the contact columns shared by every form, in order
pub const CONTACT_COLUMNS: [&str; 5] = ["firstname", "lastname", "email", "phone", "website"];

pub const AUDIENCE_OPTIONS: [&str; 6] = [
    "Jeunes enfants",
    "Parents et enfants",
    "Parents",
    "Professeurs, parents et enfants",
    "Professeurs",
    "Professionnels",
];

pub const TEACHING_LEVEL_OPTIONS: [&str; 6] = [
    "Maternelle",
    "Primaire",
    "Secondaire",
    "Maternelle et primaire",
    "Primaire et secondaire",
    "Maternelle-primaire et secondaire",
];

pub const TEACHING_TYPE_OPTIONS: [&str; 3] = [
    "Enseignement ordinaire",
    "Enseignement spécialisé",
    "Enseignement ordinaire et spécialisé",
];

const SHORT_DESCRIPTION_HELP: &str = "Description (500 caractères max.)";
const PICTURE_HELP: &str = "Fichier PNG ou JPG, taille minimum 600 pixels de large";

/// Ordered column schema for a form type
///
/// The order drives the order of the fields on the public form.
pub fn columns_for(form_type: FormType) -> Vec<ColumnSpec> {
    let mut columns = contact_columns();
    columns.extend(proposal_columns(form_type));
    columns
}

fn contact_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("firstname", "Prénom", ColumnType::ShortText)
            .required()
            .help("Votre prénom")
            .placeholder("Votre prénom"),
        ColumnSpec::new("lastname", "Nom", ColumnType::ShortText)
            .required()
            .help("Votre nom"),
        ColumnSpec::new("email", "Email", ColumnType::Email)
            .required()
            .help("Votre adresse email"),
        ColumnSpec::new("phone", "GSM", ColumnType::Phone)
            .required()
            .help("Votre numéro de téléphone"),
        ColumnSpec::new("website", "Site internet", ColumnType::Url).help("Votre site web"),
    ]
}

fn classification_columns(form_type: FormType) -> Vec<ColumnSpec> {
    let audience_title = match form_type {
        FormType::Stands => "À qui s'adresse le stand ?",
        FormType::Ateliers => "À qui s'adresse l'atelier ?",
        FormType::Conferences => "À qui s'adresse la conférence ?",
    };

    vec![
        ColumnSpec::select("audience_type", audience_title, &AUDIENCE_OPTIONS).required(),
        ColumnSpec::select(
            "teaching_level",
            "Niveau d'enseignement",
            &TEACHING_LEVEL_OPTIONS,
        )
        .required(),
        ColumnSpec::select(
            "teaching_type",
            "Type d'enseignement",
            &TEACHING_TYPE_OPTIONS,
        )
        .required(),
    ]
}

fn proposal_columns(form_type: FormType) -> Vec<ColumnSpec> {
    let (title_label, title_help) = match form_type {
        FormType::Stands => (
            "Choisissez un titre court",
            "Un titre court et accrocheur pour votre stand",
        ),
        FormType::Ateliers => ("Choisissez un titre court", "Titre de votre atelier"),
        FormType::Conferences => (
            "Choisissez un titre pour la conférence",
            "Titre de votre conférence",
        ),
    };

    let mut columns = vec![ColumnSpec::new("title", title_label, ColumnType::ShortText)
        .required()
        .help(title_help)];
    columns.extend(classification_columns(form_type));

    let description = match form_type {
        FormType::Stands => ColumnSpec::new(
            "description",
            "Décrivez brièvement votre stand pour les visiteurs",
            ColumnType::LongText,
        )
        .help("Cette description apparaîtra dans le programme (500 caractères max.)"),
        FormType::Ateliers => ColumnSpec::new(
            "description",
            "Décrivez brièvement votre animation pour les visiteurs",
            ColumnType::LongText,
        )
        .help(SHORT_DESCRIPTION_HELP),
        FormType::Conferences => ColumnSpec::new(
            "description",
            "Décrivez brièvement votre conférence pour les visiteurs",
            ColumnType::LongText,
        )
        .help(SHORT_DESCRIPTION_HELP),
    };
    columns.push(description.required());

    if form_type != FormType::Stands {
        columns.push(
            ColumnSpec::new("about_you", "À propos de vous", ColumnType::LongText)
                .required()
                .help(SHORT_DESCRIPTION_HELP),
        );
    }

    columns.push(
        ColumnSpec::new("logo", "Envoyez votre logo", ColumnType::Attachment)
            .required()
            .help(PICTURE_HELP),
    );

    if form_type == FormType::Conferences {
        columns.push(
            ColumnSpec::new("photo", "Envoyez une photo de vous", ColumnType::Attachment)
                .required()
                .help(PICTURE_HELP),
        );
    }

    columns
}
