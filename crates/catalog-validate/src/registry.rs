//! Column → rule table.
//!
//! [`RuleRegistry::standard`] builds the full catalog rule set for both
//! languages. Rules borrow the reference data they check against, so a
//! registry lives no longer than its [`ReferenceData`].

use catalog_model::Language;
use catalog_model::columns::{
    ACCESS_RIGHTS, ADDRESSEES_CITY, ADDRESSEES_COUNTRY, ADDRESSEES_STATE, BOX_FOLDER,
    COLLECTION_NAME, COLLECTION_NUMBER, DATE, DIGITAL_IDENTIFIER, DIGITAL_PUBLISHER, EXTENT,
    FORMAT, FROM, FULL_PATH, GENRE_AAT, GEOLOC_ACITY, GEOLOC_SCITY, LANGUAGE, MEDIUM_AAT,
    METADATA_CATALOGER, OA_COLLECTION, OA_DESCRIPTION, OA_FEATURED, OA_METADATA_SCHEMA,
    OA_OBJECT_TYPE, OA_PROFILE, OA_STATUS, OTHER_PLACES_MENTIONED, PHYSICAL_DESCRIPTION,
    RELATIONSHIP1, RELATIONSHIP2, SENDERS_CITY, SENDERS_COUNTRY, SENDERS_STATE, SERIES, SOURCE,
    SUBJECT_LCSH, TITLE, TO, TYPE, UNIT, YEAR,
};
use catalog_standards::ReferenceData;
use catalog_standards::constants::{self, Bilingual};

use crate::options::ValidationOptions;
use crate::rules::{
    ControlledRule, CrossFieldKind, CrossFieldRule, FixedRule, LocationRule, PatternKind,
    PatternRule, Rule, SequencedRule, TermListRule,
};

/// Ordered column rules plus location rules.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry<'a> {
    rules: Vec<(String, Rule<'a>)>,
    locations: Vec<LocationRule<'a>>,
}

impl<'a> RuleRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `rule` for `column`, replacing any earlier rule for it.
    pub fn register(&mut self, column: impl Into<String>, rule: Rule<'a>) {
        let column = column.into();
        match self.rules.iter_mut().find(|(existing, _)| *existing == column) {
            Some((_, slot)) => *slot = rule,
            None => self.rules.push((column, rule)),
        }
    }

    pub fn register_location(&mut self, rule: LocationRule<'a>) {
        self.locations.push(rule);
    }

    pub fn get(&self, column: &str) -> Option<&Rule<'a>> {
        self.rules
            .iter()
            .find(|(existing, _)| existing == column)
            .map(|(_, rule)| rule)
    }

    /// Registered columns in evaluation order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(column, _)| column.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule<'a>)> {
        self.rules.iter().map(|(column, rule)| (column.as_str(), rule))
    }

    pub fn locations(&self) -> &[LocationRule<'a>] {
        &self.locations
    }

    /// True when `column` is checked by any column or location rule.
    pub fn covers(&self, column: &str) -> bool {
        self.get(column).is_some()
            || self.rules.iter().any(|(_, rule)| rule.mirrored_columns().iter().any(|c| c == column))
            || self.locations.iter().any(|rule| rule.columns().contains(&column))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.locations.is_empty()
    }

    /// The full catalog rule set.
    pub fn standard(reference: &'a ReferenceData, options: &ValidationOptions) -> Self {
        let mut registry = Self::new();
        for language in Language::ALL {
            registry.register_language(language, reference, options);
        }
        registry.register_shared();
        for language in Language::ALL {
            registry.register_locations(language, reference);
        }
        tracing::debug!(
            rules = registry.len(),
            locations = registry.locations.len(),
            "built rule registry"
        );
        registry
    }

    fn register_language(
        &mut self,
        language: Language,
        reference: &'a ReferenceData,
        options: &ValidationOptions,
    ) {
        let taxonomies = &reference.taxonomies;
        let col = |base: &str| language.column(base);
        let identifier = col(DIGITAL_IDENTIFIER);

        self.register(
            identifier.clone(),
            Rule::Sequenced(SequencedRule::new("Digital identifier", options.sequence_baseline)),
        );
        self.register(
            col(BOX_FOLDER),
            Rule::Pattern(PatternRule::new(
                "Box folder",
                PatternKind::BoxFolder {
                    identifier_column: identifier.clone(),
                },
            )),
        );
        self.register(
            col(COLLECTION_NAME),
            fixed("Collection name", constants::COLLECTION_NAME, language),
        );
        self.register(
            col(COLLECTION_NUMBER),
            Rule::Fixed(FixedRule::any_of("Collection number", constants::COLLECTION_NUMBERS)),
        );
        self.register(
            col(DATE),
            Rule::CrossField(CrossFieldRule::new(
                "Date",
                CrossFieldKind::DateTitle {
                    title_column: TITLE.to_string(),
                    date_check: options.date_check,
                },
            )),
        );
        self.register(
            col(YEAR),
            Rule::CrossField(CrossFieldRule::new(
                "Year",
                CrossFieldKind::YearDate {
                    date_column: col(DATE),
                },
            )),
        );
        self.register(
            col(SUBJECT_LCSH),
            Rule::Controlled(
                ControlledRule::new("Subject", reference.subjects.for_language(language)).multi_term(),
            ),
        );
        self.register(
            col(FROM),
            Rule::Controlled(
                ControlledRule::new("Sender", &reference.names)
                    .accepting(constants::UNKNOWN_SENDER.get(language)),
            ),
        );
        self.register(
            col(TO),
            Rule::Controlled(
                ControlledRule::new("Recipient", &reference.names)
                    .accepting(constants::UNKNOWN_RECIPIENT.get(language)),
            ),
        );
        self.register(
            col(SERIES),
            Rule::Controlled(ControlledRule::new("Series", &taxonomies.series)),
        );
        self.register(
            col(RELATIONSHIP1),
            Rule::CrossField(CrossFieldRule::new(
                "Relationship",
                CrossFieldKind::Relationship {
                    first_column: col(RELATIONSHIP1),
                    second_column: col(RELATIONSHIP2),
                    language,
                    taxonomy: taxonomies.relationships(language),
                },
            )),
        );
        self.register(
            col(OTHER_PLACES_MENTIONED),
            Rule::CrossField(CrossFieldRule::new(
                "Other places mentioned",
                CrossFieldKind::OtherPlaces {
                    language,
                    gazetteer: &reference.gazetteer,
                },
            )),
        );
        self.register(
            col(EXTENT),
            Rule::Pattern(PatternRule::new("Extent", PatternKind::Extent(language))),
        );
        self.register(
            col(PHYSICAL_DESCRIPTION),
            Rule::TermList(TermListRule::new(
                "Physical description",
                taxonomies.physical_description.terms(language),
            )),
        );
        self.register(
            col(DIGITAL_PUBLISHER),
            fixed("Digital publisher", constants::DIGITAL_PUBLISHER, language),
        );
        self.register(col(SOURCE), fixed("Source", constants::SOURCE, language));
        self.register(col(UNIT), fixed("Unit", constants::UNIT, language));
        self.register(col(FORMAT), fixed("Format", constants::FORMAT, language));
        self.register(col(TYPE), fixed("Type", constants::TYPE, language));
        self.register(
            col(ACCESS_RIGHTS),
            fixed("Access rights", constants::ACCESS_RIGHTS, language),
        );
        self.register(
            col(OA_DESCRIPTION),
            fixed("OA description", constants::OA_DESCRIPTION, language),
        );
        self.register(
            col(LANGUAGE),
            Rule::TermList(TermListRule::new("Language", taxonomies.languages.terms(language))),
        );
        self.register(
            col(MEDIUM_AAT),
            Rule::Fixed(FixedRule::any_of("Medium", taxonomies.medium.terms(language).iter().cloned())),
        );
        self.register(
            col(GENRE_AAT),
            Rule::Fixed(FixedRule::any_of("Genre", taxonomies.genre.terms(language).iter().cloned())),
        );
        self.register(
            col(METADATA_CATALOGER),
            Rule::Pattern(PatternRule::new("Metadata cataloger", PatternKind::Cataloger)),
        );
    }

    fn register_shared(&mut self) {
        self.register(
            FULL_PATH,
            Rule::CrossField(CrossFieldRule::new(
                "Full folder or file path",
                CrossFieldKind::FilePath {
                    identifier_column: DIGITAL_IDENTIFIER.to_string(),
                },
            )),
        );
        let oa = [
            (OA_COLLECTION, "OA collection", constants::OA_COLLECTION),
            (OA_PROFILE, "OA profile", constants::OA_PROFILE),
            (OA_STATUS, "OA status", constants::OA_STATUS),
            (OA_OBJECT_TYPE, "OA object type", constants::OA_OBJECT_TYPE),
            (OA_METADATA_SCHEMA, "OA metadata schema", constants::OA_METADATA_SCHEMA),
            (OA_FEATURED, "OA featured", constants::OA_FEATURED),
        ];
        for (column, label, value) in oa {
            self.register(column, Rule::Fixed(FixedRule::one(label, value)));
        }
    }

    fn register_locations(&mut self, language: Language, reference: &'a ReferenceData) {
        let col = |base: &str| language.column(base);
        self.register_location(LocationRule::new(
            col(SENDERS_CITY),
            col(SENDERS_COUNTRY),
            col(SENDERS_STATE),
            col(GEOLOC_SCITY),
            language,
            &reference.gazetteer,
        ));
        self.register_location(LocationRule::new(
            col(ADDRESSEES_CITY),
            col(ADDRESSEES_COUNTRY),
            col(ADDRESSEES_STATE),
            col(GEOLOC_ACITY),
            language,
            &reference.gazetteer,
        ));
    }
}

fn fixed(label: &str, value: Bilingual, language: Language) -> Rule<'static> {
    Rule::Fixed(FixedRule::one(label, value.get(language)))
}
