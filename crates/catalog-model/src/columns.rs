//! Column names of the catalog worksheet.
//!
//! Bilingual fields exist twice: the English name below and its Spanish
//! copy with the `ES..` prefix (see [`Language::column`]).
//!
//! [`Language::column`]: crate::Language::column

pub const DIGITAL_IDENTIFIER: &str = "DIGITAL_IDENTIFIER";
pub const BOX_FOLDER: &str = "BOX_FOLDER";
pub const COLLECTION_NAME: &str = "COLLECTION_NAME";
pub const COLLECTION_NUMBER: &str = "COLLECTION_NUMBER";
pub const TITLE: &str = "TITLE";
pub const DATE: &str = "DATE";
pub const YEAR: &str = "YEAR";
pub const SUBJECT_LCSH: &str = "SUBJECT_LCSH";
pub const FROM: &str = "FROM";
pub const TO: &str = "TO";
pub const SERIES: &str = "SERIES";
pub const RELATIONSHIP1: &str = "RELATIONSHIP1";
pub const RELATIONSHIP2: &str = "RELATIONSHIP2";
pub const OTHER_PLACES_MENTIONED: &str = "OTHER_PLACES_MENTIONED";
pub const EXTENT: &str = "EXTENT";
pub const PHYSICAL_DESCRIPTION: &str = "PHYSICAL_DESCRIPTION";
pub const DIGITAL_PUBLISHER: &str = "DIGITAL_PUBLISHER";
pub const SOURCE: &str = "SOURCE";
pub const UNIT: &str = "UNIT";
pub const FORMAT: &str = "FORMAT";
pub const TYPE: &str = "TYPE";
pub const ACCESS_RIGHTS: &str = "ACCESS_RIGHTS";
pub const OA_DESCRIPTION: &str = "OA_DESCRIPTION";
pub const LANGUAGE: &str = "LANGUAGE";
pub const MEDIUM_AAT: &str = "MEDIUM_AAT";
pub const GENRE_AAT: &str = "GENRE_AAT";
pub const METADATA_CATALOGER: &str = "METADATA_CATALOGER";

pub const SENDERS_CITY: &str = "SENDERS_CITY";
pub const SENDERS_COUNTRY: &str = "SENDERS_COUNTRY";
pub const SENDERS_STATE: &str = "SENDERS_STATE";
pub const ADDRESSEES_CITY: &str = "ADDRESSEES_CITY";
pub const ADDRESSEES_COUNTRY: &str = "ADDRESSEES_COUNTRY";
pub const ADDRESSEES_STATE: &str = "ADDRESSEES_STATE";
pub const GEOLOC_SCITY: &str = "GEOLOC_SCITY";
pub const GEOLOC_ACITY: &str = "GEOLOC_ACITY";

// Monolingual columns.
pub const FULL_PATH: &str = "FullFolderOrFilePath";
pub const OA_COLLECTION: &str = "OA_COLLECTION";
pub const OA_PROFILE: &str = "OA_PROFILE";
pub const OA_STATUS: &str = "OA_STATUS";
pub const OA_OBJECT_TYPE: &str = "OA_OBJECT_TYPE";
pub const OA_METADATA_SCHEMA: &str = "OA_METADATA_SCHEMA";
pub const OA_FEATURED: &str = "OA_FEATURED";
