//! Fixed field values of the collection.

use catalog_model::Language;

/// A value that exists once per catalog language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub english: &'static str,
    pub spanish: &'static str,
}

impl Bilingual {
    pub const fn new(english: &'static str, spanish: &'static str) -> Self {
        Self { english, spanish }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::Spanish => self.spanish,
        }
    }
}

pub const COLLECTION_NAME: Bilingual = Bilingual::new(
    "Amador Family Correspondence, 1856-1949",
    "Correspondencia de la familia Amador, 1856-1949",
);

pub const DIGITAL_PUBLISHER: Bilingual = Bilingual::new(
    "New Mexico State University Library",
    "Biblioteca de la Universidad Estatal de Nuevo México",
);

pub const SOURCE: Bilingual = Bilingual::new(
    "NMSU Library Archives and Special Collections",
    "Archivos y colecciones especiales de la biblioteca de NMSU",
);

pub const UNIT: Bilingual = Bilingual::new(
    "Rio Grande Historical Collections",
    "Colecciones históricas de Río Grande",
);

pub const FORMAT: Bilingual = Bilingual::new("application/pdf", "la aplicación/pdf");

pub const TYPE: Bilingual = Bilingual::new("Text", "Texto");

pub const ACCESS_RIGHTS: Bilingual =
    Bilingual::new("Open for re-use", "Abierto para la reutilización");

pub const OA_DESCRIPTION: Bilingual = Bilingual::new(
    "This collection is available in both, English and Spanish",
    "Esta colección está disponible en inglés y español",
);

/// Accepted in `FROM` / `ES..FROM` in place of an authorized name.
pub const UNKNOWN_SENDER: Bilingual = Bilingual::new("Unknown sender", "Remitente desconocido");

/// Accepted in `TO` / `ES..TO` in place of an authorized name.
pub const UNKNOWN_RECIPIENT: Bilingual =
    Bilingual::new("Unknown recipient", "Destinatario desconocido");

/// Manuscript collection numbers; also the digital identifier prefixes.
pub const COLLECTION_NUMBERS: [&str; 2] = ["Ms0004", "Ms0071"];

/// File extension of digitized items.
pub const ITEM_EXTENSION: &str = "pdf";

pub const OA_COLLECTION: &str = "10317";
pub const OA_PROFILE: &str = "Documents";
pub const OA_STATUS: &str = "PUBLISH";
pub const OA_OBJECT_TYPE: &str = "RECORD";
pub const OA_METADATA_SCHEMA: &str = "4";
pub const OA_FEATURED: &str = "0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bilingual_picks_language() {
        assert_eq!(TYPE.get(Language::English), "Text");
        assert_eq!(TYPE.get(Language::Spanish), "Texto");
    }
}
