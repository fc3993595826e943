//! Geographic consistency of a city with its country, state and coordinates.

use catalog_model::{Language, Outcome, Row, TERM_SEPARATOR, split_terms};
use catalog_standards::Gazetteer;

use super::cell;
use crate::error::Result;

/// Row-level check keyed by a city column.
///
/// Failures on the country, state or coordinates are reported against that
/// column, so the outcome may carry a target column other than the city.
#[derive(Debug, Clone)]
pub struct LocationRule<'a> {
    pub city_column: String,
    pub country_column: String,
    pub state_column: String,
    pub coordinates_column: String,
    pub language: Language,
    gazetteer: &'a Gazetteer,
}

impl<'a> LocationRule<'a> {
    pub fn new(
        city_column: impl Into<String>,
        country_column: impl Into<String>,
        state_column: impl Into<String>,
        coordinates_column: impl Into<String>,
        language: Language,
        gazetteer: &'a Gazetteer,
    ) -> Self {
        Self {
            city_column: city_column.into(),
            country_column: country_column.into(),
            state_column: state_column.into(),
            coordinates_column: coordinates_column.into(),
            language,
            gazetteer,
        }
    }

    pub fn evaluate(&self, row: &Row) -> Result<Outcome> {
        let city_cell = cell(row, &self.city_column)?;
        if city_cell.is_absent() {
            return Ok(Outcome::Valid);
        }
        let city = city_cell.trimmed();
        let Some(place) = self.gazetteer.lookup(&city, self.language) else {
            return Ok(Outcome::soft(format!(
                "City '{city}' not found in dataset for language '{}'",
                self.language.label()
            )));
        };

        let country = row.text(&self.country_column);
        if !country.is_empty() && country != place.country {
            return Ok(Outcome::hard(format!(
                "Country mismatch: Expected '{}', found '{country}'",
                place.country
            ))
            .on_column(&self.country_column));
        }

        let state = row.text(&self.state_column);
        if !state.is_empty() && state != place.state {
            return Ok(Outcome::hard(format!(
                "State mismatch: Expected '{}', found '{state}'",
                place.state
            ))
            .on_column(&self.state_column));
        }

        Ok(self
            .check_coordinates(&city, &row.text(&self.coordinates_column), &place.coordinates)
            .on_column(&self.coordinates_column))
    }

    fn check_coordinates(&self, city: &str, written: &str, expected: &str) -> Outcome {
        let sets = split_terms(written);
        if sets.len() > 2 {
            return Outcome::hard(
                "Coordinate format error: At most two coordinate sets are allowed.",
            );
        }
        if !sets.iter().any(|set| set == expected) {
            return Outcome::hard(format!(
                "No matching coordinates found for '{city}' with expected value '{expected}'"
            ));
        }
        if sets.len() == 2 && written != format!("{}{TERM_SEPARATOR}{}", sets[0], sets[1]) {
            return Outcome::hard(
                "Coordinate format error: Incorrect '[|]' separator for dual coordinates.",
            );
        }
        Outcome::Valid
    }

    /// Every column the rule reads or marks.
    pub fn columns(&self) -> [&str; 4] {
        [
            &self.city_column,
            &self.country_column,
            &self.state_column,
            &self.coordinates_column,
        ]
    }

    pub fn describe(&self) -> String {
        format!(
            "{} gazetteer: {}, {}, {}",
            self.language.label(),
            self.country_column,
            self.state_column,
            self.coordinates_column
        )
    }
}

#[cfg(test)]
mod tests {
    use catalog_model::CellValue;
    use catalog_model::Severity;
    use catalog_standards::Place;

    use super::*;

    fn gazetteer() -> Gazetteer {
        let mut gazetteer = Gazetteer::default();
        gazetteer.insert(
            "Springer",
            Language::English,
            Place {
                country: "United States".into(),
                state: "New Mexico".into(),
                coordinates: "36.3614, -104.5950".into(),
            },
        );
        gazetteer
    }

    fn sender_row(city: &str, country: &str, state: &str, coordinates: &str) -> Row {
        Row::new(
            0,
            vec![
                ("SENDERS_CITY".into(), CellValue::text(city)),
                ("SENDERS_COUNTRY".into(), CellValue::text(country)),
                ("SENDERS_STATE".into(), CellValue::text(state)),
                ("GEOLOC_SCITY".into(), CellValue::text(coordinates)),
            ],
        )
    }

    fn rule(gazetteer: &Gazetteer) -> LocationRule<'_> {
        LocationRule::new(
            "SENDERS_CITY",
            "SENDERS_COUNTRY",
            "SENDERS_STATE",
            "GEOLOC_SCITY",
            Language::English,
            gazetteer,
        )
    }

    #[test]
    fn consistent_location() {
        let gazetteer = gazetteer();
        let row = sender_row("springer", "United States", "New Mexico", "36.3614, -104.5950");
        assert!(rule(&gazetteer).evaluate(&row).unwrap().is_valid());
    }

    #[test]
    fn state_mismatch_marks_state() {
        let gazetteer = gazetteer();
        let row = sender_row("Springer", "United States", "Texas", "36.3614, -104.5950");
        let outcome = rule(&gazetteer).evaluate(&row).unwrap();
        assert_eq!(outcome.severity(), Some(Severity::Hard));
        assert_eq!(outcome.target_column(), Some("SENDERS_STATE"));
        assert_eq!(
            outcome.reason(),
            Some("State mismatch: Expected 'New Mexico', found 'Texas'")
        );
    }

    #[test]
    fn skips_empty_and_no_data() {
        let gazetteer = gazetteer();
        for city in ["", "No Data"] {
            let row = sender_row(city, "Mexico", "Texas", "");
            assert!(rule(&gazetteer).evaluate(&row).unwrap().is_valid());
        }
    }

    #[test]
    fn unknown_city_is_soft_on_city() {
        let gazetteer = gazetteer();
        let row = sender_row("Raton", "", "", "");
        let outcome = rule(&gazetteer).evaluate(&row).unwrap();
        assert_eq!(outcome.severity(), Some(Severity::Soft));
        assert_eq!(outcome.target_column(), None);
    }

    #[test]
    fn coordinate_sets() {
        let gazetteer = gazetteer();
        let check = |coordinates: &str| {
            rule(&gazetteer)
                .evaluate(&sender_row("Springer", "", "", coordinates))
                .unwrap()
        };
        assert!(check("1, 2[|]36.3614, -104.5950").is_valid());
        assert_eq!(
            check("1, 2 [|] 36.3614, -104.5950").reason(),
            Some("Coordinate format error: Incorrect '[|]' separator for dual coordinates.")
        );
        let missing = check("1, 2");
        assert_eq!(missing.target_column(), Some("GEOLOC_SCITY"));
        assert_eq!(missing.severity(), Some(Severity::Hard));
        assert_eq!(check("a[|]b[|]36.3614, -104.5950").severity(), Some(Severity::Hard));
    }
}
