//! Event-related entity definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{validation, ValidationError, ValidationResult};

/// Activity category of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Nature,
    Party,
    Culture,
    Relax,
    Family,
    Sport,
}

impl EventCategory {
    /// Converts the category to its symbolic name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Party => "party",
            Self::Culture => "culture",
            Self::Relax => "relax",
            Self::Family => "family",
            Self::Sport => "sport",
        }
    }

    /// Parses a category from its symbolic name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "nature" => Some(Self::Nature),
            "party" => Some(Self::Party),
            "culture" => Some(Self::Culture),
            "relax" => Some(Self::Relax),
            "family" => Some(Self::Family),
            "sport" => Some(Self::Sport),
            _ => None,
        }
    }
}

/// Language an event is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventLanguage {
    Spanish,
    Catalan,
    English,
    German,
    French,
}

impl EventLanguage {
    /// Converts the language to its symbolic name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spanish => "spanish",
            Self::Catalan => "catalan",
            Self::English => "english",
            Self::German => "german",
            Self::French => "french",
        }
    }

    /// Parses a language from its symbolic name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "spanish" => Some(Self::Spanish),
            "catalan" => Some(Self::Catalan),
            "english" => Some(Self::English),
            "german" => Some(Self::German),
            "french" => Some(Self::French),
            _ => None,
        }
    }
}

/// Who may sign up for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderPolicy {
    /// Open to women only.
    FemaleOnly,
    /// Open to queer participants only.
    QueerOnly,
    /// Open to every gender.
    AllGenders,
    /// The organizer expressed no preference.
    NoPreferences,
}

impl GenderPolicy {
    /// Converts the policy to its symbolic name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FemaleOnly => "female_only",
            Self::QueerOnly => "queer_only",
            Self::AllGenders => "all_genders",
            Self::NoPreferences => "no_preferences",
        }
    }

    /// Parses a policy from its symbolic name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "female_only" => Some(Self::FemaleOnly),
            "queer_only" => Some(Self::QueerOnly),
            "all_genders" => Some(Self::AllGenders),
            "no_preferences" => Some(Self::NoPreferences),
            _ => None,
        }
    }
}

/// Whether attending an event costs money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingType {
    /// Free to attend.
    Free,
    /// Attendance has a price.
    Paid,
}

impl PricingType {
    /// Converts the pricing type to its symbolic name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Paid => "paid",
        }
    }

    /// Parses a pricing type from its symbolic name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "free" => Some(Self::Free),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

/// An activity created and owned by a user.
///
/// Fields are freely assignable after construction; the range invariants
/// are re-checked by the store immediately before any create or update.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    /// Unique identifier, assigned by the store.
    pub id: i64,
    /// Identifier of the owning user.
    pub owner: i64,
    /// Event name.
    pub name: String,
    /// Activity category.
    pub category: EventCategory,
    /// Day the event takes place.
    pub date: NaiveDate,
    /// Where the event takes place.
    pub place: String,
    /// Duration in minutes.
    pub duration: i32,
    /// Free-form description.
    pub description: String,
    /// Language the event is held in.
    pub language: EventLanguage,
    /// Who may sign up.
    pub gender: GenderPolicy,
    /// Whether attendance is free or paid.
    pub pricing: PricingType,
    /// Price when the event is paid.
    pub price: Option<i32>,
    /// Minimum participant age.
    pub min_age: Option<i32>,
    /// Maximum participant age.
    pub max_age: Option<i32>,
    /// Minimum number of participants.
    pub min_people: Option<i32>,
    /// Maximum number of participants.
    pub max_people: Option<i32>,
    /// Whether the event is LGTBI-friendly.
    pub lgtbi: bool,
    /// Whether pets are welcome.
    pub pet_friendly: bool,
    /// Whether children are welcome.
    pub kid_friendly: bool,
}

impl Event {
    /// Checks date text against the fixed `DD-MM-YYYY` format.
    pub fn validate_date(text: &str) -> bool {
        validation::parse_event_date(text).is_some()
    }

    /// Replaces the event date from its text form.
    ///
    /// The stored date is left untouched when parsing fails.
    pub fn set_date(&mut self, text: &str) -> ValidationResult<()> {
        match validation::parse_event_date(text) {
            Some(date) => {
                self.date = date;
                Ok(())
            }
            None => Err(ValidationError::invalid_format("date", text)),
        }
    }

    /// Checks the optional age bounds.
    ///
    /// A no-op when either bound is absent.
    pub fn validate_age_range(&self) -> ValidationResult<()> {
        validate_bounds("age", self.min_age, self.max_age)
    }

    /// Checks the optional participant-count bounds.
    ///
    /// A no-op when either bound is absent.
    pub fn validate_people_range(&self) -> ValidationResult<()> {
        validate_bounds("people", self.min_people, self.max_people)
    }

    /// Runs every range check required before persisting.
    pub fn validate(&self) -> ValidationResult<()> {
        self.validate_age_range()?;
        self.validate_people_range()
    }

    /// Returns the event as a flat mapping for the API layer.
    ///
    /// Enumerated values appear as their symbolic names and the date in its
    /// `DD-MM-YYYY` wire format.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "owner": self.owner,
            "name": self.name,
            "category": self.category.as_str(),
            "date": validation::format_event_date(self.date),
            "place": self.place,
            "duration": self.duration,
            "description": self.description,
            "language": self.language.as_str(),
            "gender": self.gender.as_str(),
            "pricing": self.pricing.as_str(),
            "price": self.price,
            "min_age": self.min_age,
            "max_age": self.max_age,
            "min_people": self.min_people,
            "max_people": self.max_people,
            "lgtbi": self.lgtbi,
            "pet_friendly": self.pet_friendly,
            "kid_friendly": self.kid_friendly,
        })
    }
}

/// An event draft awaiting its first commit to the store.
#[derive(Debug, Clone)]
pub struct NewEvent {
    /// Identifier of the owning user.
    pub owner: i64,
    /// Event name.
    pub name: String,
    /// Activity category.
    pub category: EventCategory,
    /// Day the event takes place.
    pub date: NaiveDate,
    /// Where the event takes place.
    pub place: String,
    /// Duration in minutes.
    pub duration: i32,
    /// Free-form description.
    pub description: String,
    /// Language the event is held in.
    pub language: EventLanguage,
    /// Who may sign up.
    pub gender: GenderPolicy,
    /// Whether attendance is free or paid.
    pub pricing: PricingType,
    /// Price when the event is paid.
    pub price: Option<i32>,
    /// Minimum participant age.
    pub min_age: Option<i32>,
    /// Maximum participant age.
    pub max_age: Option<i32>,
    /// Minimum number of participants.
    pub min_people: Option<i32>,
    /// Maximum number of participants.
    pub max_people: Option<i32>,
    /// Whether the event is LGTBI-friendly.
    pub lgtbi: bool,
    /// Whether pets are welcome.
    pub pet_friendly: bool,
    /// Whether children are welcome.
    pub kid_friendly: bool,
}

impl NewEvent {
    /// Creates an event draft from the required fields.
    ///
    /// The draft starts free of charge, without participant bounds, and
    /// with every audience flag off.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner: i64,
        name: impl Into<String>,
        category: EventCategory,
        date: NaiveDate,
        place: impl Into<String>,
        duration: i32,
        description: impl Into<String>,
        language: EventLanguage,
        gender: GenderPolicy,
    ) -> Self {
        Self {
            owner,
            name: name.into(),
            category,
            date,
            place: place.into(),
            duration,
            description: description.into(),
            language,
            gender,
            pricing: PricingType::Free,
            price: None,
            min_age: None,
            max_age: None,
            min_people: None,
            max_people: None,
            lgtbi: false,
            pet_friendly: false,
            kid_friendly: false,
        }
    }

    /// Marks the event as paid at the given price.
    pub fn with_price(mut self, price: i32) -> Self {
        self.pricing = PricingType::Paid;
        self.price = Some(price);
        self
    }

    /// Sets the optional age bounds, rejecting negative or inverted values.
    pub fn with_age_range(mut self, min: Option<i32>, max: Option<i32>) -> ValidationResult<Self> {
        validate_bounds("age", min, max)?;
        self.min_age = min;
        self.max_age = max;
        Ok(self)
    }

    /// Sets the optional participant-count bounds, rejecting negative or
    /// inverted values.
    pub fn with_people_range(
        mut self,
        min: Option<i32>,
        max: Option<i32>,
    ) -> ValidationResult<Self> {
        validate_bounds("people", min, max)?;
        self.min_people = min;
        self.max_people = max;
        Ok(self)
    }

    /// Sets the audience flags.
    pub fn with_flags(mut self, lgtbi: bool, pet_friendly: bool, kid_friendly: bool) -> Self {
        self.lgtbi = lgtbi;
        self.pet_friendly = pet_friendly;
        self.kid_friendly = kid_friendly;
        self
    }

    /// Runs every range check required before persisting.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_bounds("age", self.min_age, self.max_age)?;
        validate_bounds("people", self.min_people, self.max_people)
    }

    /// Attaches a store-assigned identifier, producing the persisted record.
    pub fn into_event(self, id: i64) -> Event {
        Event {
            id,
            owner: self.owner,
            name: self.name,
            category: self.category,
            date: self.date,
            place: self.place,
            duration: self.duration,
            description: self.description,
            language: self.language,
            gender: self.gender,
            pricing: self.pricing,
            price: self.price,
            min_age: self.min_age,
            max_age: self.max_age,
            min_people: self.min_people,
            max_people: self.max_people,
            lgtbi: self.lgtbi,
            pet_friendly: self.pet_friendly,
            kid_friendly: self.kid_friendly,
        }
    }
}

/// Checks that optional bounds are non-negative and not inverted.
fn validate_bounds(
    field: &'static str,
    min: Option<i32>,
    max: Option<i32>,
) -> ValidationResult<()> {
    if let Some(min) = min {
        if min < 0 {
            return Err(ValidationError::range_violation(
                field,
                format!("minimum {} must not be negative", min),
            ));
        }
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(ValidationError::range_violation(
                field,
                format!("minimum {} exceeds maximum {}", min, max),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        NewEvent::new(
            1,
            "Morning hike",
            EventCategory::Nature,
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            "Collserola",
            180,
            "Easy trail up the ridge",
            EventLanguage::Catalan,
            GenderPolicy::NoPreferences,
        )
        .into_event(7)
    }

    #[test]
    fn test_validate_date() {
        assert!(Event::validate_date("31-12-2024"));
        assert!(!Event::validate_date("2024-12-31"));
        assert!(!Event::validate_date("31-02-2024"));
    }

    #[test]
    fn test_set_date() {
        let mut event = sample_event();

        event.set_date("01-06-2025").unwrap();
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let err = event.set_date("2025-06-01").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "date", .. }));
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_age_range() {
        let mut event = sample_event();

        event.min_age = Some(18);
        event.max_age = Some(10);
        assert!(matches!(
            event.validate_age_range(),
            Err(ValidationError::RangeViolation { field: "age", .. })
        ));

        event.max_age = Some(65);
        assert!(event.validate_age_range().is_ok());

        // Missing bound makes the check a no-op.
        event.min_age = None;
        event.max_age = Some(10);
        assert!(event.validate_age_range().is_ok());

        event.min_age = Some(-1);
        event.max_age = None;
        assert!(event.validate_age_range().is_err());
    }

    #[test]
    fn test_people_range() {
        let mut event = sample_event();

        event.min_people = Some(5);
        event.max_people = Some(2);
        assert!(matches!(
            event.validate_people_range(),
            Err(ValidationError::RangeViolation { field: "people", .. })
        ));

        event.max_people = Some(12);
        assert!(event.validate_people_range().is_ok());
    }

    #[test]
    fn test_draft_range_setters_reject_inverted_bounds() {
        let draft = NewEvent::new(
            1,
            "Museum night",
            EventCategory::Culture,
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            "MNAC",
            120,
            "Guided visit after hours",
            EventLanguage::English,
            GenderPolicy::AllGenders,
        );

        assert!(draft.clone().with_age_range(Some(18), Some(10)).is_err());
        assert!(draft.clone().with_people_range(Some(-3), None).is_err());

        let draft = draft
            .with_age_range(Some(18), Some(65))
            .unwrap()
            .with_people_range(Some(2), Some(30))
            .unwrap()
            .with_price(15);
        assert_eq!(draft.pricing, PricingType::Paid);
        assert_eq!(draft.price, Some(15));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_category_symbolic_names() {
        assert_eq!(EventCategory::Nature.as_str(), "nature");
        assert_eq!(EventCategory::parse("sport"), Some(EventCategory::Sport));
        assert_eq!(EventCategory::parse("opera"), None);

        assert_eq!(GenderPolicy::parse("queer_only"), Some(GenderPolicy::QueerOnly));
        assert_eq!(EventLanguage::parse("catalan"), Some(EventLanguage::Catalan));
        assert_eq!(PricingType::parse("paid"), Some(PricingType::Paid));
    }

    #[test]
    fn test_serialize_fields() {
        let mut event = sample_event();
        event.min_age = Some(18);

        let value = event.serialize();
        let map = value.as_object().unwrap();

        assert_eq!(map.len(), 19);
        assert_eq!(map["id"], 7);
        assert_eq!(map["owner"], 1);
        assert_eq!(map["category"], "nature");
        assert_eq!(map["language"], "catalan");
        assert_eq!(map["gender"], "no_preferences");
        assert_eq!(map["pricing"], "free");
        assert_eq!(map["date"], "31-12-2024");
        assert_eq!(map["min_age"], 18);
        assert!(map["max_age"].is_null());
        assert_eq!(map["pet_friendly"], false);

        // Repeated serialization of unchanged state is identical.
        assert_eq!(event.serialize(), value);
    }
}
