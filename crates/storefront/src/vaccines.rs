//! Vaccination services: vaccine information, locations, and booking.
//!
//! Holds the hard-coded vaccine range, pharmacy locations, appointment
//! slots, and vaccination history, and validates a booking selection into
//! a confirmed appointment. No calendar integration or persistence; the
//! offered dates are derived from a caller-supplied start date so the
//! logic stays deterministic.

use chrono::{Days, NaiveDate, NaiveTime};
use medlife_core::{LocationId, Money, VaccinationRecordId, VaccineCategory, VaccineId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of days offered for booking, starting from the query date.
const BOOKING_WINDOW_DAYS: u64 = 7;

/// Appointment slots: half-hour steps 9:00-11:30, then 13:00-17:00.
const SLOT_TIMES: [(u32, u32); 15] = [
    (9, 0),
    (9, 30),
    (10, 0),
    (10, 30),
    (11, 0),
    (11, 30),
    (13, 0),
    (13, 30),
    (14, 0),
    (14, 30),
    (15, 0),
    (15, 30),
    (16, 0),
    (16, 30),
    (17, 0),
];

/// Errors from validating a booking selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("no location selected")]
    MissingLocation,
    #[error("no date selected")]
    MissingDate,
    #[error("no time slot selected")]
    MissingSlot,
    #[error("unknown location: {0}")]
    UnknownLocation(LocationId),
    #[error("time {0} is not an offered appointment slot")]
    UnavailableSlot(NaiveTime),
    #[error("date {0} is outside the booking window")]
    DateOutOfRange(NaiveDate),
}

/// What a vaccine costs at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaccinePrice {
    Fixed(Money),
    InsuranceCovered,
}

impl std::fmt::Display for VaccinePrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(amount) => write!(f, "{amount}"),
            Self::InsuranceCovered => write!(f, "Covered by insurance"),
        }
    }
}

/// Information card for one vaccine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vaccine {
    pub id: VaccineId,
    pub name: String,
    pub description: String,
    pub price: VaccinePrice,
    pub next_shot: String,
    pub effectiveness: String,
    pub duration: String,
    pub side_effects: String,
    pub category: VaccineCategory,
}

/// A pharmacy location offering vaccinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub distance: String,
    pub availability: String,
}

/// A past vaccination, as shown on the records tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccinationRecord {
    pub id: VaccinationRecordId,
    pub vaccine: String,
    pub administered_on: NaiveDate,
    pub location: String,
    pub lot_number: String,
    pub next_due: NaiveDate,
}

/// A frequently asked question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub slug: String,
    pub question: String,
    pub answer: String,
}

/// A validated, confirmed appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub location: LocationId,
    pub date: NaiveDate,
    pub slot: NaiveTime,
}

/// An in-progress booking: location, date, and slot picked independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingSelection {
    location: Option<LocationId>,
    date: Option<NaiveDate>,
    slot: Option<NaiveTime>,
}

impl BookingSelection {
    /// Pick (or re-pick) a location.
    pub const fn select_location(&mut self, id: LocationId) {
        self.location = Some(id);
    }

    /// Pick (or re-pick) a date.
    pub const fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// Pick (or re-pick) a time slot.
    pub const fn select_slot(&mut self, slot: NaiveTime) {
        self.slot = Some(slot);
    }

    /// Whether all three choices have been made.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.location.is_some() && self.date.is_some() && self.slot.is_some()
    }
}

/// The vaccination service: vaccine range, locations, records, FAQs.
#[derive(Debug, Clone)]
pub struct VaccinationService {
    vaccines: Vec<Vaccine>,
    locations: Vec<Location>,
    records: Vec<VaccinationRecord>,
    faqs: Vec<Faq>,
}

impl VaccinationService {
    /// The hard-coded demo service data.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            vaccines: demo_vaccines(),
            locations: demo_locations(),
            records: demo_records(),
            faqs: demo_faqs(),
        }
    }

    /// All vaccines.
    #[must_use]
    pub fn vaccines(&self) -> &[Vaccine] {
        &self.vaccines
    }

    /// Look up a vaccine by id.
    #[must_use]
    pub fn vaccine(&self, id: VaccineId) -> Option<&Vaccine> {
        self.vaccines.iter().find(|v| v.id == id)
    }

    /// Vaccines in a given category.
    #[must_use]
    pub fn vaccines_by_category(&self, category: VaccineCategory) -> Vec<&Vaccine> {
        self.vaccines
            .iter()
            .filter(|v| v.category == category)
            .collect()
    }

    /// All pharmacy locations.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Look up a location by id.
    #[must_use]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Vaccination history, newest first.
    #[must_use]
    pub fn records(&self) -> Vec<&VaccinationRecord> {
        let mut records: Vec<&VaccinationRecord> = self.records.iter().collect();
        records.sort_by(|a, b| b.administered_on.cmp(&a.administered_on));
        records
    }

    /// Records whose next dose is due on or before the given date.
    #[must_use]
    pub fn records_due_by(&self, date: NaiveDate) -> Vec<&VaccinationRecord> {
        self.records
            .iter()
            .filter(|r| r.next_due <= date)
            .collect()
    }

    /// Frequently asked questions.
    #[must_use]
    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    /// The fixed appointment slots offered every day.
    #[must_use]
    pub fn time_slots() -> Vec<NaiveTime> {
        SLOT_TIMES
            .iter()
            .filter_map(|&(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
            .collect()
    }

    /// Bookable dates: the week starting at `from`.
    #[must_use]
    pub fn available_dates(from: NaiveDate) -> Vec<NaiveDate> {
        (0..BOOKING_WINDOW_DAYS)
            .filter_map(|offset| from.checked_add_days(Days::new(offset)))
            .collect()
    }

    /// Validate a selection into a confirmed booking.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError`] naming the first missing or invalid
    /// choice: location/date/slot unset, unknown location, a time outside
    /// the offered slots, or a date outside the window starting at `from`.
    pub fn confirm(
        &self,
        selection: &BookingSelection,
        from: NaiveDate,
    ) -> Result<Booking, BookingError> {
        let location = selection.location.ok_or(BookingError::MissingLocation)?;
        let date = selection.date.ok_or(BookingError::MissingDate)?;
        let slot = selection.slot.ok_or(BookingError::MissingSlot)?;

        if self.location(location).is_none() {
            return Err(BookingError::UnknownLocation(location));
        }
        if !Self::available_dates(from).contains(&date) {
            return Err(BookingError::DateOutOfRange(date));
        }
        if !Self::time_slots().contains(&slot) {
            return Err(BookingError::UnavailableSlot(slot));
        }

        tracing::info!(%location, %date, %slot, "vaccination booking confirmed");
        Ok(Booking {
            location,
            date,
            slot,
        })
    }
}

impl Default for VaccinationService {
    fn default() -> Self {
        Self::demo()
    }
}

// =============================================================================
// Demo Data
// =============================================================================

fn demo_vaccines() -> Vec<Vaccine> {
    vec![
        Vaccine {
            id: VaccineId::new(1),
            name: "COVID-19 Vaccine".to_string(),
            description: "mRNA vaccine for COVID-19 protection".to_string(),
            price: VaccinePrice::InsuranceCovered,
            next_shot: "Booster available".to_string(),
            effectiveness: "95%".to_string(),
            duration: "6-8 months protection".to_string(),
            side_effects: "Mild arm soreness, fatigue".to_string(),
            category: VaccineCategory::Essential,
        },
        Vaccine {
            id: VaccineId::new(2),
            name: "Influenza (Flu) Shot".to_string(),
            description: "Annual flu vaccination".to_string(),
            price: VaccinePrice::Fixed(Money::from_cents(2500)),
            next_shot: "Annual (October recommended)".to_string(),
            effectiveness: "60-70%".to_string(),
            duration: "1 year protection".to_string(),
            side_effects: "Mild arm soreness".to_string(),
            category: VaccineCategory::Seasonal,
        },
        Vaccine {
            id: VaccineId::new(3),
            name: "Hepatitis B".to_string(),
            description: "Hepatitis B virus prevention".to_string(),
            price: VaccinePrice::Fixed(Money::from_cents(4500)),
            next_shot: "Series of 3 shots".to_string(),
            effectiveness: "95%".to_string(),
            duration: "Lifetime protection".to_string(),
            side_effects: "Mild arm soreness, fever".to_string(),
            category: VaccineCategory::Travel,
        },
        Vaccine {
            id: VaccineId::new(4),
            name: "Tdap (Tetanus)".to_string(),
            description: "Tetanus, Diphtheria, Pertussis".to_string(),
            price: VaccinePrice::Fixed(Money::from_cents(3500)),
            next_shot: "Every 10 years".to_string(),
            effectiveness: "98%".to_string(),
            duration: "10 years protection".to_string(),
            side_effects: "Arm soreness, mild fever".to_string(),
            category: VaccineCategory::Essential,
        },
        Vaccine {
            id: VaccineId::new(5),
            name: "Shingles (Zoster)".to_string(),
            description: "Shingles prevention for 50+".to_string(),
            price: VaccinePrice::Fixed(Money::from_cents(16000)),
            next_shot: "Series of 2 shots".to_string(),
            effectiveness: "90%".to_string(),
            duration: "10+ years protection".to_string(),
            side_effects: "Arm soreness, fatigue".to_string(),
            category: VaccineCategory::AgeSpecific,
        },
        Vaccine {
            id: VaccineId::new(6),
            name: "Pneumococcal".to_string(),
            description: "Pneumonia prevention".to_string(),
            price: VaccinePrice::Fixed(Money::from_cents(5500)),
            next_shot: "Once after 65".to_string(),
            effectiveness: "75%".to_string(),
            duration: "Long-term protection".to_string(),
            side_effects: "Mild arm soreness".to_string(),
            category: VaccineCategory::AgeSpecific,
        },
    ]
}

fn demo_locations() -> Vec<Location> {
    vec![
        Location {
            id: LocationId::new(1),
            name: "MedLife Pharmacy - Downtown".to_string(),
            address: "123 Main St, City Center".to_string(),
            distance: "0.5 miles away".to_string(),
            availability: "Available today".to_string(),
        },
        Location {
            id: LocationId::new(2),
            name: "MedLife Pharmacy - Westside".to_string(),
            address: "456 West Ave, Westside".to_string(),
            distance: "2.3 miles away".to_string(),
            availability: "Next available: Tomorrow".to_string(),
        },
        Location {
            id: LocationId::new(3),
            name: "MedLife Pharmacy - North".to_string(),
            address: "789 North Blvd, North District".to_string(),
            distance: "4.1 miles away".to_string(),
            availability: "Available today".to_string(),
        },
    ]
}

fn demo_records() -> Vec<VaccinationRecord> {
    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
    }

    vec![
        VaccinationRecord {
            id: VaccinationRecordId::new(1),
            vaccine: "COVID-19 (Pfizer)".to_string(),
            administered_on: date(2024, 1, 15),
            location: "MedLife Downtown".to_string(),
            lot_number: "ABC123".to_string(),
            next_due: date(2024, 7, 15),
        },
        VaccinationRecord {
            id: VaccinationRecordId::new(2),
            vaccine: "Influenza 2023".to_string(),
            administered_on: date(2023, 10, 12),
            location: "MedLife Westside".to_string(),
            lot_number: "FLU456".to_string(),
            next_due: date(2024, 10, 12),
        },
        VaccinationRecord {
            id: VaccinationRecordId::new(3),
            vaccine: "Tdap".to_string(),
            administered_on: date(2022, 3, 20),
            location: "MedLife Downtown".to_string(),
            lot_number: "TET789".to_string(),
            next_due: date(2032, 3, 20),
        },
    ]
}

fn demo_faqs() -> Vec<Faq> {
    vec![
        Faq {
            slug: "insurance".to_string(),
            question: "Does insurance cover vaccinations?".to_string(),
            answer: "Most insurance plans cover recommended vaccines at 100%. We accept \
                     all major insurance providers and can verify your coverage before \
                     your appointment."
                .to_string(),
        },
        Faq {
            slug: "walk-in".to_string(),
            question: "Do you accept walk-ins for vaccines?".to_string(),
            answer: "While we recommend scheduling an appointment to ensure vaccine \
                     availability and reduce wait times, we do accept walk-ins during \
                     business hours based on availability."
                .to_string(),
        },
        Faq {
            slug: "side-effects".to_string(),
            question: "What are common side effects?".to_string(),
            answer: "Most people experience mild side effects like soreness at the \
                     injection site, mild fever, or fatigue. Serious side effects are \
                     rare. We'll monitor you for 15 minutes after vaccination."
                .to_string(),
        },
        Faq {
            slug: "multiple".to_string(),
            question: "Can I get multiple vaccines at once?".to_string(),
            answer: "Yes, most vaccines can be given at the same visit. Our pharmacists \
                     will review your vaccination history and recommend the appropriate \
                     spacing if needed."
                .to_string(),
        },
        Faq {
            slug: "pregnant".to_string(),
            question: "Are vaccines safe during pregnancy?".to_string(),
            answer: "Many vaccines are safe and recommended during pregnancy, including \
                     flu and Tdap vaccines. We'll consult with your healthcare provider \
                     to ensure the best care for you and your baby."
                .to_string(),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_demo_data_sizes() {
        let service = VaccinationService::demo();
        assert_eq!(service.vaccines().len(), 6);
        assert_eq!(service.locations().len(), 3);
        assert_eq!(service.records().len(), 3);
        assert_eq!(service.faqs().len(), 5);
    }

    #[test]
    fn test_vaccines_by_category() {
        let service = VaccinationService::demo();
        let essential = service.vaccines_by_category(VaccineCategory::Essential);
        let names: Vec<&str> = essential.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["COVID-19 Vaccine", "Tdap (Tetanus)"]);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(VaccinePrice::InsuranceCovered.to_string(), "Covered by insurance");
        assert_eq!(
            VaccinePrice::Fixed(Money::from_cents(2500)).to_string(),
            "$25.00"
        );
    }

    #[test]
    fn test_records_newest_first() {
        let service = VaccinationService::demo();
        let records = service.records();
        assert_eq!(records[0].vaccine, "COVID-19 (Pfizer)");
        assert_eq!(records[2].vaccine, "Tdap");
    }

    #[test]
    fn test_records_due_by() {
        let service = VaccinationService::demo();
        let due = service.records_due_by(date(2024, 8, 1));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].vaccine, "COVID-19 (Pfizer)");
    }

    #[test]
    fn test_time_slots_skip_lunch() {
        let slots = VaccinationService::time_slots();
        assert_eq!(slots.len(), 15);
        assert!(slots.contains(&time(11, 30)));
        assert!(!slots.contains(&time(12, 0)));
        assert!(!slots.contains(&time(12, 30)));
        assert!(slots.contains(&time(13, 0)));
    }

    #[test]
    fn test_available_dates_cover_one_week() {
        let dates = VaccinationService::available_dates(date(2025, 3, 1));
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], date(2025, 3, 1));
        assert_eq!(dates[6], date(2025, 3, 7));
    }

    #[test]
    fn test_confirm_complete_selection() {
        let service = VaccinationService::demo();
        let mut selection = BookingSelection::default();
        selection.select_location(LocationId::new(1));
        selection.select_date(date(2025, 3, 3));
        selection.select_slot(time(9, 30));
        assert!(selection.is_complete());

        let booking = service.confirm(&selection, date(2025, 3, 1)).unwrap();
        assert_eq!(booking.location, LocationId::new(1));
        assert_eq!(booking.date, date(2025, 3, 3));
        assert_eq!(booking.slot, time(9, 30));
    }

    #[test]
    fn test_confirm_reports_first_missing_choice() {
        let service = VaccinationService::demo();
        let mut selection = BookingSelection::default();
        assert_eq!(
            service.confirm(&selection, date(2025, 3, 1)),
            Err(BookingError::MissingLocation)
        );

        selection.select_location(LocationId::new(1));
        assert_eq!(
            service.confirm(&selection, date(2025, 3, 1)),
            Err(BookingError::MissingDate)
        );

        selection.select_date(date(2025, 3, 2));
        assert_eq!(
            service.confirm(&selection, date(2025, 3, 1)),
            Err(BookingError::MissingSlot)
        );
    }

    #[test]
    fn test_confirm_rejects_unknown_location() {
        let service = VaccinationService::demo();
        let mut selection = BookingSelection::default();
        selection.select_location(LocationId::new(42));
        selection.select_date(date(2025, 3, 2));
        selection.select_slot(time(10, 0));

        assert_eq!(
            service.confirm(&selection, date(2025, 3, 1)),
            Err(BookingError::UnknownLocation(LocationId::new(42)))
        );
    }

    #[test]
    fn test_confirm_rejects_off_window_date_and_off_slot_time() {
        let service = VaccinationService::demo();
        let mut selection = BookingSelection::default();
        selection.select_location(LocationId::new(2));
        selection.select_date(date(2025, 3, 20));
        selection.select_slot(time(10, 0));

        assert_eq!(
            service.confirm(&selection, date(2025, 3, 1)),
            Err(BookingError::DateOutOfRange(date(2025, 3, 20)))
        );

        selection.select_date(date(2025, 3, 2));
        selection.select_slot(time(12, 0));
        assert_eq!(
            service.confirm(&selection, date(2025, 3, 1)),
            Err(BookingError::UnavailableSlot(time(12, 0)))
        );
    }
}
