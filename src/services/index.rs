use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::Holiday;
use crate::services::ordering::holiday_order;

/// In-memory index mapping each date to its ordered set of holiday records.
///
/// The outer map iterates in ascending date order; each per-date set is kept
/// sorted by [`holiday_order`] and rejects duplicates under record equality.
/// A date key exists only while its set is non-empty.
///
/// The index owns the synthetic-id counter: records added without an id get
/// the next sequential one. The counter only goes backwards on [`clear`].
/// There is no internal locking; callers that share an index across tasks
/// must serialize writes themselves.
///
/// [`clear`]: HolidayIndex::clear
#[derive(Debug, Clone, Default)]
pub struct HolidayIndex {
    days: BTreeMap<NaiveDate, Vec<Holiday>>,
    next_id: i64,
}

impl HolidayIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from existing records, e.g. rows loaded from the store.
    /// Records keep their persisted ids; duplicates collapse.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Holiday>,
    {
        let mut index = Self::new();
        for record in records {
            index.add(record);
        }
        index
    }

    /// Insert a record into its date's set.
    ///
    /// Returns `false` without touching anything when a record equal to
    /// `holiday` is already present for that date. Otherwise a record lacking
    /// an id is assigned the next synthetic one, and the record is placed at
    /// its ordered position.
    pub fn add(&mut self, mut holiday: Holiday) -> bool {
        if let Some(records) = self.days.get(&holiday.date) {
            if records.iter().any(|existing| existing == &holiday) {
                return false;
            }
        }

        if holiday.id.is_none() {
            holiday.id = Some(self.next_id);
            self.next_id += 1;
        }

        let records = self.days.entry(holiday.date).or_default();
        let position = match records.binary_search_by(|existing| holiday_order(existing, &holiday))
        {
            Ok(position) | Err(position) => position,
        };
        records.insert(position, holiday);
        true
    }

    /// Remove the record equal to `holiday` from `date`'s set. The date key
    /// is dropped when its set empties.
    pub fn remove(&mut self, date: NaiveDate, holiday: &Holiday) -> bool {
        let Some(records) = self.days.get_mut(&date) else {
            return false;
        };
        let Some(position) = records.iter().position(|existing| existing == holiday) else {
            return false;
        };
        records.remove(position);
        if records.is_empty() {
            self.days.remove(&date);
        }
        true
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Records for one date in policy order, empty if the date is absent.
    pub fn records_for(&self, date: NaiveDate) -> &[Holiday] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ascending iteration over dates and their ordered sets. Each call
    /// starts over from the earliest date.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[Holiday])> {
        self.days.iter().map(|(date, records)| (*date, records.as_slice()))
    }

    /// All records flattened in export order: date-ascending, then per-date
    /// policy order.
    pub fn all_records(&self) -> Vec<Holiday> {
        self.days.values().flatten().cloned().collect()
    }

    /// Number of distinct dates in the index.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Drop every record and reset the synthetic-id counter to 0.
    pub fn clear(&mut self) {
        self.days.clear();
        self.next_id = 0;
    }
}
