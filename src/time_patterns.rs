use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::features::FrequencyTable;
use crate::models::Corpus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimePeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Morning,
        TimePeriod::Afternoon,
        TimePeriod::Evening,
        TimePeriod::Night,
    ];

    pub fn from_hour(hour: u8) -> TimePeriod {
        match hour {
            5..=11 => TimePeriod::Morning,
            12..=16 => TimePeriod::Afternoon,
            17..=21 => TimePeriod::Evening,
            _ => TimePeriod::Night,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimePatterns {
    pub hourly_distribution: Option<BTreeMap<u8, usize>>,
    pub peak_hour: Option<u8>,
    pub time_periods: Option<BTreeMap<TimePeriod, usize>>,
    pub day_of_week: Option<FrequencyTable<String>>,
    pub most_active_day: Option<String>,
}

pub fn extract_time_patterns(corpus: &Corpus) -> TimePatterns {
    let mut patterns = TimePatterns::default();

    if corpus.has_hour {
        let mut hourly: BTreeMap<u8, usize> = BTreeMap::new();
        for hour in corpus.iter().filter_map(|doc| doc.hour) {
            *hourly.entry(hour).or_insert(0) += 1;
        }

        // max_by_key keeps the last maximum; iterate descending so the
        // lowest hour wins a tie
        patterns.peak_hour = hourly
            .iter()
            .rev()
            .max_by_key(|(_, count)| **count)
            .map(|(hour, _)| *hour);

        let mut periods: BTreeMap<TimePeriod, usize> =
            TimePeriod::ALL.iter().map(|period| (*period, 0)).collect();
        for (hour, count) in &hourly {
            *periods.entry(TimePeriod::from_hour(*hour)).or_insert(0) += count;
        }

        patterns.hourly_distribution = Some(hourly);
        patterns.time_periods = Some(periods);
    }

    if corpus.has_timestamp {
        let days = corpus
            .iter()
            .filter_map(|doc| doc.timestamp)
            .map(|timestamp| weekday_name(timestamp.weekday()).to_string());
        let table = FrequencyTable::from_items(days, 7);
        patterns.most_active_day = table.keys().next().cloned();
        patterns.day_of_week = Some(table);
    }

    debug!(
        peak_hour = patterns.peak_hour,
        most_active_day = patterns.most_active_day.as_deref(),
        "Extracted time patterns"
    );

    patterns
}

fn weekday_name(day: chrono::Weekday) -> &'static str {
    use chrono::Weekday::*;
    match day {
        Mon => "Monday",
        Tue => "Tuesday",
        Wed => "Wednesday",
        Thu => "Thursday",
        Fri => "Friday",
        Sat => "Saturday",
        Sun => "Sunday",
    }
}
