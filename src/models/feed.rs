//! Registry of the USGS summary feeds.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

const FEED_BASE: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// One named summary feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    Hour45,
    Hour25,
    Hour10,
    AllHour,
    Day45,
    Day25,
    Day10,
    AllDay,
}

impl Feed {
    /// Every registered feed, in registry order.
    pub const ALL: [Feed; 8] = [
        Feed::Hour45,
        Feed::Hour25,
        Feed::Hour10,
        Feed::AllHour,
        Feed::Day45,
        Feed::Day25,
        Feed::Day10,
        Feed::AllDay,
    ];

    /// Symbolic registry name.
    pub const fn name(self) -> &'static str {
        match self {
            Feed::Hour45 => "hour45",
            Feed::Hour25 => "hour25",
            Feed::Hour10 => "hour10",
            Feed::AllHour => "all_hour",
            Feed::Day45 => "day45",
            Feed::Day25 => "day25",
            Feed::Day10 => "day10",
            Feed::AllDay => "all_day",
        }
    }

    /// Feed file name under the summary endpoint.
    const fn file(self) -> &'static str {
        match self {
            Feed::Hour45 => "4.5_hour.geojson",
            Feed::Hour25 => "2.5_hour.geojson",
            Feed::Hour10 => "1.0_hour.geojson",
            Feed::AllHour => "all_hour.geojson",
            Feed::Day45 => "4.5_day.geojson",
            Feed::Day25 => "2.5_day.geojson",
            Feed::Day10 => "1.0_day.geojson",
            Feed::AllDay => "all_day.geojson",
        }
    }

    /// Full endpoint URL.
    pub fn url(self) -> String {
        format!("{FEED_BASE}/{}", self.file())
    }

    /// Human-readable description, used for CLI help and logs.
    pub const fn description(self) -> &'static str {
        match self {
            Feed::Hour45 => "M4.5+ earthquakes, past hour",
            Feed::Hour25 => "M2.5+ earthquakes, past hour",
            Feed::Hour10 => "M1.0+ earthquakes, past hour",
            Feed::AllHour => "All earthquakes, past hour",
            Feed::Day45 => "M4.5+ earthquakes, past day",
            Feed::Day25 => "M2.5+ earthquakes, past day",
            Feed::Day10 => "M1.0+ earthquakes, past day",
            Feed::AllDay => "All earthquakes, past day",
        }
    }

    /// Look up a feed URL by its symbolic name.
    pub fn url_for(name: &str) -> Option<String> {
        name.parse::<Feed>().ok().map(Feed::url)
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feed {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feed::ALL
            .into_iter()
            .find(|feed| feed.name() == s)
            .ok_or_else(|| AppError::config(format!("unknown feed '{s}'")))
    }
}
