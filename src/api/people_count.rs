//! People counting: line configuration plus live and historical counts.

use std::fmt::{self, Display, Formatter};

use serde::Deserialize;

use crate::api::{cgi, cgi_path, csv, flag, CommandResponse, Point, SearchStatus, SearchToken};
use crate::client::SunApiClient;
use crate::error::Result;

/// Counting direction of a line, spelled the way the firmware does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CountDirection {
    LeftToRightIn,
    RightToLeftIn,
    LeftToRightOut,
    RightToLeftOut,
}

impl Display for CountDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CountDirection::LeftToRightIn => "LeftToRightIn",
            CountDirection::RightToLeftIn => "RightToLeftIn",
            CountDirection::LeftToRightOut => "LeftToRightOut",
            CountDirection::RightToLeftOut => "RightToLeftOut",
        })
    }
}

/// One counting line to install on a channel.
#[derive(Debug, Clone)]
pub struct LineConfig {
    /// Line slot on the device, 1-based
    pub line: u32,
    pub name: String,
    pub enable: bool,
    pub mode: CountDirection,
    /// Polyline in pixels, flattened to `x1,y1,x2,y2,...` on the wire
    pub coordinates: Vec<Point>,
}

/// Counting setup as the device reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct PeopleCountConfiguration {
    #[serde(rename = "PeopleCount", default)]
    pub channels: Vec<ChannelConfiguration>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChannelConfiguration {
    pub channel: Option<u32>,
    pub master_name: Option<String>,
    pub enable: Option<bool>,
    pub report_enable: Option<bool>,
    pub report_filename: Option<String>,
    /// Report export format, e.g. `XLSX`
    pub report_file_type: Option<String>,
    pub calibration_mode: Option<String>,
    pub camera_height: Option<f64>,
    #[serde(default)]
    pub object_size_coordinate: Vec<Point>,
    #[serde(default, alias = "lines")]
    pub lines: Vec<ConfiguredLine>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfiguredLine {
    pub line: Option<u32>,
    pub name: Option<String>,
    pub enable: Option<bool>,
    pub mode: Option<CountDirection>,
    #[serde(default)]
    pub coordinates: Vec<Point>,
}

/// Live tallies since the counters were last reset.
#[derive(Debug, Clone, Deserialize)]
pub struct LivePeopleCount {
    #[serde(rename = "PeopleCount", default)]
    pub channels: Vec<LiveChannelCount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LiveChannelCount {
    pub channel: Option<u32>,
    #[serde(default)]
    pub lines: Vec<LiveLineCount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LiveLineCount {
    pub line_index: Option<u32>,
    pub name: Option<String>,
    pub in_count: Option<u64>,
    pub out_count: Option<u64>,
}

/// Flow selector for historical searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    InOut,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::In => "In",
            Direction::Out => "Out",
            Direction::InOut => "In,Out",
        })
    }
}

/// One line to include in a search, addressed by camera and line name.
#[derive(Debug, Clone)]
pub struct SearchLine {
    pub camera: String,
    pub line: String,
    pub direction: Direction,
}

/// Historical count search over the recorder's database.
#[derive(Debug, Clone)]
pub struct PeopleCountSearchQuery {
    pub channel: u32,
    /// `YYYY-MM-DD HH:MM:SS`, device-local time
    pub from_date: String,
    pub to_date: String,
    pub lines: Vec<SearchLine>,
}

/// Completed search payload: one block per camera, one CSV per direction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PeopleCountSearchResults {
    /// Bucket width of the count series, e.g. `Hourly`
    pub result_interval: Option<String>,
    #[serde(default)]
    pub people_count_search_results: Vec<CameraSearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CameraSearchResult {
    pub camera: Option<String>,
    #[serde(default)]
    pub line_results: Vec<LineSearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineSearchResult {
    pub line: Option<String>,
    #[serde(default)]
    pub direction_results: Vec<DirectionResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectionResult {
    pub direction: Option<String>,
    /// One count per interval bucket, comma separated
    pub result: Option<String>,
}

impl DirectionResult {
    /// Interval counts parsed out of the CSV payload. Entries that do not
    /// parse as numbers are dropped.
    pub fn counts(&self) -> Vec<u64> {
        self.result
            .as_deref()
            .unwrap_or("")
            .split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect()
    }
}

fn set_config_path(channel: u32, lines: &[LineConfig]) -> String {
    let mut params: Vec<(String, String)> = vec![("Channel".into(), channel.to_string())];
    for line in lines {
        let key = |suffix: &str| format!("Line.{}.{suffix}", line.line);
        params.push((key("Name"), line.name.clone()));
        params.push((key("Enable"), flag(line.enable).to_string()));
        params.push((key("Mode"), line.mode.to_string()));
        let flat: Vec<i32> = line
            .coordinates
            .iter()
            .flat_map(|point| [point.x, point.y])
            .collect();
        params.push((key("Coordinates"), csv(&flat)));
    }
    cgi_path("eventsources", "peoplecount", "set", &params)
}

fn search_start_path(query: &PeopleCountSearchQuery) -> String {
    let mut params: Vec<(String, String)> = vec![
        ("Mode".into(), "Start".into()),
        ("Channel".into(), query.channel.to_string()),
        ("FromDate".into(), query.from_date.clone()),
        ("ToDate".into(), query.to_date.clone()),
    ];
    for line in &query.lines {
        params.push((
            format!("Camera.{}.Line.{}.Direction", line.camera, line.line),
            line.direction.to_string(),
        ));
    }
    cgi_path("recording", "peoplecountsearch", "control", &params)
}

impl SunApiClient {
    /// Counting configuration of every channel, or of one channel.
    pub async fn people_count_config(
        &self,
        channel: Option<u32>,
    ) -> Result<PeopleCountConfiguration> {
        let path = match channel {
            Some(channel) => cgi_path(
                "eventsources",
                "peoplecount",
                "view",
                &[("Channel", channel.to_string())],
            ),
            None => cgi("eventsources", "peoplecount", "view"),
        };
        self.get_json(&path).await
    }

    /// Install counting lines on a channel. Line slots not named in
    /// `lines` keep whatever they had.
    pub async fn set_people_count_config(
        &self,
        channel: u32,
        lines: &[LineConfig],
    ) -> Result<CommandResponse> {
        self.get_json(&set_config_path(channel, lines)).await
    }

    /// Live in/out tallies for one channel.
    pub async fn live_people_count(&self, channel: u32) -> Result<LivePeopleCount> {
        self.get_json(&cgi_path(
            "eventsources",
            "peoplecount",
            "check",
            &[("Channel", channel.to_string())],
        ))
        .await
    }

    /// Kick off an asynchronous count search. Poll it with
    /// [`Self::people_count_search_status`] and collect with
    /// [`Self::people_count_search_results`].
    pub async fn start_people_count_search(
        &self,
        query: &PeopleCountSearchQuery,
    ) -> Result<SearchToken> {
        self.get_json(&search_start_path(query)).await
    }

    pub async fn cancel_people_count_search(&self, token: &str) -> Result<CommandResponse> {
        self.get_json(&cgi_path(
            "recording",
            "peoplecountsearch",
            "control",
            &[("Mode", "Cancel"), ("SearchToken", token)],
        ))
        .await
    }

    pub async fn people_count_search_status(&self, token: &str) -> Result<SearchStatus> {
        self.get_json(&cgi_path(
            "recording",
            "peoplecountsearch",
            "view",
            &[("Type", "Status"), ("SearchToken", token)],
        ))
        .await
    }

    pub async fn people_count_search_results(
        &self,
        token: &str,
    ) -> Result<PeopleCountSearchResults> {
        self.get_json(&cgi_path(
            "recording",
            "peoplecountsearch",
            "view",
            &[("Type", "Results"), ("SearchToken", token)],
        ))
        .await
    }
}
