//! AI endpoints of recorder firmware: attribute search over recorded
//! metadata, OCR search, engine load stats, and face detection on
//! uploaded stills.

use std::fmt::{self, Display, Formatter};

use serde::Deserialize;

use crate::api::{cgi, cgi_path, csv, Point, SearchStatus, SearchToken};
use crate::client::SunApiClient;
use crate::error::Result;

/// Object class a metadata search runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassType {
    Person,
    Vehicle,
    Face,
}

impl Display for ClassType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClassType::Person => "Person",
            ClassType::Vehicle => "Vehicle",
            ClassType::Face => "Face",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        })
    }
}

/// Color bucket the classifier sorts clothing and vehicles into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Gray,
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Black => "Black",
            Color::Gray => "Gray",
            Color::White => "White",
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Purple => "Purple",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClothingLength {
    Long,
    Short,
}

impl Display for ClothingLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClothingLength::Long => "Long",
            ClothingLength::Short => "Short",
        })
    }
}

/// Worn-or-not filter for hats, bags and glasses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WearState {
    Wear,
    No,
}

impl Display for WearState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WearState::Wear => "Wear",
            WearState::No => "No",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeType {
    Young,
    Adult,
    Middle,
    Senior,
}

impl Display for AgeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AgeType::Young => "Young",
            AgeType::Adult => "Adult",
            AgeType::Middle => "Middle",
            AgeType::Senior => "Senior",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Car,
    Bus,
    Truck,
    Motorcycle,
    Bicycle,
    Train,
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VehicleType::Car => "Car",
            VehicleType::Bus => "Bus",
            VehicleType::Truck => "Truck",
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Bicycle => "Bicycle",
            VehicleType::Train => "Train",
        })
    }
}

/// Person attribute filters. `None`/empty means no constraint on that axis;
/// multi-value color filters are OR-ed by the device.
#[derive(Debug, Clone, Default)]
pub struct PersonAttributes {
    pub gender: Option<Gender>,
    pub tops_color: Vec<Color>,
    pub tops_length: Option<ClothingLength>,
    pub bottoms_color: Vec<Color>,
    pub bottoms_length: Option<ClothingLength>,
    pub hat: Option<WearState>,
    pub bag: Option<WearState>,
}

#[derive(Debug, Clone, Default)]
pub struct FaceAttributes {
    pub gender: Option<Gender>,
    pub age_type: Option<AgeType>,
    pub hat: Option<WearState>,
    pub opticals: Option<WearState>,
}

#[derive(Debug, Clone, Default)]
pub struct VehicleAttributes {
    pub types: Vec<VehicleType>,
    pub colors: Vec<Color>,
}

/// Metadata attribute search over the recorder's database.
#[derive(Debug, Clone)]
pub struct MetaSearchQuery {
    pub class_type: ClassType,
    pub channels: Vec<u32>,
    /// Overlapped-recording section to search; -1 selects the live track
    pub overlapped_id: i32,
    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub from_date: String,
    pub to_date: String,
    pub person: PersonAttributes,
    pub face: FaceAttributes,
    pub vehicle: VehicleAttributes,
}

impl MetaSearchQuery {
    /// Query over `channels` between the two instants, with no attribute
    /// filters yet.
    pub fn new(
        class_type: ClassType,
        channels: Vec<u32>,
        from_date: impl Into<String>,
        to_date: impl Into<String>,
    ) -> Self {
        Self {
            class_type,
            channels,
            overlapped_id: -1,
            from_date: from_date.into(),
            to_date: to_date.into(),
            person: PersonAttributes::default(),
            face: FaceAttributes::default(),
            vehicle: VehicleAttributes::default(),
        }
    }
}

/// Text search over recorded OCR metadata.
#[derive(Debug, Clone)]
pub struct OcrSearchQuery {
    pub channels: Vec<u32>,
    pub overlapped_id: i32,
    /// Text to match; `*` wildcards allowed, like `*nu*`
    pub search_text: String,
    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub from_date: String,
    pub to_date: String,
}

/// Rectangle in the device's normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Result window of a metadata or OCR search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    #[serde(flatten)]
    pub status: SearchStatus,
    #[serde(rename = "Results", default)]
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchHit {
    /// Index of this hit within the result window
    pub result: Option<u64>,
    pub date_time: Option<String>,
    pub channel: Option<u32>,
    /// Attribute tree shaped per the searched class, kept undecoded
    pub attributes: Option<serde_json::Value>,
    #[serde(rename = "ImageURL")]
    pub image_url: Option<String>,
    /// Thumbnail size as `widthxheight`
    pub resolution: Option<String>,
    #[serde(rename = "ObjectID")]
    pub object_id: Option<u64>,
    #[serde(rename = "BkID")]
    pub bk_id: Option<String>,
    #[serde(default)]
    pub bounding_box: Vec<BoundingBox>,
}

/// Load figures of the recorder's AI engines.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AiEngineStats {
    pub total_engine_usage: Option<EngineUsage>,
    #[serde(default)]
    pub engine_status: Vec<EngineStatus>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineUsage {
    pub object_engine_usage: Option<f64>,
    pub recognition_engine_usage: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineStatus {
    pub channel: Option<u32>,
    pub cam_type: Option<CamType>,
    pub object_engine: Option<bool>,
    pub recognition_engine: Option<bool>,
    pub object_engine_usage: Option<f64>,
    pub recognition_engine_usage: Option<f64>,
}

/// What kind of metadata the camera behind a channel produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CamType {
    MetaDataCam,
    #[serde(rename = "AIMetaDataCam")]
    AiMetaDataCam,
    NoneMetaCam,
    /// Anything a newer firmware reports that this list predates
    #[serde(other)]
    Unknown,
}

/// Outcome of a face detection run over an uploaded still.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectDetectionResults {
    /// `Success` or a reason like `Fail (No Face Detected)`
    pub response: Option<String>,
    #[serde(default)]
    pub results: Vec<DetectedObject>,
}

impl ObjectDetectionResults {
    pub fn is_success(&self) -> bool {
        self.response.as_deref() == Some("Success")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectedObject {
    pub result: Option<u64>,
    #[serde(rename = "TempGroupID")]
    pub temp_group_id: Option<u64>,
    #[serde(rename = "TempImageID")]
    pub temp_image_id: Option<u64>,
    #[serde(rename = "ImageURL")]
    pub image_url: Option<String>,
    pub resolution: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<Point>,
}

fn meta_search_path(query: &MetaSearchQuery) -> String {
    let mut params: Vec<(String, String)> = vec![
        ("Mode".into(), "Start".into()),
        ("Async".into(), "True".into()),
        ("ClassType".into(), query.class_type.to_string()),
        ("ChannelIDList".into(), csv(&query.channels)),
        ("OverlappedID".into(), query.overlapped_id.to_string()),
        ("FromDate".into(), query.from_date.clone()),
        ("ToDate".into(), query.to_date.clone()),
    ];

    let person = &query.person;
    if let Some(gender) = person.gender {
        params.push(("SearchAttributes.Person.Gender".into(), gender.to_string()));
    }
    if !person.tops_color.is_empty() {
        params.push((
            "SearchAttributes.Person.Clothing.Tops.ColorString".into(),
            csv(&person.tops_color),
        ));
    }
    if let Some(length) = person.tops_length {
        params.push((
            "SearchAttributes.Person.Clothing.Tops.Length".into(),
            length.to_string(),
        ));
    }
    if !person.bottoms_color.is_empty() {
        params.push((
            "SearchAttributes.Person.Clothing.Bottoms.ColorString".into(),
            csv(&person.bottoms_color),
        ));
    }
    if let Some(length) = person.bottoms_length {
        params.push((
            "SearchAttributes.Person.Clothing.Bottoms.Length".into(),
            length.to_string(),
        ));
    }
    if let Some(hat) = person.hat {
        params.push(("SearchAttributes.Person.Clothing.Hat".into(), hat.to_string()));
    }
    if let Some(bag) = person.bag {
        params.push(("SearchAttributes.Person.Belonging.Bag".into(), bag.to_string()));
    }

    let face = &query.face;
    if let Some(gender) = face.gender {
        params.push(("SearchAttributes.Face.Gender".into(), gender.to_string()));
    }
    if let Some(age_type) = face.age_type {
        params.push(("SearchAttributes.Face.AgeType".into(), age_type.to_string()));
    }
    if let Some(hat) = face.hat {
        params.push(("SearchAttributes.Face.Hat".into(), hat.to_string()));
    }
    if let Some(opticals) = face.opticals {
        params.push(("SearchAttributes.Face.Opticals".into(), opticals.to_string()));
    }

    let vehicle = &query.vehicle;
    if !vehicle.types.is_empty() {
        params.push(("SearchAttributes.Vehicle.Type".into(), csv(&vehicle.types)));
    }
    if !vehicle.colors.is_empty() {
        params.push((
            "SearchAttributes.Vehicle.ColorString".into(),
            csv(&vehicle.colors),
        ));
    }

    cgi_path("ai", "metaattributesearch", "control", &params)
}

fn ocr_search_path(query: &OcrSearchQuery) -> String {
    cgi_path(
        "recording",
        "ocrsearch",
        "control",
        &[
            ("Mode", "Start".to_string()),
            ("Async", "True".to_string()),
            ("ChannelIDList", csv(&query.channels)),
            ("OverlappedID", query.overlapped_id.to_string()),
            ("FromDate", query.from_date.clone()),
            ("ToDate", query.to_date.clone()),
            ("SearchText", query.search_text.clone()),
        ],
    )
}

fn results_window_path(
    script: &str,
    msubmenu: &str,
    token: &str,
    from_index: u32,
    max_results: u32,
) -> String {
    cgi_path(
        script,
        msubmenu,
        "view",
        &[
            ("Type", "Results".to_string()),
            ("ResultFromIndex", from_index.to_string()),
            ("MaxResults", max_results.to_string()),
            ("SearchToken", token.to_string()),
        ],
    )
}

impl SunApiClient {
    /// Engine load figures, optionally narrowed to specific channels.
    pub async fn ai_engine_stats(&self, channels: Option<&[u32]>) -> Result<AiEngineStats> {
        let path = match channels {
            Some(channels) => cgi_path("ai", "aiengine", "view", &[("ChannelIDList", csv(channels))]),
            None => cgi("ai", "aiengine", "view"),
        };
        self.get_json(&path).await
    }

    /// Start an asynchronous attribute search. Poll it with
    /// [`Self::meta_search_status`] and page through hits with
    /// [`Self::meta_search_results`].
    pub async fn start_meta_attribute_search(&self, query: &MetaSearchQuery) -> Result<SearchToken> {
        self.get_json(&meta_search_path(query)).await
    }

    pub async fn meta_search_status(&self, token: &str) -> Result<SearchStatus> {
        self.get_json(&cgi_path(
            "ai",
            "metaattributesearch",
            "view",
            &[("Type", "Status"), ("SearchToken", token)],
        ))
        .await
    }

    /// One window of hits, `from_index` being 1-based.
    pub async fn meta_search_results(
        &self,
        token: &str,
        from_index: u32,
        max_results: u32,
    ) -> Result<SearchResults> {
        self.get_json(&results_window_path(
            "ai",
            "metaattributesearch",
            token,
            from_index,
            max_results,
        ))
        .await
    }

    /// Start an asynchronous OCR text search.
    pub async fn start_ocr_search(&self, query: &OcrSearchQuery) -> Result<SearchToken> {
        self.get_json(&ocr_search_path(query)).await
    }

    pub async fn ocr_search_status(&self, token: &str) -> Result<SearchStatus> {
        self.get_json(&cgi_path(
            "recording",
            "ocrsearch",
            "view",
            &[("Type", "Status"), ("SearchToken", token)],
        ))
        .await
    }

    pub async fn ocr_search_results(
        &self,
        token: &str,
        from_index: u32,
        max_results: u32,
    ) -> Result<SearchResults> {
        self.get_json(&results_window_path(
            "recording",
            "ocrsearch",
            token,
            from_index,
            max_results,
        ))
        .await
    }

    /// Detect faces in the still most recently uploaded to the device.
    pub async fn detect_faces(&self) -> Result<ObjectDetectionResults> {
        self.get_json(&cgi_path(
            "ai",
            "objectdetectfromimage",
            "control",
            &[("ObjectType", "Face")],
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::digest::Credentials;
    use crate::transport::testing::ScriptedTransport;

    #[test]
    fn meta_search_path_matches_the_documented_person_query() {
        let mut query = MetaSearchQuery::new(
            ClassType::Person,
            vec![0, 1, 2, 3, 63],
            "1970-01-01T01:02:03Z",
            "2021-01-26T01:02:03Z",
        );
        query.person.gender = Some(Gender::Male);
        query.person.tops_color = vec![Color::Black, Color::Red];
        query.person.bottoms_color = vec![Color::Gray, Color::White];
        query.person.bag = Some(WearState::Wear);

        assert_eq!(
            meta_search_path(&query),
            "/stw-cgi/ai.cgi?msubmenu=metaattributesearch&action=control\
             &Mode=Start&Async=True&ClassType=Person\
             &ChannelIDList=0%2C1%2C2%2C3%2C63&OverlappedID=-1\
             &FromDate=1970-01-01T01%3A02%3A03Z&ToDate=2021-01-26T01%3A02%3A03Z\
             &SearchAttributes.Person.Gender=Male\
             &SearchAttributes.Person.Clothing.Tops.ColorString=Black%2CRed\
             &SearchAttributes.Person.Clothing.Bottoms.ColorString=Gray%2CWhite\
             &SearchAttributes.Person.Belonging.Bag=Wear"
        );
    }

    #[test]
    fn face_and_vehicle_filters_use_their_attribute_prefixes() {
        let mut query =
            MetaSearchQuery::new(ClassType::Face, vec![0], "1970-01-01T00:00:00Z", "2021-01-01T00:00:00Z");
        query.face.gender = Some(Gender::Female);
        query.face.age_type = Some(AgeType::Senior);
        query.face.hat = Some(WearState::No);
        query.face.opticals = Some(WearState::Wear);
        query.vehicle.types = vec![VehicleType::Car, VehicleType::Truck];
        query.vehicle.colors = vec![Color::Blue];

        let path = meta_search_path(&query);
        assert!(path.contains("&SearchAttributes.Face.Gender=Female"));
        assert!(path.contains("&SearchAttributes.Face.AgeType=Senior"));
        assert!(path.contains("&SearchAttributes.Face.Hat=No"));
        assert!(path.contains("&SearchAttributes.Face.Opticals=Wear"));
        assert!(path.contains("&SearchAttributes.Vehicle.Type=Car%2CTruck"));
        assert!(path.contains("&SearchAttributes.Vehicle.ColorString=Blue"));
    }

    #[test]
    fn unfiltered_query_carries_only_the_base_parameters() {
        let query =
            MetaSearchQuery::new(ClassType::Vehicle, vec![2], "1970-01-01T00:00:00Z", "2021-01-01T00:00:00Z");
        let path = meta_search_path(&query);
        assert!(!path.contains("SearchAttributes"));
        assert!(path.contains("&ClassType=Vehicle&ChannelIDList=2&OverlappedID=-1"));
    }

    #[test]
    fn ocr_search_path_keeps_wildcards_readable() {
        let query = OcrSearchQuery {
            channels: vec![0, 1, 2, 3, 4],
            overlapped_id: -1,
            search_text: "*nu*".into(),
            from_date: "1970-01-01T01:02:03Z".into(),
            to_date: "2021-01-01T01:02:03Z".into(),
        };

        assert_eq!(
            ocr_search_path(&query),
            "/stw-cgi/recording.cgi?msubmenu=ocrsearch&action=control\
             &Mode=Start&Async=True&ChannelIDList=0%2C1%2C2%2C3%2C4&OverlappedID=-1\
             &FromDate=1970-01-01T01%3A02%3A03Z&ToDate=2021-01-01T01%3A02%3A03Z\
             &SearchText=*nu*"
        );
    }

    #[test]
    fn decodes_a_search_result_window() {
        let window: SearchResults = serde_json::from_str(
            r#"{
                "SearchTokenExpiryTime": "2019-06-15T23:14:45Z",
                "Status": "Completed",
                "TotalResultsFound": 100,
                "TotalCount": 1414,
                "TimedOut": "False",
                "Results": [{
                    "Result": 0,
                    "DateTime": "2019-06-15T23:13:32Z",
                    "Channel": 2,
                    "Attributes": {
                        "Person": {
                            "Gender": ["Male"],
                            "Clothing": {"Tops": {"ColorString": ["Black"]}}
                        }
                    },
                    "ImageURL": "/stw-cgi/ai.cgi?msubmenu=imageget&action=view&type=metaattributesearch&ID=000000000000000000_10_0_2_1560640412_298530",
                    "Resolution": "208x336",
                    "ObjectID": 298530,
                    "BoundingBox": [{
                        "left": -0.285231,
                        "top": -0.851852,
                        "right": -0.17739,
                        "bottom": -0.539815
                    }],
                    "BkID": "00000000000000000000000000000000"
                }]
            }"#,
        )
        .unwrap();

        assert!(window.status.is_complete());
        assert_eq!(window.status.total_count, Some(1414));
        let hit = &window.results[0];
        assert_eq!(hit.channel, Some(2));
        assert_eq!(hit.object_id, Some(298530));
        assert_eq!(hit.bounding_box[0].left, -0.285231);
        let attributes = hit.attributes.as_ref().unwrap();
        assert_eq!(attributes["Person"]["Gender"][0], serde_json::json!("Male"));
    }

    #[test]
    fn decodes_engine_stats_and_unknown_cam_types() {
        let stats: AiEngineStats = serde_json::from_str(
            r#"{
                "TotalEngineUsage": {"ObjectEngineUsage": 30, "RecognitionEngineUsage": 15},
                "EngineStatus": [
                    {
                        "Channel": 0,
                        "CamType": "AIMetaDataCam",
                        "ObjectEngine": true,
                        "RecognitionEngine": false,
                        "ObjectEngineUsage": 10,
                        "RecognitionEngineUsage": 0
                    },
                    {"Channel": 1, "CamType": "QuantumCam"}
                ]
            }"#,
        )
        .unwrap();

        let usage = stats.total_engine_usage.unwrap();
        assert_eq!(usage.object_engine_usage, Some(30.0));
        assert_eq!(stats.engine_status[0].cam_type, Some(CamType::AiMetaDataCam));
        assert_eq!(stats.engine_status[1].cam_type, Some(CamType::Unknown));
    }

    #[test]
    fn decodes_face_detection_outcomes() {
        let hit: ObjectDetectionResults = serde_json::from_str(
            r#"{
                "Response": "Success",
                "Results": [{
                    "Result": 0,
                    "TempGroupID": 1718000000,
                    "TempImageID": 4,
                    "ImageURL": "/stw-cgi/ai.cgi?msubmenu=imageget&action=view&type=objectdetect&ID=1718000000_4",
                    "Resolution": "208x336",
                    "Coordinates": [{"x": 100, "y": 120}, {"x": 300, "y": 460}]
                }]
            }"#,
        )
        .unwrap();
        assert!(hit.is_success());
        assert_eq!(hit.results[0].temp_image_id, Some(4));
        assert_eq!(hit.results[0].coordinates[1], Point { x: 300, y: 460 });

        let miss: ObjectDetectionResults =
            serde_json::from_str(r#"{"Response": "Fail (No Face Detected)"}"#).unwrap();
        assert!(!miss.is_success());
        assert!(miss.results.is_empty());
    }

    #[tokio::test]
    async fn engine_stats_narrowed_to_channels() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_unauthorized(r#"Digest realm="iPolis", nonce="n", qop="auth""#);
        transport.push_ok(r#"{"EngineStatus":[]}"#);
        let client =
            SunApiClient::with_transport(transport.clone(), Credentials::new("admin", "pw"));

        client.ai_engine_stats(Some(&[0, 1])).await.unwrap();
        assert_eq!(
            transport.seen()[1].path,
            "/stw-cgi/ai.cgi?msubmenu=aiengine&action=view&ChannelIDList=0%2C1"
        );
    }

    #[tokio::test]
    async fn face_detection_hits_the_control_action() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_unauthorized(r#"Digest realm="iPolis", nonce="n", qop="auth""#);
        transport.push_ok(r#"{"Response":"Success"}"#);
        let client =
            SunApiClient::with_transport(transport.clone(), Credentials::new("admin", "pw"));

        client.detect_faces().await.unwrap();
        assert_eq!(
            transport.seen()[1].path,
            "/stw-cgi/ai.cgi?msubmenu=objectdetectfromimage&action=control&ObjectType=Face"
        );
    }

    #[tokio::test]
    async fn result_paging_parameters_ride_along() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_unauthorized(r#"Digest realm="iPolis", nonce="n", qop="auth""#);
        transport.push_ok(r#"{"Status":"Completed","Results":[]}"#);
        let client =
            SunApiClient::with_transport(transport.clone(), Credentials::new("admin", "pw"));

        client.meta_search_results("48928", 1, 100).await.unwrap();
        assert_eq!(
            transport.seen()[1].path,
            "/stw-cgi/ai.cgi?msubmenu=metaattributesearch&action=view\
             &Type=Results&ResultFromIndex=1&MaxResults=100&SearchToken=48928"
        );
    }
}
