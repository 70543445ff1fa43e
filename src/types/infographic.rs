use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Target audience of an infographic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComplexityLevel {
    Elementary,
    #[serde(rename = "High School")]
    HighSchool,
    College,
    Expert,
}

impl ComplexityLevel {
    pub const ALL: [ComplexityLevel; 4] = [
        ComplexityLevel::Elementary,
        ComplexityLevel::HighSchool,
        ComplexityLevel::College,
        ComplexityLevel::Expert,
    ];

    /// Label shown in the UI and used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            ComplexityLevel::Elementary => "Elementary",
            ComplexityLevel::HighSchool => "High School",
            ComplexityLevel::College => "College",
            ComplexityLevel::Expert => "Expert",
        }
    }

    /// Lenient lookup by label, ignoring case and spaces
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.replace(' ', "");
        Self::ALL
            .into_iter()
            .find(|level| level.label().replace(' ', "").eq_ignore_ascii_case(&wanted))
    }
}

impl<'de> Deserialize<'de> for ComplexityLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::from_label(&label).ok_or_else(|| {
            serde::de::Error::unknown_variant(
                &label,
                &["Elementary", "High School", "College", "Expert"],
            )
        })
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual aesthetic of an infographic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum VisualStyle {
    #[default]
    Default,
    Minimalist,
    Realistic,
    Cartoon,
    Vintage,
    Futuristic,
    #[serde(rename = "3D Render")]
    ThreeDRender,
    Sketch,
}

impl VisualStyle {
    pub fn label(&self) -> &'static str {
        match self {
            VisualStyle::Default => "Default",
            VisualStyle::Minimalist => "Minimalist",
            VisualStyle::Realistic => "Realistic",
            VisualStyle::Cartoon => "Cartoon",
            VisualStyle::Vintage => "Vintage",
            VisualStyle::Futuristic => "Futuristic",
            VisualStyle::ThreeDRender => "3D Render",
            VisualStyle::Sketch => "Sketch",
        }
    }
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output language of the infographic text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Mandarin,
    Japanese,
    Hindi,
    Arabic,
    Portuguese,
    Russian,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Mandarin => "Mandarin",
            Language::Japanese => "Japanese",
            Language::Hindi => "Hindi",
            Language::Arabic => "Arabic",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aspect ratio hint forwarded to the image model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Square => "1:1",
        }
    }
}

/// Everything needed to research a topic
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationRequest {
    pub topic: String,
    #[serde(alias = "complexityLevel")]
    pub level: ComplexityLevel,
    #[serde(default, alias = "visualStyle")]
    pub style: VisualStyle,
    #[serde(default)]
    pub language: Language,
}

impl GenerationRequest {
    pub fn new(
        topic: impl Into<String>,
        level: ComplexityLevel,
        style: VisualStyle,
        language: Language,
    ) -> Self {
        Self {
            topic: topic.into(),
            level,
            style,
            language,
        }
    }
}

/// A cited web source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResultItem {
    pub title: String,
    pub url: String,
}

impl SearchResultItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Outcome of researching a topic
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResult {
    pub image_prompt: String,
    /// At most five facts, in the order the model listed them
    pub facts: Vec<String>,
    /// Citations, unique by url
    pub search_results: Vec<SearchResultItem>,
}

/// A rendered infographic. Each generation or edit yields a new value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratedImage {
    pub id: String,
    /// PNG data URI
    pub data: String,
    pub prompt: String,
    /// Unix time in milliseconds
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<ComplexityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<VisualStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl GeneratedImage {
    pub fn new(data: String, prompt: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            data,
            prompt: prompt.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            level: None,
            style: None,
            language: None,
        }
    }

    pub fn with_tags(
        mut self,
        level: Option<ComplexityLevel>,
        style: Option<VisualStyle>,
        language: Option<Language>,
    ) -> Self {
        self.level = level;
        self.style = style;
        self.language = language;
        self
    }
}

/// Result of the accuracy check
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub is_accurate: bool,
    pub critique: String,
}
