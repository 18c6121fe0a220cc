use serde::{Deserialize, Serialize};

/// Catalog resources exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Path {
    Comics,
    Characters,
}

impl Path {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comics => "comics",
            Self::Characters => "characters",
        }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of results, as found under the response's `data` field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataContainer<T> {
    pub offset: u32,
    pub limit: u32,
    pub total: u32,
    pub count: u32,
    pub results: Vec<T>,
}

impl<T> DataContainer<T> {
    /// Zero-based page number this container represents
    pub fn page(&self) -> u32 {
        if self.limit == 0 {
            0
        } else {
            self.offset / self.limit
        }
    }

    /// Whether results exist past this page
    pub fn has_next(&self) -> bool {
        self.offset.saturating_add(self.count) < self.total
    }

    pub fn last_page(&self) -> u32 {
        if self.limit == 0 || self.total == 0 {
            0
        } else {
            (self.total - 1) / self.limit
        }
    }
}

pub type Comics = DataContainer<Comic>;
pub type Characters = DataContainer<Character>;

/// Image size variants understood by the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageVariant {
    PortraitUncanny,
    PortraitXlarge,
    StandardLarge,
    Detail,
}

impl ImageVariant {
    fn as_str(&self) -> &'static str {
        match self {
            Self::PortraitUncanny => "portrait_uncanny",
            Self::PortraitXlarge => "portrait_xlarge",
            Self::StandardLarge => "standard_large",
            Self::Detail => "detail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub path: String,
    pub extension: String,
}

impl Image {
    pub fn url(&self, variant: ImageVariant) -> String {
        format!("{}/{}.{}", self.path, variant.as_str(), self.extension)
    }

    /// The API marks missing artwork with a placeholder path
    pub fn is_available(&self) -> bool {
        !self.path.ends_with("image_not_available")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub issue_number: Option<f64>,
    pub thumbnail: Image,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail: Image,
}
