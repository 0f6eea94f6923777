use serde::Deserialize;

/// An RSS 2.0 news feed document
#[derive(Deserialize, Debug)]
pub struct Rss {
    pub channel: Channel,
}

#[derive(Deserialize, Debug)]
pub struct Channel {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "item", default)]
    pub items: Vec<RssItem>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RssItem {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
}
