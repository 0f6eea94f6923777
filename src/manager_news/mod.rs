pub mod errors;

use std::time::Duration;
use log::debug;
use ureq::Agent;
use crate::manager_news::errors::NewsError;
use crate::models::report::NewsItem;
use crate::models::rss::Rss;
use crate::news::format_pub_date;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Struct for fetching headlines from one RSS feed
pub struct NewsFeed {
    agent: Agent,
    url: String,
    max_items: usize,
}

impl NewsFeed {
    /// Returns a NewsFeed struct for the given feed
    ///
    /// # Arguments
    ///
    /// * 'url' - the RSS feed URL
    /// * 'max_items' - the maximum number of headlines to keep
    pub fn new(url: String, max_items: usize) -> NewsFeed {
        let config = Agent::config_builder()
            .timeout_global(Some(HTTP_TIMEOUT))
            .build();

        let agent = config.into();

        NewsFeed { agent, url, max_items }
    }

    /// Retrieves the newest headlines from the feed, in feed order.
    ///
    /// Publish timestamps are reformatted for display while fetching so the
    /// rest of the pipeline only ever sees display ready items.
    pub fn fetch_headlines(&self) -> Result<Vec<NewsItem>, NewsError> {
        let xml = self.agent
            .get(self.url.clone())
            .call()?
            .body_mut()
            .read_to_string()?;

        let rss: Rss = quick_xml::de::from_str(&xml)?;

        debug!("fetched {} items from {}", rss.channel.items.len(), rss.channel.title);

        let headlines = rss.channel.items
            .into_iter()
            .take(self.max_items)
            .map(|item| NewsItem {
                title: item.title,
                link: item.link,
                description: item.description,
                pub_date: format_pub_date(&item.pub_date),
            })
            .collect();

        Ok(headlines)
    }
}
