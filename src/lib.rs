use reqwest::Url;
use scraper::Html;
use std::path::Path;
use tracing::{debug, info};

pub mod marmiton;

mod data;
mod error;
mod fetch;

pub use data::{Dataset, DEFAULT_OUTPUT};
pub use error::ScrapeError;
pub use fetch::HttpFetcher;

use marmiton::{Category, MarmitonExtractor, RecipeRecord, LISTING_URLS};

#[async_trait::async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

pub async fn scrape_category<F>(fetcher: &F, listing_url: &str) -> Result<Vec<RecipeRecord>, ScrapeError>
where
    F: Fetcher + Sync,
{
    let category = Category::from_listing_url(listing_url)
        .ok_or_else(|| ScrapeError::UnknownCategory(listing_url.to_string()))?;

    let links = {
        let html = fetcher.fetch(listing_url).await?;
        let doc = Html::parse_document(&html);
        MarmitonExtractor.extract_links(&doc)
    };
    info!("[{}] {} recipes listed", category, links.len());

    let mut records = Vec::with_capacity(links.len());
    for (index, link) in links.into_iter().enumerate() {
        let url = link.ok_or(ScrapeError::MissingLink { index })?;
        // Links are fetched and stored as written, relative ones are rejected.
        Url::parse(&url).map_err(|e| ScrapeError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let page = {
            let html = fetcher.fetch(&url).await?;
            let doc = Html::parse_document(&html);
            MarmitonExtractor.extract_recipe(&doc)?
        };

        let record = RecipeRecord::from_page(category, url, page)
            .ok_or(ScrapeError::MissingElement { field: "comments" })?;
        debug!("[{}] Extracted recipe {}\n{}", category, index + 1, record);
        records.push(record);
    }

    info!("[{}] Done, {} recipes", category, records.len());
    Ok(records)
}

pub async fn build_dataset_from<F>(fetcher: &F, listing_urls: &[&str]) -> Result<Dataset, ScrapeError>
where
    F: Fetcher + Sync,
{
    let mut batches = Vec::with_capacity(listing_urls.len());
    for url in listing_urls {
        batches.push(scrape_category(fetcher, url).await?);
    }
    Ok(Dataset::from_batches(batches))
}

pub async fn build_dataset<F>(fetcher: &F) -> Result<Dataset, ScrapeError>
where
    F: Fetcher + Sync,
{
    build_dataset_from(fetcher, &LISTING_URLS).await
}

pub async fn run<F, P>(fetcher: &F, output: P) -> Result<Dataset, ScrapeError>
where
    F: Fetcher + Sync,
    P: AsRef<Path>,
{
    let dataset = build_dataset(fetcher).await?;
    dataset.save(output.as_ref())?;
    info!(
        "Wrote {} recipes to {}",
        dataset.len(),
        output.as_ref().display()
    );
    Ok(dataset)
}
