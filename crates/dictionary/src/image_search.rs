// Thumbnail scrape of the image-search results page. Result thumbnails are
// served from Google's static CDN.

use scraper::{Html, Selector};

use crate::DictionaryError;

pub const IMAGE_SEARCH_URL: &str = "https://www.google.com/search";

const IMAGE_HOST_MARKER: &str = "gstatic";

pub(crate) async fn search_image(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Option<String>, DictionaryError> {
    tracing::debug!(word, "searching for image");
    let res = client
        .get(base_url)
        .query(&[
            ("q", word),
            ("client", "firefox"),
            ("hs", "cTQ"),
            ("source", "lnms"),
            ("tbm", "isch"),
            ("sa", "X"),
            ("ved", "0ahUKEwig3LOx4PzKAhWGFywKHZyZAAgQ_AUIBygB"),
            ("biw", "1920"),
            ("bih", "982"),
        ])
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let page = res.text().await.map_err(DictionaryError::Fetch)?;
    let url = find_thumbnail(&page);
    if url.is_none() {
        tracing::debug!(word, "no thumbnail found");
    }
    Ok(url)
}

/// First `img` `src` in document order that points at the image CDN.
pub fn find_thumbnail(html: &str) -> Option<String> {
    let selector = Selector::parse("img[src]").expect("static selector");
    let document = Html::parse_document(html);
    let thumbnail = document
        .select(&selector)
        .filter_map(|image| image.value().attr("src"))
        .find(|src| src.contains(IMAGE_HOST_MARKER))
        .map(str::to_owned);
    thumbnail
}
