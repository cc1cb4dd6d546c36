use crate::errors::AppError;
use crate::model::Transmitter;
use log::{debug, info, warn};

/// Source of paged transmitter listings. The production implementation talks
/// to the HTTP API; tests substitute an in-memory source.
pub trait TransmitterSource {
    fn fetch_page(&self, page: u32) -> Result<Vec<Transmitter>, AppError>;
    fn page_size(&self) -> usize;
}

/// Paged HTTP listing endpoint. Base URL and page size are fixed at
/// construction; there is no other configuration.
pub struct HttpTransmitterSource {
    client: reqwest::blocking::Client,
    base_url: String,
    page_size: usize,
}

impl HttpTransmitterSource {
    pub fn new(base_url: String, page_size: usize) -> Result<Self, AppError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client, base_url, page_size })
    }
}

impl TransmitterSource for HttpTransmitterSource {
    fn fetch_page(&self, page: u32) -> Result<Vec<Transmitter>, AppError> {
        let url = format!("{}?page={}&size={}", self.base_url, page, self.page_size);
        debug!("GET {}", url);
        let response = self.client.get(&url).send()?.error_for_status()?;
        let body = response.text()?;
        let records: Vec<Transmitter> = serde_json::from_str(&body)?;
        Ok(records)
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

/// Walks the listing from page 1, accumulating records in fetch order, until
/// a page comes back shorter than the page size. A page that is exactly full
/// triggers one more request; the API answers an out-of-range page with an
/// empty array, which ends the walk. No deduplication, no retry, no page cap.
pub fn fetch_all(source: &dyn TransmitterSource) -> Result<Vec<Transmitter>, AppError> {
    let mut transmitters: Vec<Transmitter> = Vec::new();
    let mut page: u32 = 1;

    loop {
        let batch = source.fetch_page(page)?;
        let count = batch.len();
        transmitters.extend(batch);
        info!("page {}: {} records ({} total)", page, count, transmitters.len());

        if count < source.page_size() {
            break;
        }
        page += 1;
    }

    if transmitters.is_empty() {
        warn!("listing returned 0 transmitters");
    }
    Ok(transmitters)
}
