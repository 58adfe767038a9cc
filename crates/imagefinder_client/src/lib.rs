//! ImageFinder client: backend exchanges and the async poll driver.
mod dispatch;
mod poller;
mod types;
mod wire;

pub use dispatch::{DispatchSettings, Dispatcher, ReqwestDispatcher};
pub use poller::{CrawlStatusPoller, UiSink};
pub use types::{DispatchError, HttpMethod};
pub use wire::{crawl_endpoint, decode_payload, encode_uri_component, WireError, MISSING_STATUS};
