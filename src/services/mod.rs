pub mod export;
pub mod media_list;
pub mod providers;
pub mod resolver;

pub use export::{run_export, ExportSummary, KindSummary, WatchlistExporter, REQUEST_DELAY};
pub use media_list::{load_media_list, parse_media_list};
pub use resolver::{classify_response, resolve_title};
