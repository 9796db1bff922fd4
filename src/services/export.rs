use std::{fs::File, io::Write, path::Path, sync::Arc, time::Duration};

use crate::{
    config::Config,
    error::AppResult,
    models::{MediaKind, MediaList, OutputRow, ResolutionResult, CSV_HEADER},
    services::{
        media_list::load_media_list, providers::TitleSearchProvider, resolver::resolve_title,
    },
};

/// Pause after every lookup, whatever its outcome
pub const REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Row counts for one media kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindSummary {
    pub rows: usize,
    pub found: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl KindSummary {
    fn record(&mut self, result: &ResolutionResult) {
        self.rows += 1;
        match result {
            ResolutionResult::Identifier(_) => self.found += 1,
            ResolutionResult::NotFound(_) => self.not_found += 1,
            ResolutionResult::LookupError(_) => self.errors += 1,
        }
    }
}

/// Outcome of an export run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub movies: KindSummary,
    pub shows: KindSummary,
}

impl ExportSummary {
    pub fn kind(&self, kind: MediaKind) -> &KindSummary {
        match kind {
            MediaKind::Movie => &self.movies,
            MediaKind::Show => &self.shows,
        }
    }

    fn kind_mut(&mut self, kind: MediaKind) -> &mut KindSummary {
        match kind {
            MediaKind::Movie => &mut self.movies,
            MediaKind::Show => &mut self.shows,
        }
    }

    pub fn rows(&self) -> usize {
        self.movies.rows + self.shows.rows
    }

    pub fn found(&self) -> usize {
        self.movies.found + self.shows.found
    }

    /// Rows that need a human to look at them
    pub fn needs_review(&self) -> usize {
        self.rows() - self.found()
    }
}

/// Drives the resolver over a media list and writes the import CSV
pub struct WatchlistExporter {
    provider: Arc<dyn TitleSearchProvider>,
}

impl WatchlistExporter {
    pub fn new(provider: Arc<dyn TitleSearchProvider>) -> Self {
        Self { provider }
    }

    /// Writes the header, then one row per title: all movies, then all shows
    ///
    /// Rows are flushed as they are written, so an interrupted run leaves every
    /// completed row on disk.
    pub async fn export<W: Write>(
        &self,
        media: &MediaList,
        watchlisted_at: &str,
        writer: &mut csv::Writer<W>,
    ) -> AppResult<ExportSummary> {
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;

        let mut summary = ExportSummary::default();

        println!("Processing Movies...");
        self.process_titles(media, MediaKind::Movie, watchlisted_at, writer, &mut summary)
            .await?;

        println!("\nProcessing TV Shows...");
        self.process_titles(media, MediaKind::Show, watchlisted_at, writer, &mut summary)
            .await?;

        tracing::info!(
            rows = summary.rows(),
            found = summary.found(),
            needs_review = summary.needs_review(),
            provider = self.provider.name(),
            "Export completed"
        );

        Ok(summary)
    }

    async fn process_titles<W: Write>(
        &self,
        media: &MediaList,
        kind: MediaKind,
        watchlisted_at: &str,
        writer: &mut csv::Writer<W>,
        summary: &mut ExportSummary,
    ) -> AppResult<()> {
        if media.titles(kind).is_empty() {
            println!("No {} titles found to process.", kind);
            return Ok(());
        }

        for entry in media.entries(kind) {
            println!("Searching for {}: {}...", entry.kind, entry.title);
            let result = resolve_title(self.provider.as_ref(), &entry.title, entry.kind).await;

            writer.serialize(OutputRow::new(&result, &entry, watchlisted_at))?;
            writer.flush()?;
            summary.kind_mut(entry.kind).record(&result);

            tokio::time::sleep(REQUEST_DELAY).await;
        }

        Ok(())
    }
}

/// Builds a CSV writer that leaves header handling to [`WatchlistExporter::export`]
pub fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().has_headers(false).from_writer(inner)
}

/// Loads the media list, then creates the output file and exports into it
///
/// The output file is only created once the media list has loaded, so a missing
/// or malformed list leaves any existing output untouched.
pub async fn run_export(
    config: &Config,
    provider: Arc<dyn TitleSearchProvider>,
    watchlisted_at: &str,
) -> AppResult<ExportSummary> {
    let media = load_media_list(Path::new(&config.media_list_file))?;

    let file = File::create(&config.output_csv_file)?;
    let mut writer = csv_writer(file);

    WatchlistExporter::new(provider)
        .export(&media, watchlisted_at, &mut writer)
        .await
}
