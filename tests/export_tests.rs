use std::{
    collections::HashSet,
    fs,
    path::Path,
    sync::{Arc, Mutex},
};

use watchlist_export::{
    config::Config,
    error::{AppError, AppResult},
    models::{MediaKind, OmdbSearchHit, OmdbSearchResponse, CSV_HEADER},
    services::{providers::TitleSearchProvider, run_export},
};

const TIMESTAMP: &str = "2024-05-06T07:08:09.123Z";

/// Answers from a fixed table and records every call
#[derive(Default)]
struct FakeProvider {
    unreachable: HashSet<String>,
    calls: Mutex<Vec<(String, MediaKind)>>,
}

impl FakeProvider {
    fn failing_for(titles: &[&str]) -> Self {
        Self {
            unreachable: titles.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<(String, MediaKind)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TitleSearchProvider for FakeProvider {
    async fn search(&self, title: &str, kind: MediaKind) -> AppResult<OmdbSearchResponse> {
        self.calls.lock().unwrap().push((title.to_string(), kind));

        if self.unreachable.contains(title) {
            return Err(AppError::ExternalApi(format!("timed out looking up {}", title)));
        }

        if title.starts_with("Unknown") {
            return Ok(OmdbSearchResponse {
                response: "False".to_string(),
                search: vec![],
                error: Some(match kind {
                    MediaKind::Movie => "Movie not found!".to_string(),
                    MediaKind::Show => "Series not found!".to_string(),
                }),
            });
        }

        Ok(OmdbSearchResponse {
            response: "True".to_string(),
            search: vec![OmdbSearchHit {
                imdb_id: Some(format!("tt{}", title.len())),
                title: Some(title.to_string()),
                ..Default::default()
            }],
            error: None,
        })
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

fn test_config(dir: &Path) -> Config {
    Config::from_vars(vec![
        ("OMDB_API_KEY".to_string(), "test_key".to_string()),
        (
            "MEDIA_LIST_FILE".to_string(),
            dir.join("sampleMedia.toml").display().to_string(),
        ),
        (
            "OUTPUT_CSV_FILE".to_string(),
            dir.join("trakt_import_list.csv").display().to_string(),
        ),
    ])
    .unwrap()
}

fn read_csv(path: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_full_export() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    fs::write(
        &config.media_list_file,
        r#"
        [movies]
        titles = ["Dune", "Unknown Film", "Dune"]

        [tv_shows]
        titles = ["Severance", "Broken Show"]
        "#,
    )
    .unwrap();

    let provider = Arc::new(FakeProvider::failing_for(&["Broken Show"]));
    let summary = run_export(&config, provider.clone(), TIMESTAMP)
        .await
        .unwrap();

    let rows = read_csv(&config.output_csv_file);
    assert_eq!(rows[0], CSV_HEADER);
    assert_eq!(
        rows[1..].to_vec(),
        vec![
            vec!["tt4", "movie", TIMESTAMP, "Dune"],
            vec!["Not Found: Movie not found!", "movie", TIMESTAMP, "Unknown Film"],
            vec!["tt4", "movie", TIMESTAMP, "Dune"],
            vec!["tt9", "show", TIMESTAMP, "Severance"],
            vec![
                "API Error: External API error: timed out looking up Broken Show",
                "show",
                TIMESTAMP,
                "Broken Show"
            ],
        ]
    );

    assert_eq!(summary.rows(), 5);
    assert_eq!(summary.movies.rows, 3);
    assert_eq!(summary.shows.rows, 2);
    assert_eq!(summary.shows.errors, 1);

    assert_eq!(
        provider.calls(),
        vec![
            ("Dune".to_string(), MediaKind::Movie),
            ("Unknown Film".to_string(), MediaKind::Movie),
            ("Dune".to_string(), MediaKind::Movie),
            ("Severance".to_string(), MediaKind::Show),
            ("Broken Show".to_string(), MediaKind::Show),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_every_row_shares_the_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    fs::write(
        &config.media_list_file,
        "[movies]\ntitles = [\"A\", \"B\"]\n[tv_shows]\ntitles = [\"C\"]\n",
    )
    .unwrap();

    run_export(&config, Arc::new(FakeProvider::default()), TIMESTAMP)
        .await
        .unwrap();

    let rows = read_csv(&config.output_csv_file);
    assert_eq!(rows.len(), 4);
    assert!(rows[1..].iter().all(|row| row[2] == TIMESTAMP));
}

#[tokio::test(start_paused = true)]
async fn test_empty_movies_one_show() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    fs::write(
        &config.media_list_file,
        "[movies]\ntitles = []\n[tv_shows]\ntitles = [\"Show A\"]\n",
    )
    .unwrap();

    let summary = run_export(&config, Arc::new(FakeProvider::default()), TIMESTAMP)
        .await
        .unwrap();

    let rows = read_csv(&config.output_csv_file);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][1], "show");
    assert_eq!(summary.rows(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_empty_file_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    fs::write(&config.media_list_file, "").unwrap();

    let summary = run_export(&config, Arc::new(FakeProvider::default()), TIMESTAMP)
        .await
        .unwrap();

    let contents = fs::read_to_string(&config.output_csv_file).unwrap();
    assert_eq!(contents, "id,media_type,watchlisted_at,original_title\n");
    assert_eq!(summary.rows(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_missing_media_list_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let provider = Arc::new(FakeProvider::default());

    let result = run_export(&config, provider.clone(), TIMESTAMP).await;

    assert!(matches!(result, Err(AppError::MediaListNotFound { .. })));
    assert!(!Path::new(&config.output_csv_file).exists());
    assert!(provider.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_malformed_media_list_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    fs::write(&config.media_list_file, "[movies\ntitles = [").unwrap();
    fs::write(&config.output_csv_file, "previous run\n").unwrap();

    let result = run_export(&config, Arc::new(FakeProvider::default()), TIMESTAMP).await;

    tokio_test::assert_err!(&result);
    assert!(matches!(result, Err(AppError::MediaListParse { .. })));
    assert_eq!(
        fs::read_to_string(&config.output_csv_file).unwrap(),
        "previous run\n"
    );
}

#[test]
fn test_missing_api_key_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("trakt_import_list.csv");

    let result = Config::from_vars(vec![(
        "OUTPUT_CSV_FILE".to_string(),
        output.display().to_string(),
    )]);

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::MissingApiKey));
    assert!(err.hint().unwrap().contains("OMDB_API_KEY"));
    assert!(!output.exists());
}
