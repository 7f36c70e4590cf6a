//! Integration tests for the full verification pipeline.
//!
//! All collaborators are mocks; tests assert routing decisions,
//! fallback behavior, temp-file cleanup, verdict ordering, and the
//! fixed degradation paths.

use factcheck::testing::{
    MockArticleSource, MockCaptions, MockDownloader, MockModel, MockTranscriber,
    RecordingProgress,
};
use factcheck::{
    summarize, verify_claims, ArticleResolver, CaptionFragment, Claim, ContentRouter,
    NullProgress, Pipeline, PipelineConfig, PipelineError, Provenance, ResolveError,
    VerdictStatus, VideoResolver, SUMMARY_FALLBACK,
};

type MockRouter = ContentRouter<MockCaptions, MockDownloader, MockTranscriber, MockArticleSource>;

fn router(
    captions: MockCaptions,
    downloader: MockDownloader,
    transcriber: MockTranscriber,
    article: MockArticleSource,
) -> MockRouter {
    let config = PipelineConfig::default();
    ContentRouter::new(
        VideoResolver::new(captions, downloader, transcriber),
        ArticleResolver::new(article, config.min_article_chars),
    )
}

/// A realistic bullet-list extraction reply.
const CLAIMS_REPLY: &str = "* The dam was completed in 1936.\n\
                            * It generates 4.5 billion kWh annually.\n\
                            * The reservoir is the largest in the country.";

// =============================================================================
// Routing
// =============================================================================

#[tokio::test]
async fn video_urls_route_to_video_resolver_never_article() {
    let captions = MockCaptions::with_fragments(vec![
        CaptionFragment::new("A", 0.0, 1.0),
        CaptionFragment::new("B", 1.0, 1.0),
    ]);
    let article = MockArticleSource::new().with_extracted("article body");
    let router = router(
        captions.clone(),
        MockDownloader::new(),
        MockTranscriber::with_text("unused"),
        article.clone(),
    );

    // http(s) prefix present, but the video domain must win
    let content = router
        .resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await
        .unwrap();

    assert_eq!(content.provenance, Provenance::Transcript);
    assert_eq!(captions.calls(), vec!["dQw4w9WgXcQ"]);
    assert_eq!(article.call_count(), 0);
}

#[tokio::test]
async fn http_urls_route_to_article_resolver() {
    let article = MockArticleSource::new().with_extracted("the article text");
    let captions = MockCaptions::unavailable();
    let downloader = MockDownloader::new();
    let router = router(
        captions.clone(),
        downloader.clone(),
        MockTranscriber::with_text("unused"),
        article.clone(),
    );

    let content = router
        .resolve("https://example.com/news/story")
        .await
        .unwrap();

    assert_eq!(content.provenance, Provenance::Article);
    assert_eq!(content.text, "the article text");
    assert_eq!(article.call_count(), 1);
    assert!(captions.calls().is_empty());
    assert_eq!(downloader.call_count(), 0);
}

#[tokio::test]
async fn www_prefix_routes_to_article_resolver() {
    let article = MockArticleSource::new().with_extracted("the article text");
    let router = router(
        MockCaptions::unavailable(),
        MockDownloader::new(),
        MockTranscriber::with_text("unused"),
        article.clone(),
    );

    let content = router.resolve("www.example.org/page").await.unwrap();
    assert_eq!(content.provenance, Provenance::Article);
    assert_eq!(article.call_count(), 1);
}

#[tokio::test]
async fn plain_text_passes_through_unchanged() {
    let article = MockArticleSource::new();
    let router = router(
        MockCaptions::unavailable(),
        MockDownloader::new(),
        MockTranscriber::with_text("unused"),
        article.clone(),
    );

    let input = "The Eiffel Tower was completed in 1889 and is 330 meters tall.";
    let content = router.resolve(input).await.unwrap();

    assert_eq!(content.provenance, Provenance::Raw);
    assert_eq!(content.text, input);
    assert_eq!(article.call_count(), 0);
}

// =============================================================================
// Video resolution
// =============================================================================

#[tokio::test]
async fn captions_short_circuit_audio_download() {
    let captions = MockCaptions::with_fragments(vec![
        CaptionFragment::new("A", 0.0, 1.0),
        CaptionFragment::new("B", 1.0, 1.0),
    ]);
    let downloader = MockDownloader::new();
    let resolver = VideoResolver::new(
        captions,
        downloader.clone(),
        MockTranscriber::with_text("unused"),
    );

    let content = resolver
        .resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await
        .unwrap();

    assert_eq!(content.text, "TRANSCRIPT:\nA B");
    assert_eq!(downloader.call_count(), 0);
}

#[tokio::test]
async fn missing_captions_fall_back_to_transcription_and_clean_up() {
    let downloader = MockDownloader::new();
    let transcriber = MockTranscriber::with_text("spoken words from the video");
    let resolver = VideoResolver::new(
        MockCaptions::unavailable(),
        downloader.clone(),
        transcriber.clone(),
    );

    let content = resolver
        .resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await
        .unwrap();

    assert_eq!(content.text, "TRANSCRIPT:\nspoken words from the video");
    assert_eq!(downloader.call_count(), 1);
    assert_eq!(transcriber.calls().len(), 1);

    // The temp audio file must be gone after resolution
    let path = downloader.last_path().expect("downloader created a file");
    assert!(!path.exists(), "temp audio file was not cleaned up");
}

#[tokio::test]
async fn transcription_failure_still_cleans_up_temp_file() {
    let downloader = MockDownloader::new();
    let resolver = VideoResolver::new(
        MockCaptions::unavailable(),
        downloader.clone(),
        MockTranscriber::failing(),
    );

    let result = resolver
        .resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await;

    assert!(matches!(result, Err(ResolveError::Transcription(_))));
    let path = downloader.last_path().expect("downloader created a file");
    assert!(!path.exists(), "temp audio file leaked on error path");
}

#[tokio::test]
async fn download_failure_surfaces_audio_download_error() {
    let resolver = VideoResolver::new(
        MockCaptions::unavailable(),
        MockDownloader::failing(),
        MockTranscriber::with_text("unused"),
    );

    let result = resolver.resolve("https://vimeo.com/12345").await;
    assert!(matches!(result, Err(ResolveError::AudioDownload(_))));
}

#[tokio::test]
async fn non_youtube_video_skips_caption_lookup() {
    let captions = MockCaptions::with_fragments(vec![CaptionFragment::new("A", 0.0, 1.0)]);
    let resolver = VideoResolver::new(
        captions.clone(),
        MockDownloader::new(),
        MockTranscriber::with_text("tiktok audio"),
    );

    let content = resolver
        .resolve("https://www.tiktok.com/@user/video/123")
        .await
        .unwrap();

    assert!(captions.calls().is_empty());
    assert_eq!(content.text, "TRANSCRIPT:\ntiktok audio");
}

// =============================================================================
// Article resolution
// =============================================================================

#[tokio::test]
async fn article_raw_fallback_strips_markup() {
    let body = format!(
        "<html><head><script>x()</script></head><body><h1>Title</h1>{}</body></html>",
        "<span>word </span>".repeat(40)
    );
    let article = MockArticleSource::new().with_raw(200, body);
    let resolver = ArticleResolver::new(article, 100);

    let content = resolver.resolve("https://example.com/x").await.unwrap();
    assert!(content.text.starts_with("Title word word"));
    assert!(!content.text.contains('<'));
}

#[tokio::test]
async fn article_raw_fallback_rejects_non_200() {
    let article = MockArticleSource::new().with_raw(404, "<html>not found</html>".to_string());
    let resolver = ArticleResolver::new(article, 100);

    let result = resolver.resolve("https://example.com/missing").await;
    assert!(matches!(result, Err(ResolveError::BadStatus(404))));
}

#[tokio::test]
async fn article_raw_fallback_rejects_short_pages() {
    let article = MockArticleSource::new().with_raw(200, "<html>tiny</html>".to_string());
    let resolver = ArticleResolver::new(article, 100);

    let result = resolver.resolve("https://example.com/empty").await;
    assert!(matches!(result, Err(ResolveError::TooShort { .. })));
}

// =============================================================================
// Claim extraction
// =============================================================================

#[tokio::test]
async fn short_content_extracts_nothing_without_model_call() {
    let model = MockModel::new().with_default_reply(CLAIMS_REPLY);
    let config = PipelineConfig::default();

    let claims = factcheck::extract_claims(&model, "Hello", &config)
        .await
        .unwrap();

    assert!(claims.is_empty());
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn extraction_requests_margin_above_max_claims() {
    let model = MockModel::new().with_default_reply(CLAIMS_REPLY);
    let config = PipelineConfig::default().with_max_claims(3);
    let content = "c".repeat(200);

    let claims = factcheck::extract_claims(&model, &content, &config)
        .await
        .unwrap();

    assert_eq!(claims.len(), 3);
    let prompts = model.prompts();
    assert!(prompts[0].contains("Extract 5 factual claims"));
}

// =============================================================================
// Verification
// =============================================================================

#[tokio::test]
async fn verify_returns_one_ordered_verdict_per_claim() {
    let model = MockModel::new()
        .with_reply("Status: SUPPORTED\nReason: Census data agrees.")
        .with_reply("Status: CONTRADICTED\nReason: Data mismatch.")
        .with_reply("Status: maybe?\nReason: Sources conflict.");
    let claims = vec![
        Claim::new("first claim"),
        Claim::new("second claim"),
        Claim::new("third claim"),
    ];

    let verdicts = verify_claims(&model, &claims, &NullProgress).await;

    assert_eq!(verdicts.len(), 3);
    assert_eq!(verdicts[0].claim, "first claim");
    assert_eq!(verdicts[0].status, VerdictStatus::Supported);
    assert_eq!(verdicts[1].claim, "second claim");
    assert_eq!(verdicts[1].status, VerdictStatus::Contradicted);
    assert_eq!(verdicts[1].reason, "Data mismatch.");
    assert_eq!(verdicts[2].claim, "third claim");
    assert_eq!(verdicts[2].status, VerdictStatus::Inconclusive);
}

#[tokio::test]
async fn one_failed_claim_does_not_abort_the_batch() {
    let model = MockModel::new()
        .with_reply("Status: SUPPORTED\nReason: Fine.")
        .with_failure()
        .with_reply("Status: SUPPORTED\nReason: Also fine.");
    let claims = vec![Claim::new("a"), Claim::new("b"), Claim::new("c")];

    let verdicts = verify_claims(&model, &claims, &NullProgress).await;

    assert_eq!(verdicts.len(), 3);
    assert_eq!(verdicts[0].status, VerdictStatus::Supported);
    assert_eq!(verdicts[1].status, VerdictStatus::Inconclusive);
    assert_eq!(verdicts[1].reason, "API Error.");
    assert_eq!(verdicts[2].status, VerdictStatus::Supported);
}

#[tokio::test]
async fn progress_reports_each_claim_and_ends_complete() {
    let model = MockModel::new().with_default_reply("Status: SUPPORTED\nReason: ok ok.");
    let claims = vec![Claim::new("a"), Claim::new("b"), Claim::new("c")];
    let progress = RecordingProgress::new();

    verify_claims(&model, &claims, &progress).await;

    assert_eq!(progress.updates(), vec![(1, 3), (2, 3), (3, 3)]);
}

// =============================================================================
// Report generation
// =============================================================================

#[tokio::test]
async fn summarize_empty_verdicts_returns_fallback() {
    let model = MockModel::new().with_default_reply("should not be called");
    let summary = summarize(&model, &[]).await;

    assert_eq!(summary, SUMMARY_FALLBACK);
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn summarize_model_failure_returns_fallback() {
    let model = MockModel::new().with_failure();
    let verdicts = vec![factcheck::Verdict::new(
        "a claim",
        VerdictStatus::Supported,
        "fine",
    )];

    let summary = summarize(&model, &verdicts).await;
    assert_eq!(summary, SUMMARY_FALLBACK);
}

// =============================================================================
// Full pipeline
// =============================================================================

#[tokio::test]
async fn pipeline_runs_end_to_end_on_raw_text() {
    let model = MockModel::new()
        .with_reply(CLAIMS_REPLY)
        .with_reply("Status: SUPPORTED\nReason: Historical record.")
        .with_reply("Status: SUPPORTED\nReason: Utility reports.")
        .with_reply("Status: CONTRADICTED\nReason: Another reservoir is larger.")
        .with_reply("Two of three claims hold up; the size claim does not.");
    let progress = RecordingProgress::new();

    let pipeline = Pipeline::new(
        router(
            MockCaptions::unavailable(),
            MockDownloader::new(),
            MockTranscriber::with_text("unused"),
            MockArticleSource::new(),
        ),
        model.clone(),
        PipelineConfig::default(),
    )
    .with_progress(progress.clone());

    let input = "The dam was completed in 1936. It generates 4.5 billion kWh \
                 annually. The reservoir is the largest in the country.";
    let analysis = pipeline.run(input).await.unwrap();

    assert_eq!(analysis.provenance, Provenance::Raw);
    assert_eq!(analysis.verdicts.len(), 3);
    assert_eq!(analysis.verdicts[2].status, VerdictStatus::Contradicted);
    assert_eq!(
        analysis.summary,
        "Two of three claims hold up; the size claim does not."
    );
    // 1 extraction + 3 verifications + 1 summary
    assert_eq!(model.call_count(), 5);
    assert_eq!(progress.updates().last(), Some(&(3, 3)));
}

#[tokio::test]
async fn pipeline_caps_verified_claims_at_max() {
    let model = MockModel::new()
        .with_reply(CLAIMS_REPLY)
        .with_default_reply("Status: SUPPORTED\nReason: ok ok.");

    let pipeline = Pipeline::new(
        router(
            MockCaptions::unavailable(),
            MockDownloader::new(),
            MockTranscriber::with_text("unused"),
            MockArticleSource::new(),
        ),
        model,
        PipelineConfig::default().with_max_claims(2),
    );

    let input = "a long enough stretch of raw text with several factual statements inside it";
    let analysis = pipeline.run(input).await.unwrap();

    assert_eq!(analysis.verdicts.len(), 2);
}

#[tokio::test]
async fn pipeline_extraction_failure_becomes_no_claims() {
    let model = MockModel::new().with_failure();

    let pipeline = Pipeline::new(
        router(
            MockCaptions::unavailable(),
            MockDownloader::new(),
            MockTranscriber::with_text("unused"),
            MockArticleSource::new(),
        ),
        model,
        PipelineConfig::default(),
    );

    let input = "a long enough stretch of raw text with several factual statements inside it";
    let result = pipeline.run(input).await;

    assert!(matches!(result, Err(PipelineError::NoClaims)));
}

#[tokio::test]
async fn pipeline_surfaces_resolution_failure() {
    let model = MockModel::new().with_default_reply(CLAIMS_REPLY);

    let pipeline = Pipeline::new(
        router(
            MockCaptions::unavailable(),
            MockDownloader::failing(),
            MockTranscriber::with_text("unused"),
            MockArticleSource::new(),
        ),
        model.clone(),
        PipelineConfig::default(),
    );

    let result = pipeline.run("https://vimeo.com/12345").await;

    assert!(matches!(
        result,
        Err(PipelineError::Resolve(ResolveError::AudioDownload(_)))
    ));
    assert_eq!(model.call_count(), 0);
}
