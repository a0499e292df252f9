//! URL-based content classification.

use crate::types::ContentType;

/// Categorise a result by its URL.
///
/// Rules are checked in order and the first match wins. Only the PDF
/// check ignores case; the host checks are plain substring matches.
pub fn classify(url: &str) -> ContentType {
    if url.to_lowercase().contains("pdf") {
        ContentType::Pdf
    } else if url.contains("books.google.com") {
        ContentType::Book
    } else if url.contains("youtube.com") {
        ContentType::Video
    } else if url.contains("arxiv.org") {
        ContentType::ResearchPaper
    } else {
        ContentType::Article
    }
}
