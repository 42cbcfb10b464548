// Text-analysis engine: tokenization, keyword extraction, job/résumé
// matching, and chart data derivation. Everything here is a pure function
// of its inputs; the exclusion store is read by the HTTP handlers and
// passed down as a plain snapshot.

pub mod charts;
pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod normalizer;
pub mod stopwords;
