/// One unit of Story Protocol documentation.
///
/// The corpus is a compile-time table, so everything is borrowed from the
/// binary. `keywords` is a curated secondary search signal; title and
/// content stay authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocSection {
    /// Unique across the corpus.
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub keywords: &'static [&'static str],
    /// Coarse grouping, e.g. "overview", "licensing".
    pub category: &'static str,
}
