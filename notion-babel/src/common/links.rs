//! Display names for linked resources.
//!
//! Images and files without a caption or name are labelled with the last path segment of their
//! URL: `https://host/a/Quarterly%20Plan.pdf?X-Amz=…` becomes `Quarterly Plan.pdf`.

use url::Url;

/// Last path segment of `url`, percent-decoded, without query string or fragment.
///
/// Returns `None` when the URL cannot be parsed, has no path segments, ends in `/`, or decodes
/// to invalid UTF-8.
pub fn file_name_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.last()?;
    let decoded = urlencoding::decode(segment).ok()?;
    if decoded.is_empty() {
        None
    } else {
        Some(decoded.into_owned())
    }
}

/// First value that is present and not empty.
pub(crate) fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}
