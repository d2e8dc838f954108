//! Outbound contact link.

use anyhow::Context as _;

pub(crate) fn contact_url(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{number}?text={}",
        urlencoding::encode(message)
    )
}

/// Opens `url` with the platform handler without waiting for it.
pub(crate) fn open_link(url: &str) -> anyhow::Result<()> {
    open::that_detached(url).with_context(|| format!("open {url}"))
}
