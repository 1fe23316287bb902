//! Social share links for the current page.

/// Text shared alongside the page URL.
pub const SHARE_TEXT: &str = "Check out this product";

/// Supported share targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareNetwork {
    Facebook,
    Twitter,
    WhatsApp,
}

impl ShareNetwork {
    /// All networks, in display order.
    pub const ALL: [ShareNetwork; 3] = [Self::Facebook, Self::Twitter, Self::WhatsApp];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::WhatsApp => "WhatsApp",
        }
    }

    /// Lowercase name, used for CSS classes.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::WhatsApp => "whatsapp",
        }
    }

    /// Share URL for `page_url`. Every interpolated value is percent-encoded.
    pub fn share_url(&self, page_url: &str, title: &str) -> String {
        let url = urlencoding::encode(page_url);
        match self {
            Self::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
            Self::Twitter => format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                url,
                urlencoding::encode(SHARE_TEXT)
            ),
            Self::WhatsApp => {
                let text = format!("{}: {} at {}", SHARE_TEXT, title, page_url);
                format!("https://wa.me/?text={}", urlencoding::encode(&text))
            }
        }
    }
}

/// A rendered share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub network: ShareNetwork,
    pub href: String,
}

/// Share links for every network.
pub fn share_links(page_url: &str, title: &str) -> Vec<ShareLink> {
    ShareNetwork::ALL
        .iter()
        .map(|network| ShareLink {
            network: *network,
            href: network.share_url(page_url, title),
        })
        .collect()
}
