//! Typed content model for the landing page.
//!
//! Everything here is immutable once built; the hardcoded table lives in [`catalog`].

use crate::carousel::ImageList;
use crate::error::{AppError, Result};
use url::Url;

pub mod catalog;

/// Reference to an image: a site-relative path (`/BANDA.jpg`) or an absolute URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the reference points at a remote host rather than the asset directory.
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

/// What an event shows on its image side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Single(ImageRef),
    Carousel(ImageList),
}

/// Link to a recording on one of the two supported video platforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalLink {
    Facebook(Url),
    YouTube(Url),
}

impl ExternalLink {
    pub fn facebook(url: &str) -> Result<Self> {
        parse_platform_url(url, "facebook.com").map(ExternalLink::Facebook)
    }

    pub fn youtube(url: &str) -> Result<Self> {
        parse_platform_url(url, "youtube.com").map(ExternalLink::YouTube)
    }

    pub fn url(&self) -> &Url {
        match self {
            ExternalLink::Facebook(url) | ExternalLink::YouTube(url) => url,
        }
    }

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            ExternalLink::Facebook(_) => "Ver en Facebook",
            ExternalLink::YouTube(_) => "Ver en YouTube",
        }
    }
}

fn parse_platform_url(raw: &str, domain: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if url.scheme() != "https" {
        return Err(AppError::InvalidLink(format!("{} is not https", raw)));
    }
    let host = url.host_str().unwrap_or_default();
    let on_platform = host == domain || host.ends_with(&format!(".{}", domain));
    if !on_platform {
        return Err(AppError::InvalidLink(format!(
            "{} is not hosted on {}",
            raw, domain
        )));
    }
    Ok(url)
}

/// One entry in a day's programme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub media: Media,
    pub links: Vec<ExternalLink>,
}

impl EventRecord {
    pub fn link(&self, platform: fn(&ExternalLink) -> bool) -> Option<&ExternalLink> {
        self.links.iter().find(|link| platform(link))
    }

    pub fn facebook_link(&self) -> Option<&ExternalLink> {
        self.link(|link| matches!(link, ExternalLink::Facebook(_)))
    }

    pub fn youtube_link(&self) -> Option<&ExternalLink> {
        self.link(|link| matches!(link, ExternalLink::YouTube(_)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub name: String,
    pub events: Vec<EventRecord>,
}

/// Portrait panel with a signed message, shown on the home tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub heading: String,
    pub portrait: ImageRef,
    pub paragraphs: Vec<String>,
    pub signatory: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct About {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub tab_label: String,
    pub greetings: Vec<Greeting>,
    pub about: About,
}

/// The page behind a tab.
#[derive(Debug, Clone, Copy)]
pub enum Page<'a> {
    Home(&'a HomePage),
    Day(&'a Day),
}

/// Complete, immutable site content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub site_title: String,
    pub day_subtitle: String,
    pub left_logo: ImageRef,
    pub right_logo: ImageRef,
    pub home: HomePage,
    pub days: Vec<Day>,
}

impl Schedule {
    /// Tab captions: the home tab first, then one per day.
    pub fn tab_labels(&self) -> Vec<String> {
        std::iter::once(self.home.tab_label.clone())
            .chain(self.days.iter().map(|day| day.name.clone()))
            .collect()
    }

    pub fn tab_count(&self) -> usize {
        self.days.len() + 1
    }

    pub fn page(&self, tab: usize) -> Result<Page<'_>> {
        match tab {
            0 => Ok(Page::Home(&self.home)),
            n => self
                .days
                .get(n - 1)
                .map(Page::Day)
                .ok_or(AppError::UnknownTab {
                    index: tab,
                    count: self.tab_count(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_references_are_detected() {
        assert!(ImageRef::new("https://images.unsplash.com/photo.jpg").is_remote());
        assert!(!ImageRef::new("/BANDA.jpg").is_remote());
    }

    #[test]
    fn links_must_match_their_platform() {
        let fb = ExternalLink::facebook("https://www.facebook.com/share/v/1A7WmP2e3q/").unwrap();
        assert_eq!(fb.label(), "Ver en Facebook");
        assert_eq!(fb.url().host_str(), Some("www.facebook.com"));

        assert!(ExternalLink::youtube("https://youtube.com/watch?v=abc").is_ok());
        assert!(matches!(
            ExternalLink::youtube("https://www.facebook.com/share/v/1A7WmP2e3q/"),
            Err(AppError::InvalidLink(_))
        ));
        assert!(matches!(
            ExternalLink::facebook("https://notfacebook.com/x"),
            Err(AppError::InvalidLink(_))
        ));
        assert!(matches!(
            ExternalLink::youtube("http://www.youtube.com/watch?v=abc"),
            Err(AppError::InvalidLink(_))
        ));
        assert!(ExternalLink::youtube("youtube").is_err());
    }

    #[test]
    fn page_lookup_by_tab() {
        let schedule = Schedule {
            site_title: "Week".into(),
            day_subtitle: "Events".into(),
            left_logo: ImageRef::new("/l.png"),
            right_logo: ImageRef::new("/r.png"),
            home: HomePage {
                tab_label: "Inicio".into(),
                greetings: Vec::new(),
                about: About {
                    title: "About".into(),
                    body: "Body".into(),
                },
            },
            days: vec![Day {
                name: "Lunes".into(),
                events: Vec::new(),
            }],
        };

        assert_eq!(schedule.tab_labels(), vec!["Inicio", "Lunes"]);
        assert!(matches!(schedule.page(0), Ok(Page::Home(_))));
        assert!(matches!(schedule.page(1), Ok(Page::Day(day)) if day.name == "Lunes"));
        assert!(matches!(
            schedule.page(2),
            Err(AppError::UnknownTab { index: 2, count: 2 })
        ));
    }
}
