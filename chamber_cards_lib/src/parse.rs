//! HTML parsing and card discovery.

use scraper::{ElementRef, Html, Selector};

use crate::error::CardsError;

const CARD: &str = "div.card-body.gz-directory-card-body";
const NAME: &str = "h5";
const ADDRESS: &str = "li.gz-card-address";
const PHONE: &str = "li.gz-card-phone";
const WEBSITE: &str = "li.gz-card-website";
const ANCHOR: &str = "a";

/// Compiled selectors for a directory page and the fields of each card.
#[derive(Debug)]
pub struct CardSelectors {
    pub card: Selector,
    pub name: Selector,
    pub address: Selector,
    pub phone: Selector,
    pub website: Selector,
    pub anchor: Selector,
}

impl CardSelectors {
    pub fn new() -> Result<Self, CardsError> {
        Ok(Self {
            card: compile(CARD)?,
            name: compile(NAME)?,
            address: compile(ADDRESS)?,
            phone: compile(PHONE)?,
            website: compile(WEBSITE)?,
            anchor: compile(ANCHOR)?,
        })
    }
}

fn compile(css: &str) -> Result<Selector, CardsError> {
    Selector::parse(css).map_err(|e| CardsError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a page body. html5ever recovers from malformed markup, so this never fails.
pub fn parse(body: &str) -> Html {
    Html::parse_document(body)
}

/// All card elements in document order. Both class tokens are required;
/// their order and any extra classes do not matter.
pub fn find_cards<'a>(doc: &'a Html, selectors: &CardSelectors) -> Vec<ElementRef<'a>> {
    doc.select(&selectors.card).collect()
}
