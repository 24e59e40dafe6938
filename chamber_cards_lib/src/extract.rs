//! Per-card field extraction.
//!
//! Each field comes from the first matching element inside the card. A missing
//! element leaves the field empty; it never drops the column.

use scraper::{ElementRef, Selector};

use crate::parse::CardSelectors;
use crate::record::Record;

/// Fields found on one card, before absence is flattened to empty strings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CardFields {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl From<CardFields> for Record {
    fn from(fields: CardFields) -> Self {
        Record {
            name: fields.name.unwrap_or_default(),
            address: fields.address.unwrap_or_default(),
            phone: fields.phone.unwrap_or_default(),
            website: fields.website.unwrap_or_default(),
        }
    }
}

pub fn extract(card: ElementRef<'_>, selectors: &CardSelectors) -> Record {
    extract_fields(card, selectors).into()
}

pub fn extract_fields(card: ElementRef<'_>, selectors: &CardSelectors) -> CardFields {
    CardFields {
        name: first(card, &selectors.name).map(trimmed_text),
        address: first(card, &selectors.address).map(joined_text),
        phone: first(card, &selectors.phone).map(joined_text),
        website: first(card, &selectors.website)
            .and_then(|li| website_href(li, &selectors.anchor)),
    }
}

fn first<'a>(card: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    card.select(selector).next()
}

/// All descendant text concatenated, then trimmed.
fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Each descendant text node trimmed, blanks dropped, joined by one space.
fn joined_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn website_href(li: ElementRef<'_>, anchor: &Selector) -> Option<String> {
    let href = li
        .select(anchor)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string);
    if href.is_none() {
        tracing::warn!("website entry has no link, leaving Website empty");
    }
    href
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{find_cards, parse};

    fn extract_all(html: &str) -> Vec<Record> {
        let selectors = CardSelectors::new().unwrap();
        let doc = parse(html);
        find_cards(&doc, &selectors)
            .into_iter()
            .map(|card| extract(card, &selectors))
            .collect()
    }

    fn extract_one(inner: &str) -> Record {
        let html = format!(
            r#"<div class="card-body gz-directory-card-body">{}</div>"#,
            inner
        );
        let mut records = extract_all(&html);
        assert_eq!(records.len(), 1);
        records.remove(0)
    }

    #[test]
    fn test_full_card() {
        let record = extract_one(
            r#"
            <h5 class="card-title">
                Acme Inc
            </h5>
            <ul>
              <li class="list-group-item gz-card-address">
                <a href="https://maps.example/acme">
                  <span class="gz-street-address">123 Main St</span>
                  <div itemprop="citystatezip">
                    <span class="gz-address-city">City</span>
                    <span>ST</span>
                  </div>
                </a>
              </li>
              <li class="list-group-item gz-card-phone">
                <a href="tel:5551234"><span>555-1234</span></a>
              </li>
              <li class="list-group-item gz-card-website">
                <a href="https://acme.example" target="_blank">Visit Website</a>
              </li>
            </ul>
            "#,
        );
        assert_eq!(
            record,
            Record::new(
                "Acme Inc",
                "123 Main St City ST",
                "555-1234",
                "https://acme.example"
            )
        );
    }

    #[test]
    fn test_name_only_card() {
        let record = extract_one("<h5>Beta LLC</h5>");
        assert_eq!(record, Record::new("Beta LLC", "", "", ""));
    }

    #[test]
    fn test_empty_card() {
        assert_eq!(extract_one(""), Record::default());
    }

    #[test]
    fn test_name_concatenates_without_separator() {
        let record = extract_one("<h5>  Gamma<span>Corp</span>  </h5>");
        assert_eq!(record.name, "GammaCorp");
    }

    #[test]
    fn test_first_match_wins() {
        let record = extract_one(
            r#"
            <h5>First</h5><h5>Second</h5>
            <li class="gz-card-phone">111</li>
            <li class="gz-card-phone">222</li>
            <li class="gz-card-website"><a href="https://one.example">1</a><a href="https://two.example">2</a></li>
            "#,
        );
        assert_eq!(record.name, "First");
        assert_eq!(record.phone, "111");
        assert_eq!(record.website, "https://one.example");
    }

    #[test]
    fn test_nested_name_is_found() {
        let record = extract_one("<header><div><h5>Deep Name</h5></div></header>");
        assert_eq!(record.name, "Deep Name");
    }

    #[test]
    fn test_field_class_must_be_on_li() {
        let record = extract_one(
            r#"<span class="gz-card-address">Not an li</span>
               <li class="other gz-card-address extra">Real Address</li>"#,
        );
        assert_eq!(record.address, "Real Address");
    }

    #[test]
    fn test_website_without_anchor_is_empty() {
        let record = extract_one(
            r#"<h5>Delta</h5><li class="gz-card-website">www.delta.example</li>"#,
        );
        assert_eq!(record, Record::new("Delta", "", "", ""));
    }

    #[test]
    fn test_website_anchor_without_href_is_empty() {
        let record = extract_one(r#"<li class="gz-card-website"><a>Website</a></li>"#);
        assert_eq!(record.website, "");
    }

    #[test]
    fn test_website_href_is_literal() {
        let record = extract_one(
            r#"<li class="gz-card-website"><a href=" http://x.example/?a=1&amp;b=2 ">x</a></li>"#,
        );
        assert_eq!(record.website, " http://x.example/?a=1&b=2 ");
    }

    #[test]
    fn test_fields_stay_within_their_card() {
        let records = extract_all(
            r#"
            <div class="card-body gz-directory-card-body"><h5>One</h5></div>
            <div class="card-body gz-directory-card-body">
              <li class="gz-card-phone">555-0002</li>
            </div>
            "#,
        );
        assert_eq!(
            records,
            vec![
                Record::new("One", "", "", ""),
                Record::new("", "", "555-0002", ""),
            ]
        );
    }

    #[test]
    fn test_card_fields_flatten_to_record() {
        let fields = CardFields {
            name: Some("Echo".into()),
            address: None,
            phone: Some("555".into()),
            website: None,
        };
        assert_eq!(Record::from(fields), Record::new("Echo", "", "555", ""));
    }
}
