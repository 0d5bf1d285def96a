//! Reading daily rates documents into flat [`QuoteRecord`] lists.
//!
//! A document looks like:
//!
//! ```xml
//! <ValCurs Date="17.05.2024" name="Foreign Currency Market">
//!     <Valute ID="R01235">
//!         <NumCode>840</NumCode>
//!         <CharCode>USD</CharCode>
//!         <Nominal>1</Nominal>
//!         <Name>US Dollar</Name>
//!         <Value>90,9237</Value>
//!     </Valute>
//! </ValCurs>
//! ```
//!
//! Every `<Valute>` becomes one record stamped with the requested date.
use chrono::NaiveDate;
use xml::reader::{ParserConfig, XmlEvent};

use crate::error::RatesError;
use crate::model::QuoteRecord;
use crate::result::Result;

/// Tag of one currency entry.
pub const ENTRY_TAG: &str = "Valute";
/// Tag holding the unit count a rate is quoted for.
pub const NOMINAL_TAG: &str = "Nominal";
/// Tag holding the currency display name.
pub const NAME_TAG: &str = "Name";
/// Tag holding the rate.
pub const VALUE_TAG: &str = "Value";
/// Tag holding the ISO letter code.
pub const CHAR_CODE_TAG: &str = "CharCode";

#[derive(Debug, Clone, Copy)]
enum Field {
    Nominal,
    Name,
    Value,
    CharCode,
}

impl Field {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            NOMINAL_TAG => Some(Field::Nominal),
            NAME_TAG => Some(Field::Name),
            VALUE_TAG => Some(Field::Value),
            CHAR_CODE_TAG => Some(Field::CharCode),
            _ => None,
        }
    }
}

/// A `<Valute>` being read. Only the first occurrence of each tag is kept.
struct Entry {
    depth: usize,
    nominal: Option<String>,
    name: Option<String>,
    value: Option<String>,
    char_code: Option<String>,
    capture: Option<(Field, usize, String)>,
}

impl Entry {
    fn new(depth: usize) -> Self {
        Entry {
            depth,
            nominal: None,
            name: None,
            value: None,
            char_code: None,
            capture: None,
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Nominal => &mut self.nominal,
            Field::Name => &mut self.name,
            Field::Value => &mut self.value,
            Field::CharCode => &mut self.char_code,
        }
    }

    fn open(&mut self, tag: &str, depth: usize) {
        if self.capture.is_some() {
            return;
        }
        if let Some(field) = Field::from_tag(tag) {
            if self.slot(field).is_none() {
                self.capture = Some((field, depth, String::new()));
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some((_, _, buf)) = self.capture.as_mut() {
            buf.push_str(text);
        }
    }

    fn close(&mut self, depth: usize) {
        if self.capture.as_ref().is_some_and(|(_, at, _)| *at == depth) {
            if let Some((field, _, text)) = self.capture.take() {
                *self.slot(field) = Some(text);
            }
        }
    }

    fn into_record(self, date: NaiveDate, index: usize) -> Result<QuoteRecord> {
        let nominal = require(self.nominal, NOMINAL_TAG, index)?;
        let name = require(self.name, NAME_TAG, index)?;
        let value = require(self.value, VALUE_TAG, index)?;

        let denomination: u32 =
            nominal
                .trim()
                .parse()
                .map_err(|_| RatesError::InvalidNumber {
                    field: NOMINAL_TAG,
                    value: nominal.clone(),
                })?;

        let record = QuoteRecord::new(date, name.trim(), denomination, value.trim());
        Ok(match self.char_code {
            Some(code) if !code.trim().is_empty() => record.with_char_code(code.trim()),
            _ => record,
        })
    }
}

/// Parses `body` into one record per currency entry, each tagged with `date`.
///
/// Entries are found by tag name wherever they sit in the document, and each
/// field is taken from the first matching sub-element. Fails with
/// [`RatesError::MissingField`] if an entry lacks `<Nominal>`, `<Name>` or
/// `<Value>`.
pub fn parse_quotes(body: &str, date: NaiveDate) -> Result<Vec<QuoteRecord>> {
    let reader = ParserConfig::new()
        .trim_whitespace(true)
        .create_reader(strip_declaration(body).as_bytes());

    let mut records = Vec::new();
    let mut entry: Option<Entry> = None;
    let mut depth = 0usize;

    for event in reader {
        match event? {
            XmlEvent::StartElement { name, .. } => {
                depth += 1;
                if let Some(current) = entry.as_mut() {
                    current.open(&name.local_name, depth);
                } else if name.local_name == ENTRY_TAG {
                    entry = Some(Entry::new(depth));
                }
            }
            XmlEvent::Characters(text) | XmlEvent::CData(text) => {
                if let Some(current) = entry.as_mut() {
                    current.push_text(&text);
                }
            }
            XmlEvent::EndElement { .. } => {
                if entry.as_ref().is_some_and(|e| e.depth == depth) {
                    if let Some(finished) = entry.take() {
                        let index = records.len();
                        records.push(finished.into_record(date, index)?);
                    }
                } else if let Some(current) = entry.as_mut() {
                    current.close(depth);
                }
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
    }
    Ok(records)
}

fn require(field: Option<String>, tag: &'static str, index: usize) -> Result<String> {
    field.ok_or(RatesError::MissingField { tag, index })
}

/// Drops a leading BOM and the `<?xml ...?>` declaration.
///
/// The body is already decoded text, so a declared `windows-1251` encoding no
/// longer applies to it.
fn strip_declaration(body: &str) -> &str {
    let body = body.trim_start_matches('\u{feff}').trim_start();
    if body.starts_with("<?xml") {
        if let Some(end) = body.find("?>") {
            return &body[end + 2..];
        }
    }
    body
}
