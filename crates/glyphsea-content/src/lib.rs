//! Content records: the textual payloads creatures carry.
//!
//! Each record arrives as free-form JSON from a per-domain collection file
//! (chats, deliveries, video summaries, shopping, novels). The core only
//! needs two things from a record: some extractable text, and optionally a
//! numeric intensity in [0, 1].
#![forbid(unsafe_code)]

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Separator between concatenated record fields in the mosaic text.
pub const FIELD_SEPARATOR: &str = "  •  ";

/// Max characters a popup key phrase keeps before truncation.
pub const KEY_PHRASE_LIMIT: usize = 30;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ChatMessage {
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Superset of the per-domain collection shapes. Every field is optional;
/// extraction walks the populated ones in declaration order.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
    #[serde(default)]
    pub order_items: Option<Vec<String>>,
    #[serde(default)]
    pub comments: Option<Vec<String>>,
    #[serde(default)]
    pub reviews: Option<Vec<String>>,
    #[serde(default)]
    pub review_message: Option<String>,
    #[serde(default)]
    pub total_price: Option<i64>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub view_count: Option<i64>,
    #[serde(default)]
    pub like_count: Option<i64>,
    #[serde(default)]
    pub wishlist_count: Option<i64>,
    #[serde(default)]
    pub read_time_min: Option<i64>,
    #[serde(default)]
    pub search_time_min: Option<i64>,
}

impl ContentRecord {
    /// Every populated textual field, in declaration order. Numeric fields
    /// are rendered so prices and counts scroll through the mosaic too.
    pub fn text_fields(&self) -> Vec<String> {
        let mut out = Vec::new();
        let push = |out: &mut Vec<String>, s: &Option<String>| {
            if let Some(v) = s {
                let v = v.trim();
                if !v.is_empty() {
                    out.push(v.to_string());
                }
            }
        };
        push(&mut out, &self.title);
        push(&mut out, &self.author);
        push(&mut out, &self.genre);
        push(&mut out, &self.sender);
        push(&mut out, &self.store_name);
        push(&mut out, &self.product_name);
        push(&mut out, &self.category);
        push(&mut out, &self.summary);
        if let Some(msgs) = &self.messages {
            for m in msgs {
                if let Some(c) = &m.content {
                    let c = c.trim();
                    if !c.is_empty() {
                        out.push(c.to_string());
                    }
                }
            }
        }
        for list in [&self.order_items, &self.comments, &self.reviews] {
            if let Some(items) = list {
                for item in items {
                    let item = item.trim();
                    if !item.is_empty() {
                        out.push(item.to_string());
                    }
                }
            }
        }
        push(&mut out, &self.review_message);
        if let Some(p) = self.total_price.or(self.price) {
            out.push(format!("{p} KRW"));
        }
        if let Some(v) = self.view_count {
            out.push(format!("{v} VIEWS"));
        }
        if let Some(l) = self.like_count {
            out.push(format!("{l} LIKES"));
        }
        if let Some(w) = self.wishlist_count {
            out.push(format!("{w} SAVED"));
        }
        out
    }

    /// Short phrases for popup callouts, truncated with an ellipsis.
    pub fn key_phrases(&self) -> Vec<String> {
        self.text_fields()
            .into_iter()
            .map(|s| truncate_chars(&s, KEY_PHRASE_LIMIT))
            .collect()
    }

    /// First populated field, for view titles.
    pub fn headline(&self) -> Option<String> {
        self.text_fields().into_iter().next()
    }

    pub fn has_text(&self) -> bool {
        !self.text_fields().is_empty()
    }
}

/// Which numeric field drives mosaic amplitude/sizing for an archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntensitySource {
    None,
    WishlistCount,
    ViewCount,
    ReadTime,
}

impl IntensitySource {
    /// Normalized intensity in [0, 1]; `None` when the record lacks the
    /// field (the mosaic then animates at base amplitude).
    pub fn intensity(self, record: &ContentRecord) -> Option<f32> {
        let norm = |raw: i64, full_scale: f32| ((raw.max(0) as f32) / full_scale).clamp(0.0, 1.0);
        match self {
            IntensitySource::None => None,
            IntensitySource::WishlistCount => record.wishlist_count.map(|w| norm(w, 10.0)),
            IntensitySource::ViewCount => record.view_count.map(|v| norm(v, 10_000.0)),
            IntensitySource::ReadTime => record.read_time_min.map(|m| norm(m, 60.0)),
        }
    }
}

fn truncate_chars(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }
    let head: String = s.chars().take(limit).collect();
    format!("{head}...")
}

/// Loads a collection file. A missing file is an empty collection; a
/// malformed one is an error the caller logs and treats as empty.
pub fn load_records(path: &Path) -> Result<Vec<ContentRecord>, Box<dyn Error>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path)?;
    let records: Vec<ContentRecord> = serde_json::from_str(&text)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery_record() -> ContentRecord {
        serde_json::from_str(
            r#"{
                "storeName": "Harbor Noodles",
                "orderItems": ["Cold Buckwheat", "Dumplings"],
                "totalPrice": 23500,
                "reviewMessage": "extra sauce please"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn text_fields_follow_declaration_order() {
        let rec = delivery_record();
        assert_eq!(
            rec.text_fields(),
            vec![
                "Harbor Noodles".to_string(),
                "Cold Buckwheat".to_string(),
                "Dumplings".to_string(),
                "extra sauce please".to_string(),
                "23500 KRW".to_string(),
            ]
        );
        assert_eq!(rec.headline().as_deref(), Some("Harbor Noodles"));
        assert!(rec.has_text());
    }

    #[test]
    fn empty_record_has_no_text() {
        let rec = ContentRecord::default();
        assert!(rec.text_fields().is_empty());
        assert!(rec.headline().is_none());
        assert!(!rec.has_text());
    }

    #[test]
    fn blank_fields_are_skipped() {
        let rec = ContentRecord {
            title: Some("   ".to_string()),
            summary: Some("a real summary".to_string()),
            ..Default::default()
        };
        assert_eq!(rec.text_fields(), vec!["a real summary".to_string()]);
    }

    #[test]
    fn key_phrases_truncate_on_char_boundaries() {
        let long = "글자로 가득한 아주 아주 아주 아주 아주 아주 아주 긴 리뷰 메시지입니다";
        let rec = ContentRecord {
            review_message: Some(long.to_string()),
            ..Default::default()
        };
        let phrases = rec.key_phrases();
        assert_eq!(phrases.len(), 1);
        assert!(phrases[0].ends_with("..."));
        assert_eq!(
            phrases[0].chars().count(),
            KEY_PHRASE_LIMIT + 3,
            "limit chars plus the ellipsis"
        );
    }

    #[test]
    fn intensity_normalizes_and_clamps() {
        let rec = ContentRecord {
            wishlist_count: Some(5),
            view_count: Some(1_000_000),
            read_time_min: Some(-3),
            ..Default::default()
        };
        assert_eq!(IntensitySource::WishlistCount.intensity(&rec), Some(0.5));
        assert_eq!(IntensitySource::ViewCount.intensity(&rec), Some(1.0));
        assert_eq!(IntensitySource::ReadTime.intensity(&rec), Some(0.0));
        assert_eq!(IntensitySource::None.intensity(&rec), None);
        assert_eq!(
            IntensitySource::WishlistCount.intensity(&ContentRecord::default()),
            None
        );
    }

    #[test]
    fn chat_messages_extract_in_order() {
        let rec: ContentRecord = serde_json::from_str(
            r#"{
                "sender": "Mina",
                "messages": [
                    {"sender": "Mina", "content": "did you see the tide today"},
                    {"content": "unreal"},
                    {"sender": "Joon"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            rec.text_fields(),
            vec![
                "Mina".to_string(),
                "did you see the tide today".to_string(),
                "unreal".to_string(),
            ]
        );
    }
}
