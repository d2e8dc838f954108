//! Core domain types for the story cards viewer.

use serde::{Deserialize, Serialize};

const BUILTIN_DECK: &str = include_str!("../content/cards.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub evidence: String,
    pub question: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Ordered, read-only card collection. Records are kept exactly as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDeck {
    records: Vec<CardRecord>,
}

impl CardDeck {
    pub fn new(records: Vec<CardRecord>) -> Self {
        Self { records }
    }

    /// The deck compiled into the binary.
    pub fn builtin() -> Result<Self, serde_json::Error> {
        Self::from_json(BUILTIN_DECK)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<CardRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CardRecord> {
        self.records.iter()
    }
}

/// A run of card text: either plain prose or a parenthesized citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    /// Includes the surrounding parentheses.
    Citation(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Plain(s) | Segment::Citation(s) => s,
        }
    }

    pub fn is_citation(&self) -> bool {
        matches!(self, Segment::Citation(_))
    }
}

/// Splits `text` into plain and citation segments, left to right.
///
/// A citation starts at `(` and ends at the next `)`, with at least one
/// character between them. Spans never nest or overlap. An opening `(`
/// without a later `)` leaves the remainder plain. Concatenating the
/// returned segments always yields `text`.
pub fn segment_citations(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut plain_start = 0usize;
    let mut cursor = 0usize;

    while let Some(rel_open) = text[cursor..].find('(') {
        let open = cursor + rel_open;
        let Some(rel_close) = text[open + 1..].find(')') else {
            break;
        };
        let close = open + 1 + rel_close;
        if close == open + 1 {
            // "()" carries nothing to cite.
            cursor = open + 1;
            continue;
        }

        if plain_start < open {
            out.push(Segment::Plain(&text[plain_start..open]));
        }
        out.push(Segment::Citation(&text[open..=close]));
        plain_start = close + 1;
        cursor = plain_start;
    }

    if plain_start < text.len() {
        out.push(Segment::Plain(&text[plain_start..]));
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    Ltr,
    #[default]
    Rtl,
}

impl LayoutDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutDirection::Ltr => "ltr",
            LayoutDirection::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}

impl std::fmt::Display for LayoutDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LayoutDirection {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(LayoutDirection::Ltr),
            "rtl" => Ok(LayoutDirection::Rtl),
            _ => Err("unknown layout direction"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub direction: LayoutDirection,
    pub asset_root: String,
    pub show_welcome: bool,
    pub swipe_threshold_px: u32,
    pub fade_out_ms: u64,
    pub settle_ms: u64,
    pub fade_in_ms: u64,
    pub reveal_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::Rtl,
            asset_root: "public".to_string(),
            show_welcome: false,
            swipe_threshold_px: 50,
            fade_out_ms: 300,
            settle_ms: 50,
            fade_in_ms: 300,
            reveal_delay_ms: 50,
        }
    }
}

impl Settings {
    pub fn normalize(&mut self) {
        self.swipe_threshold_px = self.swipe_threshold_px.clamp(1, 1000);
        self.fade_out_ms = self.fade_out_ms.min(5_000);
        self.settle_ms = self.settle_ms.min(5_000);
        self.fade_in_ms = self.fade_in_ms.min(5_000);
        self.reveal_delay_ms = self.reveal_delay_ms.min(5_000);
        self.asset_root = self.asset_root.trim().to_string();
        if self.asset_root.is_empty() {
            self.asset_root = ".".to_string();
        }
    }

    pub fn toggle_direction(&mut self) {
        self.direction = match self.direction {
            LayoutDirection::Ltr => LayoutDirection::Rtl,
            LayoutDirection::Rtl => LayoutDirection::Ltr,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(segments: &[Segment<'_>]) -> Vec<String> {
        segments.iter().map(|s| s.as_str().to_string()).collect()
    }

    #[test]
    fn builtin_deck_parses() {
        let deck = CardDeck::builtin().unwrap();
        assert_eq!(deck.len(), 9);
        assert_eq!(deck.get(0).map(|c| c.id.as_str()), Some("1"));
        assert_eq!(deck.get(8).map(|c| c.id.as_str()), Some("10"));
        assert!(deck.iter().all(|c| !c.title.is_empty()));
    }

    #[test]
    fn builtin_deck_ids_are_unique() {
        let deck = CardDeck::builtin().unwrap();
        let mut ids: Vec<&str> = deck.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn deck_missing_image_url_is_none() {
        let deck = CardDeck::from_json(
            r#"[{"id":"a","title":"t","description":"d","evidence":"e","question":"q"}]"#,
        )
        .unwrap();
        assert_eq!(deck.get(0).unwrap().image_url, None);
        assert!(deck.get(1).is_none());
    }

    #[test]
    fn empty_deck_is_legal() {
        let deck = CardDeck::from_json("[]").unwrap();
        assert!(deck.is_empty());
        assert!(deck.get(0).is_none());
    }

    #[test]
    fn segments_plain_citation_plain() {
        let segments = segment_citations("plain (cited text) more plain");
        assert_eq!(
            segments,
            vec![
                Segment::Plain("plain "),
                Segment::Citation("(cited text)"),
                Segment::Plain(" more plain"),
            ]
        );
    }

    #[test]
    fn segments_without_parens_is_single_plain() {
        let segments = segment_citations("nothing cited here");
        assert_eq!(segments, vec![Segment::Plain("nothing cited here")]);
    }

    #[test]
    fn unbalanced_paren_leaves_remainder_plain() {
        let segments = segment_citations("a (b) c (d and more");
        assert_eq!(texts(&segments), vec!["a ", "(b)", " c (d and more"]);
        assert!(!segments[2].is_citation());
    }

    #[test]
    fn first_close_wins_and_spans_do_not_nest() {
        let segments = segment_citations("x (a (b) c) y");
        assert_eq!(
            segments,
            vec![
                Segment::Plain("x "),
                Segment::Citation("(a (b)"),
                Segment::Plain(" c) y"),
            ]
        );
    }

    #[test]
    fn empty_parens_are_plain() {
        let segments = segment_citations("a () b (c)");
        assert_eq!(
            segments,
            vec![Segment::Plain("a () b "), Segment::Citation("(c)")]
        );
    }

    #[test]
    fn adjacent_citations() {
        let segments = segment_citations("(a)(b)");
        assert_eq!(
            segments,
            vec![Segment::Citation("(a)"), Segment::Citation("(b)")]
        );
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(segment_citations("").is_empty());
    }

    #[test]
    fn segments_handle_multibyte_text() {
        let segments = segment_citations("قال:\n(رَبِّ هَبْ لِي) 🌟");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1], Segment::Citation("(رَبِّ هَبْ لِي)"));
    }

    proptest! {
        #[test]
        fn segments_reassemble_input(text in "[a-c() \u{0627}-\u{0629}]{0,40}") {
            let joined: String = segment_citations(&text).iter().map(|s| s.as_str()).collect();
            prop_assert_eq!(joined, text);
        }

        #[test]
        fn citations_are_closed_and_flat(text in "[a-c() ]{0,40}") {
            for segment in segment_citations(&text) {
                if let Segment::Citation(s) = segment {
                    prop_assert!(s.starts_with('(') && s.ends_with(')'));
                    prop_assert!(s.len() > 2);
                    prop_assert_eq!(s.matches(')').count(), 1);
                } else {
                    prop_assert!(!segment.as_str().is_empty());
                }
            }
        }
    }

    #[test]
    fn layout_direction_parses_strings() {
        assert_eq!(
            "rtl".parse::<LayoutDirection>().unwrap(),
            LayoutDirection::Rtl
        );
        assert_eq!(
            " LTR ".parse::<LayoutDirection>().unwrap(),
            LayoutDirection::Ltr
        );
        assert!("up".parse::<LayoutDirection>().is_err());
    }

    #[test]
    fn settings_normalize_clamps() {
        let mut settings = Settings {
            swipe_threshold_px: 0,
            fade_out_ms: 60_000,
            asset_root: "  ".to_string(),
            ..Settings::default()
        };
        settings.normalize();
        assert_eq!(settings.swipe_threshold_px, 1);
        assert_eq!(settings.fade_out_ms, 5_000);
        assert_eq!(settings.asset_root, ".");
    }

    #[test]
    fn toggle_direction_flips() {
        let mut settings = Settings::default();
        assert_eq!(settings.direction, LayoutDirection::Rtl);
        settings.toggle_direction();
        assert_eq!(settings.direction, LayoutDirection::Ltr);
    }
}
