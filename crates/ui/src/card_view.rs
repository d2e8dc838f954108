use cards_core::{CardRecord, Segment, segment_citations};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

use crate::copy;

/// Card text in display order; empty fields are skipped.
pub(crate) fn card_text(card: &CardRecord, accent: Color) -> Text<'_> {
    let mut lines: Vec<Line<'_>> = Vec::new();

    if !card.title.is_empty() {
        lines.push(Line::from(Span::styled(
            card.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }

    for body in [card.description.as_str(), card.evidence.as_str()] {
        if body.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(Line::raw(""));
        }
        lines.extend(cited_lines(body, accent));
    }

    if !card.question.is_empty() {
        if !lines.is_empty() {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            copy::QUESTION_HEADING,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )));
        let italic = Style::default().add_modifier(Modifier::ITALIC);
        lines.extend(
            card.question
                .split('\n')
                .map(|line| Line::from(Span::styled(line, italic))),
        );
    }

    Text::from(lines)
}

/// Splits on newlines after segmentation so a citation may span lines.
pub(crate) fn cited_lines(text: &str, accent: Color) -> Vec<Line<'_>> {
    let citation = Style::default().fg(accent).add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    let mut current: Vec<Span<'_>> = Vec::new();
    for segment in segment_citations(text) {
        let style = match segment {
            Segment::Citation(_) => citation,
            Segment::Plain(_) => Style::default(),
        };
        let mut parts = segment.as_str().split('\n');
        if let Some(first) = parts.next()
            && !first.is_empty()
        {
            current.push(Span::styled(first, style));
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !part.is_empty() {
                current.push(Span::styled(part, style));
            }
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Rows `text` takes when word-wrapped to `width` columns.
pub(crate) fn wrapped_height(text: &Text<'_>, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines
        .iter()
        .map(|line| wrapped_rows(line, width))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn wrapped_rows(line: &Line<'_>, width: usize) -> usize {
    let content: String = line
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect();
    let mut rows = 1;
    let mut used = 0;
    for word in content.split(' ') {
        let word_width = UnicodeWidthStr::width(word);
        let needed = if used == 0 {
            word_width
        } else {
            used + 1 + word_width
        };
        if needed <= width {
            used = needed;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        // Words wider than a row are broken mid-word.
        let extra = word_width.saturating_sub(1) / width;
        rows += extra;
        used = word_width - extra * width;
    }
    rows
}

pub(crate) fn image_placeholder(width: u16, height: u16, label: &str) -> String {
    let width = width.max(10);
    let height = height.max(3);
    let inner_w = (width - 2) as usize;
    let inner_h = (height - 2) as usize;

    let mut out = String::new();
    out.push('┌');
    out.push_str(&"─".repeat(inner_w));
    out.push('┐');

    let label: String = label.trim().chars().take(inner_w).collect();
    let label_len = label.chars().count();
    for y in 0..inner_h {
        out.push('\n');
        out.push('│');
        if y == inner_h / 2 {
            let pad_left = inner_w.saturating_sub(label_len) / 2;
            let pad_right = inner_w.saturating_sub(label_len).saturating_sub(pad_left);
            out.push_str(&" ".repeat(pad_left));
            out.push_str(&label);
            out.push_str(&" ".repeat(pad_right));
        } else {
            out.push_str(&" ".repeat(inner_w));
        }
        out.push('│');
    }

    out.push('\n');
    out.push('└');
    out.push_str(&"─".repeat(inner_w));
    out.push('┘');
    out
}
