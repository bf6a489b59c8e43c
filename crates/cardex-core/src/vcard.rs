use crate::domain::{ContactCard, FieldKind};

pub const VCARD_VERSION: &str = "4.0";

const STRUCTURED_NAME_PARTS: usize = 5;

/// Render one card as a `BEGIN:VCARD`..`END:VCARD` block, fields in
/// canonical order, values verbatim. Escaping of `;`, `,` and newlines is
/// intentionally not performed.
pub fn render_card(card: &ContactCard) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        format!("VERSION:{VCARD_VERSION}"),
    ];
    for (kind, value) in card.fields() {
        if kind == FieldKind::Name {
            lines.push(structured_name_line(value));
        }
        lines.push(format!("{}:{}", kind.tag(), value));
    }
    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

/// Join cards with single newlines, no separator lines and no trailing
/// newline.
pub fn render_document(cards: &[ContactCard]) -> String {
    cards
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

// Names with more than five whitespace-separated parts get no padding and
// produce an over-long N: line.
fn structured_name_line(value: &str) -> String {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let padding = STRUCTURED_NAME_PARTS.saturating_sub(parts.len());
    format!("N:{}{}", parts.join(";"), ";".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::{render_card, render_document};
    use crate::domain::ContactCard;

    fn card(entries: &[(&str, &str)]) -> ContactCard {
        ContactCard::from_fields(entries.iter().copied()).expect("card")
    }

    #[test]
    fn render_card_two_part_name() {
        let contact = card(&[("name", "Ada Lovelace"), ("phone", "555-0101")]);
        assert_eq!(
            render_card(&contact),
            "BEGIN:VCARD\nVERSION:4.0\nN:Ada;Lovelace;;;\nFN:Ada Lovelace\nTEL;CELL:555-0101\nEND:VCARD"
        );
    }

    #[test]
    fn render_card_single_token_name() {
        let rendered = render_card(&card(&[("name", "Madonna"), ("phone", "555")]));
        assert!(rendered.contains("N:Madonna;;;;\n"));
    }

    #[test]
    fn render_card_long_name_gets_no_padding() {
        let rendered = render_card(&card(&[
            ("name", "one two three four five six"),
            ("phone", "555"),
        ]));
        assert!(rendered.contains("N:one;two;three;four;five;six\n"));
    }

    #[test]
    fn render_card_canonical_order_ignores_input_order() {
        let rendered = render_card(&card(&[
            ("birthday", "1815-12-10"),
            ("phone", "555"),
            ("organisation", "Analytical Engines"),
            ("name", "Ada"),
        ]));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "BEGIN:VCARD",
                "VERSION:4.0",
                "N:Ada;;;;",
                "FN:Ada",
                "ORG:Analytical Engines",
                "TEL;CELL:555",
                "BDAY:1815-12-10",
                "END:VCARD",
            ]
        );
    }

    #[test]
    fn render_card_emits_values_verbatim() {
        let rendered = render_card(&card(&[("name", "Ada"), ("phone", "555;ext=2,3")]));
        assert!(rendered.contains("TEL;CELL:555;ext=2,3"));
    }

    #[test]
    fn render_document_joins_without_blank_lines() {
        let cards = vec![
            card(&[("name", "Ada"), ("phone", "1")]),
            card(&[("name", "Grace"), ("phone", "2")]),
        ];
        let document = render_document(&cards);
        assert_eq!(document.matches("BEGIN:VCARD").count(), 2);
        assert_eq!(document.matches("END:VCARD").count(), 2);
        assert!(document.contains("END:VCARD\nBEGIN:VCARD"));
        assert!(!document.contains("\n\n"));
        assert!(!document.ends_with('\n'));
    }

    #[test]
    fn render_document_empty_input() {
        assert_eq!(render_document(&[]), "");
    }
}
