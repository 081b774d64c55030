use palette::Srgb;
use reel::SlotItem;
use reel::image::encode_svg;

struct Symbol {
    id: &'static str,
    fill: Srgb<u8>,
    letter: char,
    name: &'static str,
}

fn symbols() -> [Symbol; 5] {
    [
        Symbol {
            id: "1",
            fill: Srgb::new(0xe1, 0x1d, 0x48),
            letter: 'A',
            name: "Cherry",
        },
        Symbol {
            id: "2",
            fill: Srgb::new(0xf5, 0x9e, 0x0b),
            letter: 'B',
            name: "Lemon",
        },
        Symbol {
            id: "3",
            fill: Srgb::new(0x10, 0xb9, 0x81),
            letter: 'C',
            name: "Seven",
        },
        Symbol {
            id: "4",
            fill: Srgb::new(0x63, 0x66, 0xf1),
            letter: 'D',
            name: "Star",
        },
        Symbol {
            id: "5",
            fill: Srgb::new(0xec, 0x48, 0x99),
            letter: 'E',
            name: "Bell",
        },
    ]
}

pub fn hex_color(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Filled circle with a white outline and a centered white letter.
pub fn circle_svg(fill: Srgb<u8>, letter: char) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 80 80">"#,
            r##"<circle cx="40" cy="40" r="36" fill="{fill}" stroke="#fff" stroke-width="2"/>"##,
            r##"<text x="40" y="50" text-anchor="middle" fill="#fff" font-size="24" font-family="sans-serif">{letter}</text>"##,
            "</svg>"
        ),
        fill = hex_color(fill),
        letter = letter,
    )
}

/// The five symbols shown on the example reel. Images are inline SVG data
/// URIs so no asset files are needed.
pub fn sample_items() -> Vec<SlotItem> {
    symbols()
        .into_iter()
        .map(|s| SlotItem::new(s.id, encode_svg(&circle_svg(s.fill, s.letter)), s.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel::image::decode_svg;
    use std::collections::HashSet;

    #[test]
    fn test_five_items_with_sequential_ids() {
        let items = sample_items();
        let ids: Vec<_> = items
            .iter()
            .map(|i| i.id.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);

        let names: Vec<_> = items
            .iter()
            .map(|i| i.name.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Cherry", "Lemon", "Seven", "Star", "Bell"]);
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols = symbols();
        let fills: HashSet<_> = symbols.iter().map(|s| hex_color(s.fill)).collect();
        let letters: HashSet<_> = symbols.iter().map(|s| s.letter).collect();
        let images: HashSet<_> = sample_items().into_iter().map(|i| i.image).collect();

        assert_eq!(fills.len(), 5);
        assert_eq!(letters.len(), 5);
        assert_eq!(images.len(), 5);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(sample_items(), sample_items());
    }

    #[test]
    fn test_image_is_inline_svg() {
        let items = sample_items();
        let svg = decode_svg(&items[0].image).unwrap();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains(r##"fill="#e11d48""##));
        assert!(svg.contains(">A</text>"));
    }
}
