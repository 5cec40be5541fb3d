use icy_glyph_engine::{
    export::to_plain_text,
    font::{BANNER_ROWS, BANNER_TEXT},
    get_preset, insert_header, render, OutputWidth, PresetId, RenderOptions,
};
use pretty_assertions::assert_eq;

fn options(preset: PresetId) -> RenderOptions {
    RenderOptions::for_preset(preset.id()).unwrap()
}

#[test]
fn test_unsupported_chars_fall_back_to_blank() {
    for id in PresetId::ALL {
        let preset = id.preset();
        let options = RenderOptions {
            letter_spacing: 0,
            ..options(id)
        };
        let art = render("€\t☃", &options).unwrap();
        assert_eq!(preset.height(), art.height(), "{id}");
        assert_eq!(3 * preset.fallback().width(), art.width(), "{id}");
        assert!(art.lines().iter().all(|line| line.chars().all(|ch| ch == ' ')), "{id}");
    }
}

#[test]
fn test_empty_input_is_empty_art() {
    let widths = [OutputWidth::NoWrap, OutputWidth::columns(1), OutputWidth::columns(80)];
    for id in PresetId::ALL {
        for output_width in widths {
            for spacing in [0, 3] {
                let options = RenderOptions {
                    letter_spacing: spacing,
                    line_height: spacing,
                    output_width,
                    ..options(id)
                };
                let art = render("", &options).unwrap();
                assert!(art.lines().is_empty());
                assert_eq!(0, art.width());
                assert_eq!(0, art.height());
            }
        }
    }
}

#[test]
fn test_plain_text_is_rectangular() {
    let text = "Hello, World!\nicy glyph 2024\n\n<a&b>";
    for id in PresetId::ALL {
        let options = RenderOptions {
            output_width: OutputWidth::columns(6),
            ..options(id)
        };
        let art = render(text, &options).unwrap();
        let plain = to_plain_text(&art);
        let lines: Vec<&str> = plain.split('\n').collect();
        assert_eq!(art.height(), lines.len(), "{id}");
        for line in lines {
            assert_eq!(art.width(), line.chars().count(), "{id}");
        }
        assert!(!plain.ends_with('\n'));
    }
}

#[test]
fn test_render_is_idempotent() {
    for id in PresetId::ALL {
        let options = RenderOptions {
            letter_spacing: 2,
            line_height: 1,
            output_width: OutputWidth::columns(8),
            ..options(id)
        };
        let text = "THE QUICK BROWN FOX\njumps over 13 lazy dogs?";
        assert_eq!(render(text, &options).unwrap(), render(text, &options).unwrap());
    }
}

#[test]
fn test_wrap_at_word_boundary() {
    let options = RenderOptions {
        letter_spacing: 0,
        line_height: 0,
        output_width: OutputWidth::columns(5),
        ..options(PresetId::Minimal)
    };
    let art = render("HELLO WORLD", &options).unwrap();
    let preset = PresetId::Minimal.preset();

    let mut expected = preset.compose("HELLO", 0);
    expected.extend(preset.compose("WORLD", 0));
    assert_eq!(expected, art.lines());
    assert_eq!(2 * preset.height(), art.height());
}

#[test]
fn test_letter_spacing_widens_lines() {
    let tight = RenderOptions {
        letter_spacing: 0,
        ..options(PresetId::Block)
    };
    let loose = RenderOptions {
        letter_spacing: 3,
        ..options(PresetId::Block)
    };
    let a = render("ABC", &tight).unwrap();
    let b = render("ABC", &loose).unwrap();
    assert_eq!(a.width() + 6, b.width());
}

#[test]
fn test_fixed_banner() {
    let preset = get_preset("pixel-block-header").unwrap();
    let rows = preset.glyph_set_render("MAQSADBEK");
    let expected = [
        "███████  ███    ███   █████   ███████   ██████   ██████  ███████ ██   ██",
        "██       ████  ████  ██   ██  ██       ██    ██ ██       ██      ██   ██",
        "█████    ██ ████ ██  ███████  █████    ██    ██ ██   ███ ███████ ███████",
        "██       ██  ██  ██  ██   ██  ██       ██    ██ ██    ██      ██ ██   ██",
        "███████  ██      ██  ██   ██  ███████   ██████   ██████  ███████ ██   ██",
    ];
    assert_eq!(expected.to_vec(), rows);

    let art = render(BANNER_TEXT, &options(PresetId::PixelBlockHeader)).unwrap();
    assert_eq!(expected.to_vec(), art.lines());
}

#[test]
fn test_insert_header_keeps_art() {
    let art = render("HI", &options(PresetId::Minimal)).unwrap();
    let with_header = insert_header(&art);
    let gap = PresetId::PixelBlockHeader.preset().default_line_height();
    let width = art.width().max(72);

    assert_eq!(BANNER_ROWS.len() + gap + art.height(), with_header.height());
    assert_eq!(width, with_header.width());
    for (row, banner) in with_header.lines().iter().zip(BANNER_ROWS) {
        assert!(row.starts_with(banner));
        assert_eq!(width, row.chars().count());
    }
    for row in &with_header.lines()[BANNER_ROWS.len()..BANNER_ROWS.len() + gap] {
        assert!(row.chars().all(|ch| ch == ' '));
    }
    for (row, original) in with_header.lines()[BANNER_ROWS.len() + gap..].iter().zip(art.lines()) {
        assert_eq!(original.trim_end(), row.trim_end());
        assert!(row.starts_with(original.as_str()));
    }
    assert_eq!(art.options(), with_header.options());
}

#[test]
fn test_insert_header_on_wide_art() {
    let options = RenderOptions {
        letter_spacing: 2,
        ..options(PresetId::Block)
    };
    let art = render("WIDE ENOUGH TEXT", &options).unwrap();
    assert!(art.width() > 72);
    let with_header = insert_header(&art);
    assert_eq!(art.width(), with_header.width());
    assert_eq!(&art.lines()[..], &with_header.lines()[with_header.height() - art.height()..]);
}
