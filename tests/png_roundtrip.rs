use knobicon::png;
use knobicon::render::render;
use knobicon::Theme;

/// Walk the chunk sequence of an encoded PNG, returning the type tags.
fn chunk_types(data: &[u8]) -> Vec<[u8; 4]> {
    let mut types = Vec::new();
    let mut pos = 8;
    while pos + 12 <= data.len() {
        let len = u32::from_be_bytes(data[pos..pos + 4].try_into().unwrap()) as usize;
        types.push(data[pos + 4..pos + 8].try_into().unwrap());
        pos += 12 + len;
    }
    types
}

#[test]
fn roundtrip_reproduces_rgba_exactly() {
    let (w, h) = (5u32, 3u32);
    let mut pixels = Vec::new();
    for i in 0..(w * h) {
        pixels.extend_from_slice(&[
            (i * 17 % 256) as u8,
            (i * 53 % 256) as u8,
            (255 - i * 11 % 256) as u8,
            (i * 29 % 256) as u8,
        ]);
    }

    let encoded = png::encode(w, h, &pixels).unwrap();
    let decoded = image::load_from_memory(&encoded).unwrap().to_rgba8();
    assert_eq!(decoded.width(), w);
    assert_eq!(decoded.height(), h);
    assert_eq!(decoded.into_raw(), pixels);
}

#[test]
fn roundtrip_degenerate_1x1() {
    let pixels = [200u8, 100, 50, 25];
    let encoded = png::encode(1, 1, &pixels).unwrap();
    let decoded = image::load_from_memory(&encoded).unwrap().to_rgba8();
    assert_eq!(decoded.into_raw(), pixels);
}

#[test]
fn rendered_icon_encodes_with_signature_and_single_idat() {
    let buf = render(16, &Theme::default());
    let encoded = png::encode_buffer(&buf).unwrap();

    assert_eq!(&encoded[..8], &png::SIGNATURE);
    let types = chunk_types(&encoded);
    assert_eq!(types.first(), Some(b"IHDR"));
    assert_eq!(types.last(), Some(b"IEND"));
    assert_eq!(types.iter().filter(|t| *t == b"IDAT").count(), 1);

    // And the pixels survive a decode untouched
    let decoded = image::load_from_memory(&encoded).unwrap().to_rgba8();
    assert_eq!(decoded.into_raw(), buf.data);
}
