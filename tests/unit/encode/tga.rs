use super::*;

fn frame(w: u32, h: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: px.repeat(w as usize * h as usize),
    }
}

#[test]
fn encoded_tga_decodes_back_to_the_same_pixels() {
    let mut f = frame(3, 2, [0x10, 0x20, 0x30, 0xff]);
    f.data[4..8].copy_from_slice(&[0xaa, 0xbb, 0xcc, 0x80]);

    let bytes = encode_tga(&f).unwrap();
    let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Tga)
        .unwrap()
        .to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.into_raw(), f.data);
}

#[test]
fn zero_area_frame_encodes() {
    let bytes = encode_tga(&frame(0, 0, [0; 4])).unwrap();
    assert_eq!(bytes.len(), HEADER_LEN);
}

#[test]
fn zero_width_frame_keeps_its_height_in_the_header() {
    let bytes = encode_tga(&frame(0, 100, [0; 4])).unwrap();
    assert_eq!(
        bytes,
        [0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 100, 0, 32, 0x28]
    );
}

#[test]
fn dimension_check_accepts_the_tga_maximum() {
    check_dimensions(65_535, 65_535).unwrap();
    assert!(matches!(
        check_dimensions(65_536, 1),
        Err(SidleError::Encode(_))
    ));
}

#[test]
fn oversized_frame_is_an_encode_error() {
    let f = FrameRGBA {
        width: 70_000,
        height: 0,
        data: Vec::new(),
    };
    assert!(matches!(encode_tga(&f), Err(SidleError::Encode(_))));
}

#[test]
fn file_sink_reports_digest_of_written_bytes() {
    let dir = std::path::PathBuf::from("target").join("unit_tga_sink");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("px.tga");

    let f = frame(4, 4, [9, 8, 7, 255]);
    let receipt = TgaFileSink.write_image(&path, &f).unwrap();
    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(receipt, WriteReceipt::for_bytes(&on_disk));
}

#[test]
fn file_sink_reports_missing_directory_as_io() {
    let path = std::path::PathBuf::from("target")
        .join("unit_tga_sink_missing")
        .join("nope")
        .join("px.tga");
    let err = TgaFileSink
        .write_image(&path, &frame(1, 1, [0; 4]))
        .unwrap_err();
    assert!(matches!(err, SidleError::Io(_)), "{err}");
}
