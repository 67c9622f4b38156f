#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, and must end in a definite state
    let mut bmp = bmpfile::Bitmap::new();
    let ok = bmp.read_from(std::io::Cursor::new(data));
    assert_eq!(ok, bmp.state() == bmpfile::State::Ready);
    assert_eq!(ok, bmp.errors().is_empty());

    // Pixel access on whatever came out is always safe
    let (w, h) = (bmp.width() as i32, bmp.height() as i32);
    for (x, y) in [(0, 0), (w - 1, h - 1), (w, h), (-1, -1)] {
        let _ = bmp.pixel(x, y, true);
        bmp.set_pixel(x, y, 0xFFFF_FFFF);
    }
});
