#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // If we can read it, re-encoding and reading again must give identical bytes
    let mut bmp = bmpfile::Bitmap::new();
    if !bmp.read_from(Cursor::new(data)) {
        return;
    }
    let encoded = bmp.to_bytes();
    assert_eq!(encoded.len(), bmp.geometry().file_size);

    let mut again = bmpfile::Bitmap::new();
    assert!(again.read_from(Cursor::new(&encoded)), "re-encoded data failed to read");
    assert_eq!(again.header(), bmp.header());
    assert_eq!(again.palette(), bmp.palette());
    assert_eq!(again.pixels(), bmp.pixels());
    assert_eq!(again.to_bytes(), encoded);
});
