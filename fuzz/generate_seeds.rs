#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: u32, height: u32, bpp: u16) -> Vec<u8> {
    let palette = if bpp <= 8 { 4u32 << bpp } else { 0 };
    let line = (width * u32::from(bpp)).div_ceil(32) * 4;
    let bitmap = line * height;
    let offset = 54 + palette;

    let mut h = vec![0u8; 54];
    h[0] = b'B'; h[1] = b'M';
    h[2..6].copy_from_slice(&(offset + bitmap).to_le_bytes()); // file size
    h[10..14].copy_from_slice(&offset.to_le_bytes()); // data offset
    h[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    h[18..22].copy_from_slice(&width.to_le_bytes());
    h[22..26].copy_from_slice(&height.to_le_bytes());
    h[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    h[28..30].copy_from_slice(&bpp.to_le_bytes());
    h[34..38].copy_from_slice(&bitmap.to_le_bytes());
    h.resize((offset + bitmap) as usize, 0);
    h
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    for (w, h, bpp) in [(1, 1, 24), (3, 2, 24), (8, 1, 1), (5, 3, 4), (4, 4, 8)] {
        let mut bmp = header(w, h, bpp);
        // a little non-white content
        let last = bmp.len() - 1;
        bmp[last - 1] = 0x5A;
        fs::write(format!("{dir}/bmp_{w}x{h}_{bpp}.bmp"), bmp).unwrap();
    }

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut os2 = header(2, 2, 24);
    os2[14] = 12;
    fs::write(format!("{dir}/os2_header.bin"), os2).unwrap();
    let mut rle = header(4, 4, 8);
    rle[30] = 1;
    fs::write(format!("{dir}/rle8.bin"), rle).unwrap();

    println!("Generated seed corpus in {dir}/");
}
