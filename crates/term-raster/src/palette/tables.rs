//! Static color tables, stored as sRGB bytes.

include!(concat!(env!("OUT_DIR"), "/xterm256.rs"));

/// Default xterm 16-color palette (SGR 38;5;0..15).
pub static TERM_16: [[u8; 3]; 16] = [
    [0, 0, 0],
    [205, 0, 0],
    [0, 205, 0],
    [205, 205, 0],
    [0, 0, 238],
    [205, 0, 205],
    [0, 205, 205],
    [229, 229, 229],
    [127, 127, 127],
    [255, 0, 0],
    [0, 255, 0],
    [255, 255, 0],
    [92, 92, 255],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
];

/// Classic mIRC 16-color palette (codes 00..15).
pub static IRC_16: [[u8; 3]; 16] = [
    [255, 255, 255], // 00 white
    [0, 0, 0],       // 01 black
    [0, 0, 127],     // 02 blue
    [0, 147, 0],     // 03 green
    [255, 0, 0],     // 04 red
    [127, 0, 0],     // 05 brown
    [156, 0, 156],   // 06 magenta
    [252, 127, 0],   // 07 orange
    [255, 255, 0],   // 08 yellow
    [0, 252, 0],     // 09 light green
    [0, 147, 147],   // 10 cyan
    [0, 255, 255],   // 11 light cyan
    [0, 0, 252],     // 12 light blue
    [255, 0, 255],   // 13 pink
    [127, 127, 127], // 14 grey
    [210, 210, 210], // 15 light grey
];

/// Extended mIRC palette: the 16 classic colors followed by codes 16..98.
#[rustfmt::skip]
pub static IRC_99: [[u8; 3]; 99] = [
    [255, 255, 255], [0, 0, 0], [0, 0, 127], [0, 147, 0],
    [255, 0, 0], [127, 0, 0], [156, 0, 156], [252, 127, 0],
    [255, 255, 0], [0, 252, 0], [0, 147, 147], [0, 255, 255],
    [0, 0, 252], [255, 0, 255], [127, 127, 127], [210, 210, 210],
    // 16..27
    [0x47, 0x00, 0x00], [0x47, 0x21, 0x00], [0x47, 0x47, 0x00], [0x32, 0x47, 0x00],
    [0x00, 0x47, 0x00], [0x00, 0x47, 0x2c], [0x00, 0x47, 0x47], [0x00, 0x27, 0x47],
    [0x00, 0x00, 0x47], [0x2e, 0x00, 0x47], [0x47, 0x00, 0x47], [0x47, 0x00, 0x2a],
    // 28..39
    [0x74, 0x00, 0x00], [0x74, 0x3a, 0x00], [0x74, 0x74, 0x00], [0x51, 0x74, 0x00],
    [0x00, 0x74, 0x00], [0x00, 0x74, 0x49], [0x00, 0x74, 0x74], [0x00, 0x40, 0x74],
    [0x00, 0x00, 0x74], [0x4b, 0x00, 0x74], [0x74, 0x00, 0x74], [0x74, 0x00, 0x45],
    // 40..51
    [0xb5, 0x00, 0x00], [0xb5, 0x63, 0x00], [0xb5, 0xb5, 0x00], [0x7d, 0xb5, 0x00],
    [0x00, 0xb5, 0x00], [0x00, 0xb5, 0x71], [0x00, 0xb5, 0xb5], [0x00, 0x63, 0xb5],
    [0x00, 0x00, 0xb5], [0x75, 0x00, 0xb5], [0xb5, 0x00, 0xb5], [0xb5, 0x00, 0x6b],
    // 52..63
    [0xff, 0x00, 0x00], [0xff, 0x8c, 0x00], [0xff, 0xff, 0x00], [0xb2, 0xff, 0x00],
    [0x00, 0xff, 0x00], [0x00, 0xff, 0xa0], [0x00, 0xff, 0xff], [0x00, 0x8c, 0xff],
    [0x00, 0x00, 0xff], [0xa5, 0x00, 0xff], [0xff, 0x00, 0xff], [0xff, 0x00, 0x98],
    // 64..75
    [0xff, 0x59, 0x59], [0xff, 0xb4, 0x59], [0xff, 0xff, 0x71], [0xcf, 0xff, 0x60],
    [0x6f, 0xff, 0x6f], [0x65, 0xff, 0xc9], [0x6d, 0xff, 0xff], [0x59, 0xb4, 0xff],
    [0x59, 0x59, 0xff], [0xc4, 0x59, 0xff], [0xff, 0x66, 0xff], [0xff, 0x59, 0xbc],
    // 76..87
    [0xff, 0x9c, 0x9c], [0xff, 0xd3, 0x9c], [0xff, 0xff, 0x9c], [0xe2, 0xff, 0x9c],
    [0x9c, 0xff, 0x9c], [0x9c, 0xff, 0xdb], [0x9c, 0xff, 0xff], [0x9c, 0xd3, 0xff],
    [0x9c, 0x9c, 0xff], [0xdc, 0x9c, 0xff], [0xff, 0x9c, 0xff], [0xff, 0x94, 0xd3],
    // 88..98 greyscale
    [0x00, 0x00, 0x00], [0x13, 0x13, 0x13], [0x28, 0x28, 0x28], [0x36, 0x36, 0x36],
    [0x4d, 0x4d, 0x4d], [0x65, 0x65, 0x65], [0x81, 0x81, 0x81], [0x9f, 0x9f, 0x9f],
    [0xbc, 0xbc, 0xbc], [0xe2, 0xe2, 0xe2], [0xff, 0xff, 0xff],
];
