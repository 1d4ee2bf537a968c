use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 exact formula: sRGB to linear
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// System colors of the xterm 256-color palette (indices 0..16).
const XTERM_SYSTEM: [[u8; 3]; 16] = [
    [0, 0, 0],
    [128, 0, 0],
    [0, 128, 0],
    [128, 128, 0],
    [0, 0, 128],
    [128, 0, 128],
    [0, 128, 128],
    [192, 192, 192],
    [128, 128, 128],
    [255, 0, 0],
    [0, 255, 0],
    [255, 255, 0],
    [0, 0, 255],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
];

/// Channel levels of the 6x6x6 color cube (indices 16..232).
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // Generate SRGB_TO_LINEAR LUT (4096 entries)
    writeln!(file, "/// Lookup table for sRGB to linear conversion").unwrap();
    writeln!(file, "/// Index: srgb value * 4095.0, Value: linear value").unwrap();
    writeln!(file, "pub static SRGB_TO_LINEAR: [f32; 4096] = [").unwrap();
    for i in 0..4096 {
        let srgb = i as f64 / 4095.0;
        let linear = srgb_to_linear_exact(srgb);
        if i > 0 && i % 8 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:.9},", linear as f32).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    // Generate the xterm 256-color table: system colors, color cube, grey ramp
    let dest_path = Path::new(&out_dir).join("xterm256.rs");
    let mut file = File::create(&dest_path).unwrap();
    writeln!(file, "/// xterm 256-color palette, index = SGR 38;5/48;5 code").unwrap();
    writeln!(file, "pub static XTERM_256: [[u8; 3]; 256] = [").unwrap();
    for [r, g, b] in XTERM_SYSTEM {
        writeln!(file, "    [{r}, {g}, {b}],").unwrap();
    }
    for r in CUBE_LEVELS {
        for g in CUBE_LEVELS {
            for b in CUBE_LEVELS {
                writeln!(file, "    [{r}, {g}, {b}],").unwrap();
            }
        }
    }
    for step in 0..24u8 {
        let v = 8 + step * 10;
        writeln!(file, "    [{v}, {v}, {v}],").unwrap();
    }
    writeln!(file, "];").unwrap();

    // Rerun if build.rs changes
    println!("cargo::rerun-if-changed=build.rs");
}
