mod common;

use std::fs;

use common::scratch_path;
use texgen::{Error, write_chessboard, write_uv_map};

#[test]
fn chessboard_png_roundtrip() {
    let path = scratch_path("chessboard", "png");
    write_chessboard(&path, 64, 4).unwrap();

    let img = image::open(&path).unwrap().to_luma8();
    assert_eq!((img.width(), img.height()), (64, 64));
    assert_eq!(img.get_pixel(0, 0)[0], 0);
    assert_eq!(img.get_pixel(16, 0)[0], 255);
    assert_eq!(img.get_pixel(0, 16)[0], 255);

    fs::remove_file(&path).unwrap();
}

#[test]
fn uv_map_png_roundtrip() {
    let path = scratch_path("uv-map", "png");
    write_uv_map(&path, 32, 4).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!((img.width(), img.height()), (32, 32));
    assert_eq!(*img.get_pixel(0, 0), image::Rgb([255, 0, 0]));
    assert_eq!(*img.get_pixel(31, 0), image::Rgb([0, 255, 0]));
    assert_eq!(*img.get_pixel(31, 31), image::Rgb([0, 0, 255]));
    assert_eq!(*img.get_pixel(0, 31), image::Rgb([255, 0, 255]));

    fs::remove_file(&path).unwrap();
}

#[test]
fn uneven_resolution_still_writes_requested_size() {
    let path = scratch_path("uneven", "png");
    write_chessboard(&path, 10, 3).unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (10, 10));

    fs::remove_file(&path).unwrap();
}

#[test]
fn invalid_spec_writes_nothing() {
    let path = scratch_path("invalid", "png");
    assert!(matches!(
        write_chessboard(&path, 16, 32),
        Err(Error::InvalidGridSpec(_))
    ));
    assert!(!path.exists());
}

#[test]
fn unsupported_extension_fails() {
    let path = scratch_path("bad-ext", "xyz");
    assert!(matches!(
        write_chessboard(&path, 16, 4),
        Err(Error::Encoding(_))
    ));
}
