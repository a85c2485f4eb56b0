use hitzone::error::HitZoneError;
use hitzone::loader::{load_points, normalize, read_samples, read_samples_from_reader, RawSamples};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

// --- PARSING TESTS ---

#[test]
fn test_reader_parses_valid_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "x,y").unwrap();
    writeln!(file, "1.5,2.5").unwrap();
    writeln!(file, "-0.75,3.0").unwrap();

    let samples = read_samples(file.path()).unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples.xs, vec![1.5, -0.75]);
    assert_eq!(samples.ys, vec![2.5, 3.0]);
}

#[test]
fn test_reader_skips_short_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "x,y").unwrap();
    writeln!(file, "1.0,2.0").unwrap();
    writeln!(file, "garbage").unwrap(); // one field, skipped
    writeln!(file, "3.0,4.0").unwrap();

    let samples = read_samples(file.path()).unwrap();
    assert_eq!(samples.len(), 2);
}

#[test]
fn test_reader_handles_whitespace() {
    let cursor = Cursor::new("x,y\n 1.0 , 2.0 \n");
    let samples = read_samples_from_reader(cursor).unwrap();
    assert_eq!(samples.xs, vec![1.0]);
    assert_eq!(samples.ys, vec![2.0]);
}

#[test]
fn test_reader_rejects_bad_numbers() {
    let cursor = Cursor::new("x,y\n1.0,banana\n");
    let err = read_samples_from_reader(cursor).unwrap_err();
    assert!(matches!(err, HitZoneError::Parse(_)), "got {:?}", err);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_points("does/not/exist.csv").unwrap_err();
    assert!(matches!(err, HitZoneError::Io(_)), "got {:?}", err);
}

// --- NORMALIZATION TESTS ---

#[test]
fn test_normalize_min_shifted_formula() {
    // minX = -10, maxX = 10: x maps via ((v + 10) / 20) * 99.
    let samples = RawSamples {
        xs: vec![-10.0, 10.0, 0.0],
        ys: vec![5.0, 5.0, 5.0],
    };
    let points = normalize(&samples).unwrap();
    assert_eq!(points[0].x, 0);
    assert_eq!(points[1].x, 99);
    assert_eq!(points[2].x, 49); // 49.5 truncated, not rounded
}

#[test]
fn test_normalize_constant_positive_axis_is_fine() {
    // min = max = 5 gives denominator |5| + 5 = 10, not degenerate.
    let samples = RawSamples {
        xs: vec![5.0, 5.0],
        ys: vec![1.0, 2.0],
    };
    let points = normalize(&samples).unwrap();
    assert_eq!(points[0].x, 99);
    assert_eq!(points[1].x, 99);
}

#[test]
fn test_normalize_all_zero_axis_degenerates() {
    let samples = RawSamples {
        xs: vec![0.0, 0.0],
        ys: vec![1.0, 2.0],
    };
    let err = normalize(&samples).unwrap_err();
    assert!(matches!(err, HitZoneError::DegenerateRange(_)), "got {:?}", err);
}

#[test]
fn test_normalize_empty_input_is_parse_error() {
    let samples = RawSamples {
        xs: vec![],
        ys: vec![],
    };
    let err = normalize(&samples).unwrap_err();
    assert!(matches!(err, HitZoneError::Parse(_)), "got {:?}", err);
}

#[test]
fn test_normalize_output_stays_in_plane() {
    let samples = RawSamples {
        xs: vec![-3.7, 12.9, 0.01, 4.4],
        ys: vec![100.0, 250.0, 175.5, 101.1],
    };
    let points = normalize(&samples).unwrap();
    for p in points {
        assert!(p.x <= 99);
        assert!(p.y <= 99);
    }
}

#[test]
fn test_load_points_end_to_end() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "plate_x,plate_z").unwrap();
    writeln!(file, "-1.0,1.0").unwrap();
    writeln!(file, "1.0,4.0").unwrap();
    writeln!(file, "0.0,2.5").unwrap();

    let points = load_points(file.path()).unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].x, 0);
    assert_eq!(points[1].x, 99);
    assert_eq!(points[2].x, 49);
    // y axis: min 1, max 4, span 5: ((1+1)/5)*99 = 39.6 -> 39
    assert_eq!(points[0].y, 39);
    assert_eq!(points[1].y, 99);
}

#[test]
fn test_load_points_header_only_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "x,y").unwrap();

    let err = load_points(file.path()).unwrap_err();
    assert!(matches!(err, HitZoneError::Parse(_)), "got {:?}", err);
}
