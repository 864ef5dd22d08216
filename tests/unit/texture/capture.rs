use super::*;
use crate::foundation::core::Rgba;
use crate::path::command::Path;

/// 100x20 raster where pixel (x, y) encodes its own coordinates.
fn coordinate_raster() -> Raster {
    let mut r = Raster::new(100, 20);
    for y in 0..20 {
        for x in 0..100 {
            r.put_pixel(x, y, Rgba::from_rgba8(x as u8, y as u8, 0, 255));
        }
    }
    r
}

fn geom(d: &str) -> PathGeometry {
    PathGeometry::new(&Path::parse(d).unwrap())
}

#[test]
fn horizontal_walk_captures_one_column_per_unit() {
    let raster = coordinate_raster();
    let set =
        sample_path_columns(&raster, &geom("M0,10L100,10"), &SampleOptions::default()).unwrap();
    assert_eq!(set.len(), 100);
    assert_eq!(set.column_height(), 9);
}

#[test]
fn columns_read_along_the_normal() {
    let raster = coordinate_raster();
    let set =
        sample_path_columns(&raster, &geom("M0,10L100,10"), &SampleOptions::default()).unwrap();
    // The normal of a horizontal path points down the y axis: column 5 reads
    // pixels (5, 6) through (5, 14) in order.
    let col = set.get(5).unwrap();
    for (idx, px) in col.iter().enumerate() {
        assert_eq!(*px, Rgba::from_rgba8(5, (6 + idx) as u8, 0, 255));
    }
}

#[test]
fn out_of_bounds_samples_read_transparent_black() {
    let raster = coordinate_raster();
    // Path hugs the top edge: half of every column falls outside the raster.
    let set =
        sample_path_columns(&raster, &geom("M0,0L100,0"), &SampleOptions::default()).unwrap();
    let col = set.get(0).unwrap();
    for px in &col[0..4] {
        assert_eq!(*px, Rgba::TRANSPARENT);
    }
    assert_eq!(col[4], Rgba::from_rgba8(0, 0, 0, 255));
}

#[test]
fn sample_distance_controls_column_count() {
    let raster = coordinate_raster();
    let opts = SampleOptions {
        sample_distance: 10.0,
        ..SampleOptions::default()
    };
    let set = sample_path_columns(&raster, &geom("M0,10L100,10"), &opts).unwrap();
    assert_eq!(set.len(), 10);
}

#[test]
fn degenerate_path_captures_nothing() {
    let raster = coordinate_raster();
    let set = sample_path_columns(&raster, &geom("M5,5"), &SampleOptions::default()).unwrap();
    assert!(set.is_empty());
}

#[test]
fn invalid_options_fail_capture_instead_of_degrading() {
    let raster = coordinate_raster();
    let g = geom("M0,10L100,10");
    // A negative distance must not come back as an empty set.
    let negative = SampleOptions {
        sample_distance: -1.0,
        ..SampleOptions::default()
    };
    assert!(matches!(
        sample_path_columns(&raster, &g, &negative),
        Err(BrushError::Validation(_))
    ));
    // A zero distance must not come back as an unbounded walk.
    let zero = SampleOptions {
        sample_distance: 0.0,
        ..SampleOptions::default()
    };
    assert!(sample_path_columns(&raster, &g, &zero).is_err());
}

#[test]
fn options_validation_rejects_odd_or_zero_values() {
    assert!(SampleOptions::default().validate().is_ok());
    assert!(
        SampleOptions {
            normal_length: 7,
            ..SampleOptions::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        SampleOptions {
            normal_length: 0,
            ..SampleOptions::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        SampleOptions {
            sample_distance: 0.0,
            ..SampleOptions::default()
        }
        .validate()
        .is_err()
    );
}
