#![allow(clippy::unwrap_used)]

use std::sync::Once;

use approx::assert_abs_diff_eq;
use korfpitch::render::LineStyle;
use korfpitch::{
    create_pitch_dims, Backend, Bins, Horizontal, Pitch, PitchConfig, PitchStyle, PitchType,
    Statistic, Vertical,
};
use nalgebra::DMatrix;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("korfpitch=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

fn sized(pitch_type: PitchType, invert_y: bool) -> PitchConfig {
    PitchConfig {
        invert_y,
        ..PitchConfig::sized(pitch_type, 20.0, 40.0)
    }
}

fn every_config() -> Vec<PitchConfig> {
    vec![
        PitchConfig::default(),
        sized(PitchType::Centered, false),
        sized(PitchType::Centered, true),
        sized(PitchType::Custom, false),
        sized(PitchType::Custom, true),
    ]
}

#[test]
fn every_pitch_type_keeps_landmarks_in_order() {
    init_tracing();
    for config in every_config() {
        let d = config.build().unwrap();
        let xs = [
            d.left(),
            d.post_left(),
            d.korf_left(),
            d.penalty_left(),
            d.freepass_left(),
            d.center_length(),
            d.freepass_right(),
            d.penalty_right(),
            d.korf_right(),
            d.post_right(),
            d.right(),
        ];
        assert!(
            xs.windows(2).all(|w| w[0] < w[1]),
            "{:?}: {xs:?}",
            config.pitch_type
        );
    }
}

#[test]
fn extent_orientation_follows_invert_y() {
    init_tracing();
    for config in every_config() {
        let d = config.build().unwrap();
        let e = d.pitch_extent();
        assert!(e[0] < e[1]);
        assert_eq!(e[2] > e[3], config.invert_y, "{config:?}");
    }
}

#[test]
fn construction_is_repeatable() {
    for config in every_config() {
        assert_eq!(config.build().unwrap(), config.build().unwrap());
    }
}

#[test]
fn pitch_type_names_round_trip() {
    for pitch_type in PitchType::ALL {
        assert_eq!(pitch_type.to_string().parse::<PitchType>().unwrap(), pitch_type);
    }
}

#[test]
fn factory_errors() {
    init_tracing();
    let err = create_pitch_dims("bogus", None, None, None).unwrap_err();
    assert!(err.is_invalid_configuration());

    let err = create_pitch_dims("custom", None, Some(40.0), None).unwrap_err();
    assert!(err.is_missing_parameter());

    let err = create_pitch_dims("centered", Some(-20.0), Some(40.0), None).unwrap_err();
    assert!(err.is_invalid_configuration());

    // Sizes handed to the fixed type only produce a warning.
    let d = create_pitch_dims("fullsize", Some(10.0), Some(10.0), Some(1.0)).unwrap();
    assert_abs_diff_eq!(d.length(), 40.0);
}

#[test]
fn count_accounts_for_every_point() {
    init_tracing();
    let pitch = Pitch::from_config(&sized(PitchType::Centered, false)).unwrap();
    let x = [-25.0, -19.0, -3.0, 0.0, 4.5, 19.99, 20.0, 30.0, f64::NAN];
    let y = [0.0, -9.0, 2.0, 10.0, 11.0, -4.0, 3.0, 0.0, 1.0];
    let binned = pitch
        .bin_statistic(&x, &y)
        .bins(Bins::per_axis(6, 5))
        .execute()
        .unwrap();
    let outside = binned.inside.iter().filter(|inside| !**inside).count();
    #[allow(clippy::cast_precision_loss)]
    let total = binned.statistic.sum() + outside as f64;
    assert_abs_diff_eq!(total, x.len() as f64);
    // x = -25 and 30 fall off the pitch, y = 11 too, and NaN is never inside.
    assert_eq!(outside, 4);
}

#[test]
fn quadrants_on_a_fullsize_pitch() {
    init_tracing();
    let pitch = Pitch::from_config(&PitchConfig::default()).unwrap();
    let x = [10.0, 30.0, 10.0, 30.0];
    let y = [5.0, 5.0, 15.0, 15.0];
    let binned = pitch.bin_statistic(&x, &y).bins(Bins::per_axis(2, 2)).execute().unwrap();

    assert_eq!(binned.statistic, DMatrix::from_element(2, 2, 1.0));
    assert_eq!(binned.inside, vec![true; 4]);

    let mut pairs: Vec<(isize, isize)> = binned
        .binnumber
        .column_iter()
        .map(|c| (c[0], c[1]))
        .collect();
    // y-bins count from the top, so the low points sit in row 1.
    assert_eq!(pairs, vec![(0, 1), (1, 1), (0, 0), (1, 0)]);
    pairs.sort_unstable();
    pairs.dedup();
    assert_eq!(pairs.len(), 4);
}

#[test]
fn points_on_right_and_top_edges_are_inside() {
    let d = create_pitch_dims("fullsize", None, None, None).unwrap();
    let x = [d.right(), 5.0];
    let y = [5.0, d.top()];
    let binned = korfpitch::BinStatistic::new(&x, &y)
        .dims(&d)
        .bins(Bins::count(4))
        .execute()
        .unwrap();
    assert_eq!(binned.inside, vec![true, true]);
    assert_eq!(binned.binnumber[(0, 0)], 3);
    assert_eq!(binned.binnumber[(1, 1)], 0);
}

#[test]
fn normalized_mean_sums_to_one() {
    init_tracing();
    let pitch = Pitch::from_config(&PitchConfig::default()).unwrap();
    let x = [1.0, 2.0, 21.0, 39.0];
    let y = [1.0, 19.0, 10.0, 10.0];
    let values = [2.0, 4.0, 6.0, 8.0];
    let binned = pitch
        .bin_statistic(&x, &y)
        .values(&values)
        .statistic(Statistic::Sum)
        .bins(Bins::per_axis(2, 2))
        .normalize(true)
        .execute()
        .unwrap();
    let finite: f64 = binned.statistic.iter().filter(|v| v.is_finite()).sum();
    assert_abs_diff_eq!(finite, 1.0, epsilon = 1e-12);
}

#[test]
fn binning_errors() {
    init_tracing();
    let pitch = Pitch::from_config(&PitchConfig::default()).unwrap();
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [1.0, 2.0, 3.0, 4.0];
    let err = pitch.bin_statistic(&x, &y).execute().unwrap_err();
    assert!(err.is_dimension_mismatch());

    let err = pitch
        .bin_statistic(&x[..4], &y)
        .statistic(Statistic::Mean)
        .execute()
        .unwrap_err();
    assert!(err.is_missing_parameter());
}

#[test]
fn standardize_then_bin() {
    init_tracing();
    let custom = Pitch::from_config(&PitchConfig::sized(PitchType::Custom, 30.0, 60.0)).unwrap();
    let fullsize = Pitch::from_config(&PitchConfig::default()).unwrap();
    let (x, y) = custom
        .standardizer_to(&fullsize)
        .transform(&[15.0, 45.0], &[7.5, 22.5])
        .unwrap();
    let binned = fullsize.bin_statistic(&x, &y).bins(Bins::per_axis(2, 2)).execute().unwrap();
    assert_eq!(binned.inside, vec![true, true]);
    assert_abs_diff_eq!(binned.statistic[(1, 0)], 1.0);
    assert_abs_diff_eq!(binned.statistic[(0, 1)], 1.0);
}

/// Counts shapes by kind and remembers mesh sizes.
#[derive(Debug, Default)]
struct Tally {
    lines: usize,
    ellipses: usize,
    annuli: usize,
    arcs: Vec<(f64, f64)>,
    meshes: Vec<(usize, usize)>,
    filled: usize,
}

impl Backend for Tally {
    fn draw_polyline(&mut self, _xs: &[f64], _ys: &[f64], _style: &LineStyle) {
        self.lines += 1;
    }

    fn draw_ellipse(&mut self, _cx: f64, _cy: f64, _w: f64, _h: f64, style: &LineStyle) {
        self.ellipses += 1;
        if style.fill {
            self.filled += 1;
        }
    }

    fn draw_annulus(&mut self, _cx: f64, _cy: f64, _w: f64, _h: f64, _r: f64, _s: &LineStyle) {
        self.annuli += 1;
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_arc(
        &mut self,
        _cx: f64,
        _cy: f64,
        _w: f64,
        _h: f64,
        theta1: f64,
        theta2: f64,
        _style: &LineStyle,
    ) {
        self.arcs.push((theta1, theta2));
    }

    fn draw_mesh(&mut self, x_grid: &DMatrix<f64>, _y: &DMatrix<f64>, values: &DMatrix<f64>) {
        assert_eq!(x_grid.nrows(), values.nrows() + 1);
        self.meshes.push((values.nrows(), values.ncols()));
    }
}

#[test]
fn draws_a_pitch_in_both_orientations() {
    init_tracing();
    let pitch = Pitch::from_config(&PitchConfig::default()).unwrap();

    let mut horizontal = Horizontal::new(Tally::default());
    pitch.draw(&mut horizontal).unwrap();
    let h = horizontal.into_backend();
    assert_eq!(h.lines, 5);
    assert_eq!(h.ellipses, 7);
    assert_eq!(h.filled, 3);
    assert_eq!(h.annuli, 2);
    assert_eq!(h.arcs, vec![(90.0, -90.0), (270.0, 90.0)]);

    let mut vertical = Vertical::new(Tally::default());
    pitch.draw(&mut vertical).unwrap();
    let binned = pitch.bin_statistic(&[3.0], &[4.0]).bins(Bins::per_axis(5, 4)).execute().unwrap();
    pitch.heatmap(&binned, &mut vertical);
    let v = vertical.into_backend();
    assert_eq!(v.arcs, vec![(180.0, 0.0), (0.0, -180.0)]);
    assert_eq!(v.meshes, vec![(4, 5)]);
}

#[test]
fn custom_style_reaches_the_backend() {
    let style = PitchStyle {
        spot_scale: 0.0,
        ..PitchStyle::default()
    };
    let pitch = Pitch::new(&PitchConfig::default(), style).unwrap();
    let mut r = Horizontal::new(Tally::default());
    pitch.draw(&mut r).unwrap();
    assert_eq!(r.backend().filled, 0);
}
