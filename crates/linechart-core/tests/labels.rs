// File: crates/linechart-core/tests/labels.rs
// Purpose: Validate value-label selection and formatting.

use linechart_core::{format_value, select_label_indices, value_labels, Color, PlotError};

#[test]
fn short_line_labels_every_point() {
    let ys = [0.0, 1.0, 4.0, 9.0, 16.0, 25.0];
    let sel = select_label_indices(&ys).expect("select");
    assert_eq!(sel.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn samples_near_extrema_are_dropped() {
    // max at 21: sample 20 sits within half_interval (24 / 12 = 2)
    let mut ys: Vec<f64> = (0..24).map(|i| i as f64).collect();
    ys[22] = 20.5;
    ys[23] = 20.0;
    let sel = select_label_indices(&ys).expect("select");
    assert_eq!(sel.into_iter().collect::<Vec<_>>(), vec![0, 4, 8, 12, 16, 21]);
}

#[test]
fn first_extremum_wins_ties() {
    let mut ys = vec![1.0; 24];
    ys[5] = 9.0;
    ys[17] = 9.0;
    ys[9] = -1.0;
    ys[20] = -1.0;
    let sel = select_label_indices(&ys).expect("select");
    assert_eq!(sel.into_iter().collect::<Vec<_>>(), vec![0, 5, 9, 12, 16, 20]);
}

#[test]
fn extrema_always_selected() {
    for n in [1usize, 2, 7, 13, 100, 659, 1000] {
        let ys: Vec<f64> = (0..n).map(|i| (i as f64 * 0.05).sin() * (i as f64 + 1.0)).collect();
        let sel = select_label_indices(&ys).expect("select");
        let i_max = (0..n).fold(0, |m, i| if ys[i] > ys[m] { i } else { m });
        let i_min = (0..n).fold(0, |m, i| if ys[i] < ys[m] { i } else { m });
        assert!(sel.contains(&i_max) && sel.contains(&i_min), "n={n}: {sel:?}");
        assert!(sel.len() <= 2 * 6 + 1);

        let half = n / 12;
        let extra: Vec<usize> = sel.iter().copied().filter(|i| *i != i_max && *i != i_min).collect();
        for &i in &extra {
            assert!(i.abs_diff(i_max) > half && i.abs_diff(i_min) > half);
        }
    }
}

#[test]
fn labels_sit_above_their_points() {
    let ys = [2.0, 30.0, -0.5];
    let xs_px = [30, 400, 770];
    let ys_px = [300, 40, 560];
    let labels = value_labels(&ys, &xs_px, &ys_px, Color::BLUE).expect("labels");
    assert_eq!(labels.len(), 3);
    assert_eq!((labels[1].x, labels[1].y), (400, 30));
    assert_eq!(labels[1].text, "3.0E+01");
    assert_eq!(labels[2].text, "-5.0E-01");
    assert!(labels.iter().all(|l| l.color == Color::BLUE));
}

#[test]
fn empty_or_misaligned_input_is_rejected() {
    assert!(matches!(select_label_indices(&[]), Err(PlotError::InvalidInput(_))));
    assert!(matches!(value_labels(&[1.0, 2.0], &[0], &[0, 1], Color::RED), Err(PlotError::InvalidInput(_))));
}

#[test]
fn scientific_format_has_signed_two_digit_exponent() {
    assert_eq!(format_value(25.0), "2.5E+01");
    assert_eq!(format_value(0.0), "0.0E+00");
    assert_eq!(format_value(-0.001), "-1.0E-03");
    assert_eq!(format_value(123456.0), "1.2E+05");
    assert_eq!(format_value(1e-10), "1.0E-10");
    assert_eq!(format_value(1.5e100), "1.5E+100");
}
