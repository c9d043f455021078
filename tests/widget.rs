use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use livegraph::{color, GraphConfig, GraphError, LineGraph};

#[test]
fn add_line_then_tick_appends_samples() {
    let mut graph = LineGraph::default();
    let line = graph.add_line(color::parse("#729fcf").unwrap(), "Random");
    let mut n = 0.0;
    graph
        .set_data_func(
            line,
            Box::new(move |_| {
                n += 1.0;
                Ok(n)
            }),
        )
        .unwrap();

    graph.tick_now();
    graph.tick_now();
    let snap = graph.snapshot(line).unwrap();
    let values: Vec<f64> = snap.iter().map(|p| p[1]).collect();
    assert_eq!(values, vec![1.0, 2.0]);
}

#[test]
fn timestamps_are_monotonic() {
    let mut graph = LineGraph::default();
    let line = graph.add_line_auto("t");
    graph.set_data_func(line, Box::new(|_| Ok(0.0))).unwrap();
    for _ in 0..5 {
        graph.tick_now();
    }
    let snap = graph.snapshot(line).unwrap();
    for pair in snap.windows(2) {
        assert!(pair[0][0] <= pair[1][0]);
    }
}

#[test]
fn autoscale_bounds_follow_the_data() {
    let mut graph = LineGraph::default();
    let line = graph.add_line_auto("v");
    let values = Rc::new(RefCell::new(vec![10.0, 2.0, 8.0, 1.0, 5.0, 3.0]));
    let values2 = Rc::clone(&values);
    graph
        .set_data_func(
            line,
            Box::new(move |_| Ok(values2.borrow_mut().remove(0))),
        )
        .unwrap();
    for _ in 0..6 {
        graph.tick_now();
    }
    let b = graph.bounds();
    assert!(b.min < 1.0 && b.min > 0.0, "padded min below the data: {b:?}");
    assert!(b.max > 10.0 && b.max < 11.0, "padded max above the data: {b:?}");
}

#[test]
fn disabling_autoscale_uses_pinned_bounds_verbatim() {
    let mut graph = LineGraph::default();
    let line = graph.add_line_auto("v");
    graph.set_data_func(line, Box::new(|_| Ok(150.0))).unwrap();
    graph.set_autoscale(false);
    graph.set_pinned_bounds(0.0, 100.0).unwrap();
    graph.tick_now();

    let b = graph.bounds();
    assert_eq!((b.min, b.max), (0.0, 100.0));
    // The out-of-range sample is stored in full.
    assert_eq!(graph.snapshot(line).unwrap()[0][1], 150.0);
}

#[test]
fn invalid_configuration_is_rejected_synchronously() {
    let mut graph = LineGraph::default();
    assert!(matches!(graph.set_dps(0), Err(GraphError::InvalidCapacity)));
    assert!(matches!(
        graph.set_pinned_bounds(5.0, 5.0),
        Err(GraphError::InvalidBounds { .. })
    ));
    assert!(matches!(
        graph.set_pinned_bounds(10.0, 1.0),
        Err(GraphError::InvalidBounds { .. })
    ));
    assert!(matches!(
        graph.set_pinned_bounds(f64::NAN, 1.0),
        Err(GraphError::InvalidBounds { .. })
    ));

    let mut other = LineGraph::default();
    let foreign = other.add_line_auto("x");
    other.remove_line(foreign).unwrap();
    assert!(matches!(
        other.set_data_func(foreign, Box::new(|_| Ok(0.0))),
        Err(GraphError::UnknownSeries(_))
    ));
}

#[test]
fn set_dps_truncates_existing_series() {
    let mut graph = LineGraph::new(GraphConfig {
        dps: 10,
        ..GraphConfig::default()
    });
    let line = graph.add_line_auto("v");
    let mut n = 0.0;
    graph
        .set_data_func(
            line,
            Box::new(move |_| {
                n += 1.0;
                Ok(n)
            }),
        )
        .unwrap();
    for _ in 0..10 {
        graph.tick_now();
    }
    graph.set_dps(3).unwrap();
    let values: Vec<f64> = graph
        .snapshot(line)
        .unwrap()
        .iter()
        .map(|p| p[1])
        .collect();
    assert_eq!(values, vec![8.0, 9.0, 10.0]);
}

#[test]
fn removing_a_line_cancels_its_sampling() {
    let mut graph = LineGraph::default();
    let line = graph.add_line_auto("v");
    let calls = Rc::new(RefCell::new(0));
    let calls2 = Rc::clone(&calls);
    graph
        .set_data_func(
            line,
            Box::new(move |_| {
                *calls2.borrow_mut() += 1;
                Ok(0.0)
            }),
        )
        .unwrap();
    graph.tick_now();
    graph.remove_line(line).unwrap();
    graph.tick_now();
    graph.tick_now();
    assert_eq!(*calls.borrow(), 1, "no callback may fire after removal");
    assert!(matches!(
        graph.snapshot(line),
        Err(GraphError::UnknownSeries(_))
    ));
}

#[test]
fn update_respects_the_tick_interval() {
    let mut graph = LineGraph::new(GraphConfig {
        tick_interval: Duration::from_secs(3600),
        ..GraphConfig::default()
    });
    let line = graph.add_line_auto("v");
    graph.set_data_func(line, Box::new(|_| Ok(1.0))).unwrap();

    let now = std::time::Instant::now();
    assert!(graph.update(now), "first poll samples immediately");
    assert!(!graph.update(now + Duration::from_secs(1)));
    assert!(graph.update(now + Duration::from_secs(3600)));
    assert_eq!(graph.sample_count(line).unwrap(), 2);
}

#[test]
fn error_hook_fires_and_other_series_continue() {
    let mut graph = LineGraph::default();
    let bad = graph.add_line_auto("bad");
    let good = graph.add_line_auto("good");
    graph.set_data_func(bad, Box::new(|_| Err("no data".into()))).unwrap();
    graph.set_data_func(good, Box::new(|_| Ok(1.0))).unwrap();

    let errors = Rc::new(RefCell::new(0));
    let errors2 = Rc::clone(&errors);
    graph.set_error_hook(Box::new(move |_| {
        *errors2.borrow_mut() += 1;
    }));

    graph.tick_now();
    assert_eq!(*errors.borrow(), 1);
    assert_eq!(graph.sample_count(bad).unwrap(), 0);
    assert_eq!(graph.sample_count(good).unwrap(), 1);
}

#[test]
fn look_changes_show_up_in_snapshots() {
    let mut graph = LineGraph::default();
    let line = graph.add_line(color::parse("#73d216").unwrap(), "v");
    {
        let look = graph.look_mut(line).unwrap();
        look.visible = false;
        look.width = 3.0;
    }
    let snaps = graph.snapshots();
    assert!(!snaps[0].look.visible);
    assert_eq!(snaps[0].look.width, 3.0);
    assert_eq!(snaps[0].look.label, "v");

    let mut other = LineGraph::default();
    let gone = other.add_line_auto("x");
    other.remove_line(gone).unwrap();
    assert!(matches!(
        other.look_mut(gone),
        Err(GraphError::UnknownSeries(_))
    ));
}

#[test]
fn clearing_keeps_series_and_bindings() {
    let mut graph = LineGraph::default();
    let line = graph.add_line_auto("v");
    graph.set_data_func(line, Box::new(|_| Ok(1.0))).unwrap();
    graph.tick_now();
    graph.clear_all();
    assert_eq!(graph.sample_count(line).unwrap(), 0);
    graph.tick_now();
    assert_eq!(graph.sample_count(line).unwrap(), 1);
}
