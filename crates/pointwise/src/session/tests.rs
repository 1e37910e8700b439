use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use super::*;
use crate::point::Point;

fn run_script(script: &str) -> (SessionContext, String) {
    let mut automaton = Automaton::new(Cursor::new(script.to_string()), Vec::new());
    automaton.run().unwrap();
    assert_eq!(automaton.state(), State::Exit);
    let (ctx, out) = automaton.into_parts();
    (ctx, String::from_utf8(out).unwrap())
}

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&xy| Point::from(xy)).collect()
}

const ADD_THREE: &str = "1\n1\n1 1\n-1 1\n-1 -1\n\n";

#[test]
fn add_points_then_filter_second_quadrant() {
    let script = format!("{ADD_THREE}2\n2\n2\n0\n");
    let (ctx, out) = run_script(&script);
    assert_eq!(ctx.points, pts(&[(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)]));
    assert_eq!(ctx.method, Some(Operation::FilterQuadrant));
    assert_eq!(ctx.result, Some(OpOutput::Points(pts(&[(-1.0, 1.0)]))));
    assert!(out.contains("Result:\n[(-1, 1)]"), "{out}");
    assert!(out.trim_end().ends_with("Goodbye."));
}

#[test]
fn quit_from_main_menu_exits() {
    let mut automaton = Automaton::new(Cursor::new("0\n"), Vec::new());
    assert_eq!(automaton.step().unwrap(), State::Exit);
    assert_eq!(automaton.step().unwrap(), State::Exit);
    automaton.run().unwrap();
}

#[test]
fn end_of_input_exits_gracefully() {
    let (ctx, _) = run_script("");
    assert!(ctx.points.is_empty());
    // closed input in the middle of a parameter prompt
    let (ctx, _) = run_script(&format!("{ADD_THREE}2\n1\n"));
    assert_eq!(ctx.points.len(), 3);
    assert!(ctx.result.is_none());
}

#[test]
fn operations_need_points_first() {
    let (ctx, out) = run_script("2\n3\nq\n");
    assert!(ctx.result.is_none());
    assert_eq!(out.matches("No points yet").count(), 2);
}

#[test]
fn unknown_choice_loops_back() {
    let mut automaton = Automaton::new(Cursor::new("banana\n0\n"), Vec::new());
    assert_eq!(automaton.step().unwrap(), State::MainMenu);
    assert_eq!(automaton.step().unwrap(), State::Exit);
    let (_, out) = automaton.into_parts();
    assert!(String::from_utf8(out).unwrap().contains("Unknown choice: 'banana'"));
}

#[test]
fn library_errors_are_reported_and_keep_previous_result() {
    // total vector first, then an invalid quadrant, then an unknown criteria
    let script = format!("{ADD_THREE}2\n3\n2\n2\n7\n2\n4\nby_color\n0\n");
    let (ctx, out) = run_script(&script);
    assert_eq!(ctx.method, Some(Operation::TotalVector));
    assert_eq!(ctx.result, Some(OpOutput::Vector(Point::new(-1.0, 1.0))));
    assert!(out.contains("Error: invalid argument: quadrant must be between 1 and 4, got 7"));
    assert!(out.contains("Error: invalid argument: unknown sort criteria 'by_color'"));
}

#[test]
fn pair_operation_on_single_point_reports_counts() {
    let script = "1\n1\n4 4\n\n2\n6\n0\n";
    let (ctx, out) = run_script(script);
    assert!(ctx.result.is_none());
    assert!(out.contains("Error: not enough points: need at least 2, got 1"), "{out}");
}

#[test]
fn malformed_parameters_do_not_end_the_session() {
    let script = format!("{ADD_THREE}2\n1\ntwice\n2\n1\n3\n0\n");
    let (ctx, out) = run_script(&script);
    assert!(out.contains("'twice' is not a valid number"));
    assert_eq!(
        ctx.result,
        Some(OpOutput::Points(pts(&[(3.0, 3.0), (-3.0, 3.0), (-3.0, -3.0)])))
    );
}

#[test]
fn every_operation_code_dispatches() {
    let cases: [(&str, Operation); 9] = [
        ("1\n0.5\n", Operation::Scale),
        ("2\n3\n", Operation::FilterQuadrant),
        ("3\n", Operation::TotalVector),
        ("4\nx_then_y\n", Operation::Sort),
        ("5\n1\n-1\n2\n", Operation::Pipeline),
        ("6\n", Operation::PairwiseDistances),
        ("7\n", Operation::ClosestForEach),
        ("8\n", Operation::TotalPathDistance),
        ("9\n0 0\n1.5\n", Operation::FilterDistance),
    ];
    for (params, expected) in cases {
        let script = format!("{ADD_THREE}2\n{params}0\n");
        let (ctx, _) = run_script(&script);
        assert_eq!(ctx.method, Some(expected), "params {params:?}");
        let result = ctx.result.expect("result recorded");
        match expected {
            Operation::Sort => assert_eq!(
                result,
                OpOutput::Points(pts(&[(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)]))
            ),
            Operation::Pipeline => assert_eq!(
                result,
                OpOutput::Points(pts(&[(4.0, 0.0), (0.0, 0.0), (0.0, -4.0)]))
            ),
            Operation::TotalPathDistance => assert_eq!(result, OpOutput::Scalar(4.0)),
            Operation::PairwiseDistances => {
                assert!(matches!(result, OpOutput::Distances(ref d) if d.len() == 3))
            }
            Operation::FilterDistance => {
                assert_eq!(result, OpOutput::Points(pts(&[(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)])))
            }
            _ => {}
        }
    }
}

#[test]
fn show_and_clear_points() {
    let script = format!("{ADD_THREE}4\n5\n2\n8\n5\n6\n4\n0\n");
    let (ctx, out) = run_script(&script);
    assert!(out.contains("Points: [(1, 1), (-1, 1), (-1, -1)]"));
    assert!(out.contains("No operation has been run yet."));
    assert!(out.contains("Last operation: total_distance\n4.00"));
    assert!(out.contains("Points cleared."));
    assert!(out.contains("Points: []"));
    assert!(ctx.points.is_empty() && ctx.method.is_none() && ctx.result.is_none());
}

#[test]
fn demo_reports_each_step() {
    let script = format!("{ADD_THREE}3\n0\n");
    let (ctx, out) = run_script(&script);
    assert!(out.contains("1. Scaled x2: [(2, 2), (-2, 2), (-2, -2)]"));
    assert!(out.contains("2. First quadrant: [(1, 1)]"));
    assert!(out.contains("3. Total vector: (-1, 1)"));
    assert!(out.contains("5. Pairwise distances:"));
    assert!(out.contains("  (1, 1) -> (-1, 1): 2.00"));
    assert!(ctx.result.is_none());
}

#[test]
fn random_points_are_reproducible() {
    let (a, _) = run_script("1\n2\n5\n99\n0\n");
    let (b, _) = run_script("1\n2\n5\n99\n0\n");
    assert_eq!(a.points.len(), 5);
    assert_eq!(a.points, b.points);
    let (c, out) = run_script("1\n2\n5000\n0\n");
    assert!(c.points.is_empty());
    assert!(out.contains("at most 1000 points per batch"));
}

#[test]
fn bad_point_lines_are_skipped() {
    let (ctx, out) = run_script("1\n1\n1 2\nnope\n3,4\n\n0\n");
    assert_eq!(ctx.points, pts(&[(1.0, 2.0), (3.0, 4.0)]));
    assert!(out.contains("Skipped: invalid argument"));
}

#[test]
fn invalid_utf8_input_is_rejected_not_fatal() {
    let mut script = b"1\n1\n1 1\n\n".to_vec();
    script.extend_from_slice(b"\xff\xfe\n4\n0\n");
    let mut automaton = Automaton::new(Cursor::new(script), Vec::new());
    automaton.run().unwrap();
    assert_eq!(automaton.state(), State::Exit);
    let (ctx, out) = automaton.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(ctx.points, pts(&[(1.0, 1.0)]));
    assert!(out.contains("Unknown choice: '\u{fffd}\u{fffd}'"), "{out}");
    assert!(out.contains("Points: [(1, 1)]"));
}

/// Log sink shared with a `fmt` subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn user_errors_stay_out_of_default_logs() {
    let logs = LogBuffer::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || sink.clone())
        .finish();
    let script = format!("{ADD_THREE}2\n2\n7\n0\n");
    let (_, out) = tracing::subscriber::with_default(subscriber, || run_script(&script));
    assert!(out.contains("Error: invalid argument: quadrant must be between 1 and 4"));
    let logged = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(logged.is_empty(), "{logged}");
}
