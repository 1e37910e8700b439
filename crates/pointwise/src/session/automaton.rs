//! State handlers and the run loop.

use std::io::{self, BufRead, Write};

use crate::demo;
use crate::error::PointsError;
use crate::ops::{self, Quadrant, SortCriteria};
use crate::point::{Point, PointList};
use crate::sample::{sample_points, Bounds};

use super::console::{Console, InputError};
use super::context::{OpOutput, Operation, SessionContext};
use super::state::{transition, Event, MenuChoice, State};

/// Upper bound on one random batch, keeps the pairwise tables printable.
const MAX_SAMPLE: usize = 1000;

/// Finite-state console session owning its context.
pub struct Automaton<R, W> {
    state: State,
    context: SessionContext,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Automaton<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            state: State::MainMenu,
            context: SessionContext::new(),
            console: Console::new(input, output),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn into_parts(self) -> (SessionContext, W) {
        (self.context, self.console.into_output())
    }

    /// Run until `Exit`.
    pub fn run(&mut self) -> io::Result<()> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        tracing::debug!(points = self.context.points.len(), "session finished");
        Ok(())
    }

    /// Run the current state's handler once and apply the transition.
    pub fn step(&mut self) -> io::Result<State> {
        let event = match self.state {
            State::MainMenu => self.main_menu()?,
            State::InputPoints => {
                let outcome = self.input_points();
                self.settle(outcome)?
            }
            State::ProcessOperation => {
                let outcome = self.process_operation();
                self.settle(outcome)?
            }
            State::FunctionalDemo => {
                let outcome = self.functional_demo();
                self.settle(outcome)?
            }
            State::Exit => return Ok(State::Exit),
        };
        let next = transition(self.state, event);
        tracing::debug!(from = ?self.state, ?event, to = ?next, "transition");
        self.state = next;
        if next.is_terminal() {
            writeln!(self.console.out(), "Goodbye.")?;
        }
        Ok(next)
    }

    /// Convert a handler outcome into an event; only I/O errors escape.
    fn settle(&mut self, outcome: Result<(), InputError>) -> io::Result<Event> {
        match outcome {
            Ok(()) => Ok(Event::Done),
            Err(InputError::Eof) => Ok(Event::EndOfInput),
            Err(InputError::Io(err)) => Err(err),
            Err(err) => {
                tracing::debug!(state = ?self.state, error = %err, "step failed");
                writeln!(self.console.out(), "Error: {err}")?;
                Ok(Event::Done)
            }
        }
    }

    fn main_menu(&mut self) -> io::Result<Event> {
        let out = self.console.out();
        writeln!(out)?;
        writeln!(out, "=== Main menu ({} points) ===", self.context.points.len())?;
        for choice in MenuChoice::ALL {
            writeln!(out, "{}. {}", choice.key(), choice.label())?;
        }
        let Some(line) = self.console.ask("Choice: ")? else {
            return Ok(Event::EndOfInput);
        };
        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(self.console.out(), "Unknown choice: '{}'", line.trim())?;
            return Ok(Event::Rejected);
        };
        if choice.needs_points() && !self.context.has_points() {
            writeln!(
                self.console.out(),
                "No points yet. Add points first (option {}).",
                MenuChoice::AddPoints.key()
            )?;
            return Ok(Event::Rejected);
        }
        match choice {
            MenuChoice::ShowPoints => {
                let points = &self.context.points;
                writeln!(self.console.out(), "Points: {}", PointList(points))?;
            }
            MenuChoice::ShowResult => match (&self.context.method, &self.context.result) {
                (Some(method), Some(result)) => {
                    writeln!(self.console.out(), "Last operation: {method}")?;
                    writeln!(self.console.out(), "{result}")?;
                }
                _ => writeln!(self.console.out(), "No operation has been run yet.")?,
            },
            MenuChoice::ClearPoints => {
                self.context.clear();
                writeln!(self.console.out(), "Points cleared.")?;
            }
            _ => {}
        }
        Ok(Event::Selected(choice))
    }

    fn input_points(&mut self) -> Result<(), InputError> {
        let out = self.console.out();
        writeln!(out)?;
        writeln!(out, "1. Enter points manually")?;
        writeln!(out, "2. Generate random points")?;
        let mode = self.console.ask_token("Mode: ")?;
        let added = match mode.as_str() {
            "1" => self.read_manual_points()?,
            "2" => {
                let count: usize = self.console.ask_parsed("How many points: ", "count")?;
                if count > MAX_SAMPLE {
                    return Err(PointsError::invalid(format!(
                        "at most {MAX_SAMPLE} points per batch, got {count}"
                    ))
                    .into());
                }
                let seed: u64 = self.console.ask_parsed("Seed: ", "seed")?;
                sample_points(count, Bounds::default(), seed)
            }
            _ => return Err(InputError::parse("input mode", &mode)),
        };
        let added_count = added.len();
        self.context.points.extend(added);
        tracing::debug!(added = added_count, total = self.context.points.len(), "points added");
        writeln!(
            self.console.out(),
            "Added {added_count} point(s), {} in total.",
            self.context.points.len()
        )?;
        Ok(())
    }

    /// One point per line until a blank line or end of input. Bad lines are
    /// reported and skipped.
    fn read_manual_points(&mut self) -> Result<Vec<Point>, InputError> {
        writeln!(
            self.console.out(),
            "Enter points as 'x y' or 'x,y', one per line; empty line to finish."
        )?;
        let mut points = Vec::new();
        while let Some(line) = self.console.ask("> ")? {
            if line.trim().is_empty() {
                break;
            }
            match line.parse::<Point>() {
                Ok(p) => points.push(p),
                Err(err) => writeln!(self.console.out(), "Skipped: {err}")?,
            }
        }
        Ok(points)
    }

    fn process_operation(&mut self) -> Result<(), InputError> {
        let out = self.console.out();
        writeln!(out)?;
        writeln!(out, "=== Operations ===")?;
        for op in Operation::ALL {
            writeln!(out, "{}. {}", op.code(), op.label())?;
        }
        let token = self.console.ask_token("Operation: ")?;
        let op = token
            .parse::<u8>()
            .ok()
            .and_then(Operation::from_code)
            .ok_or_else(|| InputError::parse("operation", &token))?;
        tracing::debug!(method = op.name(), points = self.context.points.len(), "dispatch");

        let console = &mut self.console;
        let points = &self.context.points;
        let output = match op {
            Operation::Scale => {
                let factor: f64 = console.ask_parsed("Scale factor: ", "number")?;
                OpOutput::Points(ops::scale_points(points, factor)?)
            }
            Operation::FilterQuadrant => {
                let n: i64 = console.ask_parsed("Quadrant (1-4): ", "quadrant")?;
                OpOutput::Points(ops::filter_by_quadrant(points, Quadrant::try_from(n)?)?)
            }
            Operation::TotalVector => OpOutput::Vector(ops::total_vector(points)),
            Operation::Sort => {
                let names: Vec<&str> = SortCriteria::ALL.iter().map(|c| c.name()).collect();
                let token = console.ask_token(&format!("Criteria ({}): ", names.join("/")))?;
                OpOutput::Points(ops::sort_by_criteria(points, token.parse()?)?)
            }
            Operation::Pipeline => {
                let dx: f64 = console.ask_parsed("Shift x by: ", "number")?;
                let dy: f64 = console.ask_parsed("Shift y by: ", "number")?;
                let factor: f64 = console.ask_parsed("Then scale by: ", "number")?;
                let stages = [ops::translate(dx, dy), ops::scale_by(factor)];
                OpOutput::Points(ops::transform_pipeline(points, &stages)?)
            }
            Operation::PairwiseDistances => OpOutput::Distances(ops::pairwise_distances(points)?),
            Operation::ClosestForEach => OpOutput::ClosestPairs(ops::closest_for_each(points)?),
            Operation::TotalPathDistance => OpOutput::Scalar(ops::total_path_distance(points)),
            Operation::FilterDistance => {
                let reference: Point = console.ask_token("Reference point (x y): ")?.parse()?;
                let max: f64 = console.ask_parsed("Maximum distance: ", "number")?;
                OpOutput::Points(ops::filter_by_distance(points, reference, max)?)
            }
        };

        writeln!(self.console.out(), "{} done.", op.label())?;
        writeln!(self.console.out(), "Result:\n{output}")?;
        self.context.record(op, output);
        Ok(())
    }

    fn functional_demo(&mut self) -> Result<(), InputError> {
        let report = demo::functional_demo(&self.context.points)?;
        let out = self.console.out();
        writeln!(out)?;
        writeln!(out, "=== Functional demo ===")?;
        writeln!(out, "Input: {}", PointList(&report.input))?;
        writeln!(out, "1. Scaled x2: {}", PointList(&report.scaled))?;
        writeln!(out, "2. First quadrant: {}", PointList(&report.first_quadrant))?;
        writeln!(out, "3. Total vector: {}", report.total_vector)?;
        writeln!(
            out,
            "4. Sorted by distance to origin: {}",
            PointList(&report.sorted_by_distance)
        )?;
        if let Some(rows) = report.distances {
            writeln!(out, "5. Pairwise distances:")?;
            writeln!(out, "{}", OpOutput::Distances(rows))?;
        }
        Ok(())
    }
}
