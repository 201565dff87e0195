use crate::diagnostic::Failure;
use crate::spec::Spec;
use crate::vessel::Vessel;
use parsec_common::Position;
use std::rc::Rc;
use std::sync::Arc;

/// A vessel over an in-memory string.
///
/// The input is decoded into code points once, up front, so that looking at
/// or moving to any offset is a constant-time index instead of a rescan of
/// the UTF-8 text.
#[derive(Debug)]
pub struct StringVessel<S = ()> {
    source: Arc<str>,
    /// Byte index of every code point in `source`.
    starts: Vec<usize>,
    chars: Vec<char>,
    position: Position,
    spec: Rc<Spec<S>>,
    state: S,
    furthest: Option<Failure>,
    /// Step budget each parse starts with.
    budget: Option<usize>,
    fuel: Option<usize>,
    exhausted: bool,
}

impl<S: Default + 'static> StringVessel<S> {
    /// Creates a vessel over `input` with the default spec and state.
    pub fn new(input: &str) -> Self {
        let source = Arc::<str>::from(input);
        let (starts, chars) = decode(&source);
        Self {
            source,
            starts,
            chars,
            position: Position::new(),
            spec: Rc::new(Spec::default()),
            state: S::default(),
            furthest: None,
            budget: None,
            fuel: None,
            exhausted: false,
        }
    }
}

impl<S: 'static> StringVessel<S> {
    pub fn with_spec(mut self, spec: Spec<S>) -> Self {
        self.spec = Rc::new(spec);
        self
    }

    pub fn with_state(mut self, state: S) -> Self {
        self.state = state;
        self
    }

    /// Names the input; the name shows up in every reported position.
    pub fn with_name(mut self, name: &str) -> Self {
        self.position.name = Arc::from(name);
        self
    }

    /// Limits the number of repetition steps each parse may take.
    pub fn with_fuel(mut self, steps: usize) -> Self {
        self.budget = Some(steps);
        self.fuel = Some(steps);
        self.exhausted = false;
        self
    }

    /// Steps left in the budget, if there is one.
    pub fn remaining_fuel(&self) -> Option<usize> {
        self.fuel
    }

    /// Total length of the input in code points.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Rewinds to the start of the input, forgets recorded failures and
    /// refills the step budget.
    pub fn reset(&mut self) {
        self.position = self.position.rewound();
        self.furthest = None;
        self.fuel = self.budget;
        self.exhausted = false;
    }

    fn byte_index(&self, offset: usize) -> usize {
        self.starts
            .get(offset)
            .copied()
            .unwrap_or_else(|| self.source.len())
    }
}

impl<S: Clone + 'static> Vessel<S> for StringVessel<S> {
    fn next(&self) -> Option<char> {
        self.chars.get(self.position.offset).copied()
    }

    fn get(&self, n: usize) -> Option<String> {
        let start = self.position.offset;
        let end = start.checked_add(n)?;
        if end > self.chars.len() {
            return None;
        }
        Some(self.source[self.byte_index(start)..self.byte_index(end)].to_string())
    }

    fn pop(&mut self, n: usize) {
        for _ in 0..n {
            match self.chars.get(self.position.offset) {
                Some(&ch) => self.position.advance(ch),
                // Past the end only the offset moves; `next` reports the
                // overrun.
                None => self.position.offset += 1,
            }
        }
    }

    fn push(&mut self, n: usize) {
        let old = self.position.offset;
        if n > old {
            log::warn!("push({n}) from offset {old} runs past the start of the input");
        }
        let new = old.saturating_sub(n);
        let scanned_end = old.min(self.chars.len());
        if new < scanned_end {
            let lines = self.chars[new..scanned_end]
                .iter()
                .filter(|&&c| c == '\n')
                .count();
            self.position.line = self.position.line.saturating_sub(lines).max(1);
        }
        let line_start = self.chars[..new.min(self.chars.len())]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |i| i + 1);
        self.position.column = new - line_start + 1;
        self.position.offset = new;
    }

    fn position(&self) -> Position {
        self.position.clone()
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn state(&self) -> S {
        self.state.clone()
    }

    fn set_state(&mut self, state: S) {
        self.state = state;
    }

    fn spec(&self) -> Rc<Spec<S>> {
        Rc::clone(&self.spec)
    }

    fn set_spec(&mut self, spec: Spec<S>) {
        self.spec = Rc::new(spec);
    }

    fn input(&self) -> &str {
        let offset = self.position.offset.min(self.chars.len());
        &self.source[self.byte_index(offset)..]
    }

    fn set_input(&mut self, input: &str) {
        self.source = Arc::from(input);
        let (starts, chars) = decode(&self.source);
        self.starts = starts;
        self.chars = chars;
        self.reset();
    }

    fn expect(&mut self, what: &str) {
        match &mut self.furthest {
            Some(failure) => failure.merge(&self.position, what),
            None => self.furthest = Some(Failure::new(self.position.clone(), what)),
        }
    }

    fn relabel(&mut self, offset: usize, what: &str) {
        if let Some(failure) = &mut self.furthest {
            failure.relabel(offset, what);
        }
    }

    fn failure(&self) -> Option<Failure> {
        self.furthest.clone()
    }

    fn set_failure(&mut self, failure: Option<Failure>) {
        self.furthest = failure;
    }

    fn tick(&mut self) -> bool {
        match self.fuel {
            None => true,
            Some(0) => {
                if !self.exhausted {
                    log::warn!("step limit reached at {}", self.position);
                    self.exhausted = true;
                }
                false
            }
            Some(left) => {
                self.fuel = Some(left - 1);
                true
            }
        }
    }

    fn fuel_exhausted(&self) -> bool {
        self.exhausted
    }
}

fn decode(source: &str) -> (Vec<usize>, Vec<char>) {
    source.char_indices().unzip()
}
