//! Scripted fakes for the prompt and canvas seams, shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use terrapin_types::error::CanvasError;

use crate::canvas::{CanvasResult, TurtleCanvas};
use crate::prompt::Prompter;

/// Prompter that replays a fixed list of replies and records everything shown.
pub(crate) struct ScriptedPrompter {
    replies: VecDeque<String>,
    pub prompts: Vec<String>,
    pub notices: Vec<String>,
    pub warnings: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|reply| reply.to_string()).collect(),
            prompts: Vec::new(),
            notices: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn read_reply(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.replies
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        self.notices.push(text.to_string());
        Ok(())
    }

    fn warn(&mut self, text: &str) -> io::Result<()> {
        self.warnings.push(text.to_string());
        Ok(())
    }
}

/// Every call a canvas can receive, in recorded form.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CanvasOp {
    Forward(f64),
    Turn(f64),
    Circle(f64),
    PenUp,
    PenDown,
    GoTo(f64, f64),
    SetHeading(f64),
    Home,
    Clear,
    SetSpeed(u8),
    SetColor(String),
    SetPenColor(String),
    SetFillColor(String),
    SetAppearance(String),
    BeginFill,
    EndFill,
    Close,
}

#[derive(Debug)]
struct Inner {
    ops: Vec<CanvasOp>,
    pen_color: String,
    fill_color: String,
    closed: bool,
    reject_colors: Vec<String>,
    fail_at: Option<usize>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            pen_color: "black".to_string(),
            fill_color: "black".to_string(),
            closed: false,
            reject_colors: Vec::new(),
            fail_at: None,
        }
    }
}

/// In-memory canvas that records every call.
///
/// Clones share state, so a test can keep a handle while the session owns
/// the other. Can be configured to reject specific colors (`InvalidColor`)
/// or to report the window gone at the nth accepted call (`WindowClosed`).
#[derive(Clone, Default)]
pub(crate) struct RecordingCanvas {
    inner: Rc<RefCell<Inner>>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting_colors(colors: &[&str]) -> Self {
        let canvas = Self::default();
        canvas.inner.borrow_mut().reject_colors =
            colors.iter().map(|color| color.to_string()).collect();
        canvas
    }

    pub fn failing_at(op_index: usize) -> Self {
        let canvas = Self::default();
        canvas.inner.borrow_mut().fail_at = Some(op_index);
        canvas
    }

    pub fn ops(&self) -> Vec<CanvasOp> {
        self.inner.borrow().ops.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }

    fn rejects(&self, color: &str) -> bool {
        self.inner.borrow().reject_colors.iter().any(|c| c == color)
    }

    fn record(&self, op: CanvasOp) -> CanvasResult {
        let mut inner = self.inner.borrow_mut();
        if inner.closed {
            return Err(CanvasError::WindowClosed);
        }
        if inner.fail_at == Some(inner.ops.len()) {
            inner.closed = true;
            return Err(CanvasError::WindowClosed);
        }
        inner.ops.push(op);
        Ok(())
    }
}

impl TurtleCanvas for RecordingCanvas {
    fn forward(&mut self, distance: f64) -> CanvasResult {
        self.record(CanvasOp::Forward(distance))
    }

    fn turn(&mut self, degrees: f64) -> CanvasResult {
        self.record(CanvasOp::Turn(degrees))
    }

    fn circle(&mut self, radius: f64) -> CanvasResult {
        self.record(CanvasOp::Circle(radius))
    }

    fn pen_up(&mut self) -> CanvasResult {
        self.record(CanvasOp::PenUp)
    }

    fn pen_down(&mut self) -> CanvasResult {
        self.record(CanvasOp::PenDown)
    }

    fn go_to(&mut self, x: f64, y: f64) -> CanvasResult {
        self.record(CanvasOp::GoTo(x, y))
    }

    fn set_heading(&mut self, degrees: f64) -> CanvasResult {
        self.record(CanvasOp::SetHeading(degrees))
    }

    fn home(&mut self) -> CanvasResult {
        self.record(CanvasOp::Home)
    }

    fn clear(&mut self) -> CanvasResult {
        self.record(CanvasOp::Clear)
    }

    fn set_speed(&mut self, speed: u8) -> CanvasResult {
        self.record(CanvasOp::SetSpeed(speed))
    }

    fn set_color(&mut self, color: &str) -> CanvasResult {
        if self.rejects(color) {
            return Err(CanvasError::InvalidColor(color.to_string()));
        }
        self.record(CanvasOp::SetColor(color.to_string()))?;
        let mut inner = self.inner.borrow_mut();
        inner.pen_color = color.to_string();
        inner.fill_color = color.to_string();
        Ok(())
    }

    fn set_pen_color(&mut self, color: &str) -> CanvasResult {
        if self.rejects(color) {
            return Err(CanvasError::InvalidColor(color.to_string()));
        }
        self.record(CanvasOp::SetPenColor(color.to_string()))?;
        self.inner.borrow_mut().pen_color = color.to_string();
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> CanvasResult {
        if self.rejects(color) {
            return Err(CanvasError::InvalidColor(color.to_string()));
        }
        self.record(CanvasOp::SetFillColor(color.to_string()))?;
        self.inner.borrow_mut().fill_color = color.to_string();
        Ok(())
    }

    fn pen_color(&self) -> CanvasResult<String> {
        let inner = self.inner.borrow();
        if inner.closed {
            return Err(CanvasError::WindowClosed);
        }
        Ok(inner.pen_color.clone())
    }

    fn fill_color(&self) -> CanvasResult<String> {
        let inner = self.inner.borrow();
        if inner.closed {
            return Err(CanvasError::WindowClosed);
        }
        Ok(inner.fill_color.clone())
    }

    fn set_appearance(&mut self, appearance: &str) -> CanvasResult {
        self.record(CanvasOp::SetAppearance(appearance.to_string()))
    }

    fn begin_fill(&mut self) -> CanvasResult {
        self.record(CanvasOp::BeginFill)
    }

    fn end_fill(&mut self) -> CanvasResult {
        self.record(CanvasOp::EndFill)
    }

    fn close(&mut self) -> CanvasResult {
        self.record(CanvasOp::Close)?;
        self.inner.borrow_mut().closed = true;
        Ok(())
    }
}
