//! The breadcrumb widget.
//!
//! Owns the path, the interpreter, the input box and both sinks, and runs
//! every event through parse → mutate → render → notify before returning.

use log::{debug, trace};

use crate::callbacks::{Callbacks, Notice, Notification};
use crate::config::BreadcrumbConfig;
use crate::error::BreadcrumbError;
use crate::event::Event;
use crate::input_box::{InputBox, TextField};
use crate::interpreter::{Action, Interpreter};
use crate::markup::Document;
use crate::path::{Path, PathSnapshot};
use crate::render::Renderer;
use crate::sink::RenderSink;

/// Path-editing text input with a rendered breadcrumb trail.
///
/// # Example
///
/// ```ignore
/// let mut page = Page::new().with_container(
///     "breadcrumb",
///     Container::new(MarkupSink::new(), MarkupSink::new(), FieldState::default()),
/// );
/// let config = BreadcrumbConfig::new().prefix(["org", "repo"]);
/// let mut crumb = Breadcrumb::mount(&mut page, config, Callbacks::new())?;
/// crumb.init();
///
/// for c in "src/".chars() {
///     let event = Event::char(c);
///     crumb.input_box_mut().field_mut().apply(&event);
///     crumb.handle_event(&event);
/// }
/// assert_eq!(crumb.path().tail, vec!["src"]);
/// ```
#[derive(Debug)]
pub struct Breadcrumb<S, F> {
    config: BreadcrumbConfig,
    path: Path,
    interpreter: Interpreter,
    renderer: Renderer,
    input: InputBox<F>,
    prefix_sink: S,
    tail_sink: S,
    callbacks: Callbacks,
    /// Set by `init`; events are ignored before that.
    bound: bool,
}

impl<S: RenderSink, F: TextField> Breadcrumb<S, F> {
    /// Mount into the container named by `config.container_id`.
    pub fn mount<D>(
        document: &mut D,
        config: BreadcrumbConfig,
        callbacks: Callbacks,
    ) -> Result<Self, BreadcrumbError>
    where
        D: Document<Sink = S, Field = F>,
    {
        let container = document
            .take_container(&config.container_id)
            .ok_or_else(|| {
                BreadcrumbError::missing(format!("container '{}'", config.container_id))
            })?;
        let (prefix_sink, tail_sink, field) = container.into_regions()?;
        Self::new(prefix_sink, tail_sink, field, config, callbacks)
    }

    /// Build from regions the host already holds.
    pub fn new(
        prefix_sink: S,
        tail_sink: S,
        field: F,
        config: BreadcrumbConfig,
        callbacks: Callbacks,
    ) -> Result<Self, BreadcrumbError> {
        let rule = config.name_rule()?;
        let path = Path::new(config.prefix.clone(), config.tail.clone(), rule);

        Ok(Self {
            interpreter: Interpreter::new(config.separator),
            renderer: Renderer::new(config.link_mode()),
            input: InputBox::new(field),
            path,
            prefix_sink,
            tail_sink,
            callbacks,
            bound: false,
            config,
        })
    }

    /// First render, initial field text, then start accepting events.
    pub fn init(&mut self) {
        self.render();
        self.input.set_value(&self.config.file_name);
        for action in self.interpreter.split(self.input.value()) {
            self.apply(action);
        }
        self.interpreter.sync(self.input.value());
        self.input.set_placeholder(&self.config.placeholder);
        self.bound = true;
        debug!(
            "[breadcrumb] init '{}': {} segment(s)",
            self.config.container_id,
            self.path.len()
        );
        self.notify(Notification::Init, None);
    }

    pub fn is_initialized(&self) -> bool {
        self.bound
    }

    /// Process one event. The host must have applied it to the field first.
    pub fn handle_event(&mut self, event: &Event) {
        if !self.bound {
            trace!("[breadcrumb] ignoring {:?} before init", event);
            return;
        }

        let actions =
            self.interpreter
                .interpret(event, self.input.value(), self.path.tail().len());
        for action in actions {
            self.apply(action);
        }

        self.interpreter.sync(self.input.value());
        self.notify(Notification::InputKeyup, Some(event));
    }

    /// Current path; `file_name` is the live field text.
    pub fn path(&self) -> PathSnapshot {
        self.path.snapshot(self.input.value())
    }

    /// Rewrite both sinks from the current path.
    pub fn render(&mut self) {
        self.renderer
            .render_all(&self.path, &mut self.prefix_sink, &mut self.tail_sink);
    }

    pub fn config(&self) -> &BreadcrumbConfig {
        &self.config
    }

    pub fn input_box(&self) -> &InputBox<F> {
        &self.input
    }

    pub fn input_box_mut(&mut self) -> &mut InputBox<F> {
        &mut self.input
    }

    pub fn prefix_sink(&self) -> &S {
        &self.prefix_sink
    }

    pub fn tail_sink(&self) -> &S {
        &self.tail_sink
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Split {
                candidate,
                remainder,
            } => {
                self.input.set_value(&remainder);
                self.input.set_cursor(0);
                self.add_segment(&candidate);
            }
            Action::Uncommit => self.remove_segment(),
        }
    }

    fn add_segment(&mut self, name: &str) {
        if !self.path.commit(name) {
            if !name.is_empty() {
                debug!("[breadcrumb] dropped invalid segment {:?}", name);
            }
            return;
        }
        debug!("[breadcrumb] committed {:?}", name);
        self.renderer.render_tail(&self.path, &mut self.tail_sink);
        self.notify(Notification::AfterAdd, None);
    }

    fn remove_segment(&mut self) {
        let popped = match self.path.uncommit() {
            Ok(popped) => popped,
            Err(e) => {
                debug!("[breadcrumb] {}", e);
                return;
            }
        };
        debug!("[breadcrumb] reopened {:?}", popped);

        let value = format!("{}{}", popped, self.input.value());
        self.input.set_value(&value);
        self.input.set_cursor(popped.chars().count());
        self.renderer.render_tail(&self.path, &mut self.tail_sink);
        self.notify(Notification::AfterRemove, None);
    }

    fn notify(&mut self, kind: Notification, event: Option<&Event>) {
        if !self.callbacks.has(kind) {
            return;
        }
        let notice = Notice {
            kind,
            path: self.path(),
            event,
        };
        self.callbacks.dispatch(&notice);
    }
}
