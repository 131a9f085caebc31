pub mod breadcrumb;
pub mod callbacks;
pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod input_box;
pub mod interpreter;
pub mod markup;
pub mod path;
pub mod render;
pub mod sink;
pub mod validation;

pub use breadcrumb::Breadcrumb;
pub use callbacks::{Callbacks, Notice, Notification};
pub use config::BreadcrumbConfig;
pub use error::{BreadcrumbError, PathError};
pub use event::{Event, Key, Modifiers};
pub use field::{FieldState, TextEditResult};
pub use input_box::{CaretApi, InputBox, TextField, TextRange};
pub use interpreter::{Action, Interpreter};
pub use markup::{Container, Document, Page};
pub use path::{Path, PathSnapshot};
pub use render::{Crumb, LinkMode, Renderer};
pub use sink::{MarkupSink, MemorySink, RenderSink};
pub use validation::NameRule;
