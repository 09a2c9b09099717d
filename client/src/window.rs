use echoverse_core::Document;
use parking_lot::Mutex;
use std::sync::Arc;

/// The blocking dialogs and navigation a page can ask its host for.
pub trait Window: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
    fn reload(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowEvent {
    Confirm(String),
    Alert(String),
    Reload,
}

/// Answers every confirmation the same way and records what was asked.
#[derive(Debug, Default)]
pub struct ScriptedWindow {
    answer: bool,
    events: Mutex<Vec<WindowEvent>>,
}

impl ScriptedWindow {
    pub fn accepting() -> Self {
        Self { answer: true, events: Mutex::default() }
    }

    pub fn declining() -> Self {
        Self { answer: false, events: Mutex::default() }
    }

    pub fn events(&self) -> Vec<WindowEvent> {
        self.events.lock().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                WindowEvent::Alert(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn reloaded(&self) -> bool {
        self.events.lock().contains(&WindowEvent::Reload)
    }
}

impl Window for ScriptedWindow {
    fn confirm(&self, message: &str) -> bool {
        self.events.lock().push(WindowEvent::Confirm(message.to_string()));
        self.answer
    }

    fn alert(&self, message: &str) {
        self.events.lock().push(WindowEvent::Alert(message.to_string()));
    }

    fn reload(&self) {
        self.events.lock().push(WindowEvent::Reload);
    }
}

/// A page view: the document mirror plus the window hosting it.
///
/// Cheap to clone; controllers each hold one. The document lock is only
/// taken inside [`Page::update`] and [`Page::read`], never across an await.
#[derive(Clone)]
pub struct Page {
    document: Arc<Mutex<Document>>,
    window: Arc<dyn Window>,
}

impl Page {
    pub fn new(document: Document, window: Arc<dyn Window>) -> Self {
        Self { document: Arc::new(Mutex::new(document)), window }
    }

    pub fn window(&self) -> &dyn Window {
        self.window.as_ref()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        f(&mut self.document.lock())
    }

    pub fn read<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        f(&self.document.lock())
    }

    pub fn snapshot(&self) -> Document {
        self.document.lock().clone()
    }
}
