/// Sink for status fragments shown to the operator.
///
/// Fragments accumulate: the panel is append-only and is never cleared
/// between fetches, so two fetches leave two pairs of fragments behind.
pub trait StatusPanel {
    fn append(&mut self, fragment: &str);
}

/// Panel that collects fragments in memory.
#[derive(Debug, Default)]
pub struct BufferPanel {
    fragments: Vec<String>,
}

impl BufferPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}

impl StatusPanel for BufferPanel {
    fn append(&mut self, fragment: &str) {
        self.fragments.push(fragment.to_string());
    }
}

/// Panel that prints fragments straight to stdout, one per line.
#[derive(Debug, Default)]
pub struct ConsolePanel;

impl StatusPanel for ConsolePanel {
    fn append(&mut self, fragment: &str) {
        println!("{fragment}");
    }
}
