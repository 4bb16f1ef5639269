//! Console stand-ins for the host's viewer and inventory UI.
use std::io::Write;

use spawner_core::{Icon, Menu, MenuPresenter, PresentError, RenderedItem, Viewer};

/// Viewer that holds every permission.
pub struct ConsoleViewer {
    name: String,
}

impl ConsoleViewer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Viewer for ConsoleViewer {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, _node: &str) -> bool {
        true
    }
}

/// Prints the menu title and every occupied slot.
pub struct StdoutPresenter;

impl StdoutPresenter {
    fn write_menu(out: &mut impl Write, menu: &Menu) -> std::io::Result<()> {
        writeln!(out, "== {} ==", menu.title())?;
        for (slot, item) in menu.occupied() {
            write_item(out, slot, item)?;
        }
        Ok(())
    }
}

fn write_item(out: &mut impl Write, slot: usize, item: &RenderedItem) -> std::io::Result<()> {
    let icon = match item.icon() {
        Icon::Item(material) => material.to_string(),
        Icon::Head(kind) => format!("{kind} head"),
        Icon::Empty => "empty".to_owned(),
    };
    writeln!(out, "[{slot:>2}] {} <{icon}>", item.name().unwrap_or("-"))?;
    for line in item.lore() {
        writeln!(out, "     {line}")?;
    }
    Ok(())
}

impl MenuPresenter for StdoutPresenter {
    fn present(&self, viewer: &dyn Viewer, menu: Menu) -> Result<(), PresentError> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        Self::write_menu(&mut out, &menu)
            .map_err(|e| PresentError::Rejected(format!("{} (stdout: {e})", viewer.name())))
    }

    fn notify_opened(&self, viewer: &dyn Viewer) {
        println!("* chest opens for {}", viewer.name());
    }
}
